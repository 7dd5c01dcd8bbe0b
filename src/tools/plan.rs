//! Personal plan tool
//!
//! Validates a profile, computes energy targets, builds the goal's meal
//! template, and records the targets in the session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::input::{check_height, check_weight, parse_birth_date, parse_date};
use crate::data::ActivityLevel;
use crate::error::NutriResult;
use crate::models::{Gender, Goal, NutrientTotals, UserProfile};
use crate::nutrition::{
    age, build_plan, compare_plan, energy_targets, timeline_note, total_plan, workout_advice,
    CalorieStatus, EnergyTargets, PlanTotals, ProteinStatus, TimelineNote,
};
use crate::session::SessionTargets;

/// Raw plan inputs as received from a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub birth_date: String,
    pub gender: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub goal: String,
    pub activity_level: Option<String>,
    pub target_date: Option<String>,
}

/// Echo of the interpreted profile
#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub age: i32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub goal: Goal,
    pub goal_label: &'static str,
    pub activity_level: ActivityLevel,
    pub activity_label: &'static str,
    pub activity_factor: f64,
}

/// Plan-vs-target comparison with display text
#[derive(Debug, Serialize)]
pub struct ComparisonView {
    pub calories: CalorieStatus,
    pub calorie_message: String,
    pub protein: ProteinStatus,
    pub protein_message: String,
}

/// Response for calculate_plan
#[derive(Debug, Serialize)]
pub struct CalculatePlanResponse {
    pub profile: ProfileSummary,
    #[serde(flatten)]
    pub energy: EnergyTargets,
    pub plan: PlanTotals,
    pub plan_totals: NutrientTotals,
    pub comparison: ComparisonView,
    pub workout_advice: &'static [&'static str],
    pub timeline_note: Option<TimelineNote>,
}

/// Validate the request into a profile plus optional target date
pub fn parse_request(
    request: &PlanRequest,
    today: NaiveDate,
) -> NutriResult<(UserProfile, Option<NaiveDate>)> {
    let birth_date = parse_birth_date(&request.birth_date, today)?;
    let weight_kg = check_weight(request.weight_kg)?;
    let height_cm = check_height(request.height_cm)?;
    let activity_level = match request.activity_level.as_deref() {
        Some(s) if !s.trim().is_empty() => ActivityLevel::from_str(s)?,
        _ => ActivityLevel::default(),
    };
    let target_date = match request.target_date.as_deref() {
        Some(s) if !s.trim().is_empty() => Some(parse_date(s)?),
        _ => None,
    };

    let profile = UserProfile {
        birth_date,
        gender: Gender::from_str(&request.gender),
        weight_kg,
        height_cm,
        goal: Goal::from_str(&request.goal),
        activity_level,
    };
    Ok((profile, target_date))
}

/// Calculate targets and a sample plan, then store the targets in the session.
///
/// The session is only written after every input has validated.
pub fn calculate_plan(
    session: &mut SessionTargets,
    request: &PlanRequest,
    today: NaiveDate,
) -> NutriResult<CalculatePlanResponse> {
    let (profile, target_date) = parse_request(request, today)?;

    let age = age(profile.birth_date, today);
    let energy = energy_targets(&profile, age);
    let plan = total_plan(&build_plan(profile.goal));
    let plan_totals = plan.total;
    let comparison = compare_plan(plan_totals, energy.daily());

    session.record(energy.daily());

    tracing::info!(
        "Plan calculated: goal={} bmr={:.0} target={:.0} kcal/{:.0} g, planned={:.0} kcal/{:.0} g",
        profile.goal.as_str(),
        energy.bmr,
        energy.target_calories,
        energy.target_protein,
        plan_totals.calories,
        plan_totals.protein_grams
    );

    Ok(CalculatePlanResponse {
        profile: ProfileSummary {
            age,
            gender: profile.gender,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            goal: profile.goal,
            goal_label: profile.goal.display_name(),
            activity_level: profile.activity_level,
            activity_label: profile.activity_level.label(),
            activity_factor: profile.activity_level.factor(),
        },
        energy,
        plan,
        plan_totals,
        comparison: ComparisonView {
            calories: comparison.calories,
            calorie_message: comparison.calories.message(),
            protein: comparison.protein,
            protein_message: comparison.protein.message(),
        },
        workout_advice: workout_advice(profile.goal),
        timeline_note: target_date.and_then(|d| timeline_note(profile.goal, d, today)),
    })
}
