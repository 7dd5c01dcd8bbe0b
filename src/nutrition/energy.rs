//! Energy calculator
//!
//! Mifflin-St Jeor BMR, activity-scaled maintenance, and goal-based targets.

use serde::{Deserialize, Serialize};

use crate::data::ActivityLevel;
use crate::models::{Gender, Goal, UserProfile};

/// Calorie adjustment applied for the lose goal
pub const LOSE_DEFICIT_KCAL: f64 = 500.0;

/// Calorie adjustment applied for the gain goal
pub const GAIN_SURPLUS_KCAL: f64 = 300.0;

/// Daily calorie and protein targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    pub calories: f64,
    pub protein_grams: f64,
}

/// Full energy breakdown for a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyTargets {
    pub bmr: f64,
    pub maintenance: f64,
    pub target_calories: f64,
    pub target_protein: f64,
}

impl EnergyTargets {
    pub fn daily(&self) -> DailyTargets {
        DailyTargets {
            calories: self.target_calories,
            protein_grams: self.target_protein,
        }
    }
}

/// Basal metabolic rate in kcal/day
pub fn bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: i32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

pub fn maintenance_calories(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.factor()
}

pub fn target_calories(goal: Goal, maintenance: f64) -> f64 {
    match goal {
        Goal::Lose => maintenance - LOSE_DEFICIT_KCAL,
        Goal::Gain => maintenance + GAIN_SURPLUS_KCAL,
        Goal::Maintain => maintenance,
    }
}

/// Protein target in grams/day; scales linearly with weight, unclamped
pub fn target_protein(goal: Goal, weight_kg: f64) -> f64 {
    let grams_per_kg = match goal {
        Goal::Gain => 1.8,
        Goal::Lose => 1.5,
        Goal::Maintain => 1.2,
    };
    weight_kg * grams_per_kg
}

/// Compute every energy figure for a profile at the given age
pub fn energy_targets(profile: &UserProfile, age: i32) -> EnergyTargets {
    let bmr = bmr(profile.gender, profile.weight_kg, profile.height_cm, age);
    let maintenance = maintenance_calories(bmr, profile.activity_level);
    EnergyTargets {
        bmr,
        maintenance,
        target_calories: target_calories(profile.goal, maintenance),
        target_protein: target_protein(profile.goal, profile.weight_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_bmr_male() {
        let value = bmr(Gender::from_str("male"), 70.0, 170.0, 30);
        assert!((value - 1617.5).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female() {
        let value = bmr(Gender::from_str("female"), 60.0, 160.0, 25);
        assert!((value - 1314.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_unrecognized_gender_uses_female_offset() {
        let other = bmr(Gender::from_str("unspecified"), 60.0, 160.0, 25);
        assert!((other - 1314.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_calories_by_goal() {
        let maintenance = 2400.0;
        assert_eq!(target_calories(Goal::Lose, maintenance), 1900.0);
        assert_eq!(target_calories(Goal::Gain, maintenance), 2700.0);
        assert_eq!(target_calories(Goal::Maintain, maintenance), 2400.0);
    }

    #[test]
    fn test_target_protein_by_goal() {
        assert!((target_protein(Goal::Gain, 70.0) - 126.0).abs() < 1e-9);
        assert!((target_protein(Goal::Lose, 70.0) - 105.0).abs() < 1e-9);
        assert!((target_protein(Goal::Maintain, 70.0) - 84.0).abs() < 1e-9);
    }

    #[test]
    fn test_profile_end_to_end() {
        let profile = UserProfile {
            birth_date: NaiveDate::from_ymd_opt(1994, 1, 1).unwrap(),
            gender: Gender::Male,
            weight_kg: 70.0,
            height_cm: 170.0,
            goal: Goal::Maintain,
            activity_level: ActivityLevel::Moderate,
        };
        let targets = energy_targets(&profile, 30);
        // 10*70 + 6.25*170 - 5*30 + 5
        assert!((targets.bmr - 1617.5).abs() < 1e-9);
        assert!((targets.maintenance - 2507.125).abs() < 1e-9);
        assert!((targets.target_calories - 2507.125).abs() < 1e-9);
        assert!((targets.target_protein - 84.0).abs() < 1e-9);

        let daily = targets.daily();
        assert_eq!(daily.calories, targets.target_calories);
        assert_eq!(daily.protein_grams, targets.target_protein);
    }
}
