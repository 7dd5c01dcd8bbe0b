//! Food lookup tool
//!
//! Nutrients for a quantity of one food, expressed against the session's
//! daily targets.

use serde::Serialize;

use super::input::check_lookup_grams;
use crate::data::{Food, FoodCategory};
use crate::error::{NutriError, NutriResult};
use crate::nutrition::{estimate_food, DailyTargets};
use crate::session::{SessionTargets, TargetsSource};

/// Default quantity when none is given
pub const DEFAULT_LOOKUP_GRAMS: f64 = 100.0;

/// Response for lookup_food
#[derive(Debug, Serialize)]
pub struct LookupFoodResponse {
    pub food: Food,
    pub display_name: String,
    pub category: FoodCategory,
    pub grams: f64,
    pub calories: f64,
    pub protein_grams: f64,
    pub pct_of_daily_calories: Option<f64>,
    pub pct_of_daily_protein: Option<f64>,
    pub daily_targets: DailyTargets,
    pub targets_source: TargetsSource,
    pub tip: Option<&'static str>,
}

/// Response for get_session_targets
#[derive(Debug, Serialize)]
pub struct SessionTargetsResponse {
    pub is_set: bool,
    pub targets: Option<DailyTargets>,
    pub fallback: DailyTargets,
}

/// Look up `grams` of a food by name
pub fn lookup_food(
    session: &SessionTargets,
    fallback: DailyTargets,
    name: &str,
    grams: f64,
) -> NutriResult<LookupFoodResponse> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return Err(NutriError::EmptyInput);
    }
    let food = Food::from_name(&key).ok_or_else(|| NutriError::UnknownFood(name.trim().to_string()))?;
    let grams = check_lookup_grams(grams)?;

    let totals = estimate_food(food, grams);
    let (daily, source) = session.effective(fallback);

    tracing::debug!(
        "Lookup {} {}g: {:.1} kcal, {:.1} g protein ({:?} targets)",
        food.as_str(),
        grams,
        totals.calories,
        totals.protein_grams,
        source
    );

    Ok(LookupFoodResponse {
        food,
        display_name: food.display_name(),
        category: food.category(),
        grams,
        calories: totals.calories,
        protein_grams: totals.protein_grams,
        pct_of_daily_calories: percent_of(totals.calories, daily.calories),
        pct_of_daily_protein: percent_of(totals.protein_grams, daily.protein_grams),
        daily_targets: daily,
        targets_source: source,
        tip: food.tip(),
    })
}

/// Report the session targets without changing them
pub fn session_targets(session: &SessionTargets, fallback: DailyTargets) -> SessionTargetsResponse {
    SessionTargetsResponse {
        is_set: session.is_set(),
        targets: session.get(),
        fallback,
    }
}

/// Share of `target`, omitted only when the target is zero. A negative target
/// (tiny profiles on the lose goal) yields a negative share.
fn percent_of(amount: f64, target: f64) -> Option<f64> {
    if target != 0.0 {
        Some(amount / target * 100.0)
    } else {
        None
    }
}
