//! Nutrition calculation module
//!
//! Pure calculators: serving estimates, age, energy targets, meal plans, and
//! condition advice. None of these hold state between calls.

pub mod advisor;
pub mod age;
pub mod energy;
pub mod planner;
pub mod serving;

pub use advisor::{advise, AdviceBlock, AdviceKind, AdviceSection, DISCLAIMER, NO_SELECTION_PROMPT};
pub use age::age;
pub use energy::{
    bmr, energy_targets, maintenance_calories, target_calories, target_protein, DailyTargets,
    EnergyTargets,
};
pub use planner::{
    build_plan, compare_plan, timeline_note, total_plan, workout_advice, CalorieStatus,
    ItemEstimate, MealTotals, PlanComparison, PlanTotals, ProteinStatus, TimelineNote,
};
pub use serving::{estimate, estimate_food};
