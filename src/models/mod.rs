//! Data models
//!
//! Value types passed between the calculators and the tool layer.

mod condition;
mod nutrients;
mod plan;
mod profile;

pub use condition::{Condition, HealthFlags};
pub use nutrients::NutrientTotals;
pub use plan::{Meal, MealPlan, MealSlot, PlanItem};
pub use profile::{Gender, Goal, UserProfile};
