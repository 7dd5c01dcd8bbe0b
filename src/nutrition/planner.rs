//! Plan builder
//!
//! Three fixed four-meal templates, one per goal, plus totals, the
//! plan-vs-target comparison, and the goal-specific workout and timeline text.

use chrono::NaiveDate;
use serde::Serialize;

use super::energy::DailyTargets;
use super::serving::estimate_food;
use crate::data::Food;
use crate::models::{Goal, Meal, MealPlan, MealSlot, NutrientTotals, PlanItem};

/// Planned calories may exceed the target by this much and still count as balanced
pub const CALORIE_TOLERANCE_KCAL: f64 = 200.0;

const fn item(food: Food, grams: u32) -> PlanItem {
    PlanItem { food, grams }
}

// --- Gain ---

const GAIN_BREAKFAST: &[PlanItem] = &[
    item(Food::Oats, 70),
    item(Food::Milk, 200),
    item(Food::Banana, 120),
];
const GAIN_LUNCH: &[PlanItem] = &[
    item(Food::Rice, 200),
    item(Food::Chicken, 180),
    item(Food::Spinach, 100),
];
const GAIN_SNACK: &[PlanItem] = &[item(Food::Yogurt, 150), item(Food::Egg, 50)];
const GAIN_DINNER: &[PlanItem] = &[
    item(Food::Beef, 180),
    item(Food::Potato, 150),
    item(Food::Broccoli, 100),
];

// --- Lose ---

const LOSE_BREAKFAST: &[PlanItem] = &[
    item(Food::Oats, 40),
    item(Food::Milk, 150),
    item(Food::Apple, 120),
];
const LOSE_LUNCH: &[PlanItem] = &[
    item(Food::Chicken, 150),
    item(Food::Spinach, 150),
    item(Food::Tomato, 100),
];
const LOSE_SNACK: &[PlanItem] = &[item(Food::Yogurt, 120), item(Food::Banana, 80)];
const LOSE_DINNER: &[PlanItem] = &[
    item(Food::Fish, 150),
    item(Food::Broccoli, 120),
    item(Food::Cucumber, 100),
];

// --- Maintain ---

const MAINTAIN_BREAKFAST: &[PlanItem] = &[
    item(Food::Oats, 50),
    item(Food::Milk, 200),
    item(Food::Banana, 100),
];
const MAINTAIN_LUNCH: &[PlanItem] = &[
    item(Food::Rice, 180),
    item(Food::Chicken, 150),
    item(Food::Peas, 100),
];
const MAINTAIN_SNACK: &[PlanItem] = &[item(Food::Apple, 150), item(Food::Yogurt, 120)];
const MAINTAIN_DINNER: &[PlanItem] = &[
    item(Food::Fish, 150),
    item(Food::Potato, 150),
    item(Food::Spinach, 100),
];

/// Return the fixed meal template for a goal
pub fn build_plan(goal: Goal) -> MealPlan {
    let [breakfast, lunch, snack, dinner] = match goal {
        Goal::Gain => [GAIN_BREAKFAST, GAIN_LUNCH, GAIN_SNACK, GAIN_DINNER],
        Goal::Lose => [LOSE_BREAKFAST, LOSE_LUNCH, LOSE_SNACK, LOSE_DINNER],
        Goal::Maintain => [
            MAINTAIN_BREAKFAST,
            MAINTAIN_LUNCH,
            MAINTAIN_SNACK,
            MAINTAIN_DINNER,
        ],
    };
    MealPlan {
        meals: [
            Meal { slot: MealSlot::Breakfast, items: breakfast },
            Meal { slot: MealSlot::Lunch, items: lunch },
            Meal { slot: MealSlot::Snack, items: snack },
            Meal { slot: MealSlot::Dinner, items: dinner },
        ],
    }
}

/// Estimated nutrients for one plan item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemEstimate {
    pub food: Food,
    pub grams: u32,
    pub calories: f64,
    pub protein_grams: f64,
}

/// A meal with its item estimates and subtotal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealTotals {
    pub slot: MealSlot,
    pub items: Vec<ItemEstimate>,
    pub subtotal: NutrientTotals,
}

/// Per-meal breakdown and grand total for a plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanTotals {
    pub meals: Vec<MealTotals>,
    pub total: NutrientTotals,
}

impl PlanTotals {
    pub fn meal(&self, slot: MealSlot) -> Option<&MealTotals> {
        self.meals.iter().find(|m| m.slot == slot)
    }
}

/// Sum estimates over every item of every meal
pub fn total_plan(plan: &MealPlan) -> PlanTotals {
    let meals: Vec<MealTotals> = plan
        .meals
        .iter()
        .map(|meal| {
            let items: Vec<ItemEstimate> = meal
                .items
                .iter()
                .map(|it| {
                    let n = estimate_food(it.food, it.grams as f64);
                    ItemEstimate {
                        food: it.food,
                        grams: it.grams,
                        calories: n.calories,
                        protein_grams: n.protein_grams,
                    }
                })
                .collect();
            let subtotal = items
                .iter()
                .map(|i| NutrientTotals::new(i.calories, i.protein_grams))
                .sum();
            MealTotals { slot: meal.slot, items, subtotal }
        })
        .collect();

    let total = meals.iter().map(|m| m.subtotal).sum();
    PlanTotals { meals, total }
}

/// Planned calories relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalorieStatus {
    Below { deficit_kcal: f64 },
    Above { surplus_kcal: f64 },
    Balanced,
}

impl CalorieStatus {
    pub fn message(&self) -> String {
        match self {
            CalorieStatus::Below { deficit_kcal } => format!(
                "Planned meals are {:.0} kcal below target — consider an extra snack or slightly larger portions.",
                deficit_kcal
            ),
            CalorieStatus::Above { surplus_kcal } => format!(
                "Planned meals are {:.0} kcal above target — consider slightly smaller portions or leaner choices.",
                surplus_kcal
            ),
            CalorieStatus::Balanced => {
                "Planned meals are close to your calorie target — good balance!".to_string()
            }
        }
    }
}

/// Planned protein relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProteinStatus {
    Covered,
    Short { missing_grams: f64 },
}

impl ProteinStatus {
    pub fn message(&self) -> String {
        match self {
            ProteinStatus::Covered => "Protein target is covered by the plan ✔️".to_string(),
            ProteinStatus::Short { missing_grams } => format!(
                "Protein is {:.0} g below target — add an egg, extra yogurt, or more chicken/fish.",
                missing_grams
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanComparison {
    pub calories: CalorieStatus,
    pub protein: ProteinStatus,
}

/// Compare plan totals against daily targets
pub fn compare_plan(planned: NutrientTotals, targets: DailyTargets) -> PlanComparison {
    let calories = if planned.calories < targets.calories {
        CalorieStatus::Below { deficit_kcal: targets.calories - planned.calories }
    } else if planned.calories > targets.calories + CALORIE_TOLERANCE_KCAL {
        CalorieStatus::Above { surplus_kcal: planned.calories - targets.calories }
    } else {
        CalorieStatus::Balanced
    };

    let protein = if planned.protein_grams >= targets.protein_grams {
        ProteinStatus::Covered
    } else {
        ProteinStatus::Short { missing_grams: targets.protein_grams - planned.protein_grams }
    };

    PlanComparison { calories, protein }
}

/// Fixed workout suggestions for a goal
pub fn workout_advice(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::Lose => &[
            "Cardio: 30–45 min moderate cardio most days (5×/week).",
            "Strength: 2–3 full-body sessions/week (20–30 min) to preserve muscle.",
            "Daily movement and sleep help manage appetite and energy.",
        ],
        Goal::Gain => &[
            "Strength: 45–60 min, 4 days/week (progressive overload).",
            "Cardio: light 10–20 min 2×/week to keep conditioning.",
            "Prioritize protein intake, gradual calorie surplus, and rest.",
        ],
        Goal::Maintain => {
            &["30 min moderate activity most days + 2 strength sessions/week for maintenance."]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineNote {
    pub days_left: i64,
    pub note: String,
}

/// Pacing note for a goal date; only produced when the date is after `today`
pub fn timeline_note(goal: Goal, target_date: NaiveDate, today: NaiveDate) -> Option<TimelineNote> {
    if target_date <= today {
        return None;
    }
    let days_left = (target_date - today).num_days();
    let note = match goal {
        Goal::Lose => format!(
            "{} days left. Safe loss: ~0.25–0.5 kg/week; be patient and consistent.",
            days_left
        ),
        Goal::Gain => format!(
            "{} days left. Muscle gains are slow — aim for ~0.25–0.5 kg/month of lean mass.",
            days_left
        ),
        Goal::Maintain => format!("{} days left — focus on consistency.", days_left),
    };
    Some(TimelineNote { days_left, note })
}
