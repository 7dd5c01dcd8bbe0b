//! Meal plan model
//!
//! A fixed template of meal slots, each an ordered list of foods with gram amounts.

use serde::{Serialize, Serializer};

use crate::data::Food;

/// Meal slot, in serving order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        }
    }
}

/// One food and its gram amount within a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanItem {
    pub food: Food,
    pub grams: u32,
}

impl Serialize for PlanItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("PlanItem", 2)?;
        s.serialize_field("food", self.food.as_str())?;
        s.serialize_field("grams", &self.grams)?;
        s.end()
    }
}

/// A meal slot and its items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub items: &'static [PlanItem],
}

/// Ordered meal plan, one entry per slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealPlan {
    pub meals: [Meal; 4],
}

impl MealPlan {
    pub fn meal(&self, slot: MealSlot) -> Option<&Meal> {
        self.meals.iter().find(|m| m.slot == slot)
    }
}
