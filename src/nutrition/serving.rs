//! Serving estimator
//!
//! Scales a food's per-100g values to an arbitrary gram amount.

use crate::data::Food;
use crate::models::NutrientTotals;

/// Estimate nutrients for `grams` of the named food.
///
/// A name missing from the nutrient table yields zero totals. Callers that
/// need to report the miss check membership with [`Food::from_name`] first.
pub fn estimate(food_name: &str, grams: f64) -> NutrientTotals {
    match Food::from_name(food_name) {
        Some(food) => estimate_food(food, grams),
        None => NutrientTotals::zero(),
    }
}

/// Estimate nutrients for `grams` of a known food
pub fn estimate_food(food: Food, grams: f64) -> NutrientTotals {
    food.per_100g() * (grams / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apple_150g() {
        let n = estimate("apple", 150.0);
        assert!((n.calories - 78.0).abs() < 1e-9);
        assert!((n.protein_grams - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_food_is_zero() {
        assert_eq!(estimate("nonexistent", 100.0), NutrientTotals::zero());
    }

    #[test]
    fn test_zero_grams() {
        assert_eq!(estimate("chicken", 0.0), NutrientTotals::zero());
    }

    #[test]
    fn test_linear_for_every_food() {
        for food in Food::ALL {
            let per_100g = food.per_100g();
            for grams in [0.0, 1.0, 37.5, 100.0, 250.0] {
                let n = estimate(food.as_str(), grams);
                assert!((n.calories - per_100g.calories * grams / 100.0).abs() < 1e-9);
                assert!((n.protein_grams - per_100g.protein_grams * grams / 100.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_name_is_normalized() {
        assert_eq!(estimate(" Banana ", 100.0), estimate("banana", 100.0));
    }
}
