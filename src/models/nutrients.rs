//! Shared nutrient totals
//!
//! Produced by serving estimates and summed across plans.

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Calories and protein for some quantity of food
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein_grams: f64,
}

impl NutrientTotals {
    pub fn new(calories: f64, protein_grams: f64) -> Self {
        Self { calories, protein_grams }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale both values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein_grams: self.protein_grams * multiplier,
        }
    }
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories + other.calories,
            protein_grams: self.protein_grams + other.protein_grams,
        }
    }
}

impl Mul<f64> for NutrientTotals {
    type Output = NutrientTotals;

    fn mul(self, multiplier: f64) -> NutrientTotals {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_scale() {
        let total: NutrientTotals = vec![
            NutrientTotals::new(100.0, 2.0),
            NutrientTotals::new(50.0, 1.5),
        ]
        .into_iter()
        .sum();
        assert!((total.calories - 150.0).abs() < 1e-9);
        assert!((total.protein_grams - 3.5).abs() < 1e-9);

        let half = total * 0.5;
        assert!((half.calories - 75.0).abs() < 1e-9);
        assert!((half.protein_grams - 1.75).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: NutrientTotals = std::iter::empty().sum();
        assert_eq!(total, NutrientTotals::zero());
    }
}
