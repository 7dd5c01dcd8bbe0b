//! Table listing tools

use serde::Serialize;

use crate::data::{ActivityLevel, Food, FoodCategory};
use crate::error::{NutriError, NutriResult};

/// One row of the nutrient table
#[derive(Debug, Serialize)]
pub struct FoodSummary {
    pub name: &'static str,
    pub display_name: String,
    pub category: FoodCategory,
    pub calories_per_100g: f64,
    pub protein_per_100g: f64,
    pub tip: Option<&'static str>,
}

impl From<Food> for FoodSummary {
    fn from(food: Food) -> Self {
        let per_100g = food.per_100g();
        Self {
            name: food.as_str(),
            display_name: food.display_name(),
            category: food.category(),
            calories_per_100g: per_100g.calories,
            protein_per_100g: per_100g.protein_grams,
            tip: food.tip(),
        }
    }
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub foods: Vec<FoodSummary>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ActivitySummary {
    pub id: &'static str,
    pub label: &'static str,
    pub factor: f64,
    pub is_default: bool,
}

/// Response for list_activity_levels
#[derive(Debug, Serialize)]
pub struct ListActivityLevelsResponse {
    pub levels: Vec<ActivitySummary>,
}

/// List foods in table order, optionally limited to one category
pub fn list_foods(category: Option<&str>) -> NutriResult<ListFoodsResponse> {
    let filter = match category {
        Some(s) if !s.trim().is_empty() => Some(
            FoodCategory::from_str(s).ok_or_else(|| NutriError::UnknownCategory(s.to_string()))?,
        ),
        _ => None,
    };

    let foods: Vec<FoodSummary> = Food::ALL
        .into_iter()
        .filter(|f| filter.map_or(true, |c| f.category() == c))
        .map(FoodSummary::from)
        .collect();
    let total = foods.len();

    Ok(ListFoodsResponse { foods, total })
}

pub fn list_activity_levels() -> ListActivityLevelsResponse {
    let default = ActivityLevel::default();
    ListActivityLevelsResponse {
        levels: ActivityLevel::ALL
            .into_iter()
            .map(|level| ActivitySummary {
                id: level.as_str(),
                label: level.label(),
                factor: level.factor(),
                is_default: level == default,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all_foods() {
        let resp = list_foods(None).unwrap();
        assert_eq!(resp.total, Food::ALL.len());
        assert_eq!(resp.foods[0].name, "apple");
    }

    #[test]
    fn test_list_by_category() {
        let resp = list_foods(Some("staples")).unwrap();
        let names: Vec<&str> = resp.foods.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["rice", "bread", "pasta", "oats"]);
        assert!(matches!(list_foods(Some("desserts")), Err(NutriError::UnknownCategory(_))));
    }

    #[test]
    fn test_activity_levels() {
        let resp = list_activity_levels();
        assert_eq!(resp.levels.len(), 5);
        let defaults: Vec<&str> = resp.levels.iter().filter(|l| l.is_default).map(|l| l.id).collect();
        assert_eq!(defaults, vec!["moderate"]);
    }
}
