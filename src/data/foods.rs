//! Nutrient and tip tables
//!
//! Fixed per-100g calorie and protein values. Foods are a closed enum so a
//! plan template naming a food outside the table does not compile.

use serde::{Serialize, Serializer};

use crate::models::NutrientTotals;

/// Food group, used for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Fruits,
    Vegetables,
    Staples,
    Proteins,
    FastFoods,
    DrinksAndOthers,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 6] = [
        FoodCategory::Fruits,
        FoodCategory::Vegetables,
        FoodCategory::Staples,
        FoodCategory::Proteins,
        FoodCategory::FastFoods,
        FoodCategory::DrinksAndOthers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Fruits => "fruits",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Staples => "staples",
            FoodCategory::Proteins => "proteins",
            FoodCategory::FastFoods => "fast_foods",
            FoodCategory::DrinksAndOthers => "drinks_and_others",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        FoodCategory::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

/// A food in the nutrient table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Food {
    Apple,
    Banana,
    Orange,
    Grapes,
    Mango,
    Pineapple,
    Strawberry,
    Watermelon,
    Pear,
    Peach,
    Kiwi,
    Papaya,
    Pomegranate,
    Blueberry,
    Cherry,
    Avocado,
    Carrot,
    Potato,
    Tomato,
    Cucumber,
    Broccoli,
    Spinach,
    Cabbage,
    Onion,
    Peas,
    Corn,
    Rice,
    Bread,
    Pasta,
    Oats,
    Chicken,
    Beef,
    Mutton,
    Egg,
    Fish,
    Tofu,
    Lentils,
    Beans,
    Burger,
    Pizza,
    Sandwich,
    Fries,
    Hotdog,
    Milk,
    Yogurt,
    Cheese,
    IceCream,
    Chocolate,
    Coffee,
    Tea,
}

impl Food {
    pub const ALL: [Food; 50] = [
        Food::Apple, Food::Banana, Food::Orange, Food::Grapes, Food::Mango, Food::Pineapple,
        Food::Strawberry, Food::Watermelon, Food::Pear, Food::Peach, Food::Kiwi, Food::Papaya,
        Food::Pomegranate, Food::Blueberry, Food::Cherry, Food::Avocado, Food::Carrot, Food::Potato,
        Food::Tomato, Food::Cucumber, Food::Broccoli, Food::Spinach, Food::Cabbage, Food::Onion,
        Food::Peas, Food::Corn, Food::Rice, Food::Bread, Food::Pasta, Food::Oats,
        Food::Chicken, Food::Beef, Food::Mutton, Food::Egg, Food::Fish, Food::Tofu,
        Food::Lentils, Food::Beans, Food::Burger, Food::Pizza, Food::Sandwich, Food::Fries,
        Food::Hotdog, Food::Milk, Food::Yogurt, Food::Cheese, Food::IceCream, Food::Chocolate,
        Food::Coffee, Food::Tea,
    ];

    /// Lowercase table key
    pub fn as_str(&self) -> &'static str {
        match self {
            Food::Apple => "apple",
            Food::Banana => "banana",
            Food::Orange => "orange",
            Food::Grapes => "grapes",
            Food::Mango => "mango",
            Food::Pineapple => "pineapple",
            Food::Strawberry => "strawberry",
            Food::Watermelon => "watermelon",
            Food::Pear => "pear",
            Food::Peach => "peach",
            Food::Kiwi => "kiwi",
            Food::Papaya => "papaya",
            Food::Pomegranate => "pomegranate",
            Food::Blueberry => "blueberry",
            Food::Cherry => "cherry",
            Food::Avocado => "avocado",
            Food::Carrot => "carrot",
            Food::Potato => "potato",
            Food::Tomato => "tomato",
            Food::Cucumber => "cucumber",
            Food::Broccoli => "broccoli",
            Food::Spinach => "spinach",
            Food::Cabbage => "cabbage",
            Food::Onion => "onion",
            Food::Peas => "peas",
            Food::Corn => "corn",
            Food::Rice => "rice",
            Food::Bread => "bread",
            Food::Pasta => "pasta",
            Food::Oats => "oats",
            Food::Chicken => "chicken",
            Food::Beef => "beef",
            Food::Mutton => "mutton",
            Food::Egg => "egg",
            Food::Fish => "fish",
            Food::Tofu => "tofu",
            Food::Lentils => "lentils",
            Food::Beans => "beans",
            Food::Burger => "burger",
            Food::Pizza => "pizza",
            Food::Sandwich => "sandwich",
            Food::Fries => "fries",
            Food::Hotdog => "hotdog",
            Food::Milk => "milk",
            Food::Yogurt => "yogurt",
            Food::Cheese => "cheese",
            Food::IceCream => "ice cream",
            Food::Chocolate => "chocolate",
            Food::Coffee => "coffee",
            Food::Tea => "tea",
        }
    }

    /// Look up a food by name; trimmed and case-insensitive, exact otherwise
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase();
        Food::ALL.into_iter().find(|f| f.as_str() == key)
    }

    /// Name with the first letter capitalized
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn category(&self) -> FoodCategory {
        match self {
            Food::Apple
            | Food::Banana
            | Food::Orange
            | Food::Grapes
            | Food::Mango
            | Food::Pineapple
            | Food::Strawberry
            | Food::Watermelon
            | Food::Pear
            | Food::Peach
            | Food::Kiwi
            | Food::Papaya
            | Food::Pomegranate
            | Food::Blueberry
            | Food::Cherry
            | Food::Avocado => FoodCategory::Fruits,
            Food::Carrot
            | Food::Potato
            | Food::Tomato
            | Food::Cucumber
            | Food::Broccoli
            | Food::Spinach
            | Food::Cabbage
            | Food::Onion
            | Food::Peas
            | Food::Corn => FoodCategory::Vegetables,
            Food::Rice | Food::Bread | Food::Pasta | Food::Oats => FoodCategory::Staples,
            Food::Chicken
            | Food::Beef
            | Food::Mutton
            | Food::Egg
            | Food::Fish
            | Food::Tofu
            | Food::Lentils
            | Food::Beans => FoodCategory::Proteins,
            Food::Burger
            | Food::Pizza
            | Food::Sandwich
            | Food::Fries
            | Food::Hotdog => FoodCategory::FastFoods,
            Food::Milk
            | Food::Yogurt
            | Food::Cheese
            | Food::IceCream
            | Food::Chocolate
            | Food::Coffee
            | Food::Tea => FoodCategory::DrinksAndOthers,
        }
    }

    /// Calories (kcal) and protein (g) per 100 g
    pub fn per_100g(&self) -> NutrientTotals {
        let (calories, protein_grams) = match self {
            Food::Apple => (52.0, 0.3),
            Food::Banana => (96.0, 1.3),
            Food::Orange => (47.0, 0.9),
            Food::Grapes => (69.0, 0.7),
            Food::Mango => (60.0, 0.8),
            Food::Pineapple => (50.0, 0.5),
            Food::Strawberry => (33.0, 0.7),
            Food::Watermelon => (30.0, 0.6),
            Food::Pear => (57.0, 0.4),
            Food::Peach => (39.0, 0.9),
            Food::Kiwi => (61.0, 1.1),
            Food::Papaya => (43.0, 0.5),
            Food::Pomegranate => (83.0, 1.7),
            Food::Blueberry => (57.0, 0.7),
            Food::Cherry => (50.0, 1.0),
            Food::Avocado => (160.0, 2.0),
            Food::Carrot => (41.0, 0.9),
            Food::Potato => (77.0, 2.0),
            Food::Tomato => (18.0, 0.9),
            Food::Cucumber => (16.0, 0.7),
            Food::Broccoli => (34.0, 2.8),
            Food::Spinach => (23.0, 2.9),
            Food::Cabbage => (25.0, 1.3),
            Food::Onion => (40.0, 1.1),
            Food::Peas => (81.0, 5.4),
            Food::Corn => (86.0, 3.2),
            Food::Rice => (130.0, 2.7),
            Food::Bread => (265.0, 9.0),
            Food::Pasta => (131.0, 5.0),
            Food::Oats => (389.0, 16.9),
            Food::Chicken => (239.0, 27.0),
            Food::Beef => (250.0, 26.0),
            Food::Mutton => (294.0, 25.0),
            Food::Egg => (155.0, 13.0),
            Food::Fish => (206.0, 22.0),
            Food::Tofu => (76.0, 8.0),
            Food::Lentils => (116.0, 9.0),
            Food::Beans => (347.0, 21.0),
            Food::Burger => (295.0, 17.0),
            Food::Pizza => (266.0, 11.0),
            Food::Sandwich => (250.0, 12.0),
            Food::Fries => (312.0, 3.4),
            Food::Hotdog => (290.0, 11.0),
            Food::Milk => (42.0, 3.4),
            Food::Yogurt => (59.0, 10.0),
            Food::Cheese => (402.0, 25.0),
            Food::IceCream => (207.0, 3.5),
            Food::Chocolate => (546.0, 7.8),
            Food::Coffee => (2.0, 0.1),
            Food::Tea => (1.0, 0.1),
        };
        NutrientTotals { calories, protein_grams }
    }

    /// One-line health tip, for the foods that have one
    pub fn tip(&self) -> Option<&'static str> {
        match self {
            Food::Apple => Some("Rich in fiber and Vitamin C — good for digestion."),
            Food::Banana => Some("High in potassium — great post-workout snack."),
            Food::Chicken => Some("High in protein — supports muscle repair & growth."),
            Food::Rice => Some("Good source of carbs — provides energy for workouts."),
            Food::Fish => Some("Contains omega-3 fatty acids — heart healthy."),
            Food::Mutton => Some("High in protein and iron — good for strength but calorie-dense."),
            Food::Beef => Some("Excellent protein & B12 source — helpful for muscle mass."),
            Food::Spinach => Some("High in iron and micronutrients — great in salads."),
            _ => None,
        }
    }
}

impl Serialize for Food {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keys_are_unique_and_lowercase() {
        let mut keys: Vec<&str> = Food::ALL.iter().map(|f| f.as_str()).collect();
        assert!(keys.iter().all(|k| *k == k.to_lowercase()));
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Food::ALL.len());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Food::from_name("apple"), Some(Food::Apple));
        assert_eq!(Food::from_name("  Ice Cream "), Some(Food::IceCream));
        assert_eq!(Food::from_name("APPLES"), None);
        assert_eq!(Food::from_name(""), None);
    }

    #[test]
    fn test_known_values() {
        let apple = Food::Apple.per_100g();
        assert_eq!(apple.calories, 52.0);
        assert_eq!(apple.protein_grams, 0.3);
        let oats = Food::Oats.per_100g();
        assert_eq!(oats.calories, 389.0);
        assert_eq!(oats.protein_grams, 16.9);
    }

    #[test]
    fn test_values_are_non_negative() {
        for food in Food::ALL {
            let n = food.per_100g();
            assert!(n.calories >= 0.0 && n.protein_grams >= 0.0, "{}", food.as_str());
        }
    }

    #[test]
    fn test_tips() {
        let with_tips = Food::ALL.iter().filter(|f| f.tip().is_some()).count();
        assert_eq!(with_tips, 8);
        assert!(Food::Tea.tip().is_none());
        assert_eq!(Food::Banana.tip(), Some("High in potassium — great post-workout snack."));
    }

    #[test]
    fn test_categories() {
        assert_eq!(Food::Avocado.category(), FoodCategory::Fruits);
        assert_eq!(Food::Hotdog.category(), FoodCategory::FastFoods);
        assert_eq!(FoodCategory::from_str("Fast Foods"), Some(FoodCategory::FastFoods));
        let fruits = Food::ALL.iter().filter(|f| f.category() == FoodCategory::Fruits).count();
        assert_eq!(fruits, 16);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Food::IceCream.display_name(), "Ice cream");
        assert_eq!(Food::Kiwi.display_name(), "Kiwi");
    }
}
