//! Activity factor table

use serde::{Deserialize, Serialize};

use crate::error::{NutriError, NutriResult};

/// Activity level and its maintenance multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little/no exercise)",
            ActivityLevel::Light => "Light (1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (3-5 days/week)",
            ActivityLevel::Active => "Active (6-7 days/week)",
            ActivityLevel::VeryActive => "Very Active (hard training/physical job)",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Parse from an id ("very_active", "very active") or the full label
    pub fn from_str(s: &str) -> NutriResult<Self> {
        let trimmed = s.trim();
        let key = trimmed.to_lowercase().replace([' ', '-'], "_");
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == key || level.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| NutriError::UnknownActivity(s.to_string()))
    }
}
