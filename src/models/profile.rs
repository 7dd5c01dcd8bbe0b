//! User profile model
//!
//! Ephemeral biometric inputs for one plan calculation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::ActivityLevel;

/// Gender used to pick the Mifflin-St Jeor offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Parse a gender string.
    ///
    /// Only a case-insensitive "male" selects `Male`; every other value,
    /// including unrecognized strings, selects `Female`.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            other => {
                tracing::debug!("Unrecognized gender '{}', using female BMR offset", other);
                Gender::Female
            }
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Maintain,
    Lose,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Maintain, Goal::Lose, Goal::Gain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
        }
    }

    /// Parse a goal from its id or display label; anything else maintains
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" | "lose weight" | "lose weight (fat loss)" | "fat loss" => Goal::Lose,
            "gain" | "gain muscle" | "gain muscle (lean mass)" | "lean mass" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::Maintain => "Maintain Weight",
            Goal::Lose => "Lose Weight (fat loss)",
            Goal::Gain => "Gain Muscle (lean mass)",
        }
    }
}

/// Biometric profile collected for a plan calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub goal: Goal,
    pub activity_level: ActivityLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_folds_to_female() {
        assert_eq!(Gender::from_str("Male"), Gender::Male);
        assert_eq!(Gender::from_str("MALE"), Gender::Male);
        assert_eq!(Gender::from_str(" male "), Gender::Female);
        assert_eq!(Gender::from_str("Female"), Gender::Female);
        assert_eq!(Gender::from_str("other"), Gender::Female);
        assert_eq!(Gender::from_str(""), Gender::Female);
    }

    #[test]
    fn test_goal_accepts_labels() {
        assert_eq!(Goal::from_str("lose"), Goal::Lose);
        assert_eq!(Goal::from_str("Lose Weight (fat loss)"), Goal::Lose);
        assert_eq!(Goal::from_str("Gain Muscle (lean mass)"), Goal::Gain);
        assert_eq!(Goal::from_str("Maintain Weight"), Goal::Maintain);
        assert_eq!(Goal::from_str("bulk"), Goal::Maintain);
    }
}
