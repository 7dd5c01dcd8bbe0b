//! Error types
//!
//! Every failure is local to one tool call and never touches session targets.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised at the tool boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutriError {
    #[error("Please enter a food name.")]
    EmptyInput,

    #[error("Nutrition info not available for '{0}'. Try common names like 'chicken', 'rice', 'apple'.")]
    UnknownFood(String),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{field} must be between {min} and {max}, got {value}")]
    DateOutOfRange {
        field: &'static str,
        min: NaiveDate,
        max: NaiveDate,
        value: NaiveDate,
    },

    #[error("Unknown activity level '{0}'. Use list_activity_levels to see valid values.")]
    UnknownActivity(String),

    #[error("Unknown food category '{0}'")]
    UnknownCategory(String),
}

impl NutriError {
    /// Short machine-readable kind, used in tool response bodies
    pub fn kind(&self) -> &'static str {
        match self {
            NutriError::EmptyInput => "empty_input",
            NutriError::UnknownFood(_) => "unknown_food",
            NutriError::OutOfRange { .. } => "out_of_range",
            NutriError::InvalidDate(_) => "invalid_date",
            NutriError::DateOutOfRange { .. } => "date_out_of_range",
            NutriError::UnknownActivity(_) => "unknown_activity",
            NutriError::UnknownCategory(_) => "unknown_category",
        }
    }

    /// Whether the error is a user-facing lookup miss rather than a malformed request
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, NutriError::EmptyInput | NutriError::UnknownFood(_))
    }
}

/// Result type for nutriplan operations
pub type NutriResult<T> = Result<T, NutriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(NutriError::EmptyInput.to_string(), "Please enter a food name.");
        let err = NutriError::OutOfRange { field: "weight_kg", min: 30.0, max: 300.0, value: 12.0 };
        assert_eq!(err.to_string(), "weight_kg must be between 30 and 300, got 12");
        assert!(NutriError::UnknownFood("kale".into()).to_string().contains("'kale'"));

        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let err = NutriError::DateOutOfRange {
            field: "birth_date",
            min: date(1900, 1, 1),
            max: date(2024, 6, 1),
            value: date(2030, 1, 1),
        };
        assert_eq!(
            err.to_string(),
            "birth_date must be between 1900-01-01 and 2024-06-01, got 2030-01-01"
        );
    }

    #[test]
    fn test_lookup_miss_classification() {
        assert!(NutriError::EmptyInput.is_lookup_miss());
        assert!(NutriError::UnknownFood("x".into()).is_lookup_miss());
        assert!(!NutriError::InvalidDate("x".into()).is_lookup_miss());
        assert_eq!(NutriError::UnknownActivity("x".into()).kind(), "unknown_activity");
    }
}
