//! Boundary validation
//!
//! Range checks applied to tool inputs before they reach the calculators,
//! which assume pre-validated values.

use chrono::NaiveDate;

use crate::error::{NutriError, NutriResult};

pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;
pub const MIN_HEIGHT_CM: f64 = 120.0;
pub const MAX_HEIGHT_CM: f64 = 230.0;
pub const MIN_LOOKUP_GRAMS: f64 = 1.0;
pub const MAX_LOOKUP_GRAMS: f64 = 100_000.0;

/// Earliest accepted birth date
pub fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> NutriResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| NutriError::InvalidDate(value.to_string()))
}

/// Parse a birth date and require it to fall in 1900-01-01..=today
pub fn parse_birth_date(value: &str, today: NaiveDate) -> NutriResult<NaiveDate> {
    let date = parse_date(value)?;
    let min = earliest_birth_date();
    if date < min || date > today {
        return Err(NutriError::DateOutOfRange {
            field: "birth_date",
            min,
            max: today,
            value: date,
        });
    }
    Ok(date)
}

/// Require `min <= value <= max`; NaN and infinities are rejected
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> NutriResult<f64> {
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(NutriError::OutOfRange { field, min, max, value })
    }
}

pub fn check_weight(weight_kg: f64) -> NutriResult<f64> {
    check_range("weight_kg", weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)
}

pub fn check_height(height_cm: f64) -> NutriResult<f64> {
    check_range("height_cm", height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)
}

pub fn check_lookup_grams(grams: f64) -> NutriResult<f64> {
    check_range("grams", grams, MIN_LOOKUP_GRAMS, MAX_LOOKUP_GRAMS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2000-06-15 "), Ok(NaiveDate::from_ymd_opt(2000, 6, 15).unwrap()));
        assert_eq!(parse_date("15/06/2000"), Err(NutriError::InvalidDate("15/06/2000".into())));
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test]
    fn test_birth_date_bounds() {
        assert!(parse_birth_date("1900-01-01", today()).is_ok());
        assert!(parse_birth_date("2024-06-15", today()).is_ok());
        assert!(matches!(
            parse_birth_date("1899-12-31", today()),
            Err(NutriError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            parse_birth_date("2024-06-16", today()),
            Err(NutriError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_numeric_bounds() {
        assert_eq!(check_weight(30.0), Ok(30.0));
        assert_eq!(check_weight(300.0), Ok(300.0));
        assert!(check_weight(29.9).is_err());
        assert!(check_height(f64::NAN).is_err());
        assert!(check_height(231.0).is_err());
        assert_eq!(check_lookup_grams(1.0), Ok(1.0));
        assert_eq!(check_lookup_grams(MAX_LOOKUP_GRAMS), Ok(MAX_LOOKUP_GRAMS));
        assert!(check_lookup_grams(0.5).is_err());
        assert!(check_lookup_grams(MAX_LOOKUP_GRAMS + 1.0).is_err());
        assert!(check_lookup_grams(f64::INFINITY).is_err());
    }
}
