//! Health advisor tool

use chrono::NaiveDate;
use serde::Serialize;

use super::input::{check_weight, parse_birth_date};
use crate::error::NutriResult;
use crate::models::{Condition, HealthFlags};
use crate::nutrition::{advise, age, AdviceBlock, DISCLAIMER, NO_SELECTION_PROMPT};

/// Response for health_advice
#[derive(Debug, Serialize)]
pub struct HealthAdviceResponse {
    pub conditions: Vec<Condition>,
    pub blocks: Vec<&'static AdviceBlock>,
    /// Set when no condition was selected
    pub prompt: Option<&'static str>,
    pub disclaimer: &'static str,
    /// Display-only; never used to select advice
    pub age: Option<i32>,
    pub weight_kg: Option<f64>,
}

/// Select advice blocks for the given flags.
///
/// `birth_date` and `weight_kg` are optional and only echoed back.
pub fn health_advice(
    flags: HealthFlags,
    birth_date: Option<&str>,
    weight_kg: Option<f64>,
    today: NaiveDate,
) -> NutriResult<HealthAdviceResponse> {
    let age = match birth_date {
        Some(s) if !s.trim().is_empty() => Some(age(parse_birth_date(s, today)?, today)),
        _ => None,
    };
    let weight_kg = weight_kg.map(check_weight).transpose()?;

    let blocks = advise(&flags);
    let prompt = if blocks.is_empty() { Some(NO_SELECTION_PROMPT) } else { None };

    Ok(HealthAdviceResponse {
        conditions: flags.selected(),
        blocks,
        prompt,
        disclaimer: DISCLAIMER,
        age,
        weight_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::AdviceKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_no_conditions_returns_prompt() {
        let resp = health_advice(HealthFlags::default(), None, None, today()).unwrap();
        assert!(resp.blocks.is_empty());
        assert_eq!(resp.prompt, Some(NO_SELECTION_PROMPT));
    }

    #[test]
    fn test_blocks_in_order() {
        let flags = HealthFlags { diabetes: true, high_bp: true, low_bp: false };
        let resp = health_advice(flags, None, None, today()).unwrap();
        let kinds: Vec<AdviceKind> = resp.blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![AdviceKind::Diabetes, AdviceKind::HighBloodPressure, AdviceKind::Combined]
        );
        assert!(resp.prompt.is_none());
    }

    #[test]
    fn test_profile_fields_do_not_change_advice() {
        let flags = HealthFlags { low_bp: true, ..Default::default() };
        let plain = health_advice(flags, None, None, today()).unwrap();
        let with_profile = health_advice(flags, Some("1960-01-01"), Some(95.0), today()).unwrap();
        assert_eq!(plain.blocks, with_profile.blocks);
        assert_eq!(with_profile.age, Some(64));
        assert_eq!(with_profile.weight_kg, Some(95.0));
    }

    #[test]
    fn test_invalid_optional_fields() {
        let flags = HealthFlags { diabetes: true, ..Default::default() };
        assert!(health_advice(flags, Some("not a date"), None, today()).is_err());
        assert!(health_advice(flags, None, Some(500.0), today()).is_err());
    }
}
