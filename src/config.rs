//! Runtime configuration
//!
//! Read from the environment at startup.

use std::env;

use crate::nutrition::DailyTargets;

/// Fallback calorie target used by food lookups before any plan is calculated
pub const DEFAULT_FALLBACK_CALORIES: f64 = 2000.0;

/// Fallback protein target (grams) used by food lookups before any plan is calculated
pub const DEFAULT_FALLBACK_PROTEIN: f64 = 50.0;

pub const ENV_FALLBACK_CALORIES: &str = "NUTRIPLAN_DEFAULT_CALORIES";
pub const ENV_FALLBACK_PROTEIN: &str = "NUTRIPLAN_DEFAULT_PROTEIN";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub fallback_targets: DailyTargets,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_targets: DailyTargets {
                calories: DEFAULT_FALLBACK_CALORIES,
                protein_grams: DEFAULT_FALLBACK_PROTEIN,
            },
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through a key lookup; invalid values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            fallback_targets: DailyTargets {
                calories: read_non_negative(&lookup, ENV_FALLBACK_CALORIES)
                    .unwrap_or(defaults.fallback_targets.calories),
                protein_grams: read_non_negative(&lookup, ENV_FALLBACK_PROTEIN)
                    .unwrap_or(defaults.fallback_targets.protein_grams),
            },
        }
    }
}

fn read_non_negative<F>(lookup: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => {
            tracing::warn!("Ignoring invalid {}='{}', using default", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.fallback_targets.calories, 2000.0);
        assert_eq!(config.fallback_targets.protein_grams, 50.0);
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            (ENV_FALLBACK_CALORIES, "2400"),
            (ENV_FALLBACK_PROTEIN, " 80.5 "),
        ]);
        assert_eq!(config.fallback_targets.calories, 2400.0);
        assert_eq!(config.fallback_targets.protein_grams, 80.5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_with(&[
            (ENV_FALLBACK_CALORIES, "lots"),
            (ENV_FALLBACK_PROTEIN, "-5"),
        ]);
        assert_eq!(config, Config::default());
    }
}
