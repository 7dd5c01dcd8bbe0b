//! Health condition flags

use serde::{Deserialize, Serialize};

/// Conditions the advisor knows about, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Diabetes,
    HighBloodPressure,
    LowBloodPressure,
}

impl Condition {
    pub const ALL: [Condition; 3] = [
        Condition::Diabetes,
        Condition::HighBloodPressure,
        Condition::LowBloodPressure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Diabetes => "diabetes",
            Condition::HighBloodPressure => "high_bp",
            Condition::LowBloodPressure => "low_bp",
        }
    }
}

/// Set of selected conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFlags {
    #[serde(default)]
    pub diabetes: bool,
    #[serde(default)]
    pub high_bp: bool,
    #[serde(default)]
    pub low_bp: bool,
}

impl HealthFlags {
    pub fn is_set(&self, condition: Condition) -> bool {
        match condition {
            Condition::Diabetes => self.diabetes,
            Condition::HighBloodPressure => self.high_bp,
            Condition::LowBloodPressure => self.low_bp,
        }
    }

    /// Selected conditions in declaration order
    pub fn selected(&self) -> Vec<Condition> {
        Condition::ALL.into_iter().filter(|c| self.is_set(*c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        !(self.diabetes || self.high_bp || self.low_bp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_order() {
        let flags = HealthFlags { diabetes: false, high_bp: true, low_bp: true };
        assert_eq!(
            flags.selected(),
            vec![Condition::HighBloodPressure, Condition::LowBloodPressure]
        );
        assert!(HealthFlags::default().is_empty());
    }
}
