//! Per-session state
//!
//! The only mutable state in the service: the targets from the most recent
//! plan calculation, read back by food lookups to report "% of daily target".

use serde::Serialize;

use crate::nutrition::DailyTargets;

/// Where the targets used for a lookup came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetsSource {
    /// Computed by calculate_plan in this session
    Session,
    /// Configured fallback; no plan calculated yet
    Default,
}

/// Targets carried between tool calls of one session.
///
/// Starts unset; every successful plan calculation overwrites it. There is
/// no way back to unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionTargets {
    targets: Option<DailyTargets>,
}

impl SessionTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the latest calculated targets, replacing any previous ones
    pub fn record(&mut self, targets: DailyTargets) {
        if let Some(previous) = self.targets {
            tracing::debug!(
                "Replacing session targets {:.0} kcal / {:.0} g",
                previous.calories,
                previous.protein_grams
            );
        }
        self.targets = Some(targets);
    }

    pub fn get(&self) -> Option<DailyTargets> {
        self.targets
    }

    pub fn is_set(&self) -> bool {
        self.targets.is_some()
    }

    /// Session targets if set, otherwise the given fallback
    pub fn effective(&self, fallback: DailyTargets) -> (DailyTargets, TargetsSource) {
        match self.targets {
            Some(t) => (t, TargetsSource::Session),
            None => (fallback, TargetsSource::Default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: DailyTargets = DailyTargets { calories: 2000.0, protein_grams: 50.0 };

    #[test]
    fn test_starts_unset() {
        let session = SessionTargets::new();
        assert!(!session.is_set());
        assert_eq!(session.effective(FALLBACK), (FALLBACK, TargetsSource::Default));
    }

    #[test]
    fn test_record_overwrites() {
        let mut session = SessionTargets::new();
        session.record(DailyTargets { calories: 2500.0, protein_grams: 84.0 });
        session.record(DailyTargets { calories: 1900.0, protein_grams: 105.0 });
        assert_eq!(
            session.get(),
            Some(DailyTargets { calories: 1900.0, protein_grams: 105.0 })
        );
        assert_eq!(session.effective(FALLBACK).1, TargetsSource::Session);
    }
}
