//! Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::data::{ActivityLevel, Food};

/// Usage instructions for AI assistants
pub const USAGE_INSTRUCTIONS: &str = r#"
# Nutrition & Health Assistant Instructions

A compact personal nutrition helper: food lookup, daily needs, a sample
diet/workout plan, and general condition-aware tips.

**This is an educational tool. It is not a substitute for professional
medical advice.** Always pass that caveat on to the user.

---

## 1. Food lookup

**Tool:** `lookup_food`
- `name`: common food name, e.g. "chicken", "rice", "apple", "ice cream"
- `grams`: quantity, 1 to 100000 (default 100)

Returns calories and protein for the quantity, the share of the user's daily
targets, and a short tip for some foods. Use `list_foods` to see every
supported name (values are per 100 g).

If no plan has been calculated in this session the percentages use default
targets (`targets_source: "default"`). Suggest running `calculate_plan` first
for personalized percentages.

## 2. Personal plan & daily needs

**Tool:** `calculate_plan`
- `birth_date`: YYYY-MM-DD, between 1900-01-01 and today
- `gender`: "male" or "female"
- `weight_kg`: 30-300
- `height_cm`: 120-230
- `goal`: "maintain", "lose", or "gain"
- `activity_level`: see `list_activity_levels` (default "moderate")
- `target_date`: optional YYYY-MM-DD goal date

Returns BMR (Mifflin-St Jeor), maintenance calories, calorie and protein
targets, a fixed four-meal sample plan for the goal with per-meal totals, a
plan-vs-target comparison, workout suggestions, and a timeline note when the
target date is in the future.

The calorie and protein targets are remembered for the rest of the session
and used by `lookup_food`. `get_session_targets` shows the current values.

## 3. Health advisor

**Tool:** `health_advice`
- `diabetes`, `high_bp`, `low_bp`: booleans
- `birth_date`, `weight_kg`: optional, shown back for context only

Returns one advice block per selected condition, plus combined advice when
two or more are selected. With nothing selected it returns a prompt instead.
"#;

/// Runtime status snapshot
#[derive(Debug, Serialize)]
pub struct NutriStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Table sizes
    pub foods_in_table: usize,
    pub activity_levels: usize,

    /// Session information
    pub session_targets_set: bool,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, session_targets_set: bool) -> NutriStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutriStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            foods_in_table: Food::ALL.len(),
            activity_levels: ActivityLevel::ALL.len(),
            session_targets_set,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
