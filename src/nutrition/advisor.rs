//! Condition advisor
//!
//! Selects pre-written advice blocks from condition flags. Nothing here
//! depends on age, weight, or any other profile field.

use serde::Serialize;

use crate::models::{Condition, HealthFlags};

/// Shown instead of advice when no condition is selected
pub const NO_SELECTION_PROMPT: &str =
    "Select one or more conditions to receive condition-aware diet & activity tips.";

/// Appended to every advice response
pub const DISCLAIMER: &str = "These are general lifestyle recommendations. For tailored medical advice, tests, and prescriptions, consult a healthcare professional.";

/// Which content an advice block belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    Diabetes,
    HighBloodPressure,
    LowBloodPressure,
    Combined,
}

impl From<Condition> for AdviceKind {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::Diabetes => AdviceKind::Diabetes,
            Condition::HighBloodPressure => AdviceKind::HighBloodPressure,
            Condition::LowBloodPressure => AdviceKind::LowBloodPressure,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AdviceSection {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AdviceBlock {
    pub kind: AdviceKind,
    pub title: &'static str,
    pub summary: Option<&'static str>,
    pub sections: &'static [AdviceSection],
}

pub static DIABETES_ADVICE: AdviceBlock = AdviceBlock {
    kind: AdviceKind::Diabetes,
    title: "Diabetes — diet & activity suggestions",
    summary: Some("Goal: control blood glucose by managing carbs, prioritizing fiber, and regular activity."),
    sections: &[
        AdviceSection {
            heading: "Diet tips (general)",
            items: &[
                "Favor complex carbs (oats, legumes), vegetables, lean proteins, and healthy fats.",
                "Avoid sugary drinks, sweets, white bread, and highly processed foods.",
                "Prefer whole fruits over fruit juices. Monitor portion sizes of starchy foods (rice, potatoes).",
                "Spread carbohydrates across the day and include protein & fiber to slow glucose spikes.",
            ],
        },
        AdviceSection {
            heading: "Sample daily choices",
            items: &[
                "Breakfast: oats + milk + berries or egg + veggies.",
                "Lunch: lentils/beans or chicken + lots of salad/vegetables + small portion of rice.",
                "Snack: apple + nuts or yogurt.",
                "Dinner: fish/tofu + veggies (smaller carb portion).",
            ],
        },
        AdviceSection {
            heading: "Activity",
            items: &[
                "Aim for ~30 minutes moderate exercise (walking) most days; strength training 2×/week helps insulin sensitivity.",
            ],
        },
        AdviceSection {
            heading: "Monitoring & Caution",
            items: &[
                "If on medication (insulin or others), follow medical advice and monitor blood glucose; adjust carbs with clinician guidance.",
                "This tool gives general tips — always consult your doctor for treatment.",
            ],
        },
    ],
};

pub static HIGH_BP_ADVICE: AdviceBlock = AdviceBlock {
    kind: AdviceKind::HighBloodPressure,
    title: "High Blood Pressure — diet & activity suggestions",
    summary: Some("Goal: lower blood pressure naturally via reduced salt, increased potassium, weight management, and cardio."),
    sections: &[
        AdviceSection {
            heading: "Diet tips (general)",
            items: &[
                "Reduce added salt and processed foods high in sodium.",
                "Eat potassium-rich foods (banana, spinach, potatoes in moderation), fresh fruits & vegetables, lean proteins.",
                "Favor low-fat dairy (milk, yogurt) and whole grains.",
            ],
        },
        AdviceSection {
            heading: "Foods to avoid / limit",
            items: &[
                "Salty snacks, canned soups high in sodium, processed meats (sausages, bacon), excessive alcohol.",
            ],
        },
        AdviceSection {
            heading: "Activity",
            items: &[
                "Regular aerobic activity (30 minutes most days) — brisk walking, cycling, or swimming helps reduce BP.",
                "Strength training 2×/week is fine; check with a clinician if you have severe hypertension.",
            ],
        },
        AdviceSection {
            heading: "Monitoring & Caution",
            items: &[
                "If on BP medication, follow your clinician; sudden large changes in diet/exercise should be discussed with them.",
            ],
        },
    ],
};

pub static LOW_BP_ADVICE: AdviceBlock = AdviceBlock {
    kind: AdviceKind::LowBloodPressure,
    title: "Low Blood Pressure — diet & activity suggestions",
    summary: Some("Goal: maintain adequate blood pressure and avoid dizziness/fainting."),
    sections: &[
        AdviceSection {
            heading: "Diet tips (general)",
            items: &[
                "Stay well-hydrated, include small frequent meals, increase salt moderately if advised by clinician.",
                "Include balanced carbs and proteins; avoid sudden large meals that cause 'postprandial' drops.",
            ],
        },
        AdviceSection {
            heading: "Activity",
            items: &[
                "Gentle aerobic activity (walking) is good; avoid sudden standing up from sitting quickly.",
                "Strength training is helpful; focus on good hydration and gradual progress.",
            ],
        },
        AdviceSection {
            heading: "Monitoring & Caution",
            items: &["If you feel faint/dizzy frequently, consult a clinician. Do not self-medicate."],
        },
    ],
};

pub static COMBINED_ADVICE: AdviceBlock = AdviceBlock {
    kind: AdviceKind::Combined,
    title: "Practical combined advice (if multiple conditions)",
    summary: None,
    sections: &[AdviceSection {
        heading: "General",
        items: &[
            "Emphasize whole foods, lean proteins, vegetables, and controlled portions.",
            "Avoid sugary drinks & excessive salt; prioritize hydration and regular activity.",
            "Use calculate_plan to get calorie & protein targets, then apply these condition-specific food choices.",
        ],
    }],
};

/// Advice block for a single condition
pub fn condition_advice(condition: Condition) -> &'static AdviceBlock {
    match condition {
        Condition::Diabetes => &DIABETES_ADVICE,
        Condition::HighBloodPressure => &HIGH_BP_ADVICE,
        Condition::LowBloodPressure => &LOW_BP_ADVICE,
    }
}

/// Advice blocks for the selected conditions.
///
/// One block per flag in declaration order, then the combined block when two
/// or more flags are set. Empty when nothing is selected.
pub fn advise(flags: &HealthFlags) -> Vec<&'static AdviceBlock> {
    let selected = flags.selected();
    let mut blocks: Vec<&'static AdviceBlock> =
        selected.iter().map(|c| condition_advice(*c)).collect();
    if selected.len() >= 2 {
        blocks.push(&COMBINED_ADVICE);
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(flags: HealthFlags) -> Vec<AdviceKind> {
        advise(&flags).iter().map(|b| b.kind).collect()
    }

    #[test]
    fn test_no_flags() {
        assert!(advise(&HealthFlags::default()).is_empty());
    }

    #[test]
    fn test_single_flag_has_no_combined_block() {
        assert_eq!(
            kinds(HealthFlags { low_bp: true, ..Default::default() }),
            vec![AdviceKind::LowBloodPressure]
        );
    }

    #[test]
    fn test_diabetes_and_high_bp() {
        let blocks = advise(&HealthFlags { diabetes: true, high_bp: true, low_bp: false });
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], &DIABETES_ADVICE);
        assert_eq!(blocks[1], &HIGH_BP_ADVICE);
        assert_eq!(blocks[2], &COMBINED_ADVICE);
    }

    #[test]
    fn test_all_flags_order() {
        assert_eq!(
            kinds(HealthFlags { diabetes: true, high_bp: true, low_bp: true }),
            vec![
                AdviceKind::Diabetes,
                AdviceKind::HighBloodPressure,
                AdviceKind::LowBloodPressure,
                AdviceKind::Combined,
            ]
        );
    }

    #[test]
    fn test_block_text() {
        assert_eq!(DIABETES_ADVICE.title, "Diabetes — diet & activity suggestions");
        assert_eq!(LOW_BP_ADVICE.title, "Low Blood Pressure — diet & activity suggestions");
        assert_eq!(COMBINED_ADVICE.title, "Practical combined advice (if multiple conditions)");
        let activity = HIGH_BP_ADVICE.sections.iter().find(|s| s.heading == "Activity").unwrap();
        assert!(activity.items.iter().any(|i| i.starts_with("Strength training 2×/week")));
    }

    #[test]
    fn test_condition_blocks_match_kind() {
        for condition in Condition::ALL {
            assert_eq!(condition_advice(condition).kind, AdviceKind::from(condition));
            assert!(!condition_advice(condition).sections.is_empty());
        }
    }
}
