//! Tips module - recommendation texts attached to generated plans

use crate::profile::Goal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipCategory {
    Nutrition,
    Training,
    Tracking,
    Hydration,
    Sleep,
    Adaptability,
}

impl TipCategory {
    pub fn emoji(&self) -> &'static str {
        match self {
            TipCategory::Nutrition => "🥗",
            TipCategory::Training => "🏋️",
            TipCategory::Tracking => "📈",
            TipCategory::Hydration => "💧",
            TipCategory::Sleep => "😴",
            TipCategory::Adaptability => "🔄",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TipCategory::Nutrition => "Nutrition",
            TipCategory::Training => "Training",
            TipCategory::Tracking => "Tracking",
            TipCategory::Hydration => "Hydration",
            TipCategory::Sleep => "Sleep",
            TipCategory::Adaptability => "Adaptability",
        }
    }
}

pub struct Tip {
    /// `None` = applies to every goal
    pub goal: Option<Goal>,
    pub category: TipCategory,
    pub text: &'static str,
}

pub const TIPS: &[Tip] = &[
    // === LOSE WEIGHT ===
    Tip {
        goal: Some(Goal::LoseWeight),
        category: TipCategory::Nutrition,
        text: "Keep a consistent caloric deficit",
    },
    Tip {
        goal: Some(Goal::LoseWeight),
        category: TipCategory::Training,
        text: "Combine cardio and strength training",
    },
    Tip {
        goal: Some(Goal::LoseWeight),
        category: TipCategory::Tracking,
        text: "Track your progress every week",
    },
    // === GAIN MASS ===
    Tip {
        goal: Some(Goal::GainMass),
        category: TipCategory::Nutrition,
        text: "Eat protein at every meal",
    },
    Tip {
        goal: Some(Goal::GainMass),
        category: TipCategory::Training,
        text: "Increase the loads gradually",
    },
    Tip {
        goal: Some(Goal::GainMass),
        category: TipCategory::Tracking,
        text: "Rest properly between workouts",
    },
    // === GAIN STRENGTH ===
    Tip {
        goal: Some(Goal::GainStrength),
        category: TipCategory::Training,
        text: "Focus on technique before adding weight",
    },
    Tip {
        goal: Some(Goal::GainStrength),
        category: TipCategory::Tracking,
        text: "Keep a training log",
    },
    Tip {
        goal: Some(Goal::GainStrength),
        category: TipCategory::Training,
        text: "Include compound exercises",
    },
    // === MAINTAIN ===
    Tip {
        goal: Some(Goal::Maintain),
        category: TipCategory::Nutrition,
        text: "Keep your calorie intake close to your daily target",
    },
    Tip {
        goal: Some(Goal::Maintain),
        category: TipCategory::Training,
        text: "Stay active on most days of the week",
    },
    Tip {
        goal: Some(Goal::Maintain),
        category: TipCategory::Tracking,
        text: "Weigh yourself once a week at the same time",
    },
    // === IMPROVE HEALTH ===
    Tip {
        goal: Some(Goal::ImproveHealth),
        category: TipCategory::Nutrition,
        text: "Prefer whole foods over processed ones",
    },
    Tip {
        goal: Some(Goal::ImproveHealth),
        category: TipCategory::Training,
        text: "Add a short walk to your daily routine",
    },
    Tip {
        goal: Some(Goal::ImproveHealth),
        category: TipCategory::Sleep,
        text: "Reserve time for stretching and relaxation",
    },
    // === UNIVERSAL ===
    Tip {
        goal: None,
        category: TipCategory::Hydration,
        text: "Stay hydrated throughout the day",
    },
    Tip {
        goal: None,
        category: TipCategory::Sleep,
        text: "Sleep 7-9 hours per night",
    },
    Tip {
        goal: None,
        category: TipCategory::Adaptability,
        text: "Adjust the plan as needed",
    },
];

/// Tips written for a particular goal, in catalog order
pub fn tips_for_goal(goal: Goal) -> impl Iterator<Item = &'static Tip> {
    TIPS.iter().filter(move |t| t.goal == Some(goal))
}

/// Tips that apply to every plan
pub fn universal_tips() -> impl Iterator<Item = &'static Tip> {
    TIPS.iter().filter(|t| t.goal.is_none())
}

/// Supplement suggestions by goal
pub fn supplements_for_goal(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::LoseWeight => &["Multivitamin", "Omega-3"],
        Goal::GainMass => &["Whey protein", "Creatine", "Multivitamin"],
        Goal::GainStrength => &["Creatine", "Multivitamin", "Omega-3"],
        Goal::Maintain => &["Multivitamin"],
        Goal::ImproveHealth => &["Multivitamin", "Omega-3", "Vitamin D"],
    }
}

/// What to do on rest days
pub fn rest_day_advice(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::LoseWeight => &["Stay active on rest days", "Do light stretching"],
        Goal::GainMass => &["Rest is essential for muscle growth", "Avoid intense activities"],
        Goal::GainStrength => &["Muscle recovery is essential", "Do passive stretching"],
        Goal::Maintain => &["Stay active with light activities", "Go for walks"],
        Goal::ImproveHealth => &["Light activities are welcome", "Practice meditation or yoga"],
    }
}

/// Format tip for display
pub fn format_tip(tip: &Tip) -> String {
    format!("{} {}: {}", tip.category.emoji(), tip.category.name(), tip.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_goal_has_three_tips() {
        for goal in Goal::all() {
            assert_eq!(tips_for_goal(*goal).count(), 3, "Goal {:?} should have 3 tips", goal);
        }
    }

    #[test]
    fn test_universal_tips_cover_hydration_sleep_adaptability() {
        let categories: Vec<_> = universal_tips().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![TipCategory::Hydration, TipCategory::Sleep, TipCategory::Adaptability]
        );
    }

    #[test]
    fn test_supplements_never_empty() {
        for goal in Goal::all() {
            assert!(!supplements_for_goal(*goal).is_empty());
            assert!(supplements_for_goal(*goal).contains(&"Multivitamin"));
        }
    }

    #[test]
    fn test_rest_day_advice_per_goal() {
        for goal in Goal::all() {
            assert_eq!(rest_day_advice(*goal).len(), 2);
        }
    }

    #[test]
    fn test_format_tip_contains_parts() {
        let tip = &TIPS[0];
        let formatted = format_tip(tip);
        assert!(formatted.contains(tip.category.emoji()));
        assert!(formatted.contains(tip.category.name()));
        assert!(formatted.contains(tip.text));
    }

    #[test]
    fn test_all_tips_have_non_empty_text() {
        for (i, tip) in TIPS.iter().enumerate() {
            assert!(!tip.text.is_empty(), "Tip {} has empty text", i);
        }
    }
}
