//! Exercise catalog - reference exercises the training scheduler draws from

use serde::{Deserialize, Serialize};

/// Workout category; the scheduler cycles Strength -> Cardio -> Flexibility
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Strength,
    Cardio,
    Flexibility,
}

impl Category {
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Strength => "💪",
            Category::Cardio => "🏃",
            Category::Flexibility => "🧘",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Cardio => "Cardio",
            Category::Flexibility => "Flexibility",
        }
    }

    /// Weekly rotation order
    pub fn rotation() -> &'static [Category] {
        &[Category::Strength, Category::Cardio, Category::Flexibility]
    }
}

#[derive(Debug, Clone)]
pub struct CatalogExercise {
    pub name: &'static str,
    pub category: Category,
    /// Body area or style, e.g. "legs", "core"
    pub focus: &'static str,
    /// `None` = bodyweight only
    pub equipment: Option<&'static str>,
    pub technique: Option<&'static str>,
    pub variations: &'static [&'static str],
    pub observations: &'static [&'static str],
}

impl CatalogExercise {
    pub fn technique_or_default(&self) -> &'static str {
        self.technique.unwrap_or("Perform with correct form and control")
    }

    pub fn observations_or_default(&self) -> &'static [&'static str] {
        if self.observations.is_empty() {
            &["Keep correct posture", "Breathe in a controlled way"]
        } else {
            self.observations
        }
    }
}

pub const STRENGTH_EXERCISES: &[CatalogExercise] = &[
    CatalogExercise {
        name: "Squat",
        category: Category::Strength,
        focus: "legs",
        equipment: None,
        technique: Some("Feet shoulder-width apart, knees tracking over the toes"),
        variations: &["Jump squat", "Sumo squat", "Bulgarian split squat"],
        observations: &["Keep the chest up", "Knees should not pass the toes"],
    },
    CatalogExercise {
        name: "Push-up",
        category: Category::Strength,
        focus: "chest/triceps",
        equipment: None,
        technique: Some("Body in a straight line, elbows close to the torso"),
        variations: &["Incline push-up", "Decline push-up", "Diamond push-up"],
        observations: &["Keep the body straight", "Lower until almost touching the floor"],
    },
    CatalogExercise {
        name: "Plank",
        category: Category::Strength,
        focus: "core",
        equipment: None,
        technique: Some("Rigid body, controlled breathing"),
        variations: &["Side plank", "Plank with leg raise", "Plank walk"],
        observations: &["Breathe normally", "Keep the abs braced"],
    },
    CatalogExercise {
        name: "Burpee",
        category: Category::Strength,
        focus: "cardio/strength",
        equipment: None,
        technique: Some("Fluid and controlled movement"),
        variations: &[],
        observations: &[],
    },
    CatalogExercise {
        name: "Mountain climber",
        category: Category::Strength,
        focus: "core",
        equipment: None,
        technique: Some("Keep the core engaged"),
        variations: &[],
        observations: &[],
    },
];

pub const CARDIO_EXERCISES: &[CatalogExercise] = &[
    CatalogExercise {
        name: "Running",
        category: Category::Cardio,
        focus: "cardio",
        equipment: Some("Treadmill or running track"),
        technique: None,
        variations: &[],
        observations: &[],
    },
    CatalogExercise {
        name: "Cycling",
        category: Category::Cardio,
        focus: "cardio",
        equipment: Some("Bicycle"),
        technique: None,
        variations: &[],
        observations: &[],
    },
    CatalogExercise {
        name: "Jumping jacks",
        category: Category::Cardio,
        focus: "cardio",
        equipment: None,
        technique: None,
        variations: &[],
        observations: &[],
    },
    CatalogExercise {
        name: "Jump rope",
        category: Category::Cardio,
        focus: "cardio",
        equipment: Some("Jump rope"),
        technique: None,
        variations: &[],
        observations: &[],
    },
    CatalogExercise {
        name: "Stair climbing",
        category: Category::Cardio,
        focus: "cardio",
        equipment: Some("Stairs"),
        technique: None,
        variations: &[],
        observations: &[],
    },
];

pub const FLEXIBILITY_EXERCISES: &[CatalogExercise] = &[
    CatalogExercise {
        name: "Leg stretch",
        category: Category::Flexibility,
        focus: "flexibility",
        equipment: None,
        technique: None,
        variations: &[],
        observations: &[],
    },
    CatalogExercise {
        name: "Basic yoga",
        category: Category::Flexibility,
        focus: "flexibility",
        equipment: Some("Mat"),
        technique: None,
        variations: &[],
        observations: &[],
    },
    CatalogExercise {
        name: "Arm stretch",
        category: Category::Flexibility,
        focus: "flexibility",
        equipment: None,
        technique: None,
        variations: &[],
        observations: &[],
    },
    CatalogExercise {
        name: "Back stretch",
        category: Category::Flexibility,
        focus: "flexibility",
        equipment: None,
        technique: None,
        variations: &[],
        observations: &[],
    },
];

pub fn get_exercises(category: Category) -> &'static [CatalogExercise] {
    match category {
        Category::Strength => STRENGTH_EXERCISES,
        Category::Cardio => CARDIO_EXERCISES,
        Category::Flexibility => FLEXIBILITY_EXERCISES,
    }
}

pub fn get_all_exercises() -> Vec<&'static CatalogExercise> {
    STRENGTH_EXERCISES
        .iter()
        .chain(CARDIO_EXERCISES.iter())
        .chain(FLEXIBILITY_EXERCISES.iter())
        .collect()
}

/// Find exercise by name, ignoring case
pub fn find_exercise_by_name(name: &str) -> Option<&'static CatalogExercise> {
    get_all_exercises()
        .into_iter()
        .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_at_least_four_exercises() {
        for category in Category::rotation() {
            assert!(
                get_exercises(*category).len() >= 4,
                "Category {:?} should have at least 4 exercises",
                category
            );
        }
    }

    #[test]
    fn test_catalog_categories_match_lists() {
        for category in Category::rotation() {
            assert!(get_exercises(*category).iter().all(|e| e.category == *category));
        }
    }

    #[test]
    fn test_find_exercise_by_name() {
        let squat = find_exercise_by_name("Squat").unwrap();
        assert_eq!(squat.category, Category::Strength);
        assert_eq!(squat.variations.len(), 3);
        assert!(find_exercise_by_name("Deadlift").is_none());
        assert_eq!(find_exercise_by_name("jump ROPE").map(|e| e.name), Some("Jump rope"));
    }

    #[test]
    fn test_defaults_for_sparse_entries() {
        let rope = find_exercise_by_name("Jump rope").unwrap();
        assert_eq!(rope.technique_or_default(), "Perform with correct form and control");
        assert_eq!(rope.observations_or_default().len(), 2);
    }

    #[test]
    fn test_names_unique() {
        let all = get_all_exercises();
        for (i, a) in all.iter().enumerate() {
            assert!(all.iter().skip(i + 1).all(|b| b.name != a.name), "duplicate {}", a.name);
        }
    }
}
