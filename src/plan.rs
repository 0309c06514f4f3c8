//! Plan data model - what the planner produces and the adjuster mutates

use chrono::{DateTime, Duration, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::exercises::Category;
use crate::profile::{ActivityLevel, Goal};

/// Days a plan stays valid after (re)generation
pub const PLAN_VALIDITY_DAYS: i64 = 30;
/// Days until the next progress review
pub const REVIEW_INTERVAL_DAYS: i64 = 7;
/// Upper bound on plan recommendations
pub const MAX_RECOMMENDATIONS: usize = 8;
/// "Expiring soon" window
const EXPIRING_SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PlanKind {
    Diet,
    Training,
    Complete,
}

/// Plan difficulty, escalated one step at a time by the adjuster
///
/// Deserialized through a string so unknown and legacy spellings map onto a level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "intermediate" | "intermediario" => Difficulty::Intermediate,
            "advanced" | "avancado" => Difficulty::Advanced,
            _ => Difficulty::Beginner,
        }
    }
}

impl Difficulty {
    pub fn for_activity(level: ActivityLevel) -> Self {
        match level {
            ActivityLevel::Sedentary | ActivityLevel::Light => Difficulty::Beginner,
            ActivityLevel::Moderate | ActivityLevel::Active => Difficulty::Intermediate,
            ActivityLevel::VeryActive => Difficulty::Advanced,
        }
    }

    /// Next level up, `None` at the top
    pub fn next(&self) -> Option<Difficulty> {
        match self {
            Difficulty::Beginner => Some(Difficulty::Intermediate),
            Difficulty::Intermediate => Some(Difficulty::Advanced),
            Difficulty::Advanced => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MealCategory {
    Breakfast,
    Snack,
    Lunch,
    Dinner,
}

impl MealCategory {
    pub fn preparation(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Quick and nutritious preparation to start the day",
            MealCategory::Snack => "Practical and healthy option between meals",
            MealCategory::Lunch => "Main meal with balanced nutrition",
            MealCategory::Dinner => "Light and nutritious meal to end the day",
        }
    }

    pub fn prep_minutes(&self) -> u32 {
        match self {
            MealCategory::Breakfast => 15,
            MealCategory::Snack => 10,
            MealCategory::Lunch => 30,
            MealCategory::Dinner => 25,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Macros {
    pub protein_g: u32,
    pub carb_g: u32,
    pub fat_g: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSlot {
    pub name: String,
    pub category: MealCategory,
    pub time: NaiveTime,
    pub calories: u32,
    pub macros: Macros,
    pub foods: Vec<String>,
    pub preparation: String,
    pub prep_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hydration {
    pub water_liters: f64,
    pub beverages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    pub name: String,
    pub calories_per_day: u32,
    pub macros: Macros,
    pub meals: Vec<MealSlot>,
    pub hydration: Hydration,
    pub supplements: Option<Vec<String>>,
    pub observations: Vec<String>,
    pub duration_days: u32,
    pub difficulty: Difficulty,
}

impl DietPlan {
    pub fn meal_calories_total(&self) -> u32 {
        self.meals.iter().map(|m| m.calories).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight_kg: Option<f64>,
    pub duration_secs: Option<u32>,
    pub rest_secs: u32,
    pub technique: String,
    pub variations: Vec<String>,
    pub observations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub name: String,
    pub day: Weekday,
    pub category: Category,
    pub exercises: Vec<PlannedExercise>,
    pub duration_secs: u32,
    pub estimated_calories: u32,
    pub equipment: Vec<String>,
    pub warm_up: Vec<String>,
    pub cool_down: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestSchedule {
    pub days: Vec<Weekday>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressionKind {
    Linear,
    Wave,
    Pyramid,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Progression {
    pub kind: ProgressionKind,
    pub increment_kg: f64,
    pub review_interval_weeks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingPlan {
    pub name: String,
    pub duration_weeks: u32,
    pub weekly_frequency: u8,
    pub workouts: Vec<Workout>,
    pub rest: RestSchedule,
    pub progression: Progression,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedPlan {
    pub id: String,
    pub kind: PlanKind,
    pub goal: Goal,
    pub goal_label: String,
    pub generated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub diet: Option<DietPlan>,
    pub training: Option<TrainingPlan>,
    pub recommendations: Vec<String>,
    pub next_review: DateTime<Utc>,
}

/// Summary numbers for dashboards
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStats {
    pub meal_count: usize,
    pub calories_per_day: u32,
    pub diet_duration_days: u32,
    pub workout_count: usize,
    pub weekly_frequency: u8,
    pub training_duration_weeks: u32,
    pub next_review: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl GeneratedPlan {
    /// Set generation, expiry and review instants relative to `now`
    pub fn stamp(&mut self, now: DateTime<Utc>) {
        self.generated_at = now;
        self.expires_at = now + Duration::days(PLAN_VALIDITY_DAYS);
        self.next_review = now + Duration::days(REVIEW_INTERVAL_DAYS);
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Seven days or less left, counting a partial day as a whole one
    pub fn is_expiring_soon(&self, now: DateTime<Utc>) -> bool {
        let secs_left = (self.expires_at - now).num_seconds() as f64;
        let days_left = (secs_left / 86_400.0).ceil() as i64;
        days_left <= EXPIRING_SOON_DAYS
    }

    /// Age in (fractional) days
    pub fn age_days(&self, now: DateTime<Utc>) -> f64 {
        (now - self.generated_at).num_seconds() as f64 / 86_400.0
    }

    pub fn stats(&self) -> PlanStats {
        PlanStats {
            meal_count: self.diet.as_ref().map_or(0, |d| d.meals.len()),
            calories_per_day: self.diet.as_ref().map_or(0, |d| d.calories_per_day),
            diet_duration_days: self.diet.as_ref().map_or(0, |d| d.duration_days),
            workout_count: self.training.as_ref().map_or(0, |t| t.workouts.len()),
            weekly_frequency: self.training.as_ref().map_or(0, |t| t.weekly_frequency),
            training_duration_weeks: self.training.as_ref().map_or(0, |t| t.duration_weeks),
            next_review: self.next_review,
            expires_at: self.expires_at,
        }
    }

    /// Suggested next steps, by days since generation and by goal
    pub fn next_actions(&self, now: DateTime<Utc>) -> Vec<&'static str> {
        let mut actions = Vec::new();

        match (now - self.generated_at).num_days() {
            0 => {
                actions.push("Start following the plan today");
                actions.push("Prepare a shopping list for the week");
            }
            1 => {
                actions.push("Review how the first day went");
                actions.push("Adjust meal times if needed");
            }
            3 => {
                actions.push("First progress check");
                actions.push("Adjust intensity if needed");
            }
            7 => {
                actions.push("Full weekly review");
                actions.push("Regenerate the plan if needed");
            }
            _ => {}
        }

        match self.goal {
            Goal::LoseWeight => {
                actions.push("Weigh yourself and log it");
                actions.push("Measure your waist and hips");
            }
            Goal::GainMass => {
                actions.push("Log the weights you lift");
                actions.push("Take progress photos");
            }
            _ => {}
        }

        actions
    }
}
