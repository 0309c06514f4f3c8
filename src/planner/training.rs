//! Training scheduler - weekly frequency, workouts and per-goal prescriptions

use chrono::Weekday;

use crate::exercises::{CatalogExercise, Category, get_exercises};
use crate::plan::{
    Difficulty, PlannedExercise, Progression, ProgressionKind, RestSchedule, TrainingPlan, Workout,
};
use crate::profile::{ActivityLevel, Goal, UserProfile};
use crate::tips::rest_day_advice;

/// Monday-first calendar the schedule is laid on
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub const MAX_EXERCISES_PER_WORKOUT: usize = 4;
/// Warm-up plus cool-down allowance
const WARM_UP_COOL_DOWN_SECS: u32 = 600;
/// Work time assumed for a set without a prescribed duration
const SET_WORK_SECS: u32 = 30;
/// Cardio sets are prescribed by time
const CARDIO_SET_SECS: u32 = 300;
/// Flat burn rate, kcal per kg per minute
const KCAL_PER_KG_MIN: f64 = 0.1;
const PROGRAM_WEEKS: u32 = 12;

const WARM_UP: &[&str] = &["Dynamic stretching", "Joint mobility", "Light cardio"];
const COOL_DOWN: &[&str] = &["Static stretching", "Deep breathing", "Muscle relaxation"];

/// Sets, reps, rest and load for a goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prescription {
    pub sets: u32,
    pub reps: u32,
    pub rest_secs: u32,
    pub weight_kg: Option<f64>,
}

impl Prescription {
    pub fn for_goal(goal: Goal) -> Self {
        let (sets, reps, rest_secs) = match goal {
            Goal::LoseWeight => (3, 15, 30),
            Goal::GainMass => (4, 8, 90),
            Goal::GainStrength => (5, 5, 120),
            Goal::Maintain => (3, 12, 60),
            Goal::ImproveHealth => (2, 10, 45),
        };
        let weight_kg = match goal {
            Goal::GainMass | Goal::GainStrength => Some(20.0),
            _ => None,
        };
        Self { sets, reps, rest_secs, weight_kg }
    }
}

/// Sessions per week for a goal and activity level
pub fn weekly_frequency(goal: Goal, activity: ActivityLevel) -> u8 {
    let sedentary = activity == ActivityLevel::Sedentary;
    match goal {
        Goal::LoseWeight if sedentary => 3,
        Goal::LoseWeight => 4,
        Goal::GainMass if sedentary => 3,
        Goal::GainMass => 5,
        Goal::GainStrength => 4,
        Goal::Maintain | Goal::ImproveHealth => 3,
    }
}

fn plan_exercise(exercise: &CatalogExercise, prescription: Prescription) -> PlannedExercise {
    PlannedExercise {
        name: exercise.name.to_string(),
        sets: prescription.sets,
        reps: prescription.reps,
        weight_kg: prescription.weight_kg,
        duration_secs: (exercise.category == Category::Cardio).then_some(CARDIO_SET_SECS),
        rest_secs: prescription.rest_secs,
        technique: exercise.technique_or_default().to_string(),
        variations: exercise.variations.iter().map(|s| s.to_string()).collect(),
        observations: exercise
            .observations_or_default()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Total session time: work + rest between sets + warm-up/cool-down
pub fn workout_duration_secs(exercises: &[PlannedExercise]) -> u32 {
    let work: u32 = exercises
        .iter()
        .map(|e| {
            let per_set = e.duration_secs.unwrap_or(SET_WORK_SECS);
            per_set * e.sets + e.rest_secs * e.sets.saturating_sub(1)
        })
        .sum();
    work + WARM_UP_COOL_DOWN_SECS
}

pub fn workout_calories(duration_secs: u32, body_weight_kg: f64) -> u32 {
    (body_weight_kg * KCAL_PER_KG_MIN * duration_secs as f64 / 60.0).round() as u32
}

/// Recompute duration and calories after the exercises changed
pub fn refresh_totals(workout: &mut Workout, body_weight_kg: f64) {
    workout.duration_secs = workout_duration_secs(&workout.exercises);
    workout.estimated_calories = workout_calories(workout.duration_secs, body_weight_kg);
}

/// Workout for the `index`-th training day of the week
pub fn build_workout(index: usize, goal: Goal, body_weight_kg: f64) -> Workout {
    let rotation = Category::rotation();
    let category = rotation[index % rotation.len()];
    let catalog: Vec<&CatalogExercise> = get_exercises(category)
        .iter()
        .take(MAX_EXERCISES_PER_WORKOUT)
        .collect();

    let prescription = Prescription::for_goal(goal);
    let exercises: Vec<PlannedExercise> = catalog
        .iter()
        .map(|e| plan_exercise(e, prescription))
        .collect();

    let mut equipment: Vec<String> = Vec::new();
    for item in catalog.iter().filter_map(|e| e.equipment) {
        if !equipment.iter().any(|e| e == item) {
            equipment.push(item.to_string());
        }
    }

    let mut workout = Workout {
        name: format!("{} workout", category.name()),
        day: WEEK[index % WEEK.len()],
        category,
        exercises,
        duration_secs: 0,
        estimated_calories: 0,
        equipment,
        warm_up: WARM_UP.iter().map(|s| s.to_string()).collect(),
        cool_down: COOL_DOWN.iter().map(|s| s.to_string()).collect(),
    };
    refresh_totals(&mut workout, body_weight_kg);
    workout
}

/// Weekdays left over after the training days
pub fn rest_days(frequency: u8) -> Vec<Weekday> {
    WEEK.iter().skip(frequency as usize).copied().collect()
}

pub fn schedule(profile: &UserProfile) -> TrainingPlan {
    let frequency = weekly_frequency(profile.goal, profile.activity);
    let workouts = (0..frequency as usize)
        .map(|i| build_workout(i, profile.goal, profile.weight_kg))
        .collect();

    TrainingPlan {
        name: format!("Training Plan - {}", profile.goal.label()),
        duration_weeks: PROGRAM_WEEKS,
        weekly_frequency: frequency,
        workouts,
        rest: RestSchedule {
            days: rest_days(frequency),
            recommendations: rest_day_advice(profile.goal).iter().map(|s| s.to_string()).collect(),
        },
        progression: Progression {
            kind: ProgressionKind::Linear,
            increment_kg: 2.5,
            review_interval_weeks: 2,
        },
        difficulty: Difficulty::for_activity(profile.activity),
    }
}
