//! Plan adjuster - regenerates or tunes a plan from recorded progress
//!
//! Decision order:
//! 1. Any regeneration trigger replaces the plan wholesale
//! 2. Otherwise diet and training are tuned independently
//! 3. The tuned plan is re-stamped and its recommendations refreshed

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::analyzer::{ProgressAnalysis, WeightTrend, analyze_at};
use crate::db::ProgressEntry;
use crate::plan::{DietPlan, Difficulty, GeneratedPlan, MAX_RECOMMENDATIONS, TrainingPlan, Workout};
use crate::planner::nutrition::macro_split;
use crate::planner::{PlanGenerator, meals, training};
use crate::profile::{Goal, UserProfile};

const REGENERATE_WEIGHT_CHANGE_KG: f64 = 5.0;
const REGENERATE_CONSISTENCY: u32 = 30;
const REGENERATE_ADHERENCE: f64 = 20.0;
const REGENERATE_AGE_DAYS: f64 = 60.0;

const CALORIE_STEP_DOWN: f64 = 0.95;
const CALORIE_STEP_UP: f64 = 1.05;
const WATER_STEP_UP: f64 = 1.1;

const MIN_WEEKLY_FREQUENCY: u8 = 2;
const MAX_WEEKLY_FREQUENCY: u8 = 6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    Diet,
    Training,
    General,
}

/// One concrete field change with its typed before/after values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", rename_all = "kebab-case")]
pub enum Change {
    RegeneratePlan,
    DailyCalories { old: u32, new: u32 },
    WaterTarget { old: f64, new: f64 },
    WeeklyFrequency { old: u8, new: u8 },
    Difficulty { old: Difficulty, new: Difficulty },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::RegeneratePlan => write!(f, "full plan regenerated"),
            Change::DailyCalories { old, new } => write!(f, "{} -> {} kcal", old, new),
            Change::WaterTarget { old, new } => write!(f, "{:.1} -> {:.1} L", old, new),
            Change::WeeklyFrequency { old, new } => write!(f, "{} -> {} sessions/week", old, new),
            Change::Difficulty { old, new } => write!(f, "{} -> {}", old.name(), new.name()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Adjustment {
    pub change: Change,
    pub reason: String,
    pub priority: Priority,
}

impl Adjustment {
    fn new(change: Change, reason: &str, priority: Priority) -> Self {
        Self {
            change,
            reason: reason.to_string(),
            priority,
        }
    }

    pub fn scope(&self) -> Scope {
        match self.change {
            Change::RegeneratePlan => Scope::General,
            Change::DailyCalories { .. } | Change::WaterTarget { .. } => Scope::Diet,
            Change::WeeklyFrequency { .. } | Change::Difficulty { .. } => Scope::Training,
        }
    }

    /// Path of the touched field inside the plan
    pub fn field_path(&self) -> &'static str {
        match self.change {
            Change::RegeneratePlan => "plan",
            Change::DailyCalories { .. } => "diet.calories_per_day",
            Change::WaterTarget { .. } => "diet.hydration.water_liters",
            Change::WeeklyFrequency { .. } => "training.weekly_frequency",
            Change::Difficulty { .. } => "training.difficulty",
        }
    }

    /// Write the new value into the plan, keeping dependent fields in step.
    ///
    /// Regeneration is carried out by the adjuster itself, so it is a no-op here.
    pub fn apply(&self, plan: &mut GeneratedPlan, profile: &UserProfile) {
        match &self.change {
            Change::RegeneratePlan => {}
            Change::DailyCalories { new, .. } => {
                if let Some(diet) = plan.diet.as_mut() {
                    set_daily_calories(diet, *new);
                }
            }
            Change::WaterTarget { new, .. } => {
                if let Some(diet) = plan.diet.as_mut() {
                    diet.hydration.water_liters = *new;
                }
            }
            Change::WeeklyFrequency { new, .. } => {
                if let Some(training) = plan.training.as_mut() {
                    set_weekly_frequency(training, *new, profile);
                }
            }
            Change::Difficulty { new, .. } => {
                if let Some(training) = plan.training.as_mut() {
                    set_difficulty(training, *new, profile.weight_kg);
                }
            }
        }
    }
}

/// Leaves the diet untouched when its slots hold zero calories
fn set_daily_calories(diet: &mut DietPlan, new_total: u32) {
    if !meals::rescale(&mut diet.meals, new_total) {
        warn!(
            "Meal slots hold zero calories, keeping {} kcal instead of {} kcal",
            diet.calories_per_day, new_total
        );
        return;
    }
    diet.calories_per_day = new_total;
    diet.macros = macro_split(new_total as f64);
}

/// Sets and reps the existing workouts currently prescribe
fn current_load(plan: &TrainingPlan) -> Option<(u32, u32)> {
    plan.workouts
        .iter()
        .find_map(|w| w.exercises.first())
        .map(|e| (e.sets, e.reps))
}

/// Truncate, or extend by continuing the category rotation.
///
/// Added workouts take over the load of the existing ones.
fn set_weekly_frequency(plan: &mut TrainingPlan, frequency: u8, profile: &UserProfile) {
    let target = frequency as usize;
    plan.workouts.truncate(target);
    let load = current_load(plan);
    while plan.workouts.len() < target {
        let index = plan.workouts.len();
        let mut workout = training::build_workout(index, profile.goal, profile.weight_kg);
        if let Some((sets, reps)) = load {
            for exercise in workout.exercises.iter_mut() {
                exercise.sets = sets;
                exercise.reps = reps;
            }
            training::refresh_totals(&mut workout, profile.weight_kg);
        }
        plan.workouts.push(workout);
    }
    plan.weekly_frequency = frequency;
    plan.rest.days = training::rest_days(frequency);
}

fn set_difficulty(plan: &mut TrainingPlan, level: Difficulty, body_weight_kg: f64) {
    plan.difficulty = level;
    for workout in plan.workouts.iter_mut() {
        apply_difficulty_to_workout(workout, level, body_weight_kg);
    }
}

/// Flat per-exercise load change for a level
fn apply_difficulty_to_workout(workout: &mut Workout, level: Difficulty, body_weight_kg: f64) {
    match level {
        Difficulty::Advanced => workout.exercises.iter_mut().for_each(|e| e.sets += 1),
        Difficulty::Beginner => workout.exercises.iter_mut().for_each(|e| e.reps += 2),
        Difficulty::Intermediate => return,
    }
    training::refresh_totals(workout, body_weight_kg);
}

/// Why a plan gets thrown away instead of tuned
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegenerationTrigger {
    LargeWeightChange(f64),
    LowConsistency(u32),
    LowAdherence(f64),
    StalePlan(f64),
}

impl RegenerationTrigger {
    pub fn detect(analysis: &ProgressAnalysis, plan_age_days: f64) -> Option<Self> {
        if analysis.weight_change > REGENERATE_WEIGHT_CHANGE_KG {
            Some(Self::LargeWeightChange(analysis.weight_change))
        } else if analysis.consistency < REGENERATE_CONSISTENCY {
            Some(Self::LowConsistency(analysis.consistency))
        } else if analysis.adherence < REGENERATE_ADHERENCE {
            Some(Self::LowAdherence(analysis.adherence))
        } else if plan_age_days > REGENERATE_AGE_DAYS {
            Some(Self::StalePlan(plan_age_days))
        } else {
            None
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::LargeWeightChange(kg) => format!("Significant weight change ({:.1} kg)", kg),
            Self::LowConsistency(pct) => format!("Very low consistency ({}%)", pct),
            Self::LowAdherence(pct) => format!("Very low adherence ({:.0}%)", pct),
            Self::StalePlan(days) => format!("Plan is {:.0} days old", days),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdjustmentOutcome {
    pub plan: GeneratedPlan,
    pub adjustments: Vec<Adjustment>,
    pub message: String,
    pub regenerated: bool,
}

/// Applies progress-driven changes; regeneration goes through the wrapped generator
pub struct PlanAdjuster<R: Rng> {
    generator: PlanGenerator<R>,
}

impl PlanAdjuster<ThreadRng> {
    pub fn with_thread_rng() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> PlanAdjuster<R> {
    pub fn new(rng: R) -> Self {
        Self {
            generator: PlanGenerator::new(rng),
        }
    }

    pub fn adjust(
        &mut self,
        plan: &GeneratedPlan,
        profile: &UserProfile,
        history: &[ProgressEntry],
        latest: &ProgressEntry,
    ) -> AdjustmentOutcome {
        self.adjust_at(plan, profile, history, latest, Utc::now())
    }

    /// The input plan is never mutated; tuning works on a copy
    pub fn adjust_at(
        &mut self,
        plan: &GeneratedPlan,
        profile: &UserProfile,
        history: &[ProgressEntry],
        latest: &ProgressEntry,
        now: DateTime<Utc>,
    ) -> AdjustmentOutcome {
        let analysis = analyze_at(history, latest, profile.goal, now);
        debug!(
            "Analysis: {} {:.1} kg, consistency {}%, adherence {:.0}%",
            analysis.trend.name(),
            analysis.weight_change,
            analysis.consistency,
            analysis.adherence
        );

        if let Some(trigger) = RegenerationTrigger::detect(&analysis, plan.age_days(now)) {
            info!("Regenerating plan {}: {}", plan.id, trigger.describe());
            let fresh = self.generator.generate_at(profile, now);
            return AdjustmentOutcome {
                plan: fresh,
                adjustments: vec![Adjustment::new(
                    Change::RegeneratePlan,
                    &format!("{}, plan fully regenerated", trigger.describe()),
                    Priority::High,
                )],
                message: "Your plan was fully regenerated based on your progress!".to_string(),
                regenerated: true,
            };
        }

        let mut adjustments = Vec::new();
        if let Some(diet) = &plan.diet {
            adjustments.extend(diet_adjustments(diet, &analysis, profile.goal));
        }
        if let Some(training) = &plan.training {
            adjustments.extend(training_adjustments(training, &analysis, profile.goal));
        }

        let mut tuned = plan.clone();
        for adjustment in &adjustments {
            debug!("{}: {} ({})", adjustment.field_path(), adjustment.change, adjustment.reason);
            adjustment.apply(&mut tuned, profile);
        }
        refresh_recommendations(&mut tuned.recommendations, &analysis);
        tuned.stamp(now);

        info!("Plan {} tuned with {} adjustment(s)", tuned.id, adjustments.len());

        AdjustmentOutcome {
            plan: tuned,
            message: summary_message(&adjustments).to_string(),
            adjustments,
            regenerated: false,
        }
    }
}

/// Adjust a plan with a thread-local random source, against the current time
pub fn adjust_plan(
    plan: &GeneratedPlan,
    profile: &UserProfile,
    history: &[ProgressEntry],
    latest: &ProgressEntry,
) -> AdjustmentOutcome {
    PlanAdjuster::with_thread_rng().adjust(plan, profile, history, latest)
}

fn diet_adjustments(diet: &DietPlan, analysis: &ProgressAnalysis, goal: Goal) -> Vec<Adjustment> {
    let mut adjustments = Vec::new();
    let old = diet.calories_per_day;

    if analysis.trend == WeightTrend::Losing && goal == Goal::LoseWeight && analysis.weight_change > 2.0 {
        adjustments.push(Adjustment::new(
            Change::DailyCalories {
                old,
                new: (old as f64 * CALORIE_STEP_DOWN).round() as u32,
            },
            "Weight loss is very fast, easing the caloric deficit",
            Priority::Medium,
        ));
    } else if analysis.trend == WeightTrend::Gaining && goal == Goal::GainMass && analysis.weight_change < 1.0 {
        adjustments.push(Adjustment::new(
            Change::DailyCalories {
                old,
                new: (old as f64 * CALORIE_STEP_UP).round() as u32,
            },
            "Mass gain is slow, adding calories",
            Priority::Medium,
        ));
    }

    if analysis.consistency < 70 {
        let old = diet.hydration.water_liters;
        adjustments.push(Adjustment::new(
            Change::WaterTarget {
                old,
                new: (old * WATER_STEP_UP * 10.0).round() / 10.0,
            },
            "Better hydration helps with consistency",
            Priority::Low,
        ));
    }

    adjustments
}

fn training_adjustments(
    plan: &TrainingPlan,
    analysis: &ProgressAnalysis,
    goal: Goal,
) -> Vec<Adjustment> {
    let mut adjustments = Vec::new();
    let old = plan.weekly_frequency;

    if analysis.consistency < 60 {
        let new = old.saturating_sub(1).max(MIN_WEEKLY_FREQUENCY);
        if new != old {
            adjustments.push(Adjustment::new(
                Change::WeeklyFrequency { old, new },
                "Fewer sessions to make the routine easier to keep",
                Priority::Medium,
            ));
        }
    } else if analysis.consistency > 90 && analysis.adherence > 80.0 {
        let new = (old + 1).min(MAX_WEEKLY_FREQUENCY);
        if new != old {
            adjustments.push(Adjustment::new(
                Change::WeeklyFrequency { old, new },
                "Excellent consistency, adding a session",
                Priority::Low,
            ));
        }
    }

    let losing_steadily = goal == Goal::LoseWeight
        && analysis.trend == WeightTrend::Losing
        && analysis.consistency > 80
        && analysis.weight_change > 2.0;
    if losing_steadily && let Some(new) = plan.difficulty.next() {
        adjustments.push(Adjustment::new(
            Change::Difficulty {
                old: plan.difficulty,
                new,
            },
            "Steady progress, raising the difficulty",
            Priority::Medium,
        ));
    }

    adjustments
}

/// Append progress notes not already present, keeping the list capped
fn refresh_recommendations(recommendations: &mut Vec<String>, analysis: &ProgressAnalysis) {
    let mut notes = Vec::new();

    if analysis.trend == WeightTrend::Losing && analysis.weight_change > 2.0 {
        notes.push("Excellent weight-loss progress! Keep up the consistency.");
    } else if analysis.trend == WeightTrend::Gaining && analysis.weight_change > 1.0 {
        notes.push("Great mass gain! Keep focusing on food and rest.");
    }
    if analysis.consistency < 70 {
        notes.push("Try to be more consistent with your progress updates for better results.");
    }
    if analysis.adherence < 60.0 {
        notes.push("Consider adjusting your schedule for better adherence to the plan.");
    }

    for note in notes {
        if !recommendations.iter().any(|r| r == note) {
            recommendations.push(note.to_string());
        }
    }
    recommendations.truncate(MAX_RECOMMENDATIONS);
}

fn summary_message(adjustments: &[Adjustment]) -> &'static str {
    match adjustments.iter().map(|a| a.priority).max() {
        None => "Your plan is already optimized for your current progress!",
        Some(Priority::High) => "Important changes were made to your plan based on your progress.",
        Some(Priority::Medium) => "Small optimizations were made to improve your results.",
        Some(Priority::Low) => "Minor adjustments were made to your plan.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::analyzer::tests::{at, entry};
    use crate::profile::tests::sample_profile;
    use crate::profile::ActivityLevel;
    use chrono::Duration;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn adjuster() -> PlanAdjuster<StdRng> {
        PlanAdjuster::new(StdRng::seed_from_u64(7))
    }

    fn plan_for(profile: &UserProfile) -> GeneratedPlan {
        PlanGenerator::new(StdRng::seed_from_u64(1)).generate_at(profile, at(0))
    }

    fn weekly(weights: &[f64]) -> Vec<ProgressEntry> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| entry(i as i64 * 7, *w))
            .collect()
    }

    #[test]
    fn test_six_kilo_change_regenerates() {
        let profile = sample_profile(Goal::LoseWeight, ActivityLevel::Moderate);
        let plan = plan_for(&profile);
        let history = vec![entry(0, 80.0), entry(10, 74.0)];

        let outcome = adjuster().adjust_at(&plan, &profile, &history, &history[1], at(10));
        assert!(outcome.regenerated);
        assert_eq!(outcome.plan.generated_at, at(10));
        assert_eq!(outcome.plan.expires_at, at(40));
        assert_eq!(outcome.adjustments.len(), 1);
        assert_eq!(outcome.adjustments[0].priority, Priority::High);
        assert_eq!(outcome.adjustments[0].scope(), Scope::General);
        assert!(outcome.adjustments[0].reason.contains("fully regenerated"));
    }

    #[test]
    fn test_stale_plan_regenerates() {
        let profile = sample_profile(Goal::Maintain, ActivityLevel::Light);
        let plan = plan_for(&profile);
        let history = weekly(&[70.0; 9]);

        let outcome = adjuster().adjust_at(&plan, &profile, &history, &history[8], at(61));
        assert!(outcome.regenerated);
        assert_eq!(
            RegenerationTrigger::detect(&analyze_at(&history, &history[8], Goal::Maintain, at(61)), 61.0),
            Some(RegenerationTrigger::StalePlan(61.0))
        );
    }

    #[test]
    fn test_fast_loss_tunes_calories_frequency_and_difficulty() {
        let profile = sample_profile(Goal::LoseWeight, ActivityLevel::Moderate);
        let plan = plan_for(&profile);
        let history = weekly(&[80.0, 79.0, 78.0, 77.5]);

        let outcome = adjuster().adjust_at(&plan, &profile, &history, &history[3], at(21));
        assert!(!outcome.regenerated);

        let changes: Vec<_> = outcome.adjustments.iter().map(|a| a.change.clone()).collect();
        assert_eq!(
            changes,
            vec![
                Change::DailyCalories { old: 2346, new: 2229 },
                Change::WeeklyFrequency { old: 4, new: 5 },
                Change::Difficulty {
                    old: Difficulty::Intermediate,
                    new: Difficulty::Advanced
                },
            ]
        );

        let diet = outcome.plan.diet.as_ref().unwrap();
        assert_eq!(diet.calories_per_day, 2229);
        assert!((diet.meal_calories_total() as i64 - 2229).abs() <= 3);

        let training = outcome.plan.training.as_ref().unwrap();
        assert_eq!(training.weekly_frequency as usize, training.workouts.len());
        assert_eq!(training.difficulty, Difficulty::Advanced);
        assert!(training.workouts.iter().all(|w| w.exercises.iter().all(|e| e.sets == 4)));
        // 4 x (4 x 30s + 3 x 30s rest) + 600
        assert_eq!(training.workouts[0].duration_secs, 1440);
        assert_eq!(training.rest.days.len(), 2);

        assert_eq!(outcome.plan.generated_at, at(21));
        assert_eq!(outcome.plan.next_review, at(21) + Duration::days(7));
        assert_eq!(outcome.message, "Small optimizations were made to improve your results.");
        assert!(outcome
            .plan
            .recommendations
            .iter()
            .any(|r| r.starts_with("Excellent weight-loss progress")));
    }

    #[test]
    fn test_low_consistency_reduces_frequency_and_raises_water() {
        let profile = sample_profile(Goal::LoseWeight, ActivityLevel::Moderate);
        let plan = plan_for(&profile);
        let history = vec![entry(0, 80.0), entry(35, 80.0)];

        let outcome = adjuster().adjust_at(&plan, &profile, &history, &history[1], at(35));
        assert!(!outcome.regenerated);

        let diet = outcome.plan.diet.as_ref().unwrap();
        assert_eq!(diet.hydration.water_liters, 3.5);
        assert_eq!(diet.calories_per_day, 2346);

        let training = outcome.plan.training.as_ref().unwrap();
        assert_eq!(training.weekly_frequency, 3);
        assert_eq!(training.workouts.len(), 3);

        let scopes: Vec<_> = outcome.adjustments.iter().map(|a| (a.scope(), a.priority)).collect();
        assert_eq!(scopes, vec![(Scope::Diet, Priority::Low), (Scope::Training, Priority::Medium)]);
    }

    #[test]
    fn test_no_changes_means_optimized() {
        let profile = sample_profile(Goal::Maintain, ActivityLevel::Moderate);
        let plan = plan_for(&profile);
        let history = weekly(&[75.5, 75.4, 75.6, 75.5]);

        let outcome = adjuster().adjust_at(&plan, &profile, &history, &history[3], at(30));
        assert!(outcome.adjustments.is_empty());
        assert_eq!(outcome.message, "Your plan is already optimized for your current progress!");
        assert_eq!(outcome.plan.diet, plan.diet);
        assert_eq!(outcome.plan.generated_at, at(30));
    }

    #[test]
    fn test_input_plan_untouched() {
        let profile = sample_profile(Goal::LoseWeight, ActivityLevel::Moderate);
        let plan = plan_for(&profile);
        let before = plan.clone();
        let history = weekly(&[80.0, 79.0, 78.0, 77.5]);
        adjuster().adjust_at(&plan, &profile, &history, &history[3], at(21));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_frequency_floor_and_ceiling() {
        let profile = sample_profile(Goal::ImproveHealth, ActivityLevel::Light);
        let mut plan = plan_for(&profile);
        let mut training = plan.training.take().unwrap();

        set_weekly_frequency(&mut training, 2, &profile);
        let low = ProgressAnalysis {
            consistency: 40,
            ..ProgressAnalysis::neutral()
        };
        assert!(training_adjustments(&training, &low, profile.goal).is_empty());

        set_weekly_frequency(&mut training, 6, &profile);
        assert_eq!(training.workouts.len(), 6);
        assert_eq!(training.rest.days.len(), 1);
        assert!(training_adjustments(&training, &ProgressAnalysis::neutral(), profile.goal).is_empty());
    }

    #[test]
    fn test_added_workout_continues_rotation() {
        let profile = sample_profile(Goal::GainMass, ActivityLevel::Sedentary);
        let mut training = plan_for(&profile).training.unwrap();
        assert_eq!(training.workouts.len(), 3);

        set_weekly_frequency(&mut training, 4, &profile);
        let added = &training.workouts[3];
        assert_eq!(added.category, crate::exercises::Category::Strength);
        assert_eq!(added.day, chrono::Weekday::Thu);
    }

    fn loads(plan: &GeneratedPlan) -> Vec<(u32, u32)> {
        plan.training
            .as_ref()
            .unwrap()
            .workouts
            .iter()
            .flat_map(|w| w.exercises.iter().map(|e| (e.sets, e.reps)))
            .collect()
    }

    #[test]
    fn test_added_workout_keeps_beginner_load() {
        let profile = sample_profile(Goal::LoseWeight, ActivityLevel::Light);
        let plan = plan_for(&profile);
        assert_eq!(plan.training.as_ref().unwrap().difficulty, Difficulty::Beginner);
        let history = weekly(&[80.0, 79.8, 79.6, 79.5]);

        let outcome = adjuster().adjust_at(&plan, &profile, &history, &history[3], at(21));
        assert_eq!(
            outcome.adjustments.iter().map(|a| a.change.clone()).collect::<Vec<_>>(),
            vec![Change::WeeklyFrequency { old: 4, new: 5 }]
        );
        assert_eq!(outcome.plan.training.as_ref().unwrap().workouts.len(), 5);
        assert!(loads(&outcome.plan).iter().all(|&l| l == (3, 15)), "{:?}", loads(&outcome.plan));
    }

    #[test]
    fn test_added_workout_keeps_advanced_load() {
        let profile = sample_profile(Goal::Maintain, ActivityLevel::VeryActive);
        let plan = plan_for(&profile);
        assert_eq!(plan.training.as_ref().unwrap().difficulty, Difficulty::Advanced);
        let history = weekly(&[75.5, 75.5, 75.6, 75.5]);

        let outcome = adjuster().adjust_at(&plan, &profile, &history, &history[3], at(21));
        assert_eq!(outcome.plan.training.as_ref().unwrap().workouts.len(), 4);
        assert!(loads(&outcome.plan).iter().all(|&l| l == (3, 12)), "{:?}", loads(&outcome.plan));
    }

    #[test]
    fn test_added_workout_after_bump_matches_siblings() {
        let profile = sample_profile(Goal::LoseWeight, ActivityLevel::Moderate);
        let mut plan = plan_for(&profile);
        Adjustment::new(
            Change::Difficulty {
                old: Difficulty::Intermediate,
                new: Difficulty::Advanced,
            },
            "test",
            Priority::Medium,
        )
        .apply(&mut plan, &profile);
        Adjustment::new(Change::WeeklyFrequency { old: 4, new: 5 }, "test", Priority::Low)
            .apply(&mut plan, &profile);

        assert!(loads(&plan).iter().all(|&l| l == (4, 15)));
        let workouts = &plan.training.as_ref().unwrap().workouts;
        // Index 4 continues the rotation on cardio, like index 1
        assert_eq!(workouts[4].category, workouts[1].category);
        assert_eq!(workouts[4].duration_secs, workouts[1].duration_secs);
        assert_eq!(workouts[4].estimated_calories, workouts[1].estimated_calories);
    }

    #[test]
    fn test_slow_mass_gain_raises_calories() {
        let profile = sample_profile(Goal::GainMass, ActivityLevel::Moderate);
        let plan = plan_for(&profile);
        let old = plan.diet.as_ref().unwrap().calories_per_day;
        let new = (old as f64 * 1.05).round() as u32;
        let history = weekly(&[70.0, 70.2, 70.5, 70.7]);

        let outcome = adjuster().adjust_at(&plan, &profile, &history, &history[3], at(21));
        assert!(!outcome.regenerated);
        assert_eq!(outcome.adjustments[0].change, Change::DailyCalories { old, new });
        assert_eq!(outcome.adjustments[0].priority, Priority::Medium);

        let diet = outcome.plan.diet.as_ref().unwrap();
        assert_eq!(diet.calories_per_day, new);
        assert_eq!(diet.macros, macro_split(new as f64));
        assert!((diet.meal_calories_total() as i64 - new as i64).abs() <= 3);
        assert_eq!(outcome.message, "Small optimizations were made to improve your results.");
    }

    #[test]
    fn test_zero_calorie_slots_keep_calories() {
        let profile = sample_profile(Goal::LoseWeight, ActivityLevel::Moderate);
        let mut plan = plan_for(&profile);
        if let Some(diet) = plan.diet.as_mut() {
            diet.meals.iter_mut().for_each(|m| m.calories = 0);
        }
        let slots_before = plan.diet.as_ref().unwrap().meals.clone();
        let macros_before = plan.diet.as_ref().unwrap().macros;

        Adjustment::new(Change::DailyCalories { old: 2346, new: 2229 }, "test", Priority::Medium)
            .apply(&mut plan, &profile);

        let diet = plan.diet.unwrap();
        assert_eq!(diet.calories_per_day, 2346);
        assert_eq!(diet.macros, macros_before);
        assert_eq!(diet.meals, slots_before);
    }

    #[test]
    fn test_beginner_level_adds_reps() {
        let profile = sample_profile(Goal::LoseWeight, ActivityLevel::Moderate);
        let mut plan = plan_for(&profile);
        Adjustment::new(
            Change::Difficulty {
                old: Difficulty::Intermediate,
                new: Difficulty::Beginner,
            },
            "test",
            Priority::Low,
        )
        .apply(&mut plan, &profile);
        let training = plan.training.unwrap();
        assert!(training.workouts[0].exercises.iter().all(|e| e.reps == 17 && e.sets == 3));
    }

    #[test]
    fn test_recommendations_capped_without_duplicates() {
        let mut recs: Vec<String> = (0..7).map(|i| format!("tip {}", i)).collect();
        let analysis = ProgressAnalysis {
            consistency: 50,
            adherence: 40.0,
            ..ProgressAnalysis::neutral()
        };
        refresh_recommendations(&mut recs, &analysis);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        refresh_recommendations(&mut recs, &analysis);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert_eq!(recs.iter().filter(|r| r.starts_with("Try to be more")).count(), 1);
    }

    #[test]
    fn test_field_paths() {
        let a = Adjustment::new(Change::WaterTarget { old: 3.0, new: 3.3 }, "x", Priority::Low);
        assert_eq!(a.field_path(), "diet.hydration.water_liters");
        assert_eq!(a.scope(), Scope::Diet);
        assert_eq!(a.change.to_string(), "3.0 -> 3.3 L");
    }
}
