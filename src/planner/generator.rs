//! Plan generator - assembles nutrition, meals and training into one plan

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info};

use super::{meals, nutrition, training};
use crate::plan::{
    DietPlan, Difficulty, GeneratedPlan, Hydration, MAX_RECOMMENDATIONS, PlanKind,
};
use crate::profile::UserProfile;
use crate::tips::{supplements_for_goal, tips_for_goal, universal_tips};

const DIET_DURATION_DAYS: u32 = 30;
const BEVERAGES: &[&str] = &["Green tea", "Coconut water", "Natural juice"];
const VEGETARIAN_PREFERENCE: &str = "vegetarian-diet";

/// Builds complete plans; the random source only affects food choice
pub struct PlanGenerator<R: Rng> {
    rng: R,
}

impl PlanGenerator<ThreadRng> {
    pub fn with_thread_rng() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> PlanGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a plan stamped with the current time
    pub fn generate(&mut self, profile: &UserProfile) -> GeneratedPlan {
        self.generate_at(profile, Utc::now())
    }

    pub fn generate_at(&mut self, profile: &UserProfile, now: DateTime<Utc>) -> GeneratedPlan {
        let diet = self.diet_plan(profile);
        let training = training::schedule(profile);

        info!(
            "Generated plan for {} ({}): {} kcal/day, {} workouts/week",
            profile.id,
            profile.goal.label(),
            diet.calories_per_day,
            training.weekly_frequency
        );

        let mut plan = GeneratedPlan {
            id: format!("plan-{}", now.timestamp_millis()),
            kind: PlanKind::Complete,
            goal: profile.goal,
            goal_label: profile.goal.label().to_string(),
            generated_at: now,
            expires_at: now,
            diet: Some(diet),
            training: Some(training),
            recommendations: recommendations(profile),
            next_review: now,
        };
        plan.stamp(now);
        plan
    }

    fn diet_plan(&mut self, profile: &UserProfile) -> DietPlan {
        let targets = nutrition::calculate(profile);
        debug!(
            "BMR {:.1}, TDEE {:.1}, target {:.1} kcal",
            targets.bmr, targets.tdee, targets.target_kcal
        );

        DietPlan {
            name: format!("Diet Plan - {}", profile.goal.label()),
            calories_per_day: targets.calories_per_day,
            macros: targets.macros,
            meals: meals::compose(targets.target_kcal, &profile.restrictions, &mut self.rng),
            hydration: Hydration {
                water_liters: nutrition::water_liters(profile),
                beverages: BEVERAGES.iter().map(|s| s.to_string()).collect(),
            },
            supplements: Some(
                supplements_for_goal(profile.goal)
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            observations: diet_observations(profile),
            duration_days: DIET_DURATION_DAYS,
            difficulty: Difficulty::for_activity(profile.activity),
        }
    }
}

/// Generate a plan with a thread-local random source
pub fn generate_plan(profile: &UserProfile) -> GeneratedPlan {
    PlanGenerator::with_thread_rng().generate(profile)
}

fn diet_observations(profile: &UserProfile) -> Vec<String> {
    let mut observations = Vec::new();

    if !profile.restrictions.is_empty() {
        observations.push(format!("Respect restrictions: {}", profile.restrictions.join(", ")));
    }
    if profile.has_preference(VEGETARIAN_PREFERENCE) {
        observations.push("Focus on plant-based protein sources".to_string());
    }

    observations.push("Drink water regularly throughout the day".to_string());
    observations.push("Chew your food well".to_string());
    observations.push("Avoid meals too close to bedtime".to_string());
    observations
}

/// Goal tips first, then the universal ones
fn recommendations(profile: &UserProfile) -> Vec<String> {
    tips_for_goal(profile.goal)
        .chain(universal_tips())
        .map(|t| t.text.to_string())
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
