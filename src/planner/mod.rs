//! Planner module - derives a complete plan from a user profile
//!
//! Pipeline:
//! - Nutrition: BMR -> TDEE -> goal-adjusted calories and macros
//! - Meals: five fixed slots with their own macro split and foods
//! - Training: weekly frequency, rotating workout categories, per-goal loads

pub mod generator;
pub mod meals;
pub mod nutrition;
pub mod training;

pub use generator::{PlanGenerator, generate_plan};
pub use nutrition::NutritionTargets;
