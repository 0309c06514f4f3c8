//! fitplan - Personalized diet and training plans that adapt to recorded progress

pub mod db;
pub mod exercises;
pub mod foods;
pub mod ml;
pub mod plan;
pub mod planner;
pub mod profile;
pub mod tips;

pub use db::{Database, PlanRepository, ProgressEntry};
pub use ml::{AdjustmentOutcome, PlanAdjuster, adjust_plan};
pub use plan::GeneratedPlan;
pub use planner::{PlanGenerator, generate_plan};
pub use profile::UserProfile;
