//! ML module - Progress analysis and plan adaptation
//!
//! Features:
//! - Weight trend, logging consistency and goal adherence
//! - Regeneration or incremental tuning of an existing plan
//! - Weight forecast using linear regression (linfa)

pub mod adjuster;
pub mod analyzer;
pub mod forecast;

pub use adjuster::{Adjustment, AdjustmentOutcome, Change, PlanAdjuster, Priority, Scope, adjust_plan};
pub use analyzer::{ProgressAnalysis, WeightTrend, analyze, analyze_at};
pub use forecast::WeightForecaster;

use crate::db::ProgressEntry;
use crate::profile::Goal;

const MIN_WEEKLY_SESSIONS: f64 = 3.0;
const MIN_WATER_LITERS: f64 = 2.5;
const MIN_CALORIES: f64 = 1500.0;

/// Averages over the whole history
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStats {
    pub entries: usize,
    pub average_weight: f64,
    /// Latest minus first, signed
    pub weight_change: f64,
    pub average_calories: f64,
    pub average_sessions: f64,
    pub average_water: f64,
}

/// Progress analytics
pub struct Analytics {
    entries: Vec<ProgressEntry>,
}

impl Analytics {
    pub fn new(mut entries: Vec<ProgressEntry>) -> Self {
        entries.sort_by_key(|e| e.date);
        Self { entries }
    }

    /// `None` for an empty history
    pub fn stats(&self) -> Option<ProgressStats> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        let n = self.entries.len() as f64;
        let mean = |f: fn(&ProgressEntry) -> f64| self.entries.iter().map(f).sum::<f64>() / n;

        Some(ProgressStats {
            entries: self.entries.len(),
            average_weight: mean(|e| e.weight_kg),
            weight_change: last.weight_kg - first.weight_kg,
            average_calories: mean(|e| e.calories as f64),
            average_sessions: mean(|e| e.exercise_sessions as f64),
            average_water: mean(|e| e.water_liters),
        })
    }

    /// Dashboard hints from averages and the overall weight direction
    pub fn recommendations(&self, goal: Goal) -> Vec<String> {
        let Some(stats) = self.stats() else {
            return vec!["Start logging your progress to get personalized recommendations".to_string()];
        };

        let mut recs = Vec::new();

        if goal == Goal::LoseWeight && stats.weight_change > 0.0 {
            recs.push("Weight is going up: review your diet or raise the training intensity".to_string());
        }
        if goal == Goal::GainMass && stats.weight_change < 0.0 {
            recs.push("Weight is going down: eat more and focus on strength work".to_string());
        }
        if stats.average_sessions < MIN_WEEKLY_SESSIONS {
            recs.push("Aim for at least 3 training sessions per week".to_string());
        }
        if stats.average_water < MIN_WATER_LITERS {
            recs.push("Drink more water, at least 2.5 L per day".to_string());
        }
        if stats.average_calories < MIN_CALORIES {
            recs.push("Calorie intake is very low, make sure you eat enough".to_string());
        }

        if recs.is_empty() {
            recs.push("Great job! Keep following your plan".to_string());
        }
        recs
    }
}
