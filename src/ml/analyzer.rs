//! Progress analysis - weight trend, logging consistency and goal adherence

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::db::ProgressEntry;
use crate::profile::Goal;

/// Changes smaller than this count as stable
const TREND_THRESHOLD_KG: f64 = 0.5;
const FAST_LOSS_KG: f64 = 2.0;
const LOW_CONSISTENCY: u32 = 70;
const LOW_ADHERENCE: f64 = 60.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WeightTrend {
    Losing,
    Gaining,
    Stable,
}

impl WeightTrend {
    pub fn from_change(change_kg: f64) -> Self {
        if change_kg.abs() < TREND_THRESHOLD_KG {
            WeightTrend::Stable
        } else if change_kg < 0.0 {
            WeightTrend::Losing
        } else {
            WeightTrend::Gaining
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeightTrend::Losing => "losing",
            WeightTrend::Gaining => "gaining",
            WeightTrend::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressAnalysis {
    pub trend: WeightTrend,
    /// Magnitude of the change between the first and latest weigh-in
    pub weight_change: f64,
    /// Percent of expected weekly entries actually logged
    pub consistency: u32,
    pub adherence: f64,
    pub recommendations: Vec<String>,
}

impl ProgressAnalysis {
    /// Nothing to compare yet
    pub fn neutral() -> Self {
        Self {
            trend: WeightTrend::Stable,
            weight_change: 0.0,
            consistency: 100,
            adherence: 100.0,
            recommendations: vec!["Continue following the current plan".to_string()],
        }
    }
}

/// Analyze a history against the current time
pub fn analyze(history: &[ProgressEntry], latest: &ProgressEntry, goal: Goal) -> ProgressAnalysis {
    analyze_at(history, latest, goal, Utc::now())
}

/// Analyze a history; `latest` is the end point of the weight change.
///
/// The caller's slice is not reordered.
pub fn analyze_at(
    history: &[ProgressEntry],
    latest: &ProgressEntry,
    goal: Goal,
    now: DateTime<Utc>,
) -> ProgressAnalysis {
    if history.len() < 2 {
        return ProgressAnalysis::neutral();
    }

    let mut ordered: Vec<&ProgressEntry> = history.iter().collect();
    ordered.sort_by_key(|e| e.date);
    let Some(first) = ordered.first() else {
        return ProgressAnalysis::neutral();
    };

    let change = latest.weight_kg - first.weight_kg;
    let trend = WeightTrend::from_change(change);
    let consistency = consistency(history, now);
    let adherence = adherence(change, goal);

    ProgressAnalysis {
        trend,
        weight_change: change.abs(),
        consistency,
        adherence,
        recommendations: recommendations(trend, change.abs(), consistency, adherence, goal),
    }
}

/// Entries logged versus one expected per started week since the first entry
pub fn consistency(history: &[ProgressEntry], now: DateTime<Utc>) -> u32 {
    let Some(first_date) = history.iter().map(|e| e.date).min() else {
        return 100;
    };

    let start = Utc.from_utc_datetime(&first_date.and_time(NaiveTime::default()));
    let days = (now - start).num_seconds() as f64 / 86_400.0;
    let expected = (days / 7.0).ceil().max(1.0);

    let ratio = history.len() as f64 / expected * 100.0;
    ratio.round().min(100.0) as u32
}

/// How well the signed weight change matches the goal, 0 to 100
pub fn adherence(change_kg: f64, goal: Goal) -> f64 {
    let penalty = (100.0 - change_kg.abs() * 10.0).max(0.0);
    match goal {
        Goal::LoseWeight if change_kg < 0.0 => 100.0,
        Goal::GainMass if change_kg > 0.0 => 100.0,
        Goal::LoseWeight | Goal::GainMass => penalty,
        _ => 100.0,
    }
}

fn recommendations(
    trend: WeightTrend,
    change_kg: f64,
    consistency: u32,
    adherence: f64,
    goal: Goal,
) -> Vec<String> {
    let mut recs = Vec::new();

    if consistency < LOW_CONSISTENCY {
        recs.push("Try to log your progress at least once a week".to_string());
    }
    if adherence < LOW_ADHERENCE {
        recs.push("Consider adjusting your schedule for better adherence".to_string());
    }
    if goal == Goal::LoseWeight && trend == WeightTrend::Losing && change_kg > FAST_LOSS_KG {
        recs.push("Weight loss is very fast, consider a smaller caloric deficit".to_string());
    }
    if goal == Goal::GainMass && trend != WeightTrend::Losing && change_kg < TREND_THRESHOLD_KG {
        recs.push("Mass gain is slow, consider increasing calories".to_string());
    }

    recs
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    pub(crate) fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap() + Duration::days(offset)
    }

    pub(crate) fn entry(offset: i64, weight_kg: f64) -> ProgressEntry {
        ProgressEntry {
            date: day(offset),
            weight_kg,
            calories: 2000,
            exercise_sessions: 3,
            water_liters: 2.5,
        }
    }

    /// Midnight UTC of `day(offset)`
    pub(crate) fn at(offset: i64) -> DateTime<Utc> {
        Utc.from_utc_datetime(&day(offset).and_time(NaiveTime::default()))
    }

    #[test]
    fn test_fewer_than_two_entries_is_neutral() {
        let e = entry(0, 80.0);
        let analysis = analyze_at(&[e.clone()], &e, Goal::LoseWeight, at(30));
        assert_eq!(analysis, ProgressAnalysis::neutral());

        let empty = analyze_at(&[], &e, Goal::GainMass, at(30));
        assert_eq!(empty.trend, WeightTrend::Stable);
        assert_eq!(empty.consistency, 100);
        assert_eq!(empty.adherence, 100.0);
    }

    #[test]
    fn test_trend_threshold() {
        assert_eq!(WeightTrend::from_change(-0.4), WeightTrend::Stable);
        assert_eq!(WeightTrend::from_change(0.49), WeightTrend::Stable);
        assert_eq!(WeightTrend::from_change(-0.5), WeightTrend::Losing);
        assert_eq!(WeightTrend::from_change(1.2), WeightTrend::Gaining);
    }

    #[test]
    fn test_consistency_four_entries_over_four_weeks() {
        let history: Vec<_> = (0..4).map(|w| entry(w * 7, 80.0)).collect();
        assert_eq!(consistency(&history, at(28)), 100);
    }

    #[test]
    fn test_consistency_single_entry_over_four_weeks() {
        assert_eq!(consistency(&[entry(0, 80.0)], at(28)), 25);
    }

    #[test]
    fn test_consistency_capped_and_same_day() {
        let history: Vec<_> = (0..10).map(|d| entry(d, 80.0)).collect();
        assert_eq!(consistency(&history, at(10)), 100);
        // Expected count never drops below one
        assert_eq!(consistency(&[entry(0, 80.0), entry(0, 80.0)], at(0)), 100);
    }

    #[test]
    fn test_adherence_by_goal() {
        assert_eq!(adherence(-3.0, Goal::LoseWeight), 100.0);
        assert_eq!(adherence(2.0, Goal::LoseWeight), 80.0);
        assert_eq!(adherence(3.0, Goal::GainMass), 100.0);
        assert_eq!(adherence(-4.0, Goal::GainMass), 60.0);
        assert_eq!(adherence(15.0, Goal::LoseWeight), 0.0);
        assert_eq!(adherence(15.0, Goal::Maintain), 100.0);
    }

    #[test]
    fn test_six_kilo_loss_over_ten_days() {
        let history = vec![entry(0, 80.0), entry(10, 74.0)];
        let analysis = analyze_at(&history, &history[1], Goal::LoseWeight, at(10));
        assert_eq!(analysis.trend, WeightTrend::Losing);
        assert!((analysis.weight_change - 6.0).abs() < 1e-9);
        assert_eq!(analysis.adherence, 100.0);
        assert_eq!(analysis.consistency, 100);
        assert!(analysis.recommendations.iter().any(|r| r.contains("very fast")));
    }

    #[test]
    fn test_fast_loss_note_only_for_weight_loss_goal() {
        let history = vec![entry(0, 80.0), entry(7, 77.0)];
        let analysis = analyze_at(&history, &history[1], Goal::GainStrength, at(7));
        assert_eq!(analysis.trend, WeightTrend::Losing);
        assert!(analysis.recommendations.is_empty(), "{:?}", analysis.recommendations);

        let analysis = analyze_at(&history, &history[1], Goal::LoseWeight, at(7));
        assert!(analysis.recommendations.iter().any(|r| r.contains("very fast")));
    }

    #[test]
    fn test_unordered_history_uses_earliest_entry() {
        let history = vec![entry(14, 79.0), entry(0, 80.0), entry(7, 79.5)];
        let analysis = analyze_at(&history, &history[0], Goal::LoseWeight, at(14));
        assert!((analysis.weight_change - 1.0).abs() < 1e-9);
        assert_eq!(analysis.trend, WeightTrend::Losing);
        // Caller's order untouched
        assert_eq!(history[0].date, day(14));
    }

    #[test]
    fn test_slow_gain_and_low_consistency_notes() {
        let history = vec![entry(0, 70.0), entry(35, 70.2)];
        let analysis = analyze_at(&history, &history[1], Goal::GainMass, at(35));
        assert_eq!(analysis.consistency, 40);
        assert_eq!(analysis.trend, WeightTrend::Stable);
        assert_eq!(
            analysis.recommendations,
            vec![
                "Try to log your progress at least once a week".to_string(),
                "Mass gain is slow, consider increasing calories".to_string(),
            ]
        );
    }
}
