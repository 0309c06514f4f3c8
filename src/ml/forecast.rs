//! Weight forecast using linear regression (linfa)

use chrono::NaiveDate;
use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};

use crate::db::ProgressEntry;

/// Minimum data points required for training
const MIN_DATA_POINTS: usize = 3;

/// Weight trend fitted over days since the first weigh-in
pub struct WeightForecaster {
    slope: f64,
    intercept: f64,
    r2_score: f64,
    data_points: usize,
    first_date: NaiveDate,
    last_date: NaiveDate,
}

/// Forecast summary for display
#[derive(Debug, Clone)]
pub struct Forecast {
    pub kg_per_day: f64,
    pub kg_per_week: f64,
    pub week_prediction: f64,
    pub month_prediction: f64,
    pub r2_score: f64,
    pub data_points: usize,
}

impl WeightForecaster {
    /// Fit on the history; `None` with too few entries or a single-day span
    pub fn train(history: &[ProgressEntry]) -> Option<Self> {
        if history.len() < MIN_DATA_POINTS {
            return None;
        }

        let first_date = history.iter().map(|e| e.date).min()?;
        let last_date = history.iter().map(|e| e.date).max()?;
        if (last_date - first_date).num_days() <= 0 {
            return None;
        }

        // X = days since first entry, Y = weight
        let x_data: Vec<f64> = history
            .iter()
            .map(|e| (e.date - first_date).num_days() as f64)
            .collect();
        let y_data: Vec<f64> = history.iter().map(|e| e.weight_kg).collect();
        let n_samples = x_data.len();

        let records = Array2::from_shape_vec((n_samples, 1), x_data).ok()?;
        let targets = Array1::from_vec(y_data);
        let dataset = Dataset::new(records, targets);

        let model = LinearRegression::default().fit(&dataset).ok()?;
        let slope = model.params()[0];
        let intercept = model.intercept();

        let predictions = model.predict(&dataset);
        let r2_score = predictions.r2(&dataset).unwrap_or(0.0);

        Some(Self {
            slope,
            intercept,
            r2_score,
            data_points: n_samples,
            first_date,
            last_date,
        })
    }

    /// Predicted weight `days_ahead` days after the latest entry
    pub fn predict_weight(&self, days_ahead: i64) -> f64 {
        let day = (self.last_date - self.first_date).num_days() + days_ahead;
        self.slope * day as f64 + self.intercept
    }

    pub fn kg_per_day(&self) -> f64 {
        self.slope
    }

    pub fn r2_score(&self) -> f64 {
        self.r2_score
    }

    pub fn data_points(&self) -> usize {
        self.data_points
    }

    pub fn forecast(&self) -> Forecast {
        Forecast {
            kg_per_day: self.slope,
            kg_per_week: self.slope * 7.0,
            week_prediction: self.predict_weight(7),
            month_prediction: self.predict_weight(30),
            r2_score: self.r2_score,
            data_points: self.data_points,
        }
    }

    pub fn format_forecast(&self) -> String {
        let f = self.forecast();
        let trend = if f.kg_per_week >= 0.0 {
            format!("+{:.2}", f.kg_per_week)
        } else {
            format!("{:.2}", f.kg_per_week)
        };

        [
            "--- Weight forecast ---".to_string(),
            format!("Trend: {} kg/week", trend),
            format!("In 7 days: {:.1} kg", f.week_prediction),
            format!("In 30 days: {:.1} kg", f.month_prediction),
            format!("Fit (R2): {:.2} over {} entries", f.r2_score, f.data_points),
        ]
        .join("\n")
    }
}
