//! Database module - SQLite storage for the profile, the current plan and progress

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::plan::GeneratedPlan;
use crate::profile::UserProfile;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day's progress record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressEntry {
    /// Unique within a series
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub calories: u32,
    pub exercise_sessions: u32,
    pub water_liters: f64,
}

/// Storage for the single current plan
pub trait PlanRepository {
    fn load(&self) -> Result<Option<GeneratedPlan>>;
    fn save(&self, plan: &GeneratedPlan) -> Result<()>;
    fn clear(&self) -> Result<()>;

    /// Load the plan unless it has expired; an expired plan is cleared
    fn load_active(&self, now: DateTime<Utc>) -> Result<Option<GeneratedPlan>> {
        match self.load()? {
            Some(plan) if plan.is_expired(now) => {
                info!("Plan {} expired at {}, removing", plan.id, plan.expires_at);
                self.clear()?;
                Ok(None)
            }
            other => Ok(other),
        }
    }
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS profile (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                data TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS plan (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                data TEXT NOT NULL,
                saved_at TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS progress (
                date TEXT PRIMARY KEY,
                weight_kg REAL NOT NULL,
                calories INTEGER NOT NULL,
                exercise_sessions INTEGER NOT NULL,
                water_liters REAL NOT NULL
            );",
        )?;
        Ok(())
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let data = serde_json::to_string(profile)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO profile (id, data) VALUES (1, ?1)",
            params![data],
        )?;
        Ok(())
    }

    pub fn load_profile(&self) -> Result<Option<UserProfile>> {
        let data: Option<String> = self
            .conn
            .query_row("SELECT data FROM profile WHERE id = 1", [], |row| row.get(0))
            .optional()?;
        data.map(|d| serde_json::from_str(&d).context("stored profile is not valid JSON"))
            .transpose()
    }

    /// Append a progress entry; a second entry for the same date is rejected
    pub fn add_progress(&self, entry: &ProgressEntry) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO progress (date, weight_kg, calories, exercise_sessions, water_liters) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    entry.date.format(DATE_FORMAT).to_string(),
                    entry.weight_kg,
                    entry.calories,
                    entry.exercise_sessions,
                    entry.water_liters,
                ],
            )
            .with_context(|| format!("failed to record progress for {}", entry.date))?;
        Ok(())
    }

    /// Full progress history, oldest first
    pub fn get_progress(&self) -> Result<Vec<ProgressEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, weight_kg, calories, exercise_sessions, water_liters FROM progress ORDER BY date ASC",
        )?;

        let entries = stmt
            .query_map([], |row| {
                let date_str: String = row.get(0)?;
                let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
                    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;
                Ok(ProgressEntry {
                    date,
                    weight_kg: row.get(1)?,
                    calories: row.get(2)?,
                    exercise_sessions: row.get(3)?,
                    water_liters: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}

impl PlanRepository for Database {
    fn load(&self) -> Result<Option<GeneratedPlan>> {
        let data: Option<String> = self
            .conn
            .query_row("SELECT data FROM plan WHERE id = 1", [], |row| row.get(0))
            .optional()?;
        data.map(|d| serde_json::from_str(&d).context("stored plan is not valid JSON"))
            .transpose()
    }

    fn save(&self, plan: &GeneratedPlan) -> Result<()> {
        let data = serde_json::to_string(plan)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO plan (id, data, saved_at) VALUES (1, ?1, ?2)",
            params![data, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM plan", [])?;
        Ok(())
    }
}
