//! User profile - the input every plan is derived from

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Biological sex used for the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Sex {
    #[serde(alias = "masculino")]
    Male,
    #[serde(alias = "feminino")]
    Female,
    /// Unknown values land here; computed with the female formula
    #[serde(alias = "outro")]
    #[serde(other)]
    Other,
}

/// Five-point activity scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    #[serde(alias = "leve")]
    Light,
    #[serde(alias = "moderado")]
    Moderate,
    #[serde(alias = "ativo")]
    Active,
    #[serde(alias = "muito-ativo")]
    VeryActive,
    /// Also the fallback for unknown values, so it must stay last
    #[serde(alias = "sedentario")]
    #[serde(other)]
    Sedentary,
}

impl ActivityLevel {
    /// TDEE multiplier applied on top of BMR
    pub fn tdee_multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Hydration multiplier applied on top of 35 ml/kg
    pub fn water_multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.0,
            ActivityLevel::Light => 1.1,
            ActivityLevel::Moderate => 1.2,
            ActivityLevel::Active => 1.3,
            ActivityLevel::VeryActive => 1.4,
        }
    }

    pub fn all() -> &'static [ActivityLevel] {
        &[
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ]
    }
}

/// What the user is training for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    #[serde(alias = "perder-peso")]
    LoseWeight,
    #[serde(alias = "ganhar-massa")]
    GainMass,
    #[serde(alias = "melhorar-saude")]
    ImproveHealth,
    #[serde(alias = "ganhar-forca")]
    GainStrength,
    /// Also the fallback for unknown values, so it must stay last
    #[serde(alias = "manter-peso")]
    #[serde(other)]
    Maintain,
}

impl Goal {
    /// Human-readable label stored on generated plans
    pub fn label(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "Weight Loss",
            Goal::GainMass => "Muscle Mass Gain",
            Goal::Maintain => "Weight Maintenance",
            Goal::ImproveHealth => "Health Improvement",
            Goal::GainStrength => "Strength Gain",
        }
    }

    /// Caloric deficit/surplus factor applied to TDEE
    pub fn calorie_factor(&self) -> f64 {
        match self {
            Goal::LoseWeight => 0.85,
            Goal::GainMass => 1.15,
            Goal::Maintain | Goal::ImproveHealth | Goal::GainStrength => 1.0,
        }
    }

    pub fn all() -> &'static [Goal] {
        &[
            Goal::LoseWeight,
            Goal::GainMass,
            Goal::Maintain,
            Goal::ImproveHealth,
            Goal::GainStrength,
        ]
    }
}

/// Profile record, owned by the calling application.
///
/// Numeric ranges (age 13-120, weight 30-300 kg, height 100-250 cm) are
/// validated by the caller before the planner sees the profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub activity: ActivityLevel,
    pub goal: Goal,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
}

impl UserProfile {
    pub fn has_preference(&self, preference: &str) -> bool {
        self.preferences.iter().any(|p| p.eq_ignore_ascii_case(preference))
    }
}
