//! Nutrition calculator - BMR, TDEE and the daily macro split

use crate::plan::Macros;
use crate::profile::{Sex, UserProfile};

/// Share of calories from protein (4 kcal/g)
pub const PROTEIN_SHARE: f64 = 0.25;
/// Share of calories from carbohydrate (4 kcal/g)
pub const CARB_SHARE: f64 = 0.55;
/// Share of calories from fat (9 kcal/g)
pub const FAT_SHARE: f64 = 0.20;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily energy and macro targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionTargets {
    pub bmr: f64,
    pub tdee: f64,
    /// Goal-adjusted TDEE before rounding
    pub target_kcal: f64,
    pub calories_per_day: u32,
    pub macros: Macros,
}

/// Harris-Benedict basal metabolic rate
pub fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let (w, h, a) = (profile.weight_kg, profile.height_cm, profile.age as f64);
    match profile.sex {
        Sex::Male => 88.362 + 13.397 * w + 4.799 * h - 5.677 * a,
        Sex::Female | Sex::Other => 447.593 + 9.247 * w + 3.098 * h - 4.330 * a,
    }
}

/// Split calories 25/55/20 into protein/carb/fat grams
pub fn macro_split(kcal: f64) -> Macros {
    Macros {
        protein_g: (kcal * PROTEIN_SHARE / KCAL_PER_G_PROTEIN).round() as u32,
        carb_g: (kcal * CARB_SHARE / KCAL_PER_G_CARB).round() as u32,
        fat_g: (kcal * FAT_SHARE / KCAL_PER_G_FAT).round() as u32,
    }
}

pub fn calculate(profile: &UserProfile) -> NutritionTargets {
    let bmr = basal_metabolic_rate(profile);
    let tdee = bmr * profile.activity.tdee_multiplier();
    let target_kcal = tdee * profile.goal.calorie_factor();

    NutritionTargets {
        bmr,
        tdee,
        target_kcal,
        calories_per_day: target_kcal.round() as u32,
        macros: macro_split(target_kcal),
    }
}

/// Daily water target: 35 ml/kg scaled by activity, rounded to 0.1 L
pub fn water_liters(profile: &UserProfile) -> f64 {
    let liters = profile.weight_kg * 0.035 * profile.activity.water_multiplier();
    (liters * 10.0).round() / 10.0
}
