//! Meal composer - splits the daily target across fixed meal slots

use chrono::NaiveTime;
use rand::Rng;

use super::nutrition::macro_split;
use crate::foods::pick_foods;
use crate::plan::{MealCategory, MealSlot};

struct SlotTemplate {
    name: &'static str,
    category: MealCategory,
    share: f64,
    hour: u32,
    minute: u32,
}

/// Day layout; shares add up to 1.0
const SLOTS: &[SlotTemplate] = &[
    SlotTemplate { name: "Breakfast", category: MealCategory::Breakfast, share: 0.25, hour: 8, minute: 0 },
    SlotTemplate { name: "Morning snack", category: MealCategory::Snack, share: 0.15, hour: 10, minute: 30 },
    SlotTemplate { name: "Lunch", category: MealCategory::Lunch, share: 0.30, hour: 12, minute: 30 },
    SlotTemplate { name: "Afternoon snack", category: MealCategory::Snack, share: 0.15, hour: 16, minute: 0 },
    SlotTemplate { name: "Dinner", category: MealCategory::Dinner, share: 0.15, hour: 19, minute: 30 },
];

/// Build the day's meal slots from the unrounded daily target.
///
/// Each slot gets its own 25/55/20 split of its calories rather than a
/// share of the daily grams.
pub fn compose<R: Rng + ?Sized>(daily_kcal: f64, restrictions: &[String], rng: &mut R) -> Vec<MealSlot> {
    SLOTS
        .iter()
        .map(|slot| {
            let calories = (daily_kcal * slot.share).round();
            MealSlot {
                name: slot.name.to_string(),
                category: slot.category,
                time: NaiveTime::from_hms_opt(slot.hour, slot.minute, 0).unwrap_or_default(),
                calories: calories as u32,
                macros: macro_split(calories),
                foods: pick_foods(restrictions, rng),
                preparation: slot.category.preparation().to_string(),
                prep_minutes: slot.category.prep_minutes(),
            }
        })
        .collect()
}

/// Scale every slot so the day adds up to `new_total`.
///
/// Returns `false` and leaves the slots alone when they currently hold
/// zero calories.
pub fn rescale(meals: &mut [MealSlot], new_total: u32) -> bool {
    let current: u32 = meals.iter().map(|m| m.calories).sum();
    if current == 0 {
        return false;
    }

    let ratio = new_total as f64 / current as f64;
    for meal in meals.iter_mut() {
        let scaled = meal.calories as f64 * ratio;
        meal.calories = scaled.round() as u32;
        meal.macros = macro_split(scaled);
    }
    true
}
