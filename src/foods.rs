//! Food catalog - reference foods the meal composer picks from

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Macronutrient group a reference food stands for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MacroGroup {
    Protein,
    Carbohydrate,
    Fat,
}

impl MacroGroup {
    pub fn all() -> &'static [MacroGroup] {
        &[MacroGroup::Protein, MacroGroup::Carbohydrate, MacroGroup::Fat]
    }
}

pub const PROTEIN_FOODS: &[&str] = &[
    "Grilled chicken",
    "Baked fish",
    "Eggs",
    "Tofu",
    "Chickpeas",
    "Lentils",
    "Quinoa",
    "Oats",
    "Greek yogurt",
    "Cottage cheese",
    "Tuna",
    "Salmon",
];

pub const CARB_FOODS: &[&str] = &[
    "Brown rice",
    "Sweet potato",
    "Whole-grain bread",
    "Whole-wheat pasta",
    "Beans",
    "Fruit",
    "Vegetables",
    "Corn",
    "Peas",
    "Carrot",
    "Beetroot",
];

pub const FAT_FOODS: &[&str] = &[
    "Avocado",
    "Mixed nuts",
    "Olive oil",
    "Chia seeds",
    "Flaxseeds",
    "Coconut",
    "Dark chocolate",
    "Oily fish",
    "Whole yogurt",
];

pub fn get_foods(group: MacroGroup) -> &'static [&'static str] {
    match group {
        MacroGroup::Protein => PROTEIN_FOODS,
        MacroGroup::Carbohydrate => CARB_FOODS,
        MacroGroup::Fat => FAT_FOODS,
    }
}

/// True when any restriction term occurs in the food name (case-insensitive)
pub fn is_restricted(food: &str, restrictions: &[String]) -> bool {
    let food = food.to_lowercase();
    restrictions
        .iter()
        .filter(|r| !r.trim().is_empty())
        .any(|r| food.contains(&r.trim().to_lowercase()))
}

/// Foods of a group that survive the restriction filter
pub fn allowed_foods(group: MacroGroup, restrictions: &[String]) -> Vec<&'static str> {
    get_foods(group)
        .iter()
        .copied()
        .filter(|f| !is_restricted(f, restrictions))
        .collect()
}

/// One random food per macro group; a group with nothing left is skipped
pub fn pick_foods<R: Rng + ?Sized>(restrictions: &[String], rng: &mut R) -> Vec<String> {
    MacroGroup::all()
        .iter()
        .filter_map(|group| {
            allowed_foods(*group, restrictions)
                .choose(&mut *rng)
                .map(|f| f.to_string())
        })
        .collect()
}
