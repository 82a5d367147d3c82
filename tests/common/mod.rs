#![allow(dead_code)]

use std::collections::HashMap;

use weekly_macro_planner::catalog::load_recipes;
use weekly_macro_planner::models::Recipe;

pub fn sample_catalog() -> Vec<Recipe> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/recipes.json");
    load_recipes(path).expect("bundled catalog should load")
}

pub fn by_id(recipes: &[Recipe]) -> HashMap<&str, &Recipe> {
    recipes.iter().map(|r| (r.id.as_str(), r)).collect()
}

/// Plant foods whose names contain a restricted word.
const PLANT_PHRASES: &[&str] = &[
    "peanut butter",
    "almond butter",
    "butternut",
    "eggplant",
    "coconut milk",
    "oat milk",
    "almond milk",
    "buckwheat",
];

/// True if any banned word appears anywhere in the recipe's text, inside
/// compound words included, once plant phrases are set aside.
pub fn mentions(recipe: &Recipe, banned: &[&str]) -> bool {
    let mut text = recipe.search_text();
    for phrase in PLANT_PHRASES {
        text = text.replace(phrase, " ");
    }
    banned.iter().any(|word| text.contains(word))
}
