use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::models::{Recipe, WeeklyPlan};

/// Load the recipe catalog from a JSON array.
///
/// Deduplicates by id (last occurrence wins, first position kept) and skips
/// recipes that fail basic validation.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path.as_ref())?;
    let parsed: Vec<Recipe> = serde_json::from_str(&content)?;
    let total = parsed.len();

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut recipes: Vec<Recipe> = Vec::with_capacity(total);
    for recipe in parsed {
        if !recipe.is_valid() {
            warn!(recipe = %recipe.debug_string(), "skipping invalid recipe");
            continue;
        }
        let existing = positions.get(&recipe.id).copied();
        match existing {
            Some(index) => recipes[index] = recipe,
            None => {
                positions.insert(recipe.id.clone(), recipes.len());
                recipes.push(recipe);
            }
        }
    }

    info!(
        path = %path.as_ref().display(),
        loaded = recipes.len(),
        skipped = total - recipes.len(),
        "loaded recipe catalog"
    );
    Ok(recipes)
}

/// Save a weekly plan as pretty-printed JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &WeeklyPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayMeal, DayPlan, MealSlot};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_recipes() {
        let file = write_json(
            r#"[
            {"id": "r1", "name": "Oats", "calories": 350, "protein_g": 12, "carbs_g": 55, "fat_g": 8,
             "tags": ["breakfast"], "ingredients": ["rolled oats", "banana"]},
            {"id": "r2", "name": "Lentil Soup", "calories": 420, "protein_g": 24, "carbs_g": 60, "fat_g": 9}
        ]"#,
        );

        let recipes = load_recipes(file.path()).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].protein, 12.0);
        assert!(recipes[0].has_tag("breakfast"));
        assert!(recipes[1].tags.is_empty());
        assert!(recipes[1].ingredients.is_empty());
    }

    #[test]
    fn test_deduplication_last_wins() {
        let file = write_json(
            r#"[
            {"id": "r1", "name": "Old", "calories": 300, "protein_g": 10, "carbs_g": 40, "fat_g": 8},
            {"id": "r2", "name": "Other", "calories": 500, "protein_g": 20, "carbs_g": 60, "fat_g": 15},
            {"id": "r1", "name": "New", "calories": 320, "protein_g": 12, "carbs_g": 40, "fat_g": 8}
        ]"#,
        );

        let recipes = load_recipes(file.path()).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, "r1");
        assert_eq!(recipes[0].name, "New");
        assert_eq!(recipes[1].id, "r2");
    }

    #[test]
    fn test_invalid_recipes_skipped() {
        let file = write_json(
            r#"[
            {"id": "", "name": "No Id", "calories": 300, "protein_g": 10, "carbs_g": 40, "fat_g": 8},
            {"id": "neg", "name": "Negative", "calories": -5, "protein_g": 10, "carbs_g": 40, "fat_g": 8},
            {"id": "ok", "name": "Fine", "calories": 300, "protein_g": 10, "carbs_g": 40, "fat_g": 8}
        ]"#,
        );

        let recipes = load_recipes(file.path()).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "ok");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let file = write_json("{ not json");
        assert!(load_recipes(file.path()).is_err());
    }

    #[test]
    fn test_save_plan_roundtrip() {
        let recipe = Recipe {
            id: "r1".to_string(),
            name: "Oats".to_string(),
            calories: 350.0,
            protein: 12.0,
            carbs: 55.0,
            fat: 8.0,
            tags: vec![],
            ingredients: vec![],
        };
        let plan = WeeklyPlan {
            days: vec![DayPlan::from_meals(1, &[DayMeal::from_recipe(&recipe, MealSlot::Breakfast)])],
        };

        let out_file = NamedTempFile::new().unwrap();
        save_plan(out_file.path(), &plan).unwrap();

        let content = std::fs::read_to_string(out_file.path()).unwrap();
        let reloaded: WeeklyPlan = serde_json::from_str(&content).unwrap();
        assert_eq!(reloaded, plan);
        assert!(content.contains("\"slot\": \"breakfast\""));
    }
}
