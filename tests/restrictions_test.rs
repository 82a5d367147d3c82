mod common;

use rand::rngs::StdRng;
use rand::SeedableRng;

use weekly_macro_planner::models::{DietaryRestriction, Goal, MacroTargets, PlanRequest, Recipe};
use weekly_macro_planner::planner::{
    categorize, filter_recipes, generate_week, generate_week_with_rng, satisfies_all_restrictions,
};
use weekly_macro_planner::PlanError;

use common::{by_id, mentions, sample_catalog};

const MEAT_WORDS: &[&str] = &[
    "chicken", "beef", "pork", "turkey", "salmon", "tuna", "shrimp", "bacon", "ham", "fish", "steak", "cod",
];
const DAIRY_WORDS: &[&str] = &["cheese", "whey", "feta", "parmesan", "mozzarella", "cheddar", "paneer"];
const GLUTEN_WORDS: &[&str] = &[
    "pasta", "bread", "flour", "tortilla", "noodle", "couscous", "bagel", "pita", "wheat",
];

fn general_health(restrictions: Vec<DietaryRestriction>) -> PlanRequest {
    PlanRequest::new(Goal::GeneralHealth, MacroTargets::new(2200.0, 110.0, 280.0, 72.0))
        .with_restrictions(restrictions)
}

/// Plan a week and assert no emitted recipe mentions a banned word.
fn assert_week_avoids(restrictions: Vec<DietaryRestriction>, banned: &[&str], seed: u64) {
    let recipes = sample_catalog();
    let catalog = by_id(&recipes);
    let mut rng = StdRng::seed_from_u64(seed);

    let plan = generate_week_with_rng(&general_health(restrictions), &recipes, &mut rng).unwrap();

    assert_eq!(plan.days.len(), 7);
    for meal in plan.all_meals() {
        let recipe = catalog[meal.recipe_id.as_str()];
        assert!(!mentions(recipe, banned), "{} slipped through", recipe.debug_string());
    }
}

#[test]
fn test_catalog_has_restricted_recipes_to_exclude() {
    let recipes = sample_catalog();
    assert!(recipes.iter().any(|r| mentions(r, MEAT_WORDS)));
    assert!(recipes.iter().any(|r| mentions(r, DAIRY_WORDS)));
    assert!(recipes.iter().any(|r| mentions(r, GLUTEN_WORDS)));
}

#[test]
fn test_catalog_has_compound_word_recipes() {
    let recipes = sample_catalog();
    let catalog = by_id(&recipes);

    for (id, restriction) in [
        ("m49", DietaryRestriction::GlutenFree),
        ("m50", DietaryRestriction::Vegetarian),
        ("m50", DietaryRestriction::Vegan),
    ] {
        let recipe = catalog[id];
        assert!(
            recipe.search_text().contains("flatbread") || recipe.search_text().contains("shellfish"),
            "{} has no compound word",
            recipe.debug_string()
        );
        assert!(!satisfies_all_restrictions(recipe, &[restriction]), "{} kept under {restriction}", recipe.name);
    }
}

#[test]
fn test_vegetarian_week_has_no_meat() {
    assert_week_avoids(vec![DietaryRestriction::Vegetarian], MEAT_WORDS, 21);
}

#[test]
fn test_gluten_free_week_has_no_gluten() {
    assert_week_avoids(vec![DietaryRestriction::GlutenFree], GLUTEN_WORDS, 22);
}

#[test]
fn test_dairy_free_week_has_no_dairy() {
    assert_week_avoids(vec![DietaryRestriction::DairyFree], DAIRY_WORDS, 23);
}

#[test]
fn test_combined_restrictions_apply_together() {
    let banned: Vec<&str> = MEAT_WORDS.iter().chain(GLUTEN_WORDS).copied().collect();
    assert_week_avoids(
        vec![DietaryRestriction::Vegetarian, DietaryRestriction::GlutenFree],
        &banned,
        24,
    );
}

#[test]
fn test_vegan_filter_keeps_only_tagged_plant_recipes() {
    let recipes = sample_catalog();
    let vegan = filter_recipes(&recipes, &[DietaryRestriction::Vegan]);

    assert!(!vegan.is_empty() && vegan.len() < recipes.len());
    for recipe in &vegan {
        assert!(recipe.has_tag("vegan") || recipe.has_tag("vegetarian"));
        assert!(!mentions(recipe, MEAT_WORDS) && !mentions(recipe, DAIRY_WORDS));
    }

    let pools = categorize(&vegan);
    assert_eq!(pools.len(), vegan.len());
}

#[test]
fn test_restrictions_that_exclude_everything() {
    let meaty = vec![
        Recipe {
            id: "c1".to_string(),
            name: "Grilled Chicken".to_string(),
            calories: 500.0,
            protein: 45.0,
            carbs: 10.0,
            fat: 20.0,
            tags: vec!["dinner".to_string()],
            ingredients: vec!["chicken breast".to_string()],
        },
        Recipe {
            id: "c2".to_string(),
            name: "Beef Chili".to_string(),
            calories: 650.0,
            protein: 40.0,
            carbs: 45.0,
            fat: 25.0,
            tags: vec![],
            ingredients: vec!["ground beef".to_string(), "beans".to_string()],
        },
    ];
    let request = general_health(vec![DietaryRestriction::Vegetarian]);

    let err = generate_week(&request, &meaty).unwrap_err();
    assert!(matches!(err, PlanError::EmptyCatalog));
    assert_eq!(err.to_string(), "no recipes left after restriction filtering");
}
