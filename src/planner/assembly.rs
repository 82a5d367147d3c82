use std::collections::HashSet;

use tracing::debug;

use crate::models::{DayMeal, Goal, MacroTargets, Macros, MealSlot, Recipe};
use crate::planner::categorize::RecipePools;
use crate::planner::constants::*;
use crate::planner::scoring::select_best;

/// Meals picked so far for the day being assembled.
#[derive(Debug, Default)]
struct DayDraft {
    meals: Vec<DayMeal>,
    day_ids: HashSet<String>,
}

impl DayDraft {
    /// Add a single serving of `recipe`; a missing selection leaves the slot empty.
    fn push(&mut self, recipe: Option<&Recipe>, slot: MealSlot) {
        if let Some(recipe) = recipe {
            self.day_ids.insert(recipe.id.clone());
            self.meals.push(DayMeal::from_recipe(recipe, slot));
        }
    }

    fn totals(&self) -> Macros {
        DayMeal::totals(&self.meals)
    }
}

/// The pool for a slot, or the whole filtered catalog if that pool is empty.
fn pool_or_all<'a>(pool: &'a [Recipe], all_recipes: &'a [Recipe]) -> &'a [Recipe] {
    if pool.is_empty() { all_recipes } else { pool }
}

/// Greedily pick breakfast, lunch, dinner and an optional snack.
///
/// Breakfast aims at a quarter of the day, lunch and dinner at a larger
/// share each, and a snack fills what is left when the gap is worth it.
pub fn assemble_day(
    targets: &MacroTargets,
    goal: Goal,
    pools: &RecipePools,
    all_recipes: &[Recipe],
    used_ids: &HashSet<String>,
) -> Vec<DayMeal> {
    let per_meal = targets.calories / CALORIE_SPLIT;
    let mut draft = DayDraft::default();

    let breakfast_target = Macros::new(
        per_meal,
        targets.protein / CALORIE_SPLIT,
        targets.carbs / CALORIE_SPLIT,
        targets.fat / CALORIE_SPLIT,
    );
    let breakfast = select_best(
        pool_or_all(&pools.breakfast, all_recipes),
        &breakfast_target,
        goal,
        used_ids,
        &draft.day_ids,
        false,
    );
    draft.push(breakfast, MealSlot::Breakfast);

    let main_target = Macros::new(
        per_meal * MAIN_MEAL_CALORIE_FACTOR,
        targets.protein / MAIN_MEAL_MACRO_SPLIT,
        targets.carbs / MAIN_MEAL_MACRO_SPLIT,
        targets.fat / MAIN_MEAL_MACRO_SPLIT,
    );
    for slot in [MealSlot::Lunch, MealSlot::Dinner] {
        let main = select_best(
            pool_or_all(&pools.lunch_dinner, all_recipes),
            &main_target,
            goal,
            used_ids,
            &draft.day_ids,
            false,
        );
        draft.push(main, slot);
    }

    let remaining = targets.remaining(&draft.totals());
    if remaining.calories > SNACK_GAP_THRESHOLD && draft.meals.len() < MAX_ASSEMBLED_MEALS {
        let snack_target = Macros::new(
            remaining.calories,
            remaining.protein.max(0.0),
            remaining.carbs.max(0.0),
            remaining.fat.max(0.0),
        );
        let snack = select_best(
            pool_or_all(&pools.snack, all_recipes),
            &snack_target,
            goal,
            used_ids,
            &draft.day_ids,
            true,
        );
        draft.push(snack, MealSlot::Snack);
    }

    let picked: Vec<&str> = draft.meals.iter().map(|m| m.recipe_id.as_str()).collect();
    debug!(meals = ?picked, calories = draft.totals().calories, "assembled day");

    draft.meals
}
