use std::collections::HashSet;

use tracing::debug;

use crate::models::{DayMeal, MacroTargets, Macros, MealSlot, Recipe};
use crate::planner::constants::*;
use crate::planner::validation::tolerance_report;

/// Which way a serving adjustment moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Increase => 1.0,
            Direction::Decrease => -1.0,
        }
    }

    fn can_move(self, meal: &DayMeal) -> bool {
        match self {
            Direction::Increase => meal.can_increase(),
            Direction::Decrease => meal.can_decrease(),
        }
    }

    fn apply(self, meal: &mut DayMeal) {
        meal.servings = match self {
            Direction::Increase => (meal.servings + SERVING_STEP).min(MAX_SERVINGS),
            Direction::Decrease => (meal.servings - SERVING_STEP).max(MIN_SERVINGS),
        };
    }
}

/// +1, -1 or 0 for a remaining-macro difference.
fn deficit_direction(diff: f64) -> f64 {
    if diff > 0.0 {
        1.0
    } else if diff < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// How well scaling `meal` in `direction` moves the day toward every
/// outstanding macro difference.
fn match_score(meal: &DayMeal, remaining: &Macros, direction: Direction) -> f64 {
    let sign = direction.sign();
    PROTEIN_DIRECTION_WEIGHT * meal.base.protein * deficit_direction(remaining.protein) * sign
        + CARBS_DIRECTION_WEIGHT * meal.base.carbs * deficit_direction(remaining.carbs) * sign
        + FAT_DIRECTION_WEIGHT * meal.base.fat * deficit_direction(remaining.fat) * sign
        + CALORIE_MAGNITUDE_WEIGHT * meal.base.calories
}

/// Coarse step: move the best-matching adjustable meal one quarter serving.
/// Returns false if no meal can move that way.
fn step_best_match(meals: &mut [DayMeal], remaining: &Macros, direction: Direction) -> bool {
    let mut best: Option<(usize, f64)> = None;
    for (index, meal) in meals.iter().enumerate() {
        if !direction.can_move(meal) {
            continue;
        }
        let score = match_score(meal, remaining, direction);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }

    match best {
        Some((index, _)) => {
            direction.apply(&mut meals[index]);
            true
        }
        None => false,
    }
}

/// Fine step: a single quarter serving on the first meal that can move
/// toward the target. No macro matching here.
fn fine_tune(meals: &mut [DayMeal], calorie_diff: f64) -> bool {
    let direction = if calorie_diff > 0.0 {
        Direction::Increase
    } else {
        Direction::Decrease
    };

    match meals.iter_mut().find(|meal| direction.can_move(meal)) {
        Some(meal) => {
            direction.apply(meal);
            true
        }
        None => false,
    }
}

fn worst_ratio(meals: &[DayMeal], targets: &MacroTargets) -> f64 {
    tolerance_report(&DayMeal::totals(meals), targets).worst_ratio()
}

/// Servings for an injected snack: enough to cover the gap, on the quarter grid.
fn injection_servings(gap: f64, calories: f64) -> f64 {
    if calories <= 0.0 {
        return 1.0;
    }
    let raw = (gap / calories).clamp(MIN_SERVINGS, MAX_SERVINGS);
    (raw / SERVING_STEP).round() * SERVING_STEP
}

/// Append one extra snack when the day is still well short on calories.
fn inject_snack(meals: &mut Vec<DayMeal>, targets: &MacroTargets, all_recipes: &[Recipe]) {
    let remaining = targets.remaining(&DayMeal::totals(meals));
    let gap = remaining.calories;
    if gap <= SNACK_INJECTION_GAP || meals.len() >= MAX_MEALS_PER_DAY {
        return;
    }

    let day_ids: HashSet<&str> = meals.iter().map(|m| m.recipe_id.as_str()).collect();
    let unused: Vec<&Recipe> = all_recipes
        .iter()
        .filter(|r| !day_ids.contains(r.id.as_str()))
        .collect();
    let light: Vec<&Recipe> = unused
        .iter()
        .copied()
        .filter(|r| is_snack_like(r))
        .collect();
    let candidates = if light.is_empty() { unused } else { light };

    let mut best: Option<(&Recipe, f64)> = None;
    for recipe in candidates {
        let mut score = -(recipe.calories - gap).abs() / gap * 100.0;
        if remaining.protein > 0.0 {
            score += recipe.protein.min(remaining.protein) / remaining.protein
                * INJECTION_PROTEIN_BONUS;
        }
        if remaining.carbs > 0.0 {
            score += recipe.carbs.min(remaining.carbs) / remaining.carbs * INJECTION_CARBS_BONUS;
        }
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((recipe, score));
        }
    }

    if let Some((recipe, _)) = best {
        let mut snack = DayMeal::from_recipe(recipe, MealSlot::Snack);
        snack.servings = injection_servings(gap, recipe.calories);
        debug!(recipe = %recipe.id, servings = snack.servings, gap, "injected snack");
        meals.push(snack);
    }
}

/// Snack-tagged, smoothie-tagged, or simply light.
fn is_snack_like(recipe: &Recipe) -> bool {
    recipe.has_tag("snack") || recipe.has_tag("smoothie") || recipe.calories < LIGHT_RECIPE_CALORIES
}

/// Nudge servings until the day sits near its targets.
///
/// Each iteration either stops (settled, or nothing left to adjust) or moves
/// one meal by a quarter serving. The best configuration seen is restored
/// if the loop ends somewhere worse. A snack may be appended afterwards if
/// calories are still well short.
pub fn balance_day(
    mut meals: Vec<DayMeal>,
    targets: &MacroTargets,
    all_recipes: &[Recipe],
) -> Vec<DayMeal> {
    let mut best: Option<(f64, Vec<f64>)> = None;

    for iteration in 0..MAX_BALANCE_ITERATIONS {
        let remaining = targets.remaining(&DayMeal::totals(&meals));
        let ratio = worst_ratio(&meals, targets);
        if best.as_ref().is_none_or(|(top, _)| ratio < *top) {
            best = Some((ratio, meals.iter().map(|m| m.servings).collect()));
        }

        debug!(
            iteration,
            calorie_diff = remaining.calories,
            protein_diff = remaining.protein,
            worst_ratio = ratio,
            "balancing"
        );

        if remaining.calories.abs() < CALORIE_SETTLED && remaining.protein.abs() < PROTEIN_SETTLED {
            break;
        }

        let adjusted = if remaining.calories > COARSE_CALORIE_BAND {
            step_best_match(&mut meals, &remaining, Direction::Increase)
        } else if remaining.calories < -COARSE_CALORIE_BAND {
            step_best_match(&mut meals, &remaining, Direction::Decrease)
        } else if remaining.calories.abs() > FINE_CALORIE_BAND {
            fine_tune(&mut meals, remaining.calories)
        } else {
            false
        };

        if !adjusted {
            break;
        }
    }

    if let Some((best_ratio, servings)) = best {
        if worst_ratio(&meals, targets) > best_ratio {
            for (meal, restored) in meals.iter_mut().zip(servings) {
                meal.servings = restored;
            }
        }
    }

    inject_snack(&mut meals, targets, all_recipes);
    meals
}
