use std::collections::HashSet;

use tracing::debug;

use crate::models::{Goal, Macros, Recipe};
use crate::planner::constants::*;

/// Candidate recipe with its computed score.
#[derive(Debug)]
struct Candidate<'a> {
    recipe: &'a Recipe,
    score: f64,
}

/// Relative error of `value` against `target`; a zero target divides by one.
pub fn relative_error(value: f64, target: f64) -> f64 {
    let denominator = if target == 0.0 { 1.0 } else { target };
    (value - target).abs() / denominator
}

/// Goal-specific bonus for a recipe against a slot target.
pub fn goal_bonus(recipe: &Recipe, target: &Macros, goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => {
            let mut bonus = 0.0;
            if recipe.calories < target.calories * WEIGHT_LOSS_CALORIE_RATIO {
                bonus += WEIGHT_LOSS_LOW_CALORIE_BONUS;
            }
            if recipe.protein > target.protein * HIGH_PROTEIN_RATIO {
                bonus += WEIGHT_LOSS_HIGH_PROTEIN_BONUS;
            }
            bonus
        }
        Goal::MuscleGain => {
            if recipe.protein > target.protein * HIGH_PROTEIN_RATIO {
                MUSCLE_GAIN_HIGH_PROTEIN_BONUS
            } else {
                0.0
            }
        }
        Goal::Performance => {
            let mut bonus = 0.0;
            if recipe.carbs > target.carbs * HIGH_CARB_RATIO {
                bonus += PERFORMANCE_HIGH_CARB_BONUS;
            }
            if recipe.calories <= target.calories * PERFORMANCE_CALORIE_RATIO {
                bonus += PERFORMANCE_CALORIE_BONUS;
            }
            bonus
        }
        Goal::Maintenance | Goal::GeneralHealth => 0.0,
    }
}

/// Penalty for a recipe wildly over or under the slot's calories.
pub fn overshoot_penalty(calories: f64, target_calories: f64) -> f64 {
    if calories > target_calories * OVERSHOOT_HIGH_RATIO
        || calories < target_calories * OVERSHOOT_LOW_RATIO
    {
        OVERSHOOT_PENALTY
    } else {
        0.0
    }
}

/// Weighted closeness of a recipe to a slot target. Higher is better; an
/// exact match under a goal with no bonuses scores 0.
pub fn score_recipe(recipe: &Recipe, target: &Macros, goal: Goal) -> f64 {
    -CALORIE_ERROR_WEIGHT * relative_error(recipe.calories, target.calories)
        - PROTEIN_ERROR_WEIGHT * relative_error(recipe.protein, target.protein)
        - CARBS_ERROR_WEIGHT * relative_error(recipe.carbs, target.carbs)
        - FAT_ERROR_WEIGHT * relative_error(recipe.fat, target.fat)
        + goal_bonus(recipe, target, goal)
        - overshoot_penalty(recipe.calories, target.calories)
}

/// Choose the best recipe for one meal slot.
///
/// Recipes already in the current day are never picked. Unless
/// `allow_repeat` is set, recipes outside `used_ids` are preferred whenever
/// any remain. The highest score wins; on an exact tie the earliest in
/// `candidates` order is kept, so a reshuffled pool can change the pick.
pub fn select_best<'a>(
    candidates: &'a [Recipe],
    target: &Macros,
    goal: Goal,
    used_ids: &HashSet<String>,
    day_ids: &HashSet<String>,
    allow_repeat: bool,
) -> Option<&'a Recipe> {
    let available: Vec<&Recipe> = candidates
        .iter()
        .filter(|r| !day_ids.contains(&r.id))
        .collect();

    let pool = if allow_repeat {
        available
    } else {
        let fresh: Vec<&Recipe> = available
            .iter()
            .copied()
            .filter(|r| !used_ids.contains(&r.id))
            .collect();
        if fresh.is_empty() { available } else { fresh }
    };

    if pool.is_empty() {
        return None;
    }

    let chosen = pool
        .into_iter()
        .map(|recipe| Candidate {
            recipe,
            score: score_recipe(recipe, target, goal),
        })
        .fold(None, |best: Option<Candidate>, candidate| match best {
            Some(top) if candidate.score <= top.score => Some(top),
            _ => Some(candidate),
        })?;

    debug!(
        recipe = %chosen.recipe.id,
        score = chosen.score,
        target_calories = target.calories,
        "selected candidate"
    );

    Some(chosen.recipe)
}
