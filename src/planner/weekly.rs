use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{PlanError, Result};
use crate::models::{DayMeal, DayPlan, PlanRequest, Recipe, WeeklyPlan};
use crate::planner::assembly::assemble_day;
use crate::planner::balance::balance_day;
use crate::planner::categorize::{categorize, RecipePools};
use crate::planner::constants::*;
use crate::planner::filter::filter_recipes;
use crate::planner::validation::is_valid;

/// Generate a seven-day plan using the thread-local RNG for retry shuffles.
pub fn generate_week(request: &PlanRequest, recipes: &[Recipe]) -> Result<WeeklyPlan> {
    generate_week_with_rng(request, recipes, &mut rand::thread_rng())
}

/// Generate a seven-day plan; `rng` only drives the pool shuffles on retries.
///
/// All or nothing: any day that fails every attempt fails the whole week.
pub fn generate_week_with_rng<R: Rng + ?Sized>(
    request: &PlanRequest,
    recipes: &[Recipe],
    rng: &mut R,
) -> Result<WeeklyPlan> {
    let candidates = filter_recipes(recipes, &request.restrictions);
    if candidates.is_empty() {
        return Err(PlanError::EmptyCatalog);
    }

    if !request.preferences.is_empty() {
        debug!(preferences = ?request.preferences, "preferences do not influence selection");
    }

    let pools = categorize(&candidates);
    info!(
        recipes = candidates.len(),
        breakfast = pools.breakfast.len(),
        lunch_dinner = pools.lunch_dinner.len(),
        snack = pools.snack.len(),
        goal = %request.goal,
        "planning week"
    );

    let mut used_ids: HashSet<String> = HashSet::new();
    let mut days = Vec::with_capacity(DAYS_PER_WEEK);

    for day in 1..=DAYS_PER_WEEK {
        let meals = generate_day(day, request, &pools, &candidates, &used_ids, rng)?;

        if day <= VARIETY_TRACKED_DAYS {
            used_ids.extend(meals.iter().map(|m| m.recipe_id.clone()));
        }

        let plan = DayPlan::from_meals(day, &meals);
        info!(
            day,
            meals = plan.meals.len(),
            calories = plan.totals.calories,
            protein = plan.totals.protein,
            "day accepted"
        );
        days.push(plan);
    }

    let week = WeeklyPlan { days };
    info!(distinct_recipes = week.distinct_recipe_count(), "week complete");
    Ok(week)
}

/// Assemble, balance and validate one day, retrying with shuffled pools.
fn generate_day<R: Rng + ?Sized>(
    day: usize,
    request: &PlanRequest,
    pools: &RecipePools,
    candidates: &[Recipe],
    used_ids: &HashSet<String>,
    rng: &mut R,
) -> Result<Vec<DayMeal>> {
    let targets = &request.targets;
    let mut attempts = 0;

    for attempt in 1..=MAX_DAY_ATTEMPTS {
        attempts = attempt;
        let meals = if attempt == 1 {
            assemble_day(targets, request.goal, pools, candidates, used_ids)
        } else {
            let shuffled = shuffle_pools(pools, rng);
            assemble_day(targets, request.goal, &shuffled, candidates, used_ids)
        };
        let meals = balance_day(meals, targets, candidates);

        let totals = DayMeal::totals(&meals);
        if is_valid(&totals, targets) {
            return Ok(meals);
        }

        warn!(
            day,
            attempt,
            calories = totals.calories,
            protein = totals.protein,
            "day attempt rejected"
        );
    }

    Err(PlanError::DayGenerationExhausted {
        day,
        attempts,
        targets: *targets,
    })
}

/// Independent uniform shuffle of each pool.
fn shuffle_pools<R: Rng + ?Sized>(pools: &RecipePools, rng: &mut R) -> RecipePools {
    let mut shuffled = pools.clone();
    shuffled.breakfast.shuffle(rng);
    shuffled.lunch_dinner.shuffle(rng);
    shuffled.snack.shuffle(rng);
    shuffled
}
