use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Macros, Recipe};
use crate::planner::constants::{MAX_SERVINGS, MIN_SERVINGS};

/// Round a float to n decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Meal slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe placed in a slot while a day is assembled and balanced.
///
/// Carries a copy of the recipe's base macros so the balancer never has to
/// look the recipe up again.
#[derive(Debug, Clone, PartialEq)]
pub struct DayMeal {
    pub recipe_id: String,
    pub recipe_name: String,
    pub base: Macros,
    pub servings: f64,
    pub slot: MealSlot,
}

impl DayMeal {
    /// A single serving of `recipe` in `slot`.
    pub fn from_recipe(recipe: &Recipe, slot: MealSlot) -> Self {
        Self {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            base: recipe.macros(),
            servings: 1.0,
            slot,
        }
    }

    /// Base macros scaled by the current servings.
    #[inline]
    pub fn contribution(&self) -> Macros {
        self.base.scaled(self.servings)
    }

    #[inline]
    pub fn can_increase(&self) -> bool {
        self.servings < MAX_SERVINGS
    }

    #[inline]
    pub fn can_decrease(&self) -> bool {
        self.servings > MIN_SERVINGS
    }

    /// Sum of all meal contributions.
    pub fn totals(meals: &[DayMeal]) -> Macros {
        meals.iter().map(DayMeal::contribution).sum()
    }
}

/// A finalized meal: macros already scaled by servings and rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub recipe_id: String,
    pub recipe_name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub servings: f64,
    pub slot: MealSlot,
}

impl From<&DayMeal> for PlannedMeal {
    fn from(meal: &DayMeal) -> Self {
        let scaled = meal.contribution();
        Self {
            recipe_id: meal.recipe_id.clone(),
            recipe_name: meal.recipe_name.clone(),
            calories: scaled.calories.round() as u32,
            protein: round_to(scaled.protein, 1),
            carbs: round_to(scaled.carbs, 1),
            fat: round_to(scaled.fat, 1),
            servings: meal.servings,
            slot: meal.slot,
        }
    }
}

/// Rounded day totals: integer calories, grams to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayTotals {
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl From<Macros> for DayTotals {
    fn from(totals: Macros) -> Self {
        Self {
            calories: totals.calories.round() as u32,
            protein: round_to(totals.protein, 1),
            carbs: round_to(totals.carbs, 1),
            fat: round_to(totals.fat, 1),
        }
    }
}

impl DayTotals {
    pub fn as_macros(&self) -> Macros {
        Macros::new(self.calories as f64, self.protein, self.carbs, self.fat)
    }
}

/// One validated day of the weekly plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub label: String,
    pub meals: Vec<PlannedMeal>,
    pub totals: DayTotals,
}

impl DayPlan {
    /// Finalize balanced meals for day number `day` (1-based).
    ///
    /// Totals are summed from unrounded contributions, then rounded.
    pub fn from_meals(day: usize, meals: &[DayMeal]) -> Self {
        Self {
            label: format!("Day {}", day),
            meals: meals.iter().map(PlannedMeal::from).collect(),
            totals: DayMeal::totals(meals).into(),
        }
    }
}

/// Seven validated days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    pub fn all_meals(&self) -> impl Iterator<Item = &PlannedMeal> {
        self.days.iter().flat_map(|d| d.meals.iter())
    }

    /// Number of different recipes used across the week.
    pub fn distinct_recipe_count(&self) -> usize {
        self.all_meals()
            .map(|m| m.recipe_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
