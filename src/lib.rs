#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{PlanError, Result};
pub use models::{DietaryRestriction, Goal, MacroTargets, PlanRequest, Recipe, WeeklyPlan};
pub use planner::{generate_week, generate_week_with_rng};
