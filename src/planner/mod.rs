pub mod assembly;
pub mod balance;
pub mod categorize;
pub mod constants;
pub mod filter;
pub mod scoring;
pub mod validation;
pub mod weekly;

pub use assembly::assemble_day;
pub use balance::balance_day;
pub use categorize::{categorize, is_breakfast, is_snack, RecipePools};
pub use constants::*;
pub use filter::{filter_recipes, satisfies_all_restrictions};
pub use scoring::{goal_bonus, overshoot_penalty, relative_error, score_recipe, select_best};
pub use validation::{calorie_tolerance, is_valid, tolerance_report, BandCheck, ToleranceReport};
pub use weekly::{generate_week, generate_week_with_rng};
pub use crate::error::Result;
