mod plan;
mod recipe;
mod targets;

pub use plan::{round_to, DayMeal, DayPlan, DayTotals, MealSlot, PlannedMeal, WeeklyPlan};
pub use recipe::{Macros, Recipe};
pub use targets::{DietaryRestriction, Goal, MacroTargets, PlanRequest};
