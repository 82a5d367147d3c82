use std::path::Path;

use crate::error::Result;
use crate::models::WeeklyPlan;

/// Write one CSV row per planned meal.
pub fn write_plan_csv(plan: &WeeklyPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "day",
        "slot",
        "recipe_id",
        "recipe_name",
        "servings",
        "calories",
        "protein_g",
        "carbs_g",
        "fat_g",
    ])?;

    for day in &plan.days {
        for meal in &day.meals {
            wtr.write_record([
                day.label.clone(),
                meal.slot.to_string(),
                meal.recipe_id.clone(),
                meal.recipe_name.clone(),
                format!("{:.2}", meal.servings),
                meal.calories.to_string(),
                format!("{:.1}", meal.protein),
                format!("{:.1}", meal.carbs),
                format!("{:.1}", meal.fat),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
