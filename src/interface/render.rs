use crate::models::{DayPlan, MacroTargets, WeeklyPlan};
use crate::planner::RecipePools;

/// One line per meal plus a totals line against the targets.
pub fn format_day(day: &DayPlan, targets: &MacroTargets) -> Vec<String> {
    let name_width = day
        .meals
        .iter()
        .map(|m| m.recipe_name.len())
        .max()
        .unwrap_or(10);

    let mut lines: Vec<String> = day
        .meals
        .iter()
        .map(|meal| {
            format!(
                "  {:<9} {:<width$} x{:<4} {:>5} cal | P {:>5.1} C {:>5.1} F {:>5.1}",
                meal.slot.as_str(),
                meal.recipe_name,
                meal.servings,
                meal.calories,
                meal.protein,
                meal.carbs,
                meal.fat,
                width = name_width
            )
        })
        .collect();

    let totals = &day.totals;
    lines.push(format!(
        "  Total: {} / {:.0} cal | P {:.1} / {:.0} | C {:.1} / {:.0} | F {:.1} / {:.0}",
        totals.calories,
        targets.calories,
        totals.protein,
        targets.protein,
        totals.carbs,
        targets.carbs,
        totals.fat,
        targets.fat
    ));
    lines
}

/// Display a weekly plan day by day with totals against the targets.
pub fn display_weekly_plan(plan: &WeeklyPlan, targets: &MacroTargets) {
    println!();
    println!("=== Weekly Meal Plan ===");

    for day in &plan.days {
        println!();
        println!("--- {} ---", day.label);
        for line in format_day(day, targets) {
            println!("{}", line);
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Days planned: {}", plan.days.len());
    println!("Meals: {}", plan.all_meals().count());
    println!("Distinct recipes: {}", plan.distinct_recipe_count());
    println!();
}

/// Display the recipe pools the planner would draw from.
pub fn display_pools(pools: &RecipePools) {
    let sections = [
        ("Breakfast", &pools.breakfast),
        ("Lunch/Dinner", &pools.lunch_dinner),
        ("Snack", &pools.snack),
    ];

    for (title, recipes) in sections {
        if recipes.is_empty() {
            println!("{}: (none)", title);
            continue;
        }

        println!();
        println!("=== {} ({} recipes) ===", title, recipes.len());
        for recipe in recipes.iter() {
            println!(
                "  {} - {} cal, P:{} C:{} F:{}",
                recipe.name, recipe.calories, recipe.protein, recipe.carbs, recipe.fat
            );
        }
    }

    println!();
}
