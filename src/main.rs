use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use weekly_macro_planner::catalog::{load_recipes, save_plan};
use weekly_macro_planner::cli::{Cli, Command, PlanArgs};
use weekly_macro_planner::error::{PlanError, Result};
use weekly_macro_planner::interface::{
    display_pools, display_weekly_plan, prompt_goal, prompt_number, prompt_yes_no,
    resolve_restrictions, write_plan_csv,
};
use weekly_macro_planner::models::{Goal, MacroTargets, PlanRequest};
use weekly_macro_planner::planner::{categorize, filter_recipes, generate_week, generate_week_with_rng};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so the plan on stdout stays clean. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&cli.recipes, args),
        Command::Pools { restrictions } => cmd_pools(&cli.recipes, &restrictions),
    }
}

/// Generate and display a weekly plan.
fn cmd_plan(recipes_path: &str, args: PlanArgs) -> Result<()> {
    let path = Path::new(recipes_path);

    if !path.exists() {
        eprintln!("Recipe catalog not found: {}", recipes_path);
        eprintln!("Pass --recipes <PATH> (a sample lives in data/recipes.json).");
        return Ok(());
    }

    let recipes = load_recipes(path)?;
    println!("Loaded {} recipes", recipes.len());

    let targets = MacroTargets::new(
        value_or_prompt(args.calories, "Daily calories", 2000.0)?,
        value_or_prompt(args.protein, "Daily protein (g)", 100.0)?,
        value_or_prompt(args.carbs, "Daily carbs (g)", 250.0)?,
        value_or_prompt(args.fat, "Daily fat (g)", 67.0)?,
    );

    let goal = match args.goal.as_deref() {
        Some(name) => name.parse::<Goal>()?,
        None => prompt_goal()?,
    };

    let restrictions = resolve_restrictions(&args.restrictions)?;
    let request = PlanRequest::new(goal, targets)
        .with_restrictions(restrictions)
        .with_preferences(args.preferences);

    println!();
    println!(
        "Planning 7 days for {:.0} cal, {:.0}g protein, {:.0}g carbs, {:.0}g fat ({})...",
        targets.calories, targets.protein, targets.carbs, targets.fat, goal
    );
    if !request.restrictions.is_empty() {
        let names: Vec<&str> = request.restrictions.iter().map(|r| r.as_str()).collect();
        println!("Restrictions: {}", names.join(", "));
    }

    let plan = match args.seed {
        Some(seed) => generate_week_with_rng(&request, &recipes, &mut StdRng::seed_from_u64(seed))?,
        None => generate_week(&request, &recipes)?,
    };

    display_weekly_plan(&plan, &targets);

    if let Some(json_path) = &args.json {
        save_plan(json_path, &plan)?;
        println!("Plan saved to {}", json_path.display());
    }

    if let Some(csv_path) = &args.csv {
        write_plan_csv(&plan, csv_path)?;
        println!("Plan exported to {}", csv_path.display());
    }

    if args.json.is_none() && args.csv.is_none() {
        let save = prompt_yes_no("Save plan as plan.json?", false)?;
        if save {
            save_plan("plan.json", &plan)?;
            println!("Plan saved to plan.json");
        }
    }

    Ok(())
}

/// Show the pools the planner would draw from.
fn cmd_pools(recipes_path: &str, restriction_names: &[String]) -> Result<()> {
    let path = Path::new(recipes_path);

    if !path.exists() {
        eprintln!("Recipe catalog not found: {}", recipes_path);
        return Ok(());
    }

    let recipes = load_recipes(path)?;
    let restrictions = resolve_restrictions(restriction_names)?;
    let filtered = filter_recipes(&recipes, &restrictions);

    println!("{} of {} recipes pass the restrictions", filtered.len(), recipes.len());
    if filtered.is_empty() {
        return Err(PlanError::EmptyCatalog);
    }

    display_pools(&categorize(&filtered));
    Ok(())
}

fn value_or_prompt(value: Option<f64>, prompt: &str, default: f64) -> Result<f64> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(v) => Err(PlanError::InvalidInput(format!("{} must be greater than zero, got {}", prompt, v))),
        None => prompt_number(prompt, default),
    }
}
