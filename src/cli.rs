use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Weekly Macro Planner — builds a seven-day meal plan that hits daily macro targets.
#[derive(Parser, Debug)]
#[command(name = "macro_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, default_value = "recipes.json", global = true)]
    pub recipes: String,

    /// Log planner diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly meal plan.
    Plan(PlanArgs),

    /// Show the recipe pools left after restriction filtering.
    Pools {
        /// Dietary restrictions, comma separated.
        #[arg(long, value_delimiter = ',')]
        restrictions: Vec<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Daily calorie target (prompted if omitted).
    #[arg(long)]
    pub calories: Option<f64>,

    /// Daily protein target in grams.
    #[arg(long)]
    pub protein: Option<f64>,

    /// Daily carbs target in grams.
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Daily fat target in grams.
    #[arg(long)]
    pub fat: Option<f64>,

    /// weight_loss, muscle_gain, maintenance, performance or general_health.
    #[arg(long)]
    pub goal: Option<String>,

    /// Dietary restrictions, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub restrictions: Vec<String>,

    /// Free-text preferences, comma separated. Recorded but not used for selection.
    #[arg(long, value_delimiter = ',')]
    pub preferences: Vec<String>,

    /// Seed for the retry shuffles.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write the plan as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Also write the plan as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
