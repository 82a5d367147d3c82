// ─────────────────────────────────────────────────────────────────────────────
// Serving multipliers
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest serving multiplier a meal may be scaled down to.
pub const MIN_SERVINGS: f64 = 0.75;

/// Largest serving multiplier a meal may be scaled up to.
pub const MAX_SERVINGS: f64 = 2.0;

/// Servings always move in quarter steps from 1.0.
pub const SERVING_STEP: f64 = 0.25;

// ─────────────────────────────────────────────────────────────────────────────
// Candidate scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Weight of the relative calorie error.
pub const CALORIE_ERROR_WEIGHT: f64 = 100.0;

/// Weight of the relative protein error.
pub const PROTEIN_ERROR_WEIGHT: f64 = 50.0;

/// Weight of the relative carbs error.
pub const CARBS_ERROR_WEIGHT: f64 = 40.0;

/// Weight of the relative fat error.
pub const FAT_ERROR_WEIGHT: f64 = 30.0;

/// Weight loss: calories under this share of the slot target earn a bonus.
pub const WEIGHT_LOSS_CALORIE_RATIO: f64 = 0.9;

/// Weight loss: bonus for a low-calorie recipe.
pub const WEIGHT_LOSS_LOW_CALORIE_BONUS: f64 = 15.0;

/// Weight loss: bonus for a high-protein recipe.
pub const WEIGHT_LOSS_HIGH_PROTEIN_BONUS: f64 = 20.0;

/// Muscle gain: bonus for a high-protein recipe.
pub const MUSCLE_GAIN_HIGH_PROTEIN_BONUS: f64 = 25.0;

/// Protein above this share of the slot target counts as high-protein.
pub const HIGH_PROTEIN_RATIO: f64 = 1.1;

/// Performance: carbs above this share of the slot target count as high-carb.
pub const HIGH_CARB_RATIO: f64 = 1.1;

/// Performance: bonus for a high-carb recipe.
pub const PERFORMANCE_HIGH_CARB_BONUS: f64 = 25.0;

/// Performance: calories at or under this share of the slot target earn a bonus.
pub const PERFORMANCE_CALORIE_RATIO: f64 = 1.1;

/// Performance: bonus for staying within the calorie ceiling.
pub const PERFORMANCE_CALORIE_BONUS: f64 = 10.0;

/// Calories above this share of the slot target are penalized.
pub const OVERSHOOT_HIGH_RATIO: f64 = 1.8;

/// Calories below this share of the slot target are penalized.
pub const OVERSHOOT_LOW_RATIO: f64 = 0.4;

/// Penalty for a recipe far outside the slot's calorie target.
pub const OVERSHOOT_PENALTY: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Day assembly
// ─────────────────────────────────────────────────────────────────────────────

/// Daily calories are split evenly over this many meals.
pub const CALORIE_SPLIT: f64 = 4.0;

/// Lunch and dinner get this multiple of the even per-meal calories.
pub const MAIN_MEAL_CALORIE_FACTOR: f64 = 1.2;

/// Lunch and dinner macro targets divide the daily targets by this.
pub const MAIN_MEAL_MACRO_SPLIT: f64 = 3.0;

/// Minimum remaining calories before a snack is assembled.
pub const SNACK_GAP_THRESHOLD: f64 = 100.0;

/// Breakfast, lunch, dinner and one snack.
pub const MAX_ASSEMBLED_MEALS: usize = 4;

// ─────────────────────────────────────────────────────────────────────────────
// Day balancing
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum repair iterations per day.
pub const MAX_BALANCE_ITERATIONS: usize = 30;

/// Calorie difference considered settled.
pub const CALORIE_SETTLED: f64 = 30.0;

/// Protein difference considered settled.
pub const PROTEIN_SETTLED: f64 = 3.0;

/// Outside this calorie band the balancer makes macro-matched steps.
pub const COARSE_CALORIE_BAND: f64 = 50.0;

/// Outside this calorie band (and inside the coarse one) it fine-tunes.
pub const FINE_CALORIE_BAND: f64 = 10.0;

/// Weight of protein direction when picking a meal to scale.
pub const PROTEIN_DIRECTION_WEIGHT: f64 = 2.0;

/// Weight of carbs direction when picking a meal to scale.
pub const CARBS_DIRECTION_WEIGHT: f64 = 1.0;

/// Weight of fat direction when picking a meal to scale.
pub const FAT_DIRECTION_WEIGHT: f64 = 1.0;

/// Weight of a meal's calorie magnitude when picking a meal to scale.
pub const CALORIE_MAGNITUDE_WEIGHT: f64 = 0.01;

/// Remaining calorie gap above which a late snack is injected.
pub const SNACK_INJECTION_GAP: f64 = 150.0;

/// Days never grow beyond this many meals.
pub const MAX_MEALS_PER_DAY: usize = 5;

/// Recipes under this many calories count as light for snack injection.
pub const LIGHT_RECIPE_CALORIES: f64 = 600.0;

/// Injection bonus for covering the remaining protein deficit.
pub const INJECTION_PROTEIN_BONUS: f64 = 20.0;

/// Injection bonus for covering the remaining carbs deficit.
pub const INJECTION_CARBS_BONUS: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Validation tolerances
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie tolerance as a share of the target.
pub const CALORIE_TOLERANCE_RATIO: f64 = 0.05;

/// Calorie tolerance never drops below this many kcal.
pub const CALORIE_TOLERANCE_FLOOR: f64 = 100.0;

/// Protein tolerance in grams.
pub const PROTEIN_TOLERANCE_G: f64 = 10.0;

/// Carbs tolerance in grams.
pub const CARBS_TOLERANCE_G: f64 = 25.0;

/// Fat tolerance in grams.
pub const FAT_TOLERANCE_G: f64 = 15.0;

// ─────────────────────────────────────────────────────────────────────────────
// Weekly orchestration
// ─────────────────────────────────────────────────────────────────────────────

pub const DAYS_PER_WEEK: usize = 7;

/// Attempts per day before the run fails.
pub const MAX_DAY_ATTEMPTS: usize = 5;

/// Only the first days feed the recently-used set.
pub const VARIETY_TRACKED_DAYS: usize = 3;
