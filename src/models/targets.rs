use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::Macros;

/// Daily macro targets supplied by the caller, constant across the week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: f64,

    #[serde(rename = "protein_g")]
    pub protein: f64,

    #[serde(rename = "carbs_g")]
    pub carbs: f64,

    #[serde(rename = "fat_g")]
    pub fat: f64,
}

impl MacroTargets {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub fn as_macros(&self) -> Macros {
        Macros::new(self.calories, self.protein, self.carbs, self.fat)
    }

    /// Target minus totals, per component. Positive means still short.
    pub fn remaining(&self, totals: &Macros) -> Macros {
        Macros::new(
            self.calories - totals.calories,
            self.protein - totals.protein,
            self.carbs - totals.carbs,
            self.fat - totals.fat,
        )
    }
}

/// Lowercase ASCII alphanumerics only, so "gluten_free", "Gluten-Free" and
/// "gluten free" compare equal.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Nutrition goal, which biases recipe scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    #[default]
    Maintenance,
    Performance,
    GeneralHealth,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::Maintenance,
        Goal::Performance,
        Goal::GeneralHealth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Maintenance => "maintenance",
            Goal::Performance => "performance",
            Goal::GeneralHealth => "general_health",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Goal::ALL
            .into_iter()
            .find(|g| normalize(g.as_str()) == wanted)
            .ok_or_else(|| PlanError::InvalidInput(format!("unknown goal '{}'", s)))
    }
}

/// Dietary restriction enforced by keyword inspection of recipe text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
}

impl DietaryRestriction {
    pub const ALL: [DietaryRestriction; 4] = [
        DietaryRestriction::Vegetarian,
        DietaryRestriction::Vegan,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::DairyFree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::GlutenFree => "gluten-free",
            DietaryRestriction::DairyFree => "dairy-free",
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryRestriction {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        DietaryRestriction::ALL
            .into_iter()
            .find(|r| normalize(r.as_str()) == wanted)
            .ok_or_else(|| PlanError::InvalidInput(format!("unknown dietary restriction '{}'", s)))
    }
}

/// Everything the weekly planner needs besides the catalog itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub goal: Goal,

    pub targets: MacroTargets,

    #[serde(default)]
    pub restrictions: Vec<DietaryRestriction>,

    /// Accepted and carried through, but not consulted by selection or balancing.
    #[serde(default)]
    pub preferences: Vec<String>,
}

impl PlanRequest {
    pub fn new(goal: Goal, targets: MacroTargets) -> Self {
        Self {
            goal,
            targets,
            restrictions: Vec::new(),
            preferences: Vec::new(),
        }
    }

    pub fn with_restrictions(mut self, restrictions: Vec<DietaryRestriction>) -> Self {
        self.restrictions = restrictions;
        self
    }

    pub fn with_preferences(mut self, preferences: Vec<String>) -> Self {
        self.preferences = preferences;
        self
    }
}
