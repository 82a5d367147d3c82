use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Calories (kcal) plus protein, carbs and fat (grams).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Every component multiplied by a serving multiplier.
    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::default(), Add::add)
    }
}

/// A catalog recipe with per-serving nutrition.
///
/// Recipes are read-only inputs: the planner clones what it needs into
/// [`DayMeal`](crate::models::DayMeal) and never writes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,

    pub name: String,

    pub calories: f64,

    #[serde(rename = "protein_g")]
    pub protein: f64,

    #[serde(rename = "carbs_g")]
    pub carbs: f64,

    #[serde(rename = "fat_g")]
    pub fat: f64,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Free-text ingredient lines, only used for restriction matching.
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Per-serving macros.
    #[inline]
    pub fn macros(&self) -> Macros {
        Macros::new(self.calories, self.protein, self.carbs, self.fat)
    }

    /// Case-insensitive tag check.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Lowercase name, tags and ingredients joined by spaces.
    pub fn search_text(&self) -> String {
        std::iter::once(self.name.as_str())
            .chain(self.tags.iter().map(String::as_str))
            .chain(self.ingredients.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Basic validation: identified, named, finite non-negative macros.
    pub fn is_valid(&self) -> bool {
        let values = [self.calories, self.protein, self.carbs, self.fat];
        !self.id.trim().is_empty()
            && !self.name.trim().is_empty()
            && values.iter().all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} cal, P:{} C:{} F:{}",
            self.name, self.id, self.calories, self.protein, self.carbs, self.fat
        )
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}

impl std::hash::Hash for Recipe {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
