use tracing::debug;

use crate::models::{MacroTargets, Macros};
use crate::planner::constants::*;

/// Deviation of one macro from its target, with the band it must stay in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandCheck {
    pub deviation: f64,
    pub tolerance: f64,
}

impl BandCheck {
    fn new(actual: f64, target: f64, tolerance: f64) -> Self {
        Self {
            deviation: actual - target,
            tolerance,
        }
    }

    #[inline]
    pub fn within(&self) -> bool {
        self.deviation.abs() <= self.tolerance
    }

    /// |deviation| / tolerance; at most 1.0 when within the band.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.deviation.abs() / self.tolerance
    }
}

/// Per-macro deviations of a day's totals from the targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceReport {
    pub calories: BandCheck,
    pub protein: BandCheck,
    pub carbs: BandCheck,
    pub fat: BandCheck,
}

impl ToleranceReport {
    fn bands(&self) -> [BandCheck; 4] {
        [self.calories, self.protein, self.carbs, self.fat]
    }

    pub fn is_valid(&self) -> bool {
        self.bands().iter().all(BandCheck::within)
    }

    /// Largest band ratio. Below or at 1.0 means every macro is in tolerance.
    pub fn worst_ratio(&self) -> f64 {
        self.bands()
            .iter()
            .map(BandCheck::ratio)
            .fold(0.0, f64::max)
    }
}

/// Calorie band: 5% of the target, but never tighter than 100 kcal.
pub fn calorie_tolerance(target_calories: f64) -> f64 {
    (target_calories * CALORIE_TOLERANCE_RATIO).max(CALORIE_TOLERANCE_FLOOR)
}

pub fn tolerance_report(totals: &Macros, targets: &MacroTargets) -> ToleranceReport {
    ToleranceReport {
        calories: BandCheck::new(
            totals.calories,
            targets.calories,
            calorie_tolerance(targets.calories),
        ),
        protein: BandCheck::new(totals.protein, targets.protein, PROTEIN_TOLERANCE_G),
        carbs: BandCheck::new(totals.carbs, targets.carbs, CARBS_TOLERANCE_G),
        fat: BandCheck::new(totals.fat, targets.fat, FAT_TOLERANCE_G),
    }
}

/// Check a day's unrounded totals against every tolerance band.
pub fn is_valid(totals: &Macros, targets: &MacroTargets) -> bool {
    let report = tolerance_report(totals, targets);
    let valid = report.is_valid();

    debug!(
        calories = totals.calories,
        protein = totals.protein,
        carbs = totals.carbs,
        fat = totals.fat,
        calorie_deviation = report.calories.deviation,
        protein_deviation = report.protein.deviation,
        carbs_deviation = report.carbs.deviation,
        fat_deviation = report.fat.deviation,
        valid,
        "validated day totals"
    );

    valid
}
