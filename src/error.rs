use thiserror::Error;

use crate::models::MacroTargets;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no recipes left after restriction filtering")]
    EmptyCatalog,

    #[error(
        "day {day} failed after {attempts} attempts, could not meet targets: {} cal, {}g protein",
        .targets.calories,
        .targets.protein
    )]
    DayGenerationExhausted {
        day: usize,
        attempts: usize,
        targets: MacroTargets,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
