use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{DietaryRestriction, Goal};

/// Minimum similarity for suggesting a restriction name.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Prompt for a positive number.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{}", default))
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a number", input)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "{} must be greater than zero",
            prompt
        )));
    }

    Ok(value)
}

/// Prompt for the nutrition goal.
pub fn prompt_goal() -> Result<Goal> {
    let options: Vec<&str> = Goal::ALL.iter().map(Goal::as_str).collect();
    let default = Goal::ALL
        .iter()
        .position(|g| *g == Goal::default())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("What is your goal?")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Closest known restriction to a misspelled name, if any is close enough.
pub fn suggest_restriction(input: &str) -> Option<DietaryRestriction> {
    let input = input.trim().to_lowercase();
    DietaryRestriction::ALL
        .into_iter()
        .map(|r| (r, jaro_winkler(r.as_str(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(r, _)| r)
}

/// Parse restriction names, offering a fuzzy suggestion for unknown ones.
///
/// Duplicates are dropped. An unknown name with no close match, or a
/// declined suggestion, is an error.
pub fn resolve_restrictions(inputs: &[String]) -> Result<Vec<DietaryRestriction>> {
    let mut restrictions = Vec::new();

    for input in inputs.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let restriction = match input.parse::<DietaryRestriction>() {
            Ok(r) => r,
            Err(err) => {
                let Some(suggestion) = suggest_restriction(input) else {
                    return Err(err);
                };
                let confirm = Confirm::new()
                    .with_prompt(format!("Unknown restriction '{}'. Did you mean '{}'?", input, suggestion))
                    .default(true)
                    .interact()?;
                if !confirm {
                    return Err(err);
                }
                suggestion
            }
        };

        if !restrictions.contains(&restriction) {
            restrictions.push(restriction);
        }
    }

    Ok(restrictions)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
