pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_plan_csv;
pub use prompts::{prompt_goal, prompt_number, prompt_yes_no, resolve_restrictions, suggest_restriction};
pub use render::{display_pools, display_weekly_plan, format_day};
