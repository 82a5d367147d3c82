mod persistence;

pub use persistence::{load_recipes, save_plan};
