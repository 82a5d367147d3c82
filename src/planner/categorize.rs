use crate::models::Recipe;

/// Tags that put a recipe in the snack pool.
const SNACK_TAGS: &[&str] = &["snack", "smoothie", "quick"];

/// The filtered catalog split by meal slot.
///
/// Every recipe lands in exactly one pool. Breakfast takes priority over
/// snack, and lunch/dinner takes whatever is left.
#[derive(Debug, Clone, Default)]
pub struct RecipePools {
    pub breakfast: Vec<Recipe>,
    pub lunch_dinner: Vec<Recipe>,
    pub snack: Vec<Recipe>,
}

impl RecipePools {
    /// Total recipes across all pools.
    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch_dinner.len() + self.snack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn is_breakfast(recipe: &Recipe) -> bool {
    recipe.has_tag("breakfast") || recipe.name.to_lowercase().contains("breakfast")
}

pub fn is_snack(recipe: &Recipe) -> bool {
    SNACK_TAGS.iter().any(|tag| recipe.has_tag(tag))
}

/// Partition recipes into breakfast, lunch/dinner and snack pools,
/// preserving catalog order within each pool.
pub fn categorize(recipes: &[Recipe]) -> RecipePools {
    let mut pools = RecipePools::default();

    for recipe in recipes {
        if is_breakfast(recipe) {
            pools.breakfast.push(recipe.clone());
        } else if is_snack(recipe) {
            pools.snack.push(recipe.clone());
        } else {
            pools.lunch_dinner.push(recipe.clone());
        }
    }

    pools
}
