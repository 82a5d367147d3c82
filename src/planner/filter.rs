use crate::models::{DietaryRestriction, Recipe};

const MEAT_KEYWORDS: &[&str] = &[
    "meat", "chicken", "beef", "pork", "turkey", "lamb", "bacon", "ham", "sausage",
    "poultry", "fish", "salmon", "tuna", "shrimp", "prawn", "seafood", "cod", "anchov",
    "crab", "lobster", "steak", "veal", "duck", "prosciutto", "pepperoni", "gelatin",
];

const DAIRY_KEYWORDS: &[&str] = &[
    "milk", "cheese", "yogurt", "yoghurt", "butter", "cream", "whey", "ghee", "paneer",
    "ricotta", "mozzarella", "parmesan", "cheddar", "feta", "halloumi",
];

/// Animal products a vegan diet excludes on top of meat and dairy.
const ANIMAL_PRODUCT_KEYWORDS: &[&str] = &["egg", "honey"];

const GLUTEN_KEYWORDS: &[&str] = &[
    "wheat", "bread", "pasta", "flour", "noodle", "couscous", "barley", "rye", "bulgur",
    "spaghetti", "penne", "fusilli", "lasagna", "tortilla", "bagel", "pita", "naan",
    "seitan", "crouton",
];

/// Plant-based phrases stripped before matching so "peanut butter" is not
/// mistaken for dairy, "eggplant" for egg or "buckwheat" for wheat.
const PLANT_BASED_PHRASES: &[&str] = &[
    "peanut butter",
    "almond butter",
    "cashew butter",
    "nut butter",
    "cocoa butter",
    "butternut",
    "eggplant",
    "veggie",
    "buckwheat",
    "almond milk",
    "oat milk",
    "soy milk",
    "rice milk",
    "coconut milk",
    "coconut cream",
    "coconut yogurt",
    "cream of tartar",
];

/// Filters recipes down to those compatible with every restriction.
///
/// Empty restrictions return the input unchanged. The result may be empty;
/// the caller decides whether that is fatal.
pub fn filter_recipes(recipes: &[Recipe], restrictions: &[DietaryRestriction]) -> Vec<Recipe> {
    if restrictions.is_empty() {
        return recipes.to_vec();
    }

    recipes
        .iter()
        .filter(|recipe| satisfies_all_restrictions(recipe, restrictions))
        .cloned()
        .collect()
}

/// Check if a recipe satisfies ALL restrictions.
pub fn satisfies_all_restrictions(recipe: &Recipe, restrictions: &[DietaryRestriction]) -> bool {
    let text = neutral_text(recipe);
    restrictions
        .iter()
        .all(|restriction| satisfies_restriction(recipe, &text, *restriction))
}

fn satisfies_restriction(recipe: &Recipe, text: &str, restriction: DietaryRestriction) -> bool {
    match restriction {
        DietaryRestriction::Vegetarian => !mentions_any(text, MEAT_KEYWORDS),
        DietaryRestriction::Vegan => {
            (recipe.has_tag("vegan") || recipe.has_tag("vegetarian"))
                && !mentions_any(text, MEAT_KEYWORDS)
                && !mentions_any(text, DAIRY_KEYWORDS)
                && !mentions_any(text, ANIMAL_PRODUCT_KEYWORDS)
        }
        DietaryRestriction::GlutenFree => !mentions_any(text, GLUTEN_KEYWORDS),
        DietaryRestriction::DairyFree => !mentions_any(text, DAIRY_KEYWORDS),
    }
}

/// The recipe's combined text with plant-based phrases and `-free` words
/// removed, so a "dairy-free" tag never matches a dairy keyword.
fn neutral_text(recipe: &Recipe) -> String {
    let mut text = recipe.search_text();
    for phrase in PLANT_BASED_PHRASES {
        text = text.replace(phrase, " ");
    }

    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .filter(|word| !word.is_empty() && !word.ends_with("-free"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain substring match, so compound words count too ("flatbread" holds "bread").
fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_recipe(id: &str, name: &str, tags: Vec<&str>, ingredients: Vec<&str>) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            calories: 500.0,
            protein: 25.0,
            carbs: 60.0,
            fat: 15.0,
            tags: tags.iter().map(|s| s.to_string()).collect(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    fn sample_recipes() -> Vec<Recipe> {
        vec![
            create_test_recipe("beef", "Beef Stir Fry", vec!["dinner"], vec!["beef sirloin", "rice"]),
            create_test_recipe(
                "omelette",
                "Cheese Omelette",
                vec!["breakfast", "vegetarian"],
                vec!["eggs", "cheddar cheese"],
            ),
            create_test_recipe(
                "curry",
                "Chickpea Curry",
                vec!["vegan", "dairy-free"],
                vec!["chickpeas", "coconut milk", "rice"],
            ),
            create_test_recipe("pasta", "Tomato Pasta", vec!["vegetarian"], vec!["penne pasta", "tomatoes"]),
            create_test_recipe("salad", "Lentil Salad", vec![], vec!["lentils", "olive oil"]),
        ]
    }

    #[test]
    fn test_empty_restrictions_returns_all() {
        let filtered = filter_recipes(&sample_recipes(), &[]);
        assert_eq!(filtered.len(), 5, "Empty restrictions should return all recipes");
    }

    #[test]
    fn test_vegetarian_excludes_meat_text() {
        let filtered = filter_recipes(&sample_recipes(), &[DietaryRestriction::Vegetarian]);
        assert_eq!(ids(&filtered), vec!["omelette", "curry", "pasta", "salad"]);
    }

    #[test]
    fn test_vegan_requires_tag_and_excludes_animal_products() {
        let filtered = filter_recipes(&sample_recipes(), &[DietaryRestriction::Vegan]);
        // Omelette has eggs and cheese, salad is untagged, pasta passes on tag and text.
        assert_eq!(ids(&filtered), vec!["curry", "pasta"]);
    }

    #[test]
    fn test_gluten_free_excludes_wheat_products() {
        let filtered = filter_recipes(&sample_recipes(), &[DietaryRestriction::GlutenFree]);
        assert_eq!(ids(&filtered), vec!["beef", "omelette", "curry", "salad"]);
    }

    #[test]
    fn test_dairy_free_ignores_free_tags_and_plant_milks() {
        let filtered = filter_recipes(&sample_recipes(), &[DietaryRestriction::DairyFree]);
        assert_eq!(ids(&filtered), vec!["beef", "curry", "pasta", "salad"]);
    }

    #[test]
    fn test_multiple_restrictions_and_logic() {
        let restrictions = vec![DietaryRestriction::Vegetarian, DietaryRestriction::GlutenFree];
        let filtered = filter_recipes(&sample_recipes(), &restrictions);
        assert_eq!(ids(&filtered), vec!["omelette", "curry", "salad"]);
    }

    #[test]
    fn test_plural_and_embedded_matching() {
        let recipe = create_test_recipe("m", "Meatballs", vec![], vec!["breadcrumbs"]);
        assert!(!satisfies_all_restrictions(&recipe, &[DietaryRestriction::Vegetarian]));
        assert!(!satisfies_all_restrictions(&recipe, &[DietaryRestriction::GlutenFree]));
    }

    #[test]
    fn test_compound_words_are_caught() {
        let flatbread = create_test_recipe(
            "fb",
            "Hummus Flatbread",
            vec!["lunch", "vegan"],
            vec!["wholemeal flatbread", "hummus", "rocket"],
        );
        assert!(!satisfies_all_restrictions(&flatbread, &[DietaryRestriction::GlutenFree]));
        assert!(satisfies_all_restrictions(&flatbread, &[DietaryRestriction::Vegetarian]));

        let paella = create_test_recipe(
            "sp",
            "Shellfish Paella",
            vec!["dinner", "gluten-free"],
            vec!["mixed shellfish", "paella rice", "saffron"],
        );
        assert!(!satisfies_all_restrictions(&paella, &[DietaryRestriction::Vegetarian]));
        assert!(!satisfies_all_restrictions(&paella, &[DietaryRestriction::Vegan]));
        assert!(satisfies_all_restrictions(&paella, &[DietaryRestriction::GlutenFree]));

        let shortbread = create_test_recipe("sb", "Shortbread", vec!["snack"], vec!["butter", "sugar"]);
        assert!(!satisfies_all_restrictions(&shortbread, &[DietaryRestriction::GlutenFree]));
    }

    #[test]
    fn test_plant_based_phrases_do_not_trigger() {
        let recipe = create_test_recipe(
            "pb",
            "Peanut Butter Eggplant Bowl",
            vec!["vegan"],
            vec!["peanut butter", "eggplant", "butternut squash", "veggies"],
        );
        assert!(satisfies_all_restrictions(
            &recipe,
            &[DietaryRestriction::Vegan, DietaryRestriction::DairyFree]
        ));

        let porridge = create_test_recipe("bw", "Buckwheat Porridge", vec!["gluten-free"], vec!["buckwheat groats"]);
        assert!(satisfies_all_restrictions(&porridge, &[DietaryRestriction::GlutenFree]));
    }

    #[test]
    fn test_no_compatible_recipes() {
        let recipes = vec![
            create_test_recipe("1", "Chicken Wrap", vec![], vec!["chicken", "tortilla"]),
            create_test_recipe("2", "Tuna Melt", vec![], vec!["tuna", "bread"]),
        ];
        let filtered = filter_recipes(&recipes, &[DietaryRestriction::Vegetarian]);
        assert!(filtered.is_empty(), "Should return empty Vec when no matches");
    }
}
