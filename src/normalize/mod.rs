//! Field normalization rules.
//!
//! Every transform is total and idempotent: running it on its own output
//! changes nothing, and text it cannot make sense of only loses extra
//! whitespace.

mod ingredients;
mod instructions;
mod metadata;
mod text;

pub use ingredients::{expand_units, normalize_fractions, normalize_ingredient, normalize_ingredients};
pub use instructions::{normalize_instructions, split_sentences};
pub use metadata::{
    normalize_categories, normalize_notes, normalize_nutrition, normalize_servings,
    normalize_time, BUILTIN_CATEGORY_ALIASES,
};
pub use text::{clean_text, normalize_title, title_case};

use crate::config::{CategoryAlias, ConverterConfig};
use crate::model::{RawRecipe, Recipe};

/// Title used when neither the document nor its filename yields one
pub const UNTITLED: &str = "Untitled Recipe";

/// Applies the normalization rules to extracted recipes.
///
/// Built once per run; holds the configured category aliases on top of the
/// built-in tables.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    category_aliases: Vec<CategoryAlias>,
}

impl Normalizer {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            category_aliases: config.category_aliases.clone(),
        }
    }

    pub fn categories(&self, text: &str) -> Vec<String> {
        normalize_categories(text, &self.category_aliases)
    }

    /// Normalize every field of `raw`.
    ///
    /// `source_name` is the source file's name; its stem becomes the title
    /// when the document has none.
    pub fn normalize(&self, raw: RawRecipe, source_name: &str) -> Recipe {
        let mut title = normalize_title(&raw.title);
        if title.is_empty() {
            title = title_from_filename(source_name);
        }

        Recipe {
            title,
            ingredients: normalize_ingredients(&raw.ingredients),
            instructions: normalize_instructions(&raw.instructions),
            notes: normalize_notes(&raw.notes),
            source_url: non_empty(raw.source_url.as_deref().map(str::trim).map(str::to_string)),
            source_name: non_empty(raw.source_name.as_deref().map(clean_text)),
            nutrition: normalize_nutrition(&raw.nutrition),
            categories: self.categories(&raw.categories),
            prep_time: non_empty(raw.prep_time.as_deref().map(normalize_time)),
            cook_time: non_empty(raw.cook_time.as_deref().map(normalize_time)),
            total_time: non_empty(raw.total_time.as_deref().map(normalize_time)),
            servings: non_empty(raw.servings.as_deref().map(normalize_servings)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Title derived from a file name: `12_chicken-soup.html` → `Chicken Soup`
pub fn title_from_filename(source_name: &str) -> String {
    let stem = source_name
        .rsplit_once('.')
        .map_or(source_name, |(stem, _)| stem);
    let spaced = stem.replace(['_', '-'], " ");
    let title = normalize_title(&spaced);
    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_filename() {
        assert_eq!(title_from_filename("chicken_soup.html"), "Chicken Soup");
        assert_eq!(title_from_filename("beef-stew"), "Beef Stew");
        assert_eq!(title_from_filename(".html"), UNTITLED);
    }

    #[test]
    fn test_normalize_falls_back_to_filename() {
        let raw = RawRecipe {
            ingredients: vec!["1 cup rice".to_string()],
            ..Default::default()
        };
        let recipe = Normalizer::default().normalize(raw, "fried_rice.html");
        assert_eq!(recipe.title, "Fried Rice");
    }

    #[test]
    fn test_normalize_all_fields() {
        let raw = RawRecipe {
            title: "12. CHICKEN AND DUMPLINGS".to_string(),
            ingredients: vec!["1 1/2 cups flour".to_string(), "2 tbsp butter".to_string()],
            instructions: "1. Mix the flour. Add butter\n2. Simmer 20 min".to_string(),
            notes: vec!["Great  reheated.".to_string()],
            source_url: Some(" https://example.com/dumplings ".to_string()),
            source_name: Some("".to_string()),
            nutrition: "Calories: 300".to_string(),
            categories: "Dinner, crockpot".to_string(),
            prep_time: Some("15 mins".to_string()),
            cook_time: Some("".to_string()),
            total_time: None,
            servings: Some("Serves: 6".to_string()),
        };

        let recipe = Normalizer::default().normalize(raw, "x.html");
        assert_eq!(recipe.title, "Chicken and Dumplings");
        assert_eq!(recipe.ingredients, vec!["1½ cups flour", "2 tablespoons butter"]);
        assert_eq!(
            recipe.instructions,
            vec!["Mix the flour.", "Add butter.", "Simmer 20 min."]
        );
        assert_eq!(recipe.notes.as_deref(), Some("Great reheated."));
        assert_eq!(recipe.source_url.as_deref(), Some("https://example.com/dumplings"));
        assert_eq!(recipe.source_name, None);
        assert_eq!(recipe.nutrition, vec!["Calories: 300"]);
        assert_eq!(recipe.categories, vec!["Crockpot", "Dinner"]);
        assert_eq!(recipe.prep_time.as_deref(), Some("15 minutes"));
        assert_eq!(recipe.cook_time, None);
        assert_eq!(recipe.servings.as_deref(), Some("6"));
    }
}
