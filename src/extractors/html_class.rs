use super::{block_text, element_text, first_text, paragraphs, Extractor, ParsingContext};
use crate::model::RawRecipe;
use log::debug;
use scraper::{ElementRef, Html, Selector};

/// Finds recipe sections by class and id names, for exports and saved pages
/// that lack microdata.
pub struct HtmlClassExtractor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Ingredients,
    Instructions,
    Notes,
    Nutrition,
    Categories,
    PrepTime,
    CookTime,
    TotalTime,
    Servings,
    Source,
}

impl Field {
    /// Class or id names, tried in order
    fn exact(self) -> &'static [&'static str] {
        match self {
            Field::Title => &["name", "recipe-name", "recipe-title", "recipe_name", "title"],
            Field::Ingredients => &[
                "ingredients",
                "recipe-ingredients",
                "recipe_ingredients",
                "ingredient-list",
            ],
            Field::Instructions => &[
                "directions",
                "instructions",
                "recipe-directions",
                "recipe-instructions",
                "recipe_instructions",
                "method",
            ],
            Field::Notes => &["notes", "recipe-notes", "recipe_notes", "comment", "comments"],
            Field::Nutrition => &["nutrition", "recipe-nutrition", "nutrition-info"],
            Field::Categories => &["categories", "recipe-categories", "category", "tags"],
            Field::PrepTime => &["prep-time", "prep_time", "preptime", "recipe-prep-time"],
            Field::CookTime => &["cook-time", "cook_time", "cooktime", "recipe-cook-time"],
            Field::TotalTime => &["total-time", "total_time", "totaltime", "recipe-total-time"],
            Field::Servings => &["servings", "yield", "recipe-yield", "recipe-servings"],
            Field::Source => &["source", "recipe-source", "source-url"],
        }
    }

    /// Substring class patterns used as fallback
    fn fuzzy(self) -> &'static [&'static str] {
        match self {
            Field::Title => &["title", "name"],
            Field::Ingredients => &["ingredient"],
            Field::Instructions => &["instruction", "direction", "method", "step"],
            Field::Notes => &["note"],
            _ => &[],
        }
    }
}

struct ClassMatchers<'a> {
    document: &'a Html,
}

impl<'a> ClassMatchers<'a> {
    fn new(document: &'a Html) -> Self {
        ClassMatchers { document }
    }

    /// First element for the field, trying exact class/id names then fuzzy
    /// class patterns
    fn find_element(&self, field: Field) -> Option<ElementRef<'a>> {
        for name in field.exact() {
            let selector_str = format!(".{name}, #{name}");
            let Ok(selector) = Selector::parse(&selector_str) else {
                continue;
            };
            let found = self
                .document
                .select(&selector)
                .find(|el| !element_text(*el).is_empty());
            if let Some(element) = found {
                debug!("Found {:?} using exact class or id: {}", field, name);
                return Some(element);
            }
        }

        for pattern in field.fuzzy() {
            let selector_str = format!("[class*='{pattern}']");
            let Ok(selector) = Selector::parse(&selector_str) else {
                continue;
            };
            for element in self.document.select(&selector) {
                let text = element_text(element);
                // Avoid grabbing entire page
                if !text.is_empty() && text.len() < 5000 {
                    debug!("Found {:?} using fuzzy class pattern: {}", field, pattern);
                    return Some(element);
                }
            }
        }

        None
    }

    fn find_text(&self, field: Field) -> Option<String> {
        self.find_element(field).map(element_text)
    }

    fn extract_list_items(&self, field: Field) -> Vec<String> {
        let Some(container) = self.find_element(field) else {
            return Vec::new();
        };

        // Look for list items within container
        let li_selector = Selector::parse("li").unwrap();
        let items: Vec<String> = container
            .select(&li_selector)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect();
        if !items.is_empty() {
            return items;
        }

        // If no list items, one line per block
        block_text(container).lines().map(str::to_string).collect()
    }
}

impl Extractor for HtmlClassExtractor {
    fn name(&self) -> &'static str {
        "html_class"
    }

    fn parse(&self, context: &ParsingContext) -> Result<RawRecipe, Box<dyn std::error::Error>> {
        debug!("Attempting to extract recipe using HTML class matchers");

        let matchers = ClassMatchers::new(&context.document);

        // Try h1 or h2 as fallback
        let title = matchers
            .find_text(Field::Title)
            .or_else(|| first_text(context.document.root_element(), "h1, h2"))
            .unwrap_or_default();
        let ingredients = matchers.extract_list_items(Field::Ingredients);
        let instructions = matchers
            .extract_list_items(Field::Instructions)
            .join("\n");

        // Validation
        if title.is_empty() && ingredients.is_empty() && instructions.is_empty() {
            return Err("Could not find recipe classes in HTML".into());
        }

        let (source_url, source_name) = match matchers.find_element(Field::Source) {
            Some(element) => {
                let link_selector = Selector::parse("a[href]").unwrap();
                let href = if element.value().name() == "a" {
                    element.value().attr("href")
                } else {
                    element
                        .select(&link_selector)
                        .next()
                        .and_then(|a| a.value().attr("href"))
                };
                let name = element_text(element);
                (
                    href.map(str::to_string),
                    Some(name).filter(|n| !n.is_empty()),
                )
            }
            None => (None, None),
        };

        debug!("Successfully extracted recipe using HTML class matchers");
        debug!("Recipe name: {}", title);
        debug!("Ingredients count: {}", ingredients.len());

        Ok(RawRecipe {
            title,
            ingredients,
            instructions,
            notes: matchers
                .find_element(Field::Notes)
                .map(paragraphs)
                .unwrap_or_default(),
            source_url,
            source_name,
            nutrition: matchers
                .find_element(Field::Nutrition)
                .map(block_text)
                .unwrap_or_default(),
            categories: matchers.find_text(Field::Categories).unwrap_or_default(),
            prep_time: matchers.find_text(Field::PrepTime),
            cook_time: matchers.find_text(Field::CookTime),
            total_time: matchers.find_text(Field::TotalTime),
            servings: matchers.find_text(Field::Servings),
        })
    }
}
