use super::{all_texts, block_text, first_text, paragraphs, Extractor, ParsingContext};
use crate::model::RawRecipe;
use log::debug;
use scraper::{ElementRef, Selector};

/// Reads the schema.org microdata that Paprika writes into every exported
/// recipe (`itemprop="name"`, `itemprop="recipeIngredient"`, ...).
pub struct MicroDataExtractor;

impl MicroDataExtractor {
    fn find_recipe_container<'a>(&self, document: &'a scraper::Html) -> ElementRef<'a> {
        // Look for elements with itemscope and itemtype containing "Recipe"
        let selector = Selector::parse("[itemscope]").unwrap();
        for element in document.select(&selector) {
            if let Some(itemtype) = element.value().attr("itemtype") {
                if itemtype.contains("schema.org/Recipe")
                    || itemtype.contains("data-vocabulary.org/Recipe")
                {
                    return element;
                }
            }
        }
        // Older exports carry the itemprops without a scoped container
        document.root_element()
    }

    fn get_itemprop_block(&self, root: ElementRef, prop: &str) -> Option<String> {
        let selector_str = format!("[itemprop='{prop}']");
        let selector = Selector::parse(&selector_str).ok()?;
        let block = root
            .select(&selector)
            .map(block_text)
            .find(|text| !text.is_empty());
        block
    }

    fn get_source(&self, root: ElementRef) -> (Option<String>, Option<String>) {
        let selector = Selector::parse("[itemprop='url']").unwrap();
        let Some(link) = root.select(&selector).next() else {
            return (None, first_text(root, "[itemprop='author']"));
        };

        let url = link
            .value()
            .attr("href")
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .map(str::to_string);
        let name = first_text(link, "[itemprop='author']").or_else(|| first_text(root, "[itemprop='author']"));

        (url, name)
    }
}

impl Extractor for MicroDataExtractor {
    fn name(&self) -> &'static str {
        "microdata"
    }

    fn parse(&self, context: &ParsingContext) -> Result<RawRecipe, Box<dyn std::error::Error>> {
        debug!("Attempting to extract recipe using MicroData extractor");

        let container = self.find_recipe_container(&context.document);

        // Name: Paprika puts it on the h1; a bare itemprop="name" may also
        // belong to a nested author, so it is only a fallback
        let title = first_text(container, "h1[itemprop='name']")
            .or_else(|| first_text(container, "[itemprop='name']"))
            .unwrap_or_default();

        // Ingredients: one element per line
        let mut ingredients = all_texts(container, "[itemprop='recipeIngredient']");
        if ingredients.is_empty() {
            ingredients = all_texts(container, "[itemprop='ingredients']");
        }

        let instructions = self
            .get_itemprop_block(container, "recipeInstructions")
            .unwrap_or_default();

        if title.is_empty() && ingredients.is_empty() && instructions.is_empty() {
            return Err("No MicroData recipe properties found".into());
        }

        let notes_selector = Selector::parse("[itemprop='comment']").unwrap();
        let notes = container
            .select(&notes_selector)
            .next()
            .map(paragraphs)
            .unwrap_or_default();

        let (source_url, source_name) = self.get_source(container);

        debug!(
            "MicroData found '{}' with {} ingredients",
            title,
            ingredients.len()
        );

        Ok(RawRecipe {
            title,
            ingredients,
            instructions,
            notes,
            source_url,
            source_name,
            nutrition: self
                .get_itemprop_block(container, "nutrition")
                .unwrap_or_default(),
            categories: first_text(container, "[itemprop='recipeCategory']").unwrap_or_default(),
            prep_time: first_text(container, "[itemprop='prepTime']"),
            cook_time: first_text(container, "[itemprop='cookTime']"),
            total_time: first_text(container, "[itemprop='totalTime']"),
            servings: first_text(container, "[itemprop='recipeYield']"),
        })
    }
}
