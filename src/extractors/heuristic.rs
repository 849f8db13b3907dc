use super::{block_text, element_text, first_text, Extractor, ParsingContext};
use crate::model::RawRecipe;
use log::debug;
use scraper::{ElementRef, Selector};

/// Positional fallback for documents with no recognizable markup.
///
/// Title: first `h1`, else first `h2`, else `<title>`.
/// Ingredients: first `ul`, else first `ol`.
/// Instructions: first `ol` not used for ingredients, else the body's
/// paragraphs.
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    fn list_items(list: ElementRef) -> Vec<String> {
        let selector = Selector::parse("li").unwrap();
        let items = list
            .select(&selector)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect();
        items
    }

    fn first<'a>(root: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
        let selector = Selector::parse(selector).ok()?;
        let first = root.select(&selector).next();
        first
    }
}

impl Extractor for HeuristicExtractor {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn parse(&self, context: &ParsingContext) -> Result<RawRecipe, Box<dyn std::error::Error>> {
        debug!("Attempting to extract recipe using positional heuristics");

        let root = context.document.root_element();

        let title = first_text(root, "h1")
            .or_else(|| first_text(root, "h2"))
            .or_else(|| first_text(root, "title"))
            .unwrap_or_default();

        let ingredient_list = Self::first(root, "ul").or_else(|| Self::first(root, "ol"));
        let ingredients = ingredient_list.map(Self::list_items).unwrap_or_default();

        let ol_selector = Selector::parse("ol").unwrap();
        let instruction_list = root
            .select(&ol_selector)
            .find(|ol| Some(ol.id()) != ingredient_list.map(|list| list.id()));

        let instructions = match instruction_list {
            Some(list) => Self::list_items(list).join("\n"),
            None => {
                let p_selector = Selector::parse("body p").unwrap();
                let lines: Vec<String> = root
                    .select(&p_selector)
                    .map(block_text)
                    .filter(|text| !text.is_empty())
                    .collect();
                lines.join("\n")
            }
        };

        if title.is_empty() && ingredients.is_empty() && instructions.is_empty() {
            return Err("Document has no heading, list or paragraph".into());
        }

        debug!(
            "{}: heuristic title '{}', {} ingredients",
            context.filename,
            title,
            ingredients.len()
        );

        Ok(RawRecipe {
            title,
            ingredients,
            instructions,
            ..Default::default()
        })
    }
}
