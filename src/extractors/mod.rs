use crate::error::ExtractionError;
use crate::model::RawRecipe;
use log::debug;
use scraper::{node::Node, ElementRef, Html, Selector};

mod heuristic;
mod html_class;
mod microdata;

pub use heuristic::HeuristicExtractor;
pub use html_class::HtmlClassExtractor;
pub use microdata::MicroDataExtractor;

/// A parsed source document
pub struct ParsingContext {
    /// Source filename, used only for log messages
    pub filename: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(filename: impl Into<String>, html: &str) -> Self {
        Self {
            filename: filename.into(),
            document: Html::parse_document(html),
        }
    }
}

pub trait Extractor {
    /// Short name for log messages
    fn name(&self) -> &'static str;
    fn parse(&self, context: &ParsingContext) -> Result<RawRecipe, Box<dyn std::error::Error>>;
}

/// Extraction strategies, in the order they are tried
pub fn default_extractors() -> Vec<Box<dyn Extractor>> {
    vec![
        Box::new(MicroDataExtractor),
        Box::new(HtmlClassExtractor),
        Box::new(HeuristicExtractor),
    ]
}

/// Extract raw recipe fields from a source file's bytes.
///
/// The strategies from [`default_extractors`] are tried in order and the
/// first one that finds a title or any recipe content wins.
pub fn extract(filename: &str, bytes: &[u8]) -> Result<RawRecipe, ExtractionError> {
    let html = std::str::from_utf8(bytes).map_err(|_| ExtractionError::Encoding)?;
    extract_html(filename, html)
}

/// Same as [`extract`] for markup that is already a string.
pub fn extract_html(filename: &str, html: &str) -> Result<RawRecipe, ExtractionError> {
    if html.trim().is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }

    let context = ParsingContext::new(filename, html);

    for extractor in default_extractors() {
        match extractor.parse(&context) {
            Ok(recipe) if !recipe.is_empty() => {
                debug!("{}: extracted with {}", filename, extractor.name());
                return Ok(recipe);
            }
            Ok(_) => debug!("{}: {} found nothing", filename, extractor.name()),
            Err(e) => debug!("{}: {} failed: {}", filename, extractor.name(), e),
        }
    }

    Err(ExtractionError::NoRecipeContent)
}

const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "blockquote",
    "br",
    "dd",
    "div",
    "dl",
    "dt",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "ol",
    "p",
    "section",
    "table",
    "tr",
    "ul",
];

/// Inline text of an element, trimmed
pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of an element with a line break at every `<br>` and block boundary
pub(crate) fn block_text(element: ElementRef) -> String {
    let mut out = String::new();
    push_block_text(element, &mut out);

    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_block_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            let is_block = BLOCK_ELEMENTS.contains(&child_element.value().name());
            if is_block {
                out.push('\n');
            }
            push_block_text(child_element, out);
            if is_block {
                out.push('\n');
            }
        } else if let Node::Text(text) = child.value() {
            // Source line breaks inside a text node are not boundaries
            for (i, part) in text.split('\n').enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(part);
            }
        }
    }
}

/// Paragraphs of a notes container: its `<p>` elements, or its lines
pub(crate) fn paragraphs(element: ElementRef) -> Vec<String> {
    let selector = Selector::parse("p").unwrap();
    let paragraphs: Vec<String> = element
        .select(&selector)
        .map(block_text)
        .filter(|text| !text.is_empty())
        .collect();

    if !paragraphs.is_empty() {
        return paragraphs;
    }

    block_text(element).lines().map(str::to_string).collect()
}

/// First non-empty text of the elements matching `selector`
pub(crate) fn first_text(root: ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let text = root
        .select(&selector)
        .map(element_text)
        .find(|text| !text.is_empty());
    text
}

/// Text of every element matching `selector`, empty ones skipped
pub(crate) fn all_texts(root: ElementRef, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    let texts = root
        .select(&selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect();
    texts
}
