mod filename;

pub use filename::{derive_stem, FilenameAllocator};

use crate::model::Recipe;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

const RECIPE_STYLE: &str = r#"body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 20px; line-height: 1.6; color: #1d1d1f; }
h1 { color: #1d1d1f; border-bottom: 3px solid #007aff; padding-bottom: 12px; margin-bottom: 20px; font-size: 28px; }
h2 { color: #007aff; margin-top: 30px; margin-bottom: 15px; font-size: 20px; font-weight: 600; }
.metadata { background: #f5f5f7; padding: 20px; border-radius: 12px; margin: 20px 0; border-left: 4px solid #007aff; }
.metadata p { margin: 8px 0; }
.ingredients { background: #f0f9ff; padding: 20px; border-radius: 12px; margin: 20px 0; border-left: 4px solid #0ea5e9; }
.instructions { margin: 20px 0; }
.instructions li { margin-bottom: 15px; padding: 10px 15px; background-color: #fafafa; border-radius: 8px; border-left: 4px solid #10b981; }
.notes { background: #fffbf0; padding: 20px; border-radius: 12px; margin: 20px 0; border-left: 4px solid #f59e0b; }
.nutrition { background: #f0fdf4; padding: 20px; border-radius: 12px; margin: 20px 0; border-left: 4px solid #22c55e; }
.source { margin: 25px 0; padding: 15px; background-color: #f8f9fa; border-radius: 8px; border-left: 4px solid #6c757d; }
.categories { margin: 25px 0; color: #6e6e73; }
ul { padding-left: 20px; }
li { margin-bottom: 8px; }
a { color: #007aff; text-decoration: none; }"#;

/// Opening of a standalone document with embedded styles
pub(crate) fn document_head(title: &str, style: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"UTF-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head><body>\n",
        encode_text(title),
        style
    )
}

pub(crate) const DOCUMENT_TAIL: &str = "</body></html>\n";

/// Render one recipe as a self-contained HTML document.
///
/// Sections appear in a fixed order and are left out when empty: title,
/// metadata, ingredients, instructions, notes, nutrition, source,
/// categories.
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut html = document_head(&recipe.title, RECIPE_STYLE);

    // Writing to a String cannot fail
    let _ = writeln!(html, "<h1>{}</h1>", encode_text(&recipe.title));

    let metadata = [
        ("Prep Time", &recipe.prep_time),
        ("Cook Time", &recipe.cook_time),
        ("Total Time", &recipe.total_time),
        ("Servings", &recipe.servings),
    ];
    if metadata.iter().any(|(_, value)| value.is_some()) {
        html.push_str("<div class=\"metadata\">\n");
        for (label, value) in metadata {
            if let Some(value) = value {
                let _ = writeln!(
                    html,
                    "<p><strong>{}:</strong> {}</p>",
                    label,
                    encode_text(value)
                );
            }
        }
        html.push_str("</div>\n");
    }

    if !recipe.ingredients.is_empty() {
        html.push_str("<div class=\"ingredients\">\n<h2>Ingredients</h2>\n<ul>\n");
        for ingredient in &recipe.ingredients {
            let _ = writeln!(html, "<li>{}</li>", encode_text(ingredient));
        }
        html.push_str("</ul>\n</div>\n");
    }

    if !recipe.instructions.is_empty() {
        html.push_str("<div class=\"instructions\">\n<h2>Instructions</h2>\n<ol>\n");
        for (number, step) in recipe.numbered_steps() {
            let _ = writeln!(html, "<li value=\"{}\">{}</li>", number, encode_text(step));
        }
        html.push_str("</ol>\n</div>\n");
    }

    if recipe.notes.is_some() {
        html.push_str("<div class=\"notes\">\n<h2>Notes</h2>\n");
        for paragraph in recipe.note_paragraphs() {
            let _ = writeln!(html, "<p>{}</p>", encode_text(paragraph));
        }
        html.push_str("</div>\n");
    }

    if !recipe.nutrition.is_empty() {
        html.push_str("<div class=\"nutrition\">\n<h2>Nutrition Information</h2>\n");
        for item in &recipe.nutrition {
            let _ = writeln!(html, "<p>{}</p>", encode_text(item));
        }
        html.push_str("</div>\n");
    }

    match (&recipe.source_url, &recipe.source_name) {
        (Some(url), name) => {
            let label = name.as_deref().unwrap_or(url);
            let _ = writeln!(
                html,
                "<div class=\"source\">\n<h2>Source</h2>\n<p><a href=\"{}\">{}</a></p>\n</div>",
                encode_double_quoted_attribute(url),
                encode_text(label)
            );
        }
        (None, Some(name)) => {
            let _ = writeln!(
                html,
                "<div class=\"source\">\n<h2>Source</h2>\n<p>{}</p>\n</div>",
                encode_text(name)
            );
        }
        (None, None) => {}
    }

    if !recipe.categories.is_empty() {
        let categories = recipe
            .categories
            .iter()
            .map(|c| encode_text(c).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            html,
            "<div class=\"categories\">\n<p><strong>Categories:</strong> {}</p>\n</div>",
            categories
        );
    }

    html.push_str(DOCUMENT_TAIL);
    html
}
