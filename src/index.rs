//! Table of contents for a converted collection.

use crate::model::IndexEntry;
use crate::render::{document_head, DOCUMENT_TAIL};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::collections::BTreeMap;
use std::fmt::Write;

const INDEX_STYLE: &str = r#"body { font-family: -apple-system, BlinkMacSystemFont, sans-serif; margin: 20px; }
h1 { color: #1d1d1f; border-bottom: 2px solid #007aff; padding-bottom: 10px; }
h2 { color: #007aff; margin-top: 25px; }
.stats { background-color: #e8f4fd; padding: 15px; border-radius: 8px; margin: 20px 0; }
.category-list { columns: 2; column-gap: 30px; }
.recipe-item { break-inside: avoid; margin-bottom: 15px; padding: 10px; background-color: #f5f5f7; border-radius: 8px; }
.recipe-title { font-weight: bold; font-size: 16px; margin-bottom: 5px; }
.recipe-meta { font-size: 14px; color: #666; }
a { color: #007aff; text-decoration: none; }"#;

/// Sorts entries by title, ignoring case. Ties fall back to the exact title
/// and then the filename so that any input order gives the same result.
fn sort_entries(entries: &[IndexEntry]) -> Vec<&IndexEntry> {
    let mut sorted: Vec<&IndexEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.filename.cmp(&b.filename))
    });
    sorted
}

/// Heading an entry is listed under: its upper-cased first letter, or `#`
fn section_letter(title: &str) -> String {
    match title.chars().next() {
        Some(c) if c.is_alphabetic() => c.to_uppercase().collect(),
        _ => "#".to_string(),
    }
}

/// Recipe count per category, sorted by name
pub fn category_counts(entries: &[IndexEntry]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        for category in &entry.categories {
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Render the table of contents document.
///
/// The output depends only on the set of entries, not on their order.
pub fn build_index(title: &str, entries: &[IndexEntry]) -> String {
    let sorted = sort_entries(entries);
    let categories = category_counts(entries);

    let mut html = document_head(&format!("{title} - Table of Contents"), INDEX_STYLE);
    let _ = writeln!(html, "<h1>{}</h1>", encode_text(title));

    html.push_str("<div class=\"stats\">\n");
    let _ = writeln!(html, "<p><strong>Total Recipes:</strong> {}</p>", sorted.len());
    let _ = writeln!(html, "<p><strong>Categories:</strong> {}</p>", categories.len());
    html.push_str("</div>\n");

    if !categories.is_empty() {
        html.push_str("<h2>By Category</h2>\n<ul class=\"category-list\">\n");
        for (category, count) in &categories {
            let _ = writeln!(html, "<li>{} ({})</li>", encode_text(category), count);
        }
        html.push_str("</ul>\n");
    }

    let mut current_letter: Option<String> = None;
    for entry in sorted {
        let letter = section_letter(&entry.title);
        if current_letter.as_deref() != Some(letter.as_str()) {
            let _ = writeln!(html, "<h2>{}</h2>", encode_text(&letter));
            current_letter = Some(letter);
        }

        html.push_str("<div class=\"recipe-item\">\n");
        let _ = writeln!(
            html,
            "<div class=\"recipe-title\"><a href=\"{}\">{}</a></div>",
            encode_double_quoted_attribute(&entry.filename),
            encode_text(&entry.title)
        );

        let mut meta = Vec::new();
        if !entry.categories.is_empty() {
            meta.push(format!("Categories: {}", entry.categories.join(", ")));
        }
        if let Some(prep) = &entry.prep_time {
            meta.push(format!("Prep: {prep}"));
        }
        if let Some(cook) = &entry.cook_time {
            meta.push(format!("Cook: {cook}"));
        }
        if let Some(servings) = &entry.servings {
            meta.push(format!("Serves: {servings}"));
        }
        if !meta.is_empty() {
            let _ = writeln!(
                html,
                "<div class=\"recipe-meta\">{}</div>",
                encode_text(&meta.join(" • "))
            );
        }
        html.push_str("</div>\n");
    }

    html.push_str(DOCUMENT_TAIL);
    html
}
