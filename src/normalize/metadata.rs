use super::text::{clean_text, title_case};
use crate::config::CategoryAlias;
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Category aliases carried over from the Paprika category names people
/// actually use. The first pattern contained in a category wins.
pub const BUILTIN_CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("air fryer", "Air Fryer"),
    ("crockpot", "Crockpot"),
    ("slow cooker", "Slow Cooker"),
    ("instant pot", "Instant Pot"),
    ("pressure cooker", "Pressure Cooker"),
    ("oven", "Oven"),
    ("stove", "Stovetop"),
    ("grill", "Grilled"),
    ("no bake", "No Bake"),
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("keto", "Keto"),
    ("low carb", "Low Carb"),
    ("gluten free", "Gluten Free"),
    ("dairy free", "Dairy Free"),
];

static HOURS_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)\s*h\s*(\d+)\s*m\b").unwrap());

static MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)\s*(?:minutes?|mins?)\b\.?").unwrap());

static HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)\s*(?:hours?|hrs?)\b\.?").unwrap());

static SERVINGS_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:yield|serves|servings)\s*:\s*").unwrap());

/// Split, alias, deduplicate (case-insensitively) and sort a category list.
///
/// `aliases` are checked before [`BUILTIN_CATEGORY_ALIASES`].
pub fn normalize_categories(text: &str, aliases: &[CategoryAlias]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories: Vec<String> = text
        .split(',')
        .map(|category| normalize_category(category, aliases))
        .filter(|category| !category.is_empty())
        .filter(|category| seen.insert(category.to_lowercase()))
        .collect();

    categories.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    categories
}

fn normalize_category(category: &str, aliases: &[CategoryAlias]) -> String {
    let category = clean_text(category);
    if category.is_empty() {
        return category;
    }

    let lower = category.to_lowercase();
    let configured = aliases
        .iter()
        .filter(|alias| !alias.pattern.is_empty())
        .find(|alias| lower.contains(&alias.pattern.to_lowercase()))
        .map(|alias| alias.name.clone());
    if let Some(name) = configured {
        return name;
    }

    BUILTIN_CATEGORY_ALIASES
        .iter()
        .find(|(pattern, _)| lower.contains(pattern))
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| title_case(&category))
}

fn plural(count: &str, singular: &str) -> String {
    if count == "1" {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Spell out time units: `15 min` → `15 minutes`, `1h 30m` → `1 hour 30 minutes`.
pub fn normalize_time(text: &str) -> String {
    let text = clean_text(text);
    let text = HOURS_MINUTES.replace_all(&text, |caps: &Captures| {
        format!("{} {}", plural(&caps[1], "hour"), plural(&caps[2], "minute"))
    });
    let text = MINUTES.replace_all(&text, |caps: &Captures| plural(&caps[1], "minute"));
    HOURS
        .replace_all(&text, |caps: &Captures| plural(&caps[1], "hour"))
        .into_owned()
}

/// Drop `Yield:` / `Serves:` / `Servings:` labels.
pub fn normalize_servings(text: &str) -> String {
    SERVINGS_PREFIX
        .replace(&clean_text(text), "")
        .into_owned()
}

/// Turn a nutrition block into `Label: value` items.
///
/// Items are taken one per line; a single-line block is split on `,` and
/// `;`. Items without a `:` are dropped.
pub fn normalize_nutrition(block: &str) -> Vec<String> {
    let lines: Vec<&str> = block.lines().filter(|l| !l.trim().is_empty()).collect();
    let items: Vec<&str> = if lines.len() == 1 {
        lines[0].split([',', ';']).collect()
    } else {
        lines
    };

    items
        .into_iter()
        .filter_map(|item| {
            let item = clean_text(item);
            let (label, value) = item.split_once(':')?;
            let label = title_case(&clean_text(label).to_lowercase());
            let value = value.trim();
            if label.is_empty() {
                return None;
            }
            Some(format!("{label}: {value}"))
        })
        .collect()
}

/// Clean note paragraphs and join them with a blank line.
pub fn normalize_notes(paragraphs: &[String]) -> Option<String> {
    let paragraphs: Vec<String> = paragraphs
        .iter()
        .flat_map(|p| p.split("\n\n"))
        .map(clean_text)
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        None
    } else {
        Some(paragraphs.join("\n\n"))
    }
}
