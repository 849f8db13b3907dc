use super::text::clean_text;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Canonical glyph for each fraction that has one
const FRACTIONS: &[(u32, u32, char)] = &[
    (1, 2, '½'),
    (1, 3, '⅓'),
    (2, 3, '⅔'),
    (1, 4, '¼'),
    (3, 4, '¾'),
    (1, 5, '⅕'),
    (2, 5, '⅖'),
    (3, 5, '⅗'),
    (4, 5, '⅘'),
    (1, 6, '⅙'),
    (5, 6, '⅚'),
    (1, 7, '⅐'),
    (1, 8, '⅛'),
    (3, 8, '⅜'),
    (5, 8, '⅝'),
    (7, 8, '⅞'),
    (1, 9, '⅑'),
    (1, 10, '⅒'),
];

const GLYPHS: &str = "½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅐⅛⅜⅝⅞⅑⅒";

/// Abbreviation → (singular, plural)
const UNITS: &[(&str, &str, &str)] = &[
    ("tbsp", "tablespoon", "tablespoons"),
    ("tbsps", "tablespoon", "tablespoons"),
    ("tbs", "tablespoon", "tablespoons"),
    ("tsp", "teaspoon", "teaspoons"),
    ("tsps", "teaspoon", "teaspoons"),
    ("c", "cup", "cups"),
    ("lb", "pound", "pounds"),
    ("lbs", "pound", "pounds"),
    ("oz", "ounce", "ounces"),
    ("pkg", "package", "packages"),
    ("pkgs", "package", "packages"),
    ("qt", "quart", "quarts"),
    ("qts", "quart", "quarts"),
    ("pt", "pint", "pints"),
    ("pts", "pint", "pints"),
    ("gal", "gallon", "gallons"),
    ("gals", "gallon", "gallons"),
];

static ASCII_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\b(?P<whole>\d+)(?:\s+|-))?\b(?P<num>\d+)[/⁄](?P<den>\d+)\b").unwrap()
});

static SPACED_GLYPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(\d)(?:\s+|-)([{GLYPHS}])")).unwrap());

// "T" is tablespoon and "t" teaspoon, so those two are case-sensitive.
// Single-letter units only count when a word follows, so "180 C" stays.
static UNIT_ABBREVIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<pre>^|[^\d.,/⁄])(?P<qty>\d+(?:[.,]\d+)?[{GLYPHS}]?|[{GLYPHS}])\s*(?:(?P<unit>(?i:tbsps?|tbs|tsps?|lbs?|oz|pkgs?|qts?|pts?|gals?))\b\.?|(?P<letter>[TtcC])\.?(?P<next>\s+\p{{L}}))"
    ))
    .unwrap()
});

fn glyph_for(numerator: u32, denominator: u32) -> Option<char> {
    FRACTIONS
        .iter()
        .find(|(n, d, _)| *n == numerator && *d == denominator)
        .map(|(_, _, glyph)| *glyph)
}

/// Replace `a/b` fractions with their glyph, joining a leading whole number.
/// Fractions without a glyph are left as written.
pub fn normalize_fractions(text: &str) -> String {
    let text = ASCII_FRACTION.replace_all(text, |caps: &Captures| {
        let glyph = match (caps["num"].parse(), caps["den"].parse()) {
            (Ok(n), Ok(d)) => glyph_for(n, d),
            _ => None,
        };
        match (glyph, caps.name("whole")) {
            (Some(glyph), Some(whole)) => format!("{}{}", whole.as_str(), glyph),
            (Some(glyph), None) => glyph.to_string(),
            (None, _) => caps[0].to_string(),
        }
    });

    SPACED_GLYPH.replace_all(&text, "$1$2").into_owned()
}

fn unit_names(abbreviation: &str) -> Option<(&'static str, &'static str)> {
    match abbreviation {
        "T" => Some(("tablespoon", "tablespoons")),
        "t" => Some(("teaspoon", "teaspoons")),
        other => {
            let lower = other.to_lowercase();
            UNITS
                .iter()
                .find(|(abbr, _, _)| *abbr == lower)
                .map(|(_, singular, plural)| (*singular, *plural))
        }
    }
}

/// A lone `1` or a bare fraction takes a singular unit
fn is_singular(quantity: &str) -> bool {
    quantity == "1" || (quantity.chars().count() == 1 && GLYPHS.contains(quantity))
}

/// Expand unit abbreviations that directly follow a quantity.
pub fn expand_units(text: &str) -> String {
    UNIT_ABBREVIATION
        .replace_all(text, |caps: &Captures| {
            let (abbreviation, next) = match (caps.name("unit"), caps.name("letter")) {
                (Some(unit), _) => (unit.as_str(), ""),
                (None, Some(letter)) => (
                    letter.as_str(),
                    caps.name("next").map_or("", |m| m.as_str()),
                ),
                (None, None) => return caps[0].to_string(),
            };
            let quantity = &caps["qty"];
            match unit_names(abbreviation) {
                Some((singular, plural)) => {
                    let unit = if is_singular(quantity) { singular } else { plural };
                    format!("{}{quantity} {unit}{next}", &caps["pre"])
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Clean one ingredient line: whitespace, fraction glyphs, unit names.
pub fn normalize_ingredient(line: &str) -> String {
    expand_units(&normalize_fractions(&clean_text(line)))
}

/// Normalize ingredient lines, dropping empty ones and keeping order.
pub fn normalize_ingredients(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| normalize_ingredient(line))
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_number_becomes_glyph() {
        assert_eq!(normalize_ingredient("1 1/2 cups flour"), "1½ cups flour");
        assert_eq!(normalize_ingredient("2-1/4 cups sugar"), "2¼ cups sugar");
        assert_eq!(normalize_ingredient("3/4 cup milk"), "¾ cup milk");
    }

    #[test]
    fn test_unicode_fractions_are_joined() {
        assert_eq!(normalize_ingredient("2 ½ cups water"), "2½ cups water");
        assert_eq!(normalize_ingredient("1⁄3 cup oil"), "⅓ cup oil");
    }

    #[test]
    fn test_fractions_without_glyph_are_untouched() {
        assert_eq!(normalize_ingredient("1 3/16 inch slices"), "1 3/16 inch slices");
        assert_eq!(normalize_ingredient("bake at 350/180"), "bake at 350/180");
    }

    #[test]
    fn test_unit_abbreviations_expand() {
        assert_eq!(normalize_ingredient("2 tbsp butter"), "2 tablespoons butter");
        assert_eq!(normalize_ingredient("1 T. honey"), "1 tablespoon honey");
        assert_eq!(normalize_ingredient("1 t salt"), "1 teaspoon salt");
        assert_eq!(normalize_ingredient("½ tsp pepper"), "½ teaspoon pepper");
        assert_eq!(normalize_ingredient("1 1/2 lbs beef"), "1½ pounds beef");
        assert_eq!(normalize_ingredient("8oz cream cheese"), "8 ounces cream cheese");
        assert_eq!(normalize_ingredient("2 C broth"), "2 cups broth");
    }

    #[test]
    fn test_words_are_not_mistaken_for_units() {
        assert_eq!(normalize_ingredient("2 Tomatoes"), "2 Tomatoes");
        assert_eq!(normalize_ingredient("1 can tomatoes"), "1 can tomatoes");
        assert_eq!(normalize_ingredient("1 to 2 cups stock"), "1 to 2 cups stock");
        assert_eq!(normalize_ingredient("vitamin c powder"), "vitamin c powder");
        assert_eq!(normalize_ingredient("Bake at 180 C"), "Bake at 180 C");
    }

    #[test]
    fn test_decimal_quantities_take_plural_units() {
        assert_eq!(normalize_ingredient("2.1 lb beef"), "2.1 pounds beef");
        assert_eq!(normalize_ingredient("1.5 tsp salt"), "1.5 teaspoons salt");
        assert_eq!(normalize_ingredient("0.5 oz yeast"), "0.5 ounces yeast");
    }

    #[test]
    fn test_ingredient_is_idempotent() {
        for line in ["1 1/2 cups flour", "2 tbsp. oil", "1½ cups flour", "¼ c sugar"] {
            let once = normalize_ingredient(line);
            assert_eq!(normalize_ingredient(&once), once);
        }
    }

    #[test]
    fn test_normalize_ingredients_keeps_order() {
        let lines = vec![
            " 1  cup rice ".to_string(),
            "".to_string(),
            "2 cups water".to_string(),
        ];
        assert_eq!(
            normalize_ingredients(&lines),
            vec!["1 cup rice", "2 cups water"]
        );
    }
}
