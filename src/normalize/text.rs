use regex::Regex;
use std::sync::LazyLock;

/// Connector words kept lower-case inside titles
const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "from", "in", "nor", "of", "on", "or",
    "the", "to", "vs", "with",
];

// A digit right after the separator means a decimal such as "1.5 Hour"
static ORDINAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?\d+(?:\s*[.):]|\s+[-–])(?:\s+(\S.*)|([^\d\s].*))$").unwrap()
});

static RECIPE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^recipe\s*:\s*").unwrap());

/// Collapse whitespace runs (including non-breaking spaces) and trim.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean a recipe title.
///
/// Strips leading ordinals such as `12. ` or `3) ` and a `Recipe:` prefix,
/// then applies title case. Returns an empty string for an empty title.
pub fn normalize_title(title: &str) -> String {
    let mut title = clean_text(title);

    loop {
        let stripped = match ORDINAL_PREFIX.captures(&title) {
            Some(caps) => caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or_else(String::new, |rest| rest.as_str().to_string()),
            None => RECIPE_PREFIX.replace(&title, "").into_owned(),
        };
        if stripped == title || stripped.is_empty() {
            break;
        }
        title = stripped;
    }

    title_case(&title)
}

/// Title case a cleaned string.
///
/// Titles that are mostly upper-case are lower-cased first; otherwise the
/// existing capitals are kept, so "BBQ Ribs" stays as is.
pub fn title_case(text: &str) -> String {
    let words: Vec<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();
    let shouting = is_shouting(&words);
    let last = words.len().saturating_sub(1);

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i != 0 && i != last && SMALL_WORDS.contains(&lower.as_str()) {
                lower
            } else if shouting {
                capitalize(&lower)
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// More than 70% of the letters title casing leaves alone are upper-case.
///
/// Small words and each word's first letter are not counted: those are the
/// letters title casing rewrites, so its output gets the same answer.
fn is_shouting(words: &[&str]) -> bool {
    let mut letters = 0;
    let mut upper = 0;
    for word in words {
        if SMALL_WORDS.contains(&word.to_lowercase().as_str()) {
            continue;
        }
        for c in word.chars().filter(|c| c.is_alphabetic()).skip(1) {
            letters += 1;
            if c.is_uppercase() {
                upper += 1;
            }
        }
    }
    letters > 3 && upper * 10 > letters * 7
}

/// Upper-case the first alphabetic character of a word
fn capitalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut done = false;
    for c in word.chars() {
        if !done && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            done = true;
        } else {
            out.push(c);
        }
    }
    out
}
