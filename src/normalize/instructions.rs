use super::text::clean_text;
use regex::Regex;
use std::sync::LazyLock;

/// Words whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &["e.g", "i.e", "approx", "dr", "st", "mr", "mrs", "ms", "vs"];

/// Characters that may sit between terminal punctuation and the next sentence
const CLOSERS: &[char] = &['"', '\'', ')', ']', '”', '’'];

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:step\s*)?\d{1,2}\s*[.):](?:\s+|$)").unwrap());

static STEP_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(?:^|[.!?]\s+)(\d{1,2}\s*[.)]\s+)").unwrap());

/// Split an instruction block into steps.
///
/// Line breaks always separate steps. When the block starts with explicit
/// numbering (`1.` or `1)`), every numbering marker does too. Each piece is
/// then split into sentences. Source numbers are dropped; callers number the
/// returned steps 1..N.
pub fn normalize_instructions(block: &str) -> Vec<String> {
    let lines: Vec<String> = block
        .lines()
        .map(clean_text)
        .filter(|line| !line.is_empty())
        .collect();
    let Some(first) = lines.first() else {
        return Vec::new();
    };

    let chunks = if LEADING_NUMBER.is_match(first) {
        split_at_markers(&lines.join("\n"))
    } else {
        lines
    };

    chunks
        .iter()
        .map(|chunk| LEADING_NUMBER.replace(chunk, ""))
        .flat_map(|chunk| split_sentences(&chunk))
        .map(|step| finish_step(&step))
        .filter(|step| !step.is_empty())
        .collect()
}

fn split_at_markers(text: &str) -> Vec<String> {
    let mut starts: Vec<usize> = STEP_MARKER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.start()))
        .collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }

    let mut ends = starts.iter().skip(1).copied().collect::<Vec<_>>();
    ends.push(text.len());

    starts
        .iter()
        .zip(ends)
        .map(|(&start, end)| clean_text(&text[start..end]))
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

/// Split at terminal punctuation followed by whitespace and a capital letter.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut i = 0;
    while i < chars.len() {
        let (_, c) = chars[i];
        if matches!(c, '.' | '!' | '?') {
            let mut j = i + 1;
            while j < chars.len() && CLOSERS.contains(&chars[j].1) {
                j += 1;
            }
            let end = chars.get(j).map_or(text.len(), |(pos, _)| *pos);

            let mut k = j;
            while k < chars.len() && chars[k].1.is_whitespace() {
                k += 1;
            }

            let boundary = k > j
                && k < chars.len()
                && chars[k].1.is_uppercase()
                && !(c == '.' && ends_with_abbreviation(&text[start..chars[i].0]));

            if boundary {
                sentences.push(text[start..end].trim().to_string());
                start = chars[k].0;
                i = k;
                continue;
            }
        }
        i += 1;
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

fn ends_with_abbreviation(text: &str) -> bool {
    let word = text
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(['(', '"', '\''])
        .to_lowercase();
    ABBREVIATIONS.contains(&word.as_str())
}

/// Make sure the step ends like a sentence
fn finish_step(step: &str) -> String {
    let mut step = clean_text(step);
    let last = step.trim_end_matches(CLOSERS).chars().last();
    if matches!(last, Some(c) if c.is_alphanumeric() || c == ')' || c == '%') {
        step.push('.');
    }
    step
}
