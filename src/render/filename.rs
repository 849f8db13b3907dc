use std::collections::HashSet;

const SEPARATOR: char = '_';
const FALLBACK_STEM: &str = "untitled_recipe";
const EXTENSION: &str = "html";

/// Byte budget for a stem and its collision suffix. With the extension this
/// stays well under the 255-byte name limit of common file systems.
pub const MAX_STEM_BYTES: usize = 200;

/// Put in front of stems that would otherwise sort before the index
const LEADING_PREFIX: &str = "Recipe_";

/// `&` becomes `and` and every run of other non-alphanumeric characters a
/// single `_`. Never empty.
fn slugify(title: &str) -> String {
    let title = title.replace('&', " and ");

    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with(SEPARATOR) {
            slug.push(SEPARATOR);
        }
    }

    let slug = slug.trim_end_matches(SEPARATOR);
    if slug.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        slug.to_string()
    }
}

/// Longest prefix of `slug` within both limits, cut on a char boundary.
/// Keeps at least one character.
fn truncate(slug: &str, max_chars: usize, max_bytes: usize) -> &str {
    let mut end = 0;
    for (count, (i, c)) in slug.char_indices().enumerate() {
        let next = i + c.len_utf8();
        if count > 0 && (count >= max_chars || next > max_bytes) {
            break;
        }
        end = next;
    }
    slug[..end].trim_end_matches(SEPARATOR)
}

/// Filename stem for a title.
///
/// `&` becomes `and`, every run of other non-alphanumeric characters becomes
/// a single `_`, and the result is cut to `max_len` characters and
/// [`MAX_STEM_BYTES`] bytes.
pub fn derive_stem(title: &str, max_len: usize) -> String {
    truncate(&slugify(title), max_len, MAX_STEM_BYTES).to_string()
}

/// Hands out unique output filenames for one run.
///
/// Names are compared case-insensitively because the notes usually land on
/// a case-insensitive file system. Suffixes for repeated titles count
/// against the length limits.
#[derive(Debug)]
pub struct FilenameAllocator {
    max_len: usize,
    taken: HashSet<String>,
    /// Lower-cased name every allocated name must sort after
    first: Option<String>,
}

impl FilenameAllocator {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(1),
            taken: HashSet::new(),
            first: None,
        }
    }

    /// Mark a filename as used, e.g. the index document
    pub fn reserve(&mut self, filename: &str) {
        self.taken.insert(filename.to_lowercase());
    }

    /// Reserve a filename that has to list before every allocated one.
    ///
    /// Stems that would sort at or before it get a `Recipe_` prefix.
    pub fn reserve_first(&mut self, filename: &str) {
        self.reserve(filename);
        self.first = Some(filename.to_lowercase());
    }

    fn sorts_first(&self, candidate: &str) -> bool {
        self.first
            .as_deref()
            .is_some_and(|first| candidate.to_lowercase().as_str() <= first)
    }

    /// Filename for a title; repeats get `_2`, `_3`, ...
    pub fn allocate(&mut self, title: &str) -> String {
        let mut slug = slugify(title);
        let mut prefixed = false;
        let mut counter = 1;

        loop {
            let suffix = if counter == 1 {
                String::new()
            } else {
                format!("{SEPARATOR}{counter}")
            };
            let max_chars = self.max_len.saturating_sub(suffix.chars().count());
            let stem = truncate(&slug, max_chars, MAX_STEM_BYTES - suffix.len());
            let candidate = format!("{stem}{suffix}.{EXTENSION}");

            if !prefixed && self.sorts_first(&candidate) {
                slug = format!("{LEADING_PREFIX}{slug}");
                prefixed = true;
                continue;
            }
            if self.taken.insert(candidate.to_lowercase()) {
                return candidate;
            }
            counter += 1;
        }
    }
}
