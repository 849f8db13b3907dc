/// Field values as found in the source document, before normalization.
#[derive(Debug, Clone, Default)]
pub struct RawRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    /// Instruction block, with a line break at every `<br>` or block boundary
    pub instructions: String,
    pub notes: Vec<String>,
    pub source_url: Option<String>,
    pub source_name: Option<String>,
    /// Nutrition block, with a line break at every `<br>` or block boundary
    pub nutrition: String,
    /// Comma separated category list
    pub categories: String,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: Option<String>,
    pub servings: Option<String>,
}

impl RawRecipe {
    /// True when ingredients or instructions were found
    pub fn has_content(&self) -> bool {
        self.ingredients.iter().any(|line| !line.trim().is_empty())
            || !self.instructions.trim().is_empty()
    }

    /// True when neither a title nor any content was found
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && !self.has_content()
    }
}

/// A normalized recipe, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipe {
    /// Never empty
    pub title: String,
    pub ingredients: Vec<String>,
    /// One entry per step, in order, without source numbering
    pub instructions: Vec<String>,
    /// Paragraphs separated by a blank line
    pub notes: Option<String>,
    pub source_url: Option<String>,
    pub source_name: Option<String>,
    pub nutrition: Vec<String>,
    /// Deduplicated and sorted for display
    pub categories: Vec<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: Option<String>,
    pub servings: Option<String>,
}

impl Recipe {
    /// Instruction steps paired with their 1-based number
    pub fn numbered_steps(&self) -> impl Iterator<Item = (usize, &str)> {
        self.instructions
            .iter()
            .enumerate()
            .map(|(i, step)| (i + 1, step.as_str()))
    }

    /// Note paragraphs
    pub fn note_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.notes
            .as_deref()
            .unwrap_or_default()
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Projection used by the table of contents
    pub fn index_entry(&self, filename: impl Into<String>) -> IndexEntry {
        IndexEntry {
            title: self.title.clone(),
            categories: self.categories.clone(),
            prep_time: self.prep_time.clone(),
            cook_time: self.cook_time.clone(),
            servings: self.servings.clone(),
            filename: filename.into(),
        }
    }
}

/// Table of contents row for one converted recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub title: String,
    pub categories: Vec<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    /// Output filename, relative to the output directory
    pub filename: String,
}
