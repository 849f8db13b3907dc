pub mod batch;
pub mod config;
pub mod error;
pub mod extractors;
pub mod index;
pub mod model;
pub mod normalize;
pub mod render;

pub use batch::{BatchConverter, BatchConverterBuilder, BatchReport, SkippedFile};
pub use config::ConverterConfig;
pub use error::{ConvertError, ExtractionError};
pub use model::{IndexEntry, Recipe};

use log::debug;
use normalize::Normalizer;

/// Extract and normalize one recipe from its HTML.
///
/// `filename` is the source file's name; its stem is used as the title when
/// the document has none.
pub fn parse_recipe(filename: &str, html: &str) -> Result<Recipe, ExtractionError> {
    let raw = extractors::extract_html(filename, html)?;
    debug!("{:#?}", raw);

    Ok(Normalizer::default().normalize(raw, filename))
}

/// Convert one recipe's HTML straight to its note document.
pub fn convert_html(filename: &str, html: &str) -> Result<String, ExtractionError> {
    let recipe = parse_recipe(filename, html)?;
    Ok(render::render_recipe(&recipe))
}
