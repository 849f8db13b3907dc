use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input path is missing or is not a directory
    #[error("Input directory not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Output directory or file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to enumerate source files
    #[error("Failed to read input directory: {0}")]
    Discovery(#[from] jwalk::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}

/// Errors for a single source file. The batch skips the file and keeps going.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Source file could not be read
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),

    /// File is not UTF-8 text
    #[error("File is not valid UTF-8 markup")]
    Encoding,

    /// File has no content at all
    #[error("Document is empty")]
    EmptyDocument,

    /// No title and no ingredients or instructions were found
    #[error("No recipe title or content found")]
    NoRecipeContent,
}
