use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "paprika-notes";

/// Conversion settings
#[derive(Debug, Deserialize, Clone)]
pub struct ConverterConfig {
    /// Directory the notes are written to when no `--output` is given
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Maximum length (in characters) of a derived filename stem
    #[serde(default = "default_max_filename_len")]
    pub max_filename_len: usize,
    /// Filename of the table of contents document
    #[serde(default = "default_index_filename")]
    pub index_filename: String,
    /// Heading of the table of contents document
    #[serde(default = "default_index_title")]
    pub index_title: String,
    /// Source filenames that are never treated as recipes
    #[serde(default = "default_skip_files")]
    pub skip_files: Vec<String>,
    /// Extra category aliases, checked before the built-in ones
    #[serde(default)]
    pub category_aliases: Vec<CategoryAlias>,
}

/// Maps any category containing `pattern` (case-insensitive) to `name`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CategoryAlias {
    pub pattern: String,
    pub name: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            max_filename_len: default_max_filename_len(),
            index_filename: default_index_filename(),
            index_title: default_index_title(),
            skip_files: default_skip_files(),
            category_aliases: Vec::new(),
        }
    }
}

// Default value functions
fn default_output_dir() -> PathBuf {
    PathBuf::from("./apple_notes_recipes")
}

fn default_max_filename_len() -> usize {
    100
}

fn default_index_filename() -> String {
    "00_Recipe_Collection_Table_of_Contents.html".to_string()
}

fn default_index_title() -> String {
    "Recipe Collection".to_string()
}

fn default_skip_files() -> Vec<String> {
    vec!["index.html".to_string()]
}

impl ConverterConfig {
    /// Load configuration from `paprika-notes.toml` in the current directory,
    /// falling back to defaults when the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        load_config(Some(path))
    }
}

/// Load configuration
///
/// When `path` is given the file is required. Otherwise the optional
/// `paprika-notes.toml` in the current directory is used. Only TOML files are
/// read; there is no environment variable source.
pub fn load_config(path: Option<&Path>) -> Result<ConverterConfig, ConfigError> {
    let source = match path {
        Some(path) => File::from(path).format(FileFormat::Toml).required(true),
        None => File::with_name(DEFAULT_CONFIG_NAME)
            .format(FileFormat::Toml)
            .required(false),
    };

    let settings = Config::builder().add_source(source).build()?;
    let config: ConverterConfig = settings.try_deserialize()?;

    if config.max_filename_len == 0 {
        return Err(ConfigError::Message(
            "max_filename_len must be greater than zero".to_string(),
        ));
    }

    Ok(config)
}
