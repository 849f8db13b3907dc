use crate::config::ConverterConfig;
use crate::error::{ConvertError, ExtractionError};
use crate::extractors;
use crate::index::build_index;
use crate::model::{IndexEntry, Recipe};
use crate::normalize::Normalizer;
use crate::render::{render_recipe, FilenameAllocator};
use jwalk::{Parallelism, WalkDir};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

const PROGRESS_EVERY: usize = 50;

/// A source file that was not converted
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: ExtractionError,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Recipe documents written, in processing order
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
    /// Table of contents document
    pub index_path: Option<PathBuf>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.written.len()
    }

    /// At least one recipe was converted
    pub fn is_success(&self) -> bool {
        self.processed() > 0
    }
}

/// Builder for [`BatchConverter`]
#[derive(Debug, Default)]
pub struct BatchConverterBuilder {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    config: Option<ConverterConfig>,
}

impl BatchConverterBuilder {
    /// Directory holding the Paprika HTML export
    pub fn input_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(path.into());
        self
    }

    /// Directory the notes are written to; defaults to the config's `output_dir`
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    pub fn config(mut self, config: ConverterConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<BatchConverter, ConvertError> {
        let input_dir = self
            .input_dir
            .ok_or_else(|| ConvertError::Builder("No input directory specified".to_string()))?;
        let config = self.config.unwrap_or_default();
        let output_dir = self.output_dir.unwrap_or_else(|| config.output_dir.clone());

        Ok(BatchConverter {
            normalizer: Normalizer::new(&config),
            input_dir,
            output_dir,
            config,
        })
    }
}

/// Converts every recipe in an export directory, one file at a time.
#[derive(Debug)]
pub struct BatchConverter {
    input_dir: PathBuf,
    output_dir: PathBuf,
    config: ConverterConfig,
    normalizer: Normalizer,
}

impl BatchConverter {
    pub fn builder() -> BatchConverterBuilder {
        BatchConverterBuilder::default()
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Run the conversion.
    ///
    /// Files that cannot be extracted are skipped and listed in the report.
    /// A missing input directory or any write failure aborts the run.
    pub fn run(&self) -> Result<BatchReport, ConvertError> {
        if !self.input_dir.is_dir() {
            return Err(ConvertError::InputNotFound(self.input_dir.clone()));
        }

        info!(
            "Converting recipes from {} to {}",
            self.input_dir.display(),
            self.output_dir.display()
        );

        fs::create_dir_all(&self.output_dir).map_err(|source| ConvertError::Write {
            path: self.output_dir.clone(),
            source,
        })?;

        let sources = self.find_sources()?;
        info!("Found {} recipe files", sources.len());

        let mut report = BatchReport::default();
        let mut entries: Vec<IndexEntry> = Vec::new();
        let mut filenames = FilenameAllocator::new(self.config.max_filename_len);
        filenames.reserve_first(&self.config.index_filename);

        for path in sources {
            let recipe = match self.convert_file(&path) {
                Ok(recipe) => recipe,
                Err(error) => {
                    warn!("Skipping {}: {}", path.display(), error);
                    report.skipped.push(SkippedFile { path, error });
                    continue;
                }
            };

            let filename = filenames.allocate(&recipe.title);
            let output_path = self.output_dir.join(&filename);
            write_file(&output_path, &render_recipe(&recipe))?;
            debug!("{} -> {}", path.display(), output_path.display());

            entries.push(recipe.index_entry(filename));
            report.written.push(output_path);

            if report.written.len() % PROGRESS_EVERY == 0 {
                info!("Converted {} recipes...", report.written.len());
            }
        }

        let index_path = self.output_dir.join(&self.config.index_filename);
        write_file(&index_path, &build_index(&self.config.index_title, &entries))?;
        report.index_path = Some(index_path);

        info!(
            "Converted {} recipes, skipped {}",
            report.processed(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Read, extract and normalize one source file
    pub fn convert_file(&self, path: &Path) -> Result<Recipe, ExtractionError> {
        let bytes = fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let raw = extractors::extract(&filename, &bytes)?;
        Ok(self.normalizer.normalize(raw, &filename))
    }

    /// Exported recipe files in sorted order
    fn find_sources(&self) -> Result<Vec<PathBuf>, ConvertError> {
        // Outputs written inside the input directory must not be read back
        let output_dir = self
            .output_dir
            .canonicalize()
            .unwrap_or_else(|_| self.output_dir.clone());

        let mut sources = Vec::new();
        for entry in WalkDir::new(&self.input_dir)
            .sort(true)
            .parallelism(Parallelism::Serial)
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !self.is_recipe_file(&path) {
                continue;
            }
            let canonical = path.canonicalize().unwrap_or_else(|_| path.clone());
            if canonical.starts_with(&output_dir) {
                continue;
            }
            sources.push(path);
        }

        sources.sort();
        Ok(sources)
    }

    fn is_recipe_file(&self, path: &Path) -> bool {
        let is_html = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"));
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let skipped = self
            .config
            .skip_files
            .iter()
            .any(|skip| skip.to_lowercase() == name);

        is_html && !skipped
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ConvertError> {
    fs::write(path, contents).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
