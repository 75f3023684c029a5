//! Argument parsing and the single `compare` use case.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use doc_similarity::{CompareConfig, Comparator, MarkStyle};
use doc_similarity_ingest::UploadedFile;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary lines followed by both annotated documents
    Text,
    /// The full comparison result as JSON
    Json,
}

/// Compare a reference document with a candidate and report how much of
/// the reference reappears in it.
#[derive(Parser, Debug)]
#[command(name = "doc-similarity", version, about)]
pub struct Cli {
    /// Reference document (.pdf or .txt)
    pub file_a: PathBuf,

    /// Candidate document (.pdf or .txt)
    pub file_b: PathBuf,

    /// Minimum cosine similarity for a sentence match, in [0, 1]
    #[arg(long, short = 't')]
    pub threshold: Option<f64>,

    /// TOML configuration file
    #[arg(long, short = 'c', env = "DOC_SIMILARITY_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Mark matched sentences with [[ ]] instead of <mark> tags
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// Resolve the effective configuration. Flags win over the file.
    ///
    /// A `--config` path that does not exist is an error.
    pub fn compare_config(&self) -> Result<CompareConfig> {
        let mut config = match &self.config {
            Some(path) => {
                if !path.is_file() {
                    bail!("configuration file not found: {}", path.display());
                }
                CompareConfig::load(path)?
            }
            None => CompareConfig::default(),
        };
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        if self.plain {
            config = config.with_mark_style(MarkStyle::brackets());
        }
        Ok(config)
    }

    /// Run the comparison and render the report.
    pub fn run(&self) -> Result<String> {
        let comparator = Comparator::new(self.compare_config()?)?;

        let document_a = UploadedFile::read(&self.file_a)?.into_document()?;
        let document_b = UploadedFile::read(&self.file_b)?.into_document()?;
        tracing::info!(a = %document_a.name, b = %document_b.name, "comparing documents");

        let result = comparator
            .compare_documents(&document_a, &document_b)
            .with_context(|| {
                format!(
                    "cannot compare {} with {}",
                    self.file_a.display(),
                    self.file_b.display()
                )
            })?;

        let report = match self.format {
            OutputFormat::Text => result.to_string(),
            OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        };
        Ok(report)
    }
}
