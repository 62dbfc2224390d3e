//! End-to-end run configuration: load the key table, then rewrite.

use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::key_table::{KeyTableOptions, load_key_table};
use crate::rewriter::{RewriteStats, rewrite_file, validate_feature};

/// Output file written to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "replacement.gbk";

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct SwitchConfig {
    pub key_file: PathBuf,
    pub table: KeyTableOptions,
    pub feature: String,
    pub gbk_file: PathBuf,
    pub output: PathBuf,
}

impl SwitchConfig {
    /// Create a config with default column selection and the default output.
    pub fn new(
        key_file: impl Into<PathBuf>,
        feature: impl Into<String>,
        gbk_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            key_file: key_file.into(),
            table: KeyTableOptions::default(),
            feature: feature.into(),
            gbk_file: gbk_file.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    #[must_use]
    pub fn with_table_options(mut self, table: KeyTableOptions) -> Self {
        self.table = table;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Check everything that can be checked without touching the filesystem.
    pub fn validate(&self) -> Result<()> {
        validate_feature(&self.feature)?;
        self.table.validate()
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub key_entries: usize,
    pub stats: RewriteStats,
    pub output: PathBuf,
}

/// Load the key table and rewrite the Genbank file.
///
/// The key table is fully loaded before the input is opened or the output
/// created, so key table errors never leave an output file behind.
pub fn run_switch(config: &SwitchConfig) -> Result<SwitchOutcome> {
    config.validate()?;
    let mapping = load_key_table(&config.key_file, &config.table)?;
    let stats = rewrite_file(&config.gbk_file, &config.output, &mapping, &config.feature)?;
    info!(
        output = %config.output.display(),
        replaced = stats.lines_matched,
        "switch complete"
    );
    Ok(SwitchOutcome {
        key_entries: mapping.len(),
        stats,
        output: config.output.clone(),
    })
}
