//! CLI argument definitions for the Genbank switcheroo.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gbk-switcheroo",
    version,
    about = "Relabel a Genbank feature line using a tab-delimited key table",
    long_about = "Relabel a Genbank feature line using a tab-delimited key table.\n\n\
                  Every line starting with the feature name must contain exactly one\n\
                  token found in the key table; that token is replaced and the line is\n\
                  re-joined with single spaces. All other lines are copied unchanged.\n\
                  The result is written to ./replacement.gbk."
)]
pub struct Cli {
    /// Path to a tab-delimited key file.
    #[arg(long = "key_file", short = 'f', value_name = "PATH")]
    pub key_file: PathBuf,

    /// Zero-based column holding the values to replace.
    #[arg(long = "key_col", short = 'k', default_value_t = 0)]
    pub key_col: usize,

    /// Zero-based column holding the replacement values.
    #[arg(long = "val_col", short = 'v', default_value_t = 1)]
    pub val_col: usize,

    /// Genbank feature whose line is rewritten (e.g. ACCESSION).
    #[arg(long = "feature", short = 'q')]
    pub feature: String,

    /// Path to the Genbank file to rewrite.
    #[arg(long = "gbk_file", short = 'g', value_name = "PATH")]
    pub gbk_file: PathBuf,

    /// Treat the first row of the key file as a header and skip it.
    #[arg(long = "has-header")]
    pub has_header: bool,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (defaults to warn, or RUST_LOG when set).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
