//! Error types for key table loading and feature-line rewriting.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a single matched feature line could not be rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The matched line has no tokens once trailing whitespace is removed.
    #[error("feature line is blank")]
    Blank,

    /// None of the tokens on the line is a key of the mapping.
    #[error("no token on feature line '{content}' is a key in the key table")]
    NoKeyToken { content: String },

    /// More than one token position holds a mapping key.
    #[error("feature line '{content}' has {} key tokens ({}); expected exactly one", .keys.len(), .keys.join(", "))]
    AmbiguousKeyTokens { content: String, keys: Vec<String> },
}

/// Errors that can occur while loading the key table or rewriting a file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SwitcherooError {
    // === Configuration Errors ===
    /// The feature prefix is empty and would match every line.
    #[error("feature name must not be empty")]
    EmptyFeature,

    /// Key and value columns point at the same column.
    #[error("key column and value column are both {column}")]
    SameColumn { column: usize },

    // === Key Table Errors ===
    /// Failed to open or parse the key table.
    #[error("failed to read key table {path}: {source}")]
    KeyTableRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row is too narrow for the requested column.
    #[error("column {column} is out of range in {path} row {row} ({width} columns)")]
    ColumnOutOfRange {
        path: PathBuf,
        row: usize,
        column: usize,
        width: usize,
    },

    /// The key table has no data rows.
    #[error("key table {path} has no data rows")]
    EmptyKeyTable { path: PathBuf },

    // === Rewrite Errors ===
    /// Failed to open the Genbank input.
    #[error("failed to open input {path}: {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output file.
    #[error("failed to create output {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the input failed partway through.
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output failed.
    #[error("failed to write line {line}: {source}")]
    Write {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A matched feature line is not valid UTF-8.
    #[error("feature line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },

    /// A matched feature line has no unique key token.
    #[error("cannot rewrite line {line}: {source}")]
    Token {
        line: usize,
        #[source]
        source: TokenError,
    },
}

/// Result type for switcheroo operations.
pub type Result<T> = std::result::Result<T, SwitcherooError>;
