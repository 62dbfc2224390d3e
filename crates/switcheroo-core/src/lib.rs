//! Relabel a Genbank feature line from a tab-delimited key table.
//!
//! # Features
//!
//! - **Key Table Loading**: two columns of a TSV, selected by index, with an
//!   explicit header switch
//! - **Feature Rewriting**: lines starting with a feature name have their one
//!   mapping key replaced; all other lines are copied byte-for-byte
//!
//! # Example
//!
//! ```ignore
//! use switcheroo_core::{SwitchConfig, run_switch};
//!
//! let config = SwitchConfig::new("keys.tsv", "ACCESSION", "input.gbk");
//! let outcome = run_switch(&config)?;
//! println!("{} lines rewritten", outcome.stats.lines_matched);
//! ```

mod error;
mod key_table;
mod rewriter;
mod switch;

// === Error Types ===
pub use error::{Result, SwitcherooError, TokenError};

// === Key Table ===
pub use key_table::{KeyMapping, KeyTableOptions, load_key_table, parse_key_table};

// === Rewriting ===
pub use rewriter::{
    RewriteStats, RewrittenLine, rewrite_file, rewrite_line, rewrite_stream, validate_feature,
};

// === Orchestration ===
pub use switch::{DEFAULT_OUTPUT_FILE, SwitchConfig, SwitchOutcome, run_switch};
