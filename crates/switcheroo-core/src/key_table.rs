//! Tab-delimited key table loading.
//!
//! A key table has any number of tab-separated columns; two of them are
//! selected by zero-based index to form the [`KeyMapping`]. Cells are taken
//! verbatim (no quoting, no trimming) apart from a leading byte-order mark.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info, info_span, warn};

use crate::error::{Result, SwitcherooError};

/// Column selection and header handling for a key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTableOptions {
    /// Zero-based column holding the old token.
    pub key_col: usize,
    /// Zero-based column holding the replacement token.
    pub val_col: usize,
    /// Skip the first row instead of treating it as data.
    pub has_header: bool,
}

impl Default for KeyTableOptions {
    fn default() -> Self {
        Self {
            key_col: 0,
            val_col: 1,
            has_header: false,
        }
    }
}

impl KeyTableOptions {
    #[must_use]
    pub fn with_key_col(mut self, column: usize) -> Self {
        self.key_col = column;
        self
    }

    #[must_use]
    pub fn with_val_col(mut self, column: usize) -> Self {
        self.val_col = column;
        self
    }

    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Reject column selections that cannot produce a useful mapping.
    pub fn validate(&self) -> Result<()> {
        if self.key_col == self.val_col {
            return Err(SwitcherooError::SameColumn {
                column: self.key_col,
            });
        }
        Ok(())
    }
}

/// Old-token to new-token lookup built from a key table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMapping {
    entries: BTreeMap<String, String>,
}

impl KeyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, returning the value it displaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Swap keys and values so a rewrite can be undone.
    ///
    /// When several keys share a value, the last key in sorted order wins.
    #[must_use]
    pub fn invert(&self) -> Self {
        self.entries
            .iter()
            .map(|(key, value)| (value.clone(), key.clone()))
            .collect()
    }
}

impl FromIterator<(String, String)> for KeyMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KeyMapping {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Load a key table from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read, if the header or any row is
/// too narrow for `key_col` or `val_col`, or if the table has no data rows.
pub fn load_key_table(path: &Path, options: &KeyTableOptions) -> Result<KeyMapping> {
    let span = info_span!("load_key_table", path = %path.display());
    let _guard = span.enter();

    options.validate()?;
    let file = File::open(path).map_err(|e| SwitcherooError::KeyTableRead {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    let mapping = parse_key_table(file, path, options)?;
    info!(entries = mapping.len(), "loaded key table");
    Ok(mapping)
}

/// Parse a key table from any reader. `origin` is only used in error messages.
pub fn parse_key_table<R: Read>(
    source: R,
    origin: &Path,
    options: &KeyTableOptions,
) -> Result<KeyMapping> {
    options.validate()?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(options.has_header)
        .flexible(true)
        .quoting(false)
        .from_reader(source);

    let read_error = |source: csv::Error| SwitcherooError::KeyTableRead {
        path: origin.to_path_buf(),
        source,
    };

    if options.has_header {
        let header = reader.headers().map_err(read_error)?;
        let row = header
            .position()
            .map_or(1, |position| position.line() as usize);
        for column in [options.key_col, options.val_col] {
            if column >= header.len() {
                return Err(SwitcherooError::ColumnOutOfRange {
                    path: origin.to_path_buf(),
                    row,
                    column,
                    width: header.len(),
                });
            }
        }
        debug!(columns = header.len(), "skipped key table header");
    }

    let mut mapping = KeyMapping::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(read_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row = record
            .position()
            .map_or(index + 1, |position| position.line() as usize);
        let cell = |column: usize| -> Result<String> {
            let value = record
                .get(column)
                .ok_or_else(|| SwitcherooError::ColumnOutOfRange {
                    path: origin.to_path_buf(),
                    row,
                    column,
                    width: record.len(),
                })?;
            // Only the very first cell of the file can carry a BOM.
            let value = if column == 0 && row == 1 {
                value.trim_start_matches('\u{feff}')
            } else {
                value
            };
            Ok(value.to_string())
        };
        let key = cell(options.key_col)?;
        let value = cell(options.val_col)?;
        if let Some(previous) = mapping.insert(key.clone(), value.clone())
            && previous != value
        {
            warn!(
                key = %key,
                previous = %previous,
                replacement = %value,
                row,
                "duplicate key in key table; keeping the later row"
            );
        }
    }
    if mapping.is_empty() {
        return Err(SwitcherooError::EmptyKeyTable {
            path: origin.to_path_buf(),
        });
    }
    Ok(mapping)
}
