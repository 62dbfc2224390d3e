//! Feature-line rewriting.
//!
//! Lines that start with the feature name have exactly one token swapped for
//! its mapped value and are re-emitted with single-space separators and a
//! trailing `\n`. Every other line is copied byte-for-byte.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, info_span, warn};

use crate::error::{Result, SwitcherooError, TokenError};
use crate::key_table::KeyMapping;

/// Counters for a completed rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Lines read from the input, matched or not.
    pub lines_read: usize,
    /// Lines that started with the feature name and were rewritten.
    pub lines_matched: usize,
}

/// A feature line after replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenLine {
    /// Reconstructed line, newline included.
    pub text: String,
    /// Token that was found in the mapping.
    pub key: String,
    /// Value it was replaced with.
    pub value: String,
}

/// Ensure the feature name cannot match every line.
pub fn validate_feature(feature: &str) -> Result<()> {
    if feature.trim().is_empty() {
        return Err(SwitcherooError::EmptyFeature);
    }
    Ok(())
}

/// Replace the single mapping key found among the tokens of `line`.
///
/// Every token is a candidate, the first one included. Exactly one token
/// position must hold a key; a key repeated on the same line is ambiguous.
pub fn rewrite_line(
    line: &str,
    mapping: &KeyMapping,
) -> std::result::Result<RewrittenLine, TokenError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(TokenError::Blank);
    }

    let hits: Vec<(usize, &str)> = tokens
        .iter()
        .enumerate()
        .filter_map(|(index, token)| mapping.get(token).map(|value| (index, value)))
        .collect();
    let (position, value) = match hits.as_slice() {
        [] => {
            return Err(TokenError::NoKeyToken {
                content: tokens.join(" "),
            });
        }
        [hit] => *hit,
        _ => {
            return Err(TokenError::AmbiguousKeyTokens {
                content: tokens.join(" "),
                keys: hits
                    .iter()
                    .map(|(index, _)| tokens[*index].to_string())
                    .collect(),
            });
        }
    };

    let mut text = String::with_capacity(line.len() + value.len());
    for (index, &token) in tokens.iter().enumerate() {
        if index > 0 {
            text.push(' ');
        }
        text.push_str(if index == position { value } else { token });
    }
    text.push('\n');

    Ok(RewrittenLine {
        text,
        key: tokens[position].to_string(),
        value: value.to_string(),
    })
}

/// Copy `reader` to `writer`, rewriting lines that start with `feature`.
///
/// The writer is flushed before returning. On error, whatever was written
/// so far stays written.
pub fn rewrite_stream<R, W>(
    mut reader: R,
    mut writer: W,
    mapping: &KeyMapping,
    feature: &str,
) -> Result<RewriteStats>
where
    R: BufRead,
    W: Write,
{
    validate_feature(feature)?;
    let prefix = feature.as_bytes();
    let mut stats = RewriteStats::default();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        let line = stats.lines_read + 1;
        let read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|source| SwitcherooError::Read { line, source })?;
        if read == 0 {
            break;
        }
        stats.lines_read = line;

        if !buffer.starts_with(prefix) {
            writer
                .write_all(&buffer)
                .map_err(|source| SwitcherooError::Write { line, source })?;
            continue;
        }

        let text =
            std::str::from_utf8(&buffer).map_err(|_| SwitcherooError::InvalidUtf8 { line })?;
        let rewritten =
            rewrite_line(text, mapping).map_err(|source| SwitcherooError::Token { line, source })?;
        debug!(line, key = %rewritten.key, value = %rewritten.value, "replaced token");
        writer
            .write_all(rewritten.text.as_bytes())
            .map_err(|source| SwitcherooError::Write { line, source })?;
        stats.lines_matched += 1;
    }

    writer.flush().map_err(|source| SwitcherooError::Write {
        line: stats.lines_read,
        source,
    })?;

    if stats.lines_matched == 0 {
        warn!(feature, "no line starts with the feature name");
    }
    Ok(stats)
}

/// Rewrite `input` into a freshly created `output`.
///
/// The input is opened before the output is created, so a missing input
/// never leaves an empty output behind.
pub fn rewrite_file(
    input: &Path,
    output: &Path,
    mapping: &KeyMapping,
    feature: &str,
) -> Result<RewriteStats> {
    let span = info_span!(
        "rewrite",
        input = %input.display(),
        output = %output.display(),
        feature
    );
    let _guard = span.enter();

    validate_feature(feature)?;
    let source = File::open(input).map_err(|source| SwitcherooError::InputOpen {
        path: input.to_path_buf(),
        source,
    })?;
    let sink = File::create(output).map_err(|source| SwitcherooError::OutputCreate {
        path: output.to_path_buf(),
        source,
    })?;

    let stats = rewrite_stream(
        BufReader::new(source),
        BufWriter::new(sink),
        mapping,
        feature,
    )?;
    info!(
        lines = stats.lines_read,
        matched = stats.lines_matched,
        "rewrite complete"
    );
    Ok(stats)
}
