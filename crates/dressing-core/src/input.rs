//! Edge-list parsing for files and stdin.
//!
//! Two formats are accepted:
//!
//! ```text
//! # text: one pair per line, `->` or `,` between the two names
//! t-shirt -> dress shirt
//! left sock, pants
//! ```
//!
//! ```json
//! [["t-shirt", "dress shirt"], ["left sock", "pants"]]
//! ```
//!
//! Parsing only checks shape. Empty names pass through so that graph
//! construction reports them with the entry index. A JSON entry with a
//! missing or `null` side is read as an empty name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Edge-list encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeFormat {
    /// JSON when the first non-blank character is `[`, text otherwise.
    #[default]
    Auto,
    Text,
    Json,
}

impl FromStr for EdgeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown edge format '{other}' (expected auto, text, or json)"
            )),
        }
    }
}

impl fmt::Display for EdgeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Errors from [`parse_edges`].
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A text line without a `->` or `,` separator.
    #[error("line {line}: expected `dependency -> dependent` or `dependency, dependent`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A JSON entry holding more than two values.
    #[error("entry {index}: expected a [dependency, dependent] pair, got {len} values")]
    OversizedEntry { index: usize, len: usize },

    #[error("invalid JSON edge list: {0}")]
    Json(#[from] serde_json::Error),
}

impl InputError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        ErrorCode::MalformedEdgeList
    }
}

/// Parse `source` as an edge list in `format`.
///
/// # Errors
///
/// Returns [`InputError`] when a text line has no separator, or the JSON is
/// not an array of string arrays holding at most two values.
pub fn parse_edges(source: &str, format: EdgeFormat) -> Result<Vec<(String, String)>, InputError> {
    match resolve_format(source, format) {
        EdgeFormat::Json => parse_json(source),
        EdgeFormat::Text | EdgeFormat::Auto => parse_text(source),
    }
}

fn resolve_format(source: &str, format: EdgeFormat) -> EdgeFormat {
    match format {
        EdgeFormat::Auto if source.trim_start().starts_with('[') => EdgeFormat::Json,
        EdgeFormat::Auto => EdgeFormat::Text,
        explicit => explicit,
    }
}

fn parse_json(source: &str) -> Result<Vec<(String, String)>, InputError> {
    let entries: Vec<Vec<Option<String>>> = serde_json::from_str(source)?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if entry.len() > 2 {
                return Err(InputError::OversizedEntry {
                    index,
                    len: entry.len(),
                });
            }
            let mut sides = entry.into_iter().map(Option::unwrap_or_default);
            let dependency = sides.next().unwrap_or_default();
            let dependent = sides.next().unwrap_or_default();
            Ok((dependency, dependent))
        })
        .collect()
}

fn parse_text(source: &str) -> Result<Vec<(String, String)>, InputError> {
    let mut edges = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((dependency, dependent)) = line.split_once("->").or_else(|| line.split_once(','))
        else {
            return Err(InputError::MalformedLine {
                line: idx + 1,
                content: line.to_string(),
            });
        };

        edges.push((dependency.trim().to_string(), dependent.trim().to_string()));
    }

    Ok(edges)
}
