//! Comma-delimited table parser.
//!
//! First line is the header, every following line is one row. There is no
//! quoting or escaping support: a comma inside a value splits the row. Cells
//! and header names are trimmed; rows shorter than the header simply omit the
//! trailing keys.

use std::collections::HashMap;

use crate::error::AnalysisError;

/// A parsed table: ordered header names plus one string map per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Header names in column order.
    pub headers: Vec<String>,
    /// Rows in input order, each mapping header name to raw cell text.
    pub rows: Vec<HashMap<String, String>>,
}

impl Table {
    /// A table with no columns and no rows.
    pub fn empty() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// Parse a block of comma-delimited text into a [`Table`].
///
/// The whole block is trimmed first, so leading/trailing blank lines never
/// produce rows. Interior blank lines do: they become rows where the first
/// header maps to the empty string and the rest are absent.
pub fn parse_table(text: &str) -> Result<Table, AnalysisError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::MalformedInput(
            "input has no header line".into(),
        ));
    }

    let mut lines = trimmed.split('\n');
    let headers: Vec<String> = lines
        .next()
        .unwrap_or_default()
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    let rows = lines
        .map(|line| {
            headers
                .iter()
                .zip(line.split(','))
                .map(|(h, v)| (h.clone(), v.trim().to_string()))
                .collect()
        })
        .collect();

    Ok(Table { headers, rows })
}
