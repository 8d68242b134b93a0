//! Response matrix builder.
//!
//! Converts parsed result and metadata tables into typed per-student response
//! rows and an ordered item catalog. The catalog is derived once from the
//! results header and is authoritative: every response row carries a value
//! for every catalog item, substituting 0 for absent or unparsable cells.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::AnalysisError;
use crate::model::ItemMetadata;
use crate::parser::Table;

/// Fallback student id for rows with an empty or missing StudentID cell.
const UNKNOWN_STUDENT: &str = "Unknown";

/// One student's raw responses, keyed by item id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRow {
    pub student_id: String,
    pub responses: BTreeMap<String, i64>,
}

/// The typed response matrix plus the metadata lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMatrix {
    /// Item ids in results-header order. Never empty.
    pub item_ids: Vec<String>,
    /// One row per student, in input order.
    pub rows: Vec<ResponseRow>,
    /// Metadata keyed by item id; items may be absent.
    pub metadata: HashMap<String, ItemMetadata>,
}

/// Build a [`ResponseMatrix`] from parsed tables.
///
/// The item catalog is every results header except the case-insensitive key
/// `studentid`. Pass `None` for `metadata` when no metadata table was
/// supplied; analysis proceeds with default labels.
pub fn build_matrix(
    results: &Table,
    metadata: Option<&Table>,
) -> Result<ResponseMatrix, AnalysisError> {
    let item_ids: Vec<String> = results
        .headers
        .iter()
        .filter(|h| !h.eq_ignore_ascii_case("studentid"))
        .cloned()
        .collect();

    if item_ids.is_empty() {
        return Err(AnalysisError::MalformedInput(
            "results header has no item columns".into(),
        ));
    }
    if results.rows.is_empty() {
        return Err(AnalysisError::NoData);
    }

    let rows = results
        .rows
        .iter()
        .map(|row| {
            let student_id = row
                .get("StudentID")
                .filter(|s| !s.is_empty())
                .cloned()
                .unwrap_or_else(|| UNKNOWN_STUDENT.to_string());

            let responses = item_ids
                .iter()
                .map(|qid| {
                    let val = row
                        .get(qid)
                        .and_then(|cell| cell.parse::<i64>().ok())
                        .unwrap_or(0);
                    (qid.clone(), val)
                })
                .collect();

            ResponseRow {
                student_id,
                responses,
            }
        })
        .collect();

    let metadata = metadata.map(build_metadata_lookup).unwrap_or_default();

    Ok(ResponseMatrix {
        item_ids,
        rows,
        metadata,
    })
}

fn build_metadata_lookup(table: &Table) -> HashMap<String, ItemMetadata> {
    let mut lookup = HashMap::new();
    for row in &table.rows {
        let Some(item_id) = row.get("ItemID").filter(|s| !s.is_empty()) else {
            tracing::debug!("skipping metadata row without ItemID");
            continue;
        };
        lookup.insert(
            item_id.clone(),
            ItemMetadata {
                item_id: item_id.clone(),
                topic: field_or(row, "Topic", "General"),
                difficulty_level: field_or(row, "DifficultyLevel", "Unknown"),
                competency: field_or(row, "Competency", "Unknown"),
            },
        );
    }
    lookup
}

fn field_or(row: &HashMap<String, String>, key: &str, default: &str) -> String {
    row.get(key)
        .filter(|s| !s.is_empty())
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// A warning from response matrix validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The student or item the warning refers to, if applicable.
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a response matrix for common data-quality issues.
///
/// Warnings never abort analysis; they exist so callers can surface suspect
/// input (duplicate ids, non-binary cells, missing metadata) before trusting
/// the statistics.
pub fn validate_matrix(matrix: &ResponseMatrix) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for row in &matrix.rows {
        if !seen_ids.insert(&row.student_id) {
            warnings.push(ValidationWarning {
                subject: Some(row.student_id.clone()),
                message: format!("duplicate student ID: {}", row.student_id),
            });
        }
    }

    for row in &matrix.rows {
        let non_binary = row
            .responses
            .values()
            .filter(|&&v| v != 0 && v != 1)
            .count();
        if non_binary > 0 {
            warnings.push(ValidationWarning {
                subject: Some(row.student_id.clone()),
                message: format!("{non_binary} response(s) outside 0/1"),
            });
        }
    }

    for qid in &matrix.item_ids {
        if !matrix.metadata.contains_key(qid) {
            warnings.push(ValidationWarning {
                subject: Some(qid.clone()),
                message: format!("no metadata for item {qid}, defaults will be used"),
            });
        }
    }

    warnings
}
