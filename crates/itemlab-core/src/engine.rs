//! Analysis entry point.
//!
//! Runs the full pipeline over the two text inputs: parse, build the response
//! matrix, score students, analyze items, compute reliability, and assemble
//! the immutable [`AnalysisResult`]. Pure and synchronous; identical inputs
//! always produce identical results.

use crate::error::AnalysisError;
use crate::matrix::build_matrix;
use crate::model::{AnalysisResult, Summary};
use crate::parser::{parse_table, Table};
use crate::statistics::{analyze_items, reliability, round2, score_students};

/// Analyze a results table against an optional metadata table.
///
/// `results_text` must contain a `StudentID,<item>,...` header and one row
/// per student. `metadata_text` may be empty or whitespace-only, which is
/// treated as an absent metadata table; items it does not describe get
/// default labels.
///
/// Students in the returned result are sorted by theta descending; equal
/// thetas keep their input order.
pub fn analyze(results_text: &str, metadata_text: &str) -> Result<AnalysisResult, AnalysisError> {
    let results = parse_table(results_text)?;
    let metadata = if metadata_text.trim().is_empty() {
        None
    } else {
        Some(parse_table(metadata_text)?)
    };

    analyze_tables(&results, metadata.as_ref())
}

/// Analyze already-parsed tables. Useful when the caller wants to run
/// validation on the parsed form first.
pub fn analyze_tables(
    results: &Table,
    metadata: Option<&Table>,
) -> Result<AnalysisResult, AnalysisError> {
    let matrix = build_matrix(results, metadata)?;
    tracing::debug!(
        students = matrix.rows.len(),
        items = matrix.item_ids.len(),
        "response matrix built"
    );

    let mut students = score_students(&matrix);
    let items = analyze_items(&matrix, &students);
    let reliability = reliability(&items, &students);

    let raw_scores: Vec<f64> = students.iter().map(|s| s.raw_score as f64).collect();
    let mean_score = raw_scores.iter().sum::<f64>() / raw_scores.len() as f64;
    let std_dev = (raw_scores
        .iter()
        .map(|s| (s - mean_score).powi(2))
        .sum::<f64>()
        / raw_scores.len() as f64)
        .sqrt();

    let summary = Summary {
        mean_score: round2(mean_score),
        std_dev: round2(std_dev),
        student_count: students.len(),
        item_count: items.len(),
    };

    // Stable sort: equal thetas keep input order.
    students.sort_by(|a, b| b.theta.total_cmp(&a.theta));

    Ok(AnalysisResult {
        reliability,
        items,
        students,
        summary,
    })
}
