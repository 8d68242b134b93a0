//! Item statistics, ability estimation, and reliability.
//!
//! Implements the classical p-value, a simplified point-biserial
//! discrimination, a logit difficulty estimate per item, a logit ability
//! estimate per student, and a KR-20-style reliability coefficient.
//!
//! The point-biserial here is the correct-group approximation
//! `((M1 - Mt) / St) * sqrt(p / (1 - p))`, not the textbook two-group form,
//! and reliability sums item variances from the stored 3-decimal p-values.
//! Both are contractual: downstream consumers pin these exact numbers.

use crate::matrix::ResponseMatrix;
use crate::model::{ItemAnalysis, StudentResult};

/// Boundary correction applied to zero and perfect raw scores before the
/// logit transform, keeping theta finite.
pub const SCORE_CORRECTION: f64 = 0.5;

/// Lower clamp for an item's p-value before the logit difficulty transform.
pub const P_CLAMP_MIN: f64 = 0.01;

/// Upper clamp for an item's p-value before the logit difficulty transform.
pub const P_CLAMP_MAX: f64 = 0.99;

/// Round to 3 decimal digits for output stability.
pub(crate) fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Round to 2 decimal digits (summary statistics).
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn population_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Score every student: raw score plus logit ability estimate.
///
/// Theta is `ln(adj / (max - adj))` where `adj` is the raw score with the
/// [`SCORE_CORRECTION`] applied at the 0 and `max` boundaries, so the
/// estimate is finite for every student.
pub fn score_students(matrix: &ResponseMatrix) -> Vec<StudentResult> {
    let max = matrix.item_ids.len() as f64;

    matrix
        .rows
        .iter()
        .map(|row| {
            let raw_score: i64 = row.responses.values().sum();

            let score = raw_score as f64;
            let adjusted = if score == 0.0 {
                SCORE_CORRECTION
            } else if score == max {
                max - SCORE_CORRECTION
            } else {
                score
            };
            let theta = round3((adjusted / (max - adjusted)).ln());

            StudentResult {
                student_id: row.student_id.clone(),
                answers: row.responses.clone(),
                raw_score,
                theta,
            }
        })
        .collect()
}

/// Compute per-item statistics in catalog order.
///
/// `p_bis` short-circuits to 0 when the cohort's total-score variance is zero
/// or when `p_val` is exactly 0 or 1 (a zero-variance item cannot
/// discriminate); `b` is computed from the clamped p-value and is therefore
/// always finite.
pub fn analyze_items(matrix: &ResponseMatrix, students: &[StudentResult]) -> Vec<ItemAnalysis> {
    let raw_scores: Vec<f64> = students.iter().map(|s| s.raw_score as f64).collect();
    let mean_total = population_mean(&raw_scores);
    let std_dev_total = population_std_dev(&raw_scores, mean_total);

    matrix
        .item_ids
        .iter()
        .map(|qid| {
            let correct: Vec<&StudentResult> = students
                .iter()
                .filter(|s| s.answers.get(qid) == Some(&1))
                .collect();
            let p_val = correct.len() as f64 / students.len() as f64;

            let p_bis = if std_dev_total == 0.0 || p_val == 0.0 || p_val == 1.0 {
                0.0
            } else {
                let mean_correct = correct.iter().map(|s| s.raw_score as f64).sum::<f64>()
                    / correct.len() as f64;
                ((mean_correct - mean_total) / std_dev_total) * (p_val / (1.0 - p_val)).sqrt()
            };

            let adjusted_p = p_val.clamp(P_CLAMP_MIN, P_CLAMP_MAX);
            let b = ((1.0 - adjusted_p) / adjusted_p).ln();

            ItemAnalysis {
                item_id: qid.clone(),
                metadata: matrix.metadata.get(qid).cloned(),
                p_val: round3(p_val),
                p_bis: round3(p_bis),
                b: round3(b),
            }
        })
        .collect()
}

/// KR-20-style internal-consistency coefficient.
///
/// Sums binary item variances `p(1-p)` over the stored (unclamped) p-values
/// and compares against the population variance of raw scores. Zero total
/// variance yields 0 rather than a division by zero; a catalog with fewer
/// than two items has no defined `k/(k-1)` factor and also yields 0.
pub fn reliability(items: &[ItemAnalysis], students: &[StudentResult]) -> f64 {
    let k = items.len();
    if k < 2 {
        tracing::warn!("reliability undefined for {k} item(s), reporting 0");
        return 0.0;
    }

    let item_variance_sum: f64 = items.iter().map(|i| i.p_val * (1.0 - i.p_val)).sum();

    let raw_scores: Vec<f64> = students.iter().map(|s| s.raw_score as f64).collect();
    let mean = population_mean(&raw_scores);
    let total_variance =
        raw_scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / raw_scores.len() as f64;

    if total_variance == 0.0 {
        return 0.0;
    }

    let k = k as f64;
    round3((k / (k - 1.0)) * (1.0 - item_variance_sum / total_variance))
}
