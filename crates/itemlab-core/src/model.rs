//! Core data model types for itemlab.
//!
//! Every type here is created once by an analysis call and is read-only
//! afterwards. `BTreeMap` is used for per-student answers so that serialized
//! output is deterministic across runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Descriptive metadata for one test item, supplied by the metadata table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Item identifier, matching a results-table column.
    pub item_id: String,
    /// Curriculum topic ("General" when not supplied).
    pub topic: String,
    /// Human difficulty label, distinct from the computed difficulty.
    pub difficulty_level: String,
    /// Competency code ("Unknown" when not supplied).
    pub competency: String,
}

/// Computed statistics for one test item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAnalysis {
    /// Item identifier.
    pub item_id: String,
    /// Metadata from the metadata table, if the item appeared there.
    #[serde(default)]
    pub metadata: Option<ItemMetadata>,
    /// Classical difficulty: fraction of students answering correctly, in [0, 1].
    pub p_val: f64,
    /// Point-biserial discrimination (simplified correct-group approximation).
    pub p_bis: f64,
    /// Logistic difficulty b = ln((1-p)/p) over the clamped p-value. Always finite.
    pub b: f64,
}

/// One student's scored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentResult {
    /// Student identifier ("Unknown" when the StudentID cell was empty).
    pub student_id: String,
    /// Per-item responses. The key set always equals the item catalog.
    pub answers: BTreeMap<String, i64>,
    /// Sum of all responses.
    pub raw_score: i64,
    /// Logit ability estimate. Always finite, including perfect/zero scores.
    pub theta: f64,
}

/// Cohort-level summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Mean raw score (population), rounded to 2 decimals.
    pub mean_score: f64,
    /// Standard deviation of raw scores (population), rounded to 2 decimals.
    pub std_dev: f64,
    /// Number of student rows analyzed.
    pub student_count: usize,
    /// Number of items in the catalog.
    pub item_count: usize,
}

/// The complete, immutable output of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// KR-20-style internal-consistency coefficient.
    pub reliability: f64,
    /// Per-item statistics, in results-header order.
    pub items: Vec<ItemAnalysis>,
    /// Students sorted by theta descending; ties keep input order.
    pub students: Vec<StudentResult>,
    /// Cohort summary.
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_result_serde_roundtrip() {
        let result = AnalysisResult {
            reliability: 0.82,
            items: vec![ItemAnalysis {
                item_id: "Q1".into(),
                metadata: Some(ItemMetadata {
                    item_id: "Q1".into(),
                    topic: "Algebra".into(),
                    difficulty_level: "Easy".into(),
                    competency: "NT1".into(),
                }),
                p_val: 0.75,
                p_bis: 0.41,
                b: -1.099,
            }],
            students: vec![StudentResult {
                student_id: "S1".into(),
                answers: BTreeMap::from([("Q1".into(), 1)]),
                raw_score: 1,
                theta: 0.5,
            }],
            summary: Summary {
                mean_score: 1.0,
                std_dev: 0.0,
                student_count: 1,
                item_count: 1,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, result);
    }

    #[test]
    fn item_without_metadata_deserializes() {
        let json = r#"{"item_id":"Q2","p_val":0.5,"p_bis":0.0,"b":0.0}"#;
        let item: ItemAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_id, "Q2");
        assert!(item.metadata.is_none());
    }

    #[test]
    fn answers_serialize_in_key_order() {
        let student = StudentResult {
            student_id: "S1".into(),
            answers: BTreeMap::from([("Q2".into(), 0), ("Q1".into(), 1)]),
            raw_score: 1,
            theta: 0.0,
        };
        let json = serde_json::to_string(&student).unwrap();
        assert!(json.find("Q1").unwrap() < json.find("Q2").unwrap());
    }
}
