//! Reduced projection of an analysis for narrative report generators.
//!
//! A pedagogical-report generator does not need the full result: it reads one
//! digest entry per item (id, topic, difficulty statistic, discrimination)
//! plus reliability and the cohort summary. This module builds that
//! projection, the plain-text briefing handed to the generator, and a
//! human-readable markdown rendering.

use serde::{Deserialize, Serialize};

use itemlab_core::model::AnalysisResult;

/// One item's entry in the narrative digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDigest {
    /// Item identifier.
    pub id: String,
    /// Topic from metadata, if any.
    pub topic: Option<String>,
    /// Classical difficulty (p-value).
    pub difficulty_stat: f64,
    /// Point-biserial discrimination.
    pub discrimination: f64,
}

/// The reduced projection a narrative report generator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeDigest {
    /// Internal-consistency reliability coefficient.
    pub reliability: f64,
    /// Mean raw score.
    pub mean_score: f64,
    /// Maximum possible raw score (the item count).
    pub max_score: usize,
    /// Number of students analyzed.
    pub student_count: usize,
    /// Per-item digest entries, in catalog order.
    pub items: Vec<ItemDigest>,
}

/// Project an analysis down to its narrative digest.
pub fn narrative_digest(analysis: &AnalysisResult) -> NarrativeDigest {
    NarrativeDigest {
        reliability: analysis.reliability,
        mean_score: analysis.summary.mean_score,
        max_score: analysis.summary.item_count,
        student_count: analysis.summary.student_count,
        items: analysis
            .items
            .iter()
            .map(|i| ItemDigest {
                id: i.item_id.clone(),
                topic: i.metadata.as_ref().map(|m| m.topic.clone()),
                difficulty_stat: i.p_val,
                discrimination: i.p_bis,
            })
            .collect(),
    }
}

/// Build the plain-text briefing a pedagogical-report generator receives.
///
/// The generator itself (a generative-AI service) is outside this crate; this
/// is its input contract.
pub fn render_prompt(digest: &NarrativeDigest) -> String {
    let items_json = serde_json::to_string(&digest.items).unwrap_or_default();
    format!(
        "You are an expert educational psychometrician.\n\
         \n\
         Analyze test data:\n\
         - Reliability (alpha): {}\n\
         - Mean score: {} / {}\n\
         - Students: {}\n\
         - Items: {}\n\
         \n\
         Provide a concise pedagogical report:\n\
         1. Overall quality.\n\
         2. Problematic questions.\n\
         3. Recommendations.\n",
        digest.reliability, digest.mean_score, digest.max_score, digest.student_count, items_json
    )
}

/// Render an analysis as a markdown report.
pub fn render_markdown(analysis: &AnalysisResult) -> String {
    let mut md = String::new();

    md.push_str("# Test analysis\n\n");
    md.push_str(&format!(
        "**Summary:** {} students, {} items | mean score {:.2} | SD {:.2} | reliability {:.3}\n\n",
        analysis.summary.student_count,
        analysis.summary.item_count,
        analysis.summary.mean_score,
        analysis.summary.std_dev,
        analysis.reliability
    ));

    md.push_str("## Items\n\n");
    md.push_str("| Item | Topic | p-value | Discrimination | b |\n");
    md.push_str("|------|-------|---------|----------------|---|\n");
    for item in &analysis.items {
        let topic = item
            .metadata
            .as_ref()
            .map(|m| m.topic.as_str())
            .unwrap_or("-");
        md.push_str(&format!(
            "| {} | {} | {:.3} | {:.3} | {:.3} |\n",
            item.item_id, topic, item.p_val, item.p_bis, item.b
        ));
    }
    md.push('\n');

    md.push_str("## Students\n\n");
    md.push_str("| Student | Raw score | Theta |\n");
    md.push_str("|---------|-----------|-------|\n");
    for s in &analysis.students {
        md.push_str(&format!(
            "| {} | {} | {:.3} |\n",
            s.student_id, s.raw_score, s.theta
        ));
    }

    md
}
