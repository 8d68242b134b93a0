//! Two-section CSV export.
//!
//! Reproduces the layout consumed by downstream spreadsheets: an item
//! analysis section followed by a student analysis section, separated by a
//! blank line. Topics are wrapped in double quotes for display; there is no
//! full CSV escaping (matching the input parser's limitation).

use std::path::Path;

use anyhow::{Context, Result};

use itemlab_core::model::AnalysisResult;

/// Render an analysis as the combined item + student CSV.
pub fn generate_csv(analysis: &AnalysisResult) -> String {
    let mut out = String::from("--- ITEM ANALYSIS ---\n");
    out.push_str("ItemID,Topic,Competency,P_Value,Rpbis_Discrimination,b_Difficulty_IRT\n");

    for item in &analysis.items {
        let topic = item
            .metadata
            .as_ref()
            .map(|m| m.topic.as_str())
            .unwrap_or("N/A");
        let competency = item
            .metadata
            .as_ref()
            .map(|m| m.competency.as_str())
            .unwrap_or("N/A");
        out.push_str(&format!(
            "{},\"{}\",{},{:.3},{:.3},{:.3}\n",
            item.item_id, topic, competency, item.p_val, item.p_bis, item.b
        ));
    }

    out.push_str("\n--- STUDENT ANALYSIS ---\n");
    out.push_str("StudentID,RawScore,Theta\n");

    for s in &analysis.students {
        out.push_str(&format!("{},{},{:.3}\n", s.student_id, s.raw_score, s.theta));
    }

    out
}

/// Write the CSV export to a file, creating parent directories as needed.
pub fn write_csv_report(analysis: &AnalysisResult, path: &Path) -> Result<()> {
    let csv = generate_csv(analysis);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, csv)
        .with_context(|| format!("failed to write CSV report to {}", path.display()))?;
    Ok(())
}
