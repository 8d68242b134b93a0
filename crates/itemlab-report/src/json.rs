//! JSON persistence for analysis results.

use std::path::Path;

use anyhow::{Context, Result};

use itemlab_core::model::AnalysisResult;

/// Save an analysis as pretty-printed JSON.
pub fn save_json(analysis: &AnalysisResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(analysis).context("failed to serialize analysis")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write analysis to {}", path.display()))?;
    Ok(())
}

/// Load an analysis from a JSON file.
pub fn load_json(path: &Path) -> Result<AnalysisResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read analysis from {}", path.display()))?;
    let analysis: AnalysisResult =
        serde_json::from_str(&content).context("failed to parse analysis JSON")?;
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemlab_core::engine::analyze;

    #[test]
    fn json_roundtrip() {
        let analysis = analyze(
            "StudentID,Q1,Q2\nS1,1,0\nS2,0,1\nS3,1,1",
            "ItemID,Topic\nQ1,Algebra",
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");

        save_json(&analysis, &path).unwrap();
        let loaded = load_json(&path).unwrap();
        assert_eq!(loaded, analysis);
    }

    #[test]
    fn load_missing_file_fails_with_path() {
        let err = load_json(Path::new("no_such_analysis.json")).unwrap_err();
        assert!(err.to_string().contains("no_such_analysis.json"));
    }
}
