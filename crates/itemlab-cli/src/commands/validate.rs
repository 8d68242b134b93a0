//! The `itemlab validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use itemlab_core::matrix::{build_matrix, validate_matrix};
use itemlab_core::parser::parse_table;

pub fn execute(results_path: PathBuf, metadata_path: Option<PathBuf>) -> Result<()> {
    let results_text = std::fs::read_to_string(&results_path)
        .with_context(|| format!("failed to read results file: {}", results_path.display()))?;
    let results = parse_table(&results_text)?;

    let metadata = match &metadata_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read metadata file: {}", path.display()))?;
            Some(parse_table(&text)?)
        }
        None => None,
    };

    let matrix = build_matrix(&results, metadata.as_ref())?;
    println!(
        "Results: {} students, {} items ({} with metadata)",
        matrix.rows.len(),
        matrix.item_ids.len(),
        matrix
            .item_ids
            .iter()
            .filter(|q| matrix.metadata.contains_key(*q))
            .count()
    );

    let warnings = validate_matrix(&matrix);
    for w in &warnings {
        let prefix = w
            .subject
            .as_ref()
            .map(|s| format!("  [{s}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All inputs valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
