//! The `itemlab analyze` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use itemlab_core::engine::analyze;
use itemlab_core::model::AnalysisResult;
use itemlab_report::csv::write_csv_report;
use itemlab_report::digest::render_markdown;
use itemlab_report::json::save_json;

pub fn execute(
    results_path: PathBuf,
    metadata_path: Option<PathBuf>,
    output: PathBuf,
    format: String,
) -> Result<()> {
    let results_text = std::fs::read_to_string(&results_path)
        .with_context(|| format!("failed to read results file: {}", results_path.display()))?;

    let metadata_text = match &metadata_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read metadata file: {}", path.display()))?,
        None => String::new(),
    };

    let analysis = analyze(&results_text, &metadata_text)?;

    let formats: Vec<&str> = if format == "all" {
        vec!["table", "json", "csv", "markdown"]
    } else {
        format.split(',').map(|f| f.trim()).collect()
    };

    if formats.contains(&"table") {
        print_summary(&analysis);
    }

    let file_formats: Vec<&&str> = formats.iter().filter(|f| **f != "table").collect();
    if !file_formats.is_empty() {
        std::fs::create_dir_all(&output)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

        for fmt in file_formats {
            match *fmt {
                "json" => {
                    let path = output.join(format!("analysis-{timestamp}.json"));
                    save_json(&analysis, &path)?;
                    eprintln!("JSON report: {}", path.display());
                }
                "csv" => {
                    let path = output.join(format!("analysis-{timestamp}.csv"));
                    write_csv_report(&analysis, &path)?;
                    eprintln!("CSV report: {}", path.display());
                }
                "markdown" | "md" => {
                    let path = output.join(format!("analysis-{timestamp}.md"));
                    std::fs::write(&path, render_markdown(&analysis))?;
                    eprintln!("Markdown report: {}", path.display());
                }
                _ => {
                    eprintln!("Unknown format: {fmt}");
                }
            }
        }
    }

    Ok(())
}

fn print_summary(analysis: &AnalysisResult) {
    let mut items = Table::new();
    items.set_header(vec!["Item", "Topic", "p-value", "Rpbis", "b"]);
    for item in &analysis.items {
        let topic = item
            .metadata
            .as_ref()
            .map(|m| m.topic.as_str())
            .unwrap_or("-");
        items.add_row(vec![
            Cell::new(&item.item_id),
            Cell::new(topic),
            Cell::new(format!("{:.3}", item.p_val)),
            Cell::new(format!("{:.3}", item.p_bis)),
            Cell::new(format!("{:.3}", item.b)),
        ]);
    }

    let mut students = Table::new();
    students.set_header(vec!["Student", "Raw score", "Theta"]);
    for s in &analysis.students {
        students.add_row(vec![
            Cell::new(&s.student_id),
            Cell::new(s.raw_score),
            Cell::new(format!("{:.3}", s.theta)),
        ]);
    }

    println!("{items}");
    println!("{students}");
    println!(
        "Reliability (KR-20): {:.3} | mean score {:.2} (SD {:.2}) | {} students x {} items",
        analysis.reliability,
        analysis.summary.mean_score,
        analysis.summary.std_dev,
        analysis.summary.student_count,
        analysis.summary.item_count
    );
}
