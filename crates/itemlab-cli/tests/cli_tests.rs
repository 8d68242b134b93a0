//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RESULTS: &str = "StudentID,Q1,Q2\nS1,1,1\nS2,1,0\nS3,0,1\nS4,0,0\n";
const METADATA: &str = "ItemID,Topic,DifficultyLevel,Competency\nQ1,Algebra,Easy,NT1\n";

fn itemlab() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("itemlab").unwrap()
}

fn write_inputs(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let results = dir.path().join("results.csv");
    let metadata = dir.path().join("metadata.csv");
    std::fs::write(&results, RESULTS).unwrap();
    std::fs::write(&metadata, METADATA).unwrap();
    (results, metadata)
}

#[test]
fn analyze_prints_summary_table() {
    let dir = TempDir::new().unwrap();
    let (results, metadata) = write_inputs(&dir);

    itemlab()
        .arg("analyze")
        .arg("--results")
        .arg(&results)
        .arg("--metadata")
        .arg(&metadata)
        .assert()
        .success()
        .stdout(predicate::str::contains("Algebra"))
        .stdout(predicate::str::contains("0.707"))
        .stdout(predicate::str::contains("Reliability (KR-20): 0.000"))
        .stdout(predicate::str::contains("4 students x 2 items"));
}

#[test]
fn analyze_without_metadata_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let (results, _) = write_inputs(&dir);

    itemlab()
        .arg("analyze")
        .arg("--results")
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::contains("Q1"));
}

#[test]
fn analyze_writes_requested_artifacts() {
    let dir = TempDir::new().unwrap();
    let (results, metadata) = write_inputs(&dir);
    let output = dir.path().join("out");

    itemlab()
        .arg("analyze")
        .arg("--results")
        .arg(&results)
        .arg("--metadata")
        .arg(&metadata)
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("json,csv,markdown")
        .assert()
        .success();

    let names: Vec<String> = std::fs::read_dir(&output)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(names.iter().any(|n| n.ends_with(".json")));
    assert!(names.iter().any(|n| n.ends_with(".csv")));
    assert!(names.iter().any(|n| n.ends_with(".md")));
}

#[test]
fn analyze_nonexistent_results_fails() {
    itemlab()
        .arg("analyze")
        .arg("--results")
        .arg("no_such_file.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn analyze_empty_results_reports_malformed_input() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("empty.csv");
    std::fs::write(&results, "").unwrap();

    itemlab()
        .arg("analyze")
        .arg("--results")
        .arg(&results)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed input"));
}

#[test]
fn analyze_header_only_results_reports_no_data() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("header_only.csv");
    std::fs::write(&results, "StudentID,Q1,Q2\n").unwrap();

    itemlab()
        .arg("analyze")
        .arg("--results")
        .arg(&results)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no student results found"));
}

#[test]
fn validate_clean_inputs() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results.csv");
    let metadata = dir.path().join("metadata.csv");
    std::fs::write(&results, "StudentID,Q1\nS1,1\nS2,0\n").unwrap();
    std::fs::write(&metadata, "ItemID,Topic,DifficultyLevel,Competency\nQ1,Algebra,Easy,NT1\n")
        .unwrap();

    itemlab()
        .arg("validate")
        .arg("--results")
        .arg(&results)
        .arg("--metadata")
        .arg(&metadata)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 students, 1 items"))
        .stdout(predicate::str::contains("All inputs valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results.csv");
    std::fs::write(&results, "StudentID,Q1,Q2\nS1,1,2\nS1,0,1\n").unwrap();

    itemlab()
        .arg("validate")
        .arg("--results")
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate student ID"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn help_output() {
    itemlab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Classroom test item analysis"));
}

#[test]
fn version_output() {
    itemlab()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("itemlab"));
}
