//! Integration tests for the payout converter CLI.
//!
//! These tests run the actual binary and verify output against expected CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

fn converter() -> Command {
    let mut cmd = Command::cargo_bin("payout-converter").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run the binary with the given input file and return stdout
fn run_converter(input_file: &str) -> String {
    let assert = converter().arg(input_file).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn temp_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_modern_export() {
    let output = run_converter(&test_data_path("sample_modern.csv"));
    let expected = fs::read_to_string(test_data_path("expected_modern.csv")).unwrap();

    assert_eq!(output, expected);
}

#[test]
fn test_legacy_export_uses_placeholders() {
    let output = run_converter(&test_data_path("sample_legacy.csv"));
    let expected = fs::read_to_string(test_data_path("expected_legacy.csv")).unwrap();

    assert_eq!(output, expected);
}

#[test]
fn test_legacy_export_diagnostics_on_stderr() {
    let assert = converter()
        .arg(test_data_path("sample_legacy.csv"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Processed 2 rows"));
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();

    // One warning per missing column on each of the two rows
    assert_eq!(stderr.matches("'last 4 digits' missing").count(), 2);
    assert_eq!(stderr.matches("'payout id' missing").count(), 2);
}

#[test]
fn test_modern_export_has_no_legacy_warnings() {
    converter()
        .arg(test_data_path("sample_modern.csv"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Legacy format detected").not());
}

#[test]
fn test_non_zero_tip_and_tax_are_reported() {
    let output = run_converter(&test_data_path("sample_tip_tax.csv"));
    let expected = fs::read_to_string(test_data_path("expected_tip_tax.csv")).unwrap();
    assert_eq!(output, expected);

    converter()
        .arg(test_data_path("sample_tip_tax.csv"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Row 2: Non-zero tip amount 1.50"))
        .stderr(predicate::str::contains("Row 3: Non-zero tax amount 0.80"))
        .stderr(predicate::str::contains("Row 3: Non-zero tip amount").not());
}

#[test]
fn test_skipped_rows_are_reported() {
    converter()
        .arg(test_data_path("sample_modern.csv"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Row 4: Skipping Failed transaction"))
        .stderr(predicate::str::contains("Row 5: Skipping Cancelled transaction"));
}

#[test]
fn test_reconciliation_mismatch_fails_without_output() {
    converter()
        .arg(test_data_path("sample_mismatch.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Reconciliation failed at row 3: fee 0.30 + payout 9.69 != total 10.00",
        ));
}

#[test]
fn test_unknown_status_fails() {
    converter()
        .arg(test_data_path("sample_unknown_status.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unrecognized status 'Unknown_status_x' at row 2",
        ));
}

#[test]
fn test_unknown_header_fails() {
    let input = temp_csv("Date,Status,Shoe Size\n2021-03-01,Successful,9\n");

    converter()
        .arg(input.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown header 'Shoe Size' in column 3"));
}

#[test]
fn test_invalid_amount_names_row_and_field() {
    let input = temp_csv("Date,Status,Total,Last 4 Digits,Payout ID\n2021-03-01,Successful,12.3.4,1234,PO-1\n");

    converter()
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount in 'total' at row 2"));
}

#[test]
fn test_header_only_input() {
    let input = temp_csv("Date,Status,Total\n");

    let assert = converter().arg(input.path()).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, "Date,Reference,Amount\n");
}

#[test]
fn test_output_is_idempotent() {
    let first = run_converter(&test_data_path("sample_modern.csv"));
    let second = run_converter(&test_data_path("sample_modern.csv"));

    assert_eq!(first, second);
}

#[test]
fn test_verbose_traces_emitted_lines() {
    converter()
        .arg("--verbose")
        .arg(test_data_path("sample_modern.csv"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Row 3: 2021-03-03"));
}

#[test]
fn test_missing_file_error() {
    converter()
        .arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    converter()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_output_has_correct_header() {
    let output = run_converter(&test_data_path("sample_modern.csv"));
    assert!(output.starts_with("Date,Reference,Amount\n"));
}
