//! Integration tests for the nacha-batch CLI.
//!
//! These tests run the actual binary and verify output against expected files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Header options shared by the fixture runs
const HEADER_ARGS: [&str; 12] = [
    "--company-name",
    "ACME CORP",
    "--company-id",
    "1234567890",
    "--originating-dfi",
    "09101298",
    "--batch-number",
    "1",
    "--description",
    "PAYROLL",
    "--effective-date",
    "261019",
];

/// Run the binary with the given input file and return stdout
fn run_batch(input_file: &str) -> String {
    let mut cmd = Command::cargo_bin("nacha-batch").unwrap();
    let assert = cmd.arg(input_file).args(HEADER_ARGS).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_sample_mixed_matches_expected() {
    let output = run_batch(&test_data_path("sample_mixed.csv"));
    let expected = fs::read_to_string(test_data_path("expected_mixed.ach")).unwrap();

    assert_eq!(output, expected);
}

#[test]
fn test_every_line_is_94_characters() {
    for sample in ["sample_mixed.csv", "sample_credits.csv", "sample_empty.csv"] {
        let output = run_batch(&test_data_path(sample));
        for line in output.lines() {
            assert_eq!(line.len(), 94, "Bad line width in {}: {:?}", sample, line);
        }
    }
}

#[test]
fn test_sample_credits_only() {
    let output = run_batch(&test_data_path("sample_credits.csv"));
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(&lines[0][1..4], "220");
    assert_eq!(&lines[1][1..3], "22");
    assert_eq!(&lines[2][1..3], "32");

    let footer = lines[3];
    assert_eq!(&footer[1..4], "220");
    assert_eq!(&footer[4..10], "000002");
    assert_eq!(&footer[10..20], "0152802468");
    assert_eq!(&footer[20..32], "000000000000");
    assert_eq!(&footer[32..44], "000000000300");
}

#[test]
fn test_empty_input_renders_header_and_footer() {
    let output = run_batch(&test_data_path("sample_empty.csv"));
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("5200ACME CORP"));
    assert!(lines[1].starts_with(&format!("8200{}", "0".repeat(40))));
}

#[test]
fn test_invalid_row_fails_without_output() {
    let mut cmd = Command::cargo_bin("nacha-batch").unwrap();
    cmd.arg(test_data_path("sample_invalid.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("row 3"));
}

#[test]
fn test_adhoc_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "kind,routing,account,amount,name,id,trace,addenda").unwrap();
    writeln!(file, "debit,12345678,42,10000,Debtor,,1,").unwrap();
    writeln!(file, "credit,87654321,43,5000,Creditor,,2,").unwrap();
    file.flush().unwrap();

    let output = run_batch(file.path().to_str().unwrap());
    let footer = output.lines().last().unwrap();
    assert_eq!(&footer[..20], "82000000020099999999");
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("nacha-batch").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("nacha-batch").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("INPUT"));
}

#[test]
fn test_oversized_batch_number_is_rejected() {
    let mut cmd = Command::cargo_bin("nacha-batch").unwrap();
    cmd.arg(test_data_path("sample_mixed.csv"))
        .args(["--batch-number", "12345678"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("7-digit"));
}
