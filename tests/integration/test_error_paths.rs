//! Error path integration tests.
//!
//! These tests verify that invalid parameters and inputs are reported with clear messages
//! and a failing exit status.

use crate::helpers::{assert_failure_mentions, run_fgbarcodes};

#[test]
fn test_min_distance_above_length() {
    let output = run_fgbarcodes(&["design", "-l", "4", "-d", "5"]);
    assert_failure_mentions(&output, "must be between 1 and 4");
}

#[test]
fn test_min_distance_zero() {
    let output = run_fgbarcodes(&["combinations", "--counts", "2", "2", "-d", "0"]);
    assert_failure_mentions(&output, "Invalid minimum distance 0");
}

#[test]
fn test_seed_length_mismatch() {
    let output = run_fgbarcodes(&["design", "-l", "4", "-d", "2", "--seed", "ACG"]);
    assert_failure_mentions(&output, "--seed ACG has 3 symbols");
}

#[test]
fn test_combination_seed_length_mismatch() {
    let output = run_fgbarcodes(&["combinations", "--counts", "2", "2", "--seed", "1,1,1"]);
    assert_failure_mentions(&output, "has 3 positions");
}

#[test]
fn test_empty_position() {
    let output = run_fgbarcodes(&["combinations", "--counts", "2", "0", "-d", "1"]);
    assert_failure_mentions(&output, "Invalid alphabet at position 1");
}

#[test]
fn test_duplicate_alphabet_symbol() {
    let output = run_fgbarcodes(&["design", "-l", "3", "-d", "1", "--alphabet", "ACA"]);
    assert_failure_mentions(&output, "listed more than once");
}

#[test]
fn test_bad_pairs() {
    let output = run_fgbarcodes(&["design", "-l", "3", "-d", "1", "--revcomp", "--pairs", "AT,AG"]);
    assert_failure_mentions(&output, "Invalid symbol pairing");
}

#[test]
fn test_revcomp_of_unpaired_alphabet() {
    let output = run_fgbarcodes(&["design", "-l", "2", "-d", "1", "--alphabet", "ACN", "--revcomp"]);
    assert_failure_mentions(&output, "has no defined pairing");
}

#[test]
fn test_missing_input_file() {
    let output = run_fgbarcodes(&["revcomp", "-i", "/nonexistent/barcodes.txt"]);
    assert_failure_mentions(&output, "does not exist");
}

#[test]
fn test_empty_restriction_site() {
    let output = run_fgbarcodes(&["design", "-l", "3", "-d", "1", "-r", ""]);
    assert_failure_mentions(&output, "restriction sites must not be empty");
}

#[test]
fn test_design_metrics_unwritable() {
    let output = run_fgbarcodes(&[
        "design",
        "-l",
        "2",
        "-d",
        "2",
        "-m",
        "/nonexistent/dir/metrics.tsv",
    ]);
    assert_failure_mentions(&output, "Failed to write barcode selection metrics");
}

#[test]
fn test_combinations_metrics_unwritable() {
    let output = run_fgbarcodes(&[
        "combinations",
        "--counts",
        "2",
        "2",
        "-m",
        "/nonexistent/dir/metrics.tsv",
    ]);
    assert_failure_mentions(&output, "Failed to write barcode selection metrics");
}
