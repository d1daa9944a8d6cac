//! End-to-end CLI tests for the check command.

use std::fs;

use tempfile::TempDir;

use crate::helpers::{arg, assert_failure_mentions, assert_success, read_lines, run_fgbarcodes};

#[test]
fn test_check_designed_set_passes() {
    let dir = TempDir::new().unwrap();
    let barcodes = dir.path().join("barcodes.txt");
    assert_success(&run_fgbarcodes(&["design", "-l", "5", "-d", "3", "-o", arg(&barcodes)]));

    let output = run_fgbarcodes(&["check", "-i", arg(&barcodes), "-d", "3"]);
    assert_success(&output);
}

#[test]
fn test_check_designed_set_fails_stricter_distance() {
    let dir = TempDir::new().unwrap();
    let barcodes = dir.path().join("barcodes.txt");
    assert_success(&run_fgbarcodes(&["design", "-l", "5", "-d", "2", "-o", arg(&barcodes)]));

    let output = run_fgbarcodes(&["check", "-i", arg(&barcodes), "-d", "3"]);
    assert_failure_mentions(&output, "differ in fewer than 3 positions");
}

#[test]
fn test_check_writes_close_pairs() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("barcodes.txt");
    let pairs = dir.path().join("pairs.tsv");
    fs::write(&input, "ACGTAC\nACGTAA\nTTTTTT\nacgtac\n").unwrap();

    let output = run_fgbarcodes(&[
        "check",
        "-i",
        arg(&input),
        "-d",
        "2",
        "--allow-close-pairs",
        "--pairs-output",
        arg(&pairs),
    ]);
    assert_success(&output);
    assert_eq!(
        read_lines(&pairs),
        vec![
            "code1\tcode2\tdistance",
            "ACGTAC\tACGTAA\t1",
            "ACGTAC\tACGTAC\t0",
            "ACGTAA\tACGTAC\t1",
        ]
    );
}

#[test]
fn test_check_inconsistent_lengths() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("barcodes.txt");
    fs::write(&input, "ACGT\nACG\n").unwrap();

    let output = run_fgbarcodes(&["check", "-i", arg(&input)]);
    assert_failure_mentions(&output, "has 3 symbols");
}
