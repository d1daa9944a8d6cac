//! End-to-end CLI tests for the revcomp command.

use std::fs;

use tempfile::TempDir;

use crate::helpers::{arg, assert_failure_mentions, assert_success, read_lines, run_fgbarcodes};

#[test]
fn test_revcomp_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("barcodes.csv");
    let out = dir.path().join("revcomp.csv");
    fs::write(&input, "AACG\nacgt\n\nG,G,A,T\n").unwrap();

    let output = run_fgbarcodes(&["revcomp", "-i", arg(&input), "-o", arg(&out)]);
    assert_success(&output);
    assert_eq!(read_lines(&out), vec!["AACG,CGTT", "ACGT,ACGT", "GGAT,ATCC"]);
}

#[test]
fn test_revcomp_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("barcodes.txt");
    fs::write(&input, "AACCGGTA\nTTGACA\n").unwrap();

    let output = run_fgbarcodes(&["revcomp", "-i", arg(&input)]);
    assert_success(&output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let complements: Vec<&str> =
        stdout.lines().map(|l| l.split(',').nth(1).unwrap()).collect();

    let again = dir.path().join("complements.txt");
    fs::write(&again, complements.join("\n")).unwrap();
    let output = run_fgbarcodes(&["revcomp", "-i", arg(&again)]);
    assert_success(&output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let back: Vec<&str> = stdout.lines().map(|l| l.split(',').nth(1).unwrap()).collect();
    assert_eq!(back, vec!["AACCGGTA", "TTGACA"]);
}

#[test]
fn test_revcomp_custom_pairs() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("codes.txt");
    fs::write(&input, "XYZ\n").unwrap();

    let output = run_fgbarcodes(&["revcomp", "-i", arg(&input), "--pairs", "XY,ZZ"]);
    assert_success(&output);
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "XYZ,ZXY\n");
}

#[test]
fn test_revcomp_unmapped_symbol() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("barcodes.txt");
    fs::write(&input, "AACG\nAANG\n").unwrap();

    let output = run_fgbarcodes(&["revcomp", "-i", arg(&input)]);
    assert_failure_mentions(&output, "Symbol 'N' at position 2");
}

#[test]
fn test_revcomp_quoted_fields() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("barcodes.csv");
    let out = dir.path().join("revcomp.csv");
    fs::write(&input, "\"AACG\"\n\"G\",\"G\",\"A\",\"T\"\n").unwrap();

    let output = run_fgbarcodes(&["revcomp", "-i", arg(&input), "-o", arg(&out)]);
    assert_success(&output);
    assert_eq!(read_lines(&out), vec!["AACG,CGTT", "GGAT,ATCC"]);
}
