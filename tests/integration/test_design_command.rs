//! End-to-end CLI tests for the design command.

use std::fs;

use tempfile::TempDir;

use crate::helpers::{
    arg, assert_min_pairwise_distance, assert_success, mismatches, read_lines, run_fgbarcodes,
};

#[test]
fn test_design_to_stdout() {
    let output = run_fgbarcodes(&["design", "--length", "2", "--min-distance", "2"]);
    assert_success(&output);
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "AA\nCC\nGG\nTT\n");
}

#[test]
fn test_design_with_seed() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("barcodes.txt");
    let output = run_fgbarcodes(&[
        "design",
        "-l",
        "6",
        "-d",
        "3",
        "--seed",
        "AACCCG",
        "-o",
        arg(&out),
    ]);
    assert_success(&output);

    let barcodes = read_lines(&out);
    assert_eq!(barcodes[0], "AACCCG");
    assert!(barcodes.len() > 100);
    assert!(barcodes.iter().all(|b| b.len() == 6));
    assert_min_pairwise_distance(&barcodes, 3);
}

#[test]
fn test_design_with_revcomp() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("barcodes.csv");
    let output =
        run_fgbarcodes(&["design", "-l", "2", "-d", "2", "--revcomp", "-o", arg(&out)]);
    assert_success(&output);
    assert_eq!(read_lines(&out), vec!["AA,TT", "CC,GG", "GG,CC", "TT,AA"]);
}

#[test]
fn test_design_restriction_site_orders() {
    let dir = TempDir::new().unwrap();
    let select_first = dir.path().join("select_first.txt");
    let filter_first = dir.path().join("filter_first.txt");

    let output = run_fgbarcodes(&["design", "-l", "2", "-d", "2", "-r", "cc", "-o", arg(&select_first)]);
    assert_success(&output);
    assert_eq!(read_lines(&select_first), vec!["AA", "GG", "TT"]);

    let output = run_fgbarcodes(&[
        "design",
        "-l",
        "2",
        "-d",
        "2",
        "-r",
        "CC",
        "--filter-order",
        "filter-then-select",
        "-o",
        arg(&filter_first),
    ]);
    assert_success(&output);
    assert_eq!(read_lines(&filter_first), vec!["AA", "CG", "GC", "TT"]);
}

#[test]
fn test_design_metrics() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("barcodes.txt");
    let metrics = dir.path().join("metrics.tsv");
    let output = run_fgbarcodes(&[
        "design",
        "-l",
        "2",
        "-d",
        "2",
        "-r",
        "CC",
        "-o",
        arg(&out),
        "--metrics",
        arg(&metrics),
    ]);
    assert_success(&output);

    let contents = fs::read_to_string(&metrics).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "code_length\tmin_distance\tfilter_order\tcandidates_scanned\t\
         prefiltered_by_restriction_site\trejected_by_distance\tselected\t\
         removed_by_restriction_site\tbarcodes"
    );
    assert_eq!(lines[1], "2\t2\tselect-then-filter\t16\t0\t13\t4\t1\t3");
}

#[test]
fn test_design_threads_do_not_change_output() {
    let dir = TempDir::new().unwrap();
    let single = dir.path().join("single.txt");
    let multi = dir.path().join("multi.txt");

    assert_success(&run_fgbarcodes(&["design", "-l", "5", "-d", "2", "-o", arg(&single)]));
    assert_success(&run_fgbarcodes(&[
        "design",
        "-l",
        "5",
        "-d",
        "2",
        "--threads",
        "4",
        "-o",
        arg(&multi),
    ]));
    assert_eq!(read_lines(&single), read_lines(&multi));
}

#[test]
fn test_design_custom_alphabet() {
    let output = run_fgbarcodes(&["design", "-l", "3", "-d", "3", "--alphabet", "xy"]);
    assert_success(&output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let barcodes: Vec<&str> = stdout.lines().collect();
    assert_eq!(barcodes, vec!["XXX", "YYY"]);
    assert_eq!(mismatches(barcodes[0], barcodes[1]), 3);
}
