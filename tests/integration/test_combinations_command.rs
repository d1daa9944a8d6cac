//! End-to-end CLI tests for the combinations command.

use tempfile::TempDir;

use crate::helpers::{arg, assert_success, read_lines, run_fgbarcodes};

/// Parses comma-delimited combination rows.
fn parse_rows(lines: &[String]) -> Vec<Vec<u32>> {
    lines.iter().map(|l| l.split(',').map(|f| f.parse().unwrap()).collect()).collect()
}

#[test]
fn test_two_by_two() {
    let output = run_fgbarcodes(&["combinations", "--counts", "2", "2", "--min-distance", "2"]);
    assert_success(&output);
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1,1\n2,2\n");
}

#[test]
fn test_four_positions() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("combinations.csv");
    let output =
        run_fgbarcodes(&["combinations", "--counts", "4", "8", "2", "2", "-o", arg(&out)]);
    assert_success(&output);

    let rows = parse_rows(&read_lines(&out));
    assert_eq!(rows[0], vec![1, 1, 1, 1]);
    let limits = [4, 8, 2, 2];
    for row in &rows {
        assert_eq!(row.len(), 4);
        assert!(row.iter().zip(limits).all(|(&v, max)| (1..=max).contains(&v)));
    }
    for (i, a) in rows.iter().enumerate() {
        for b in &rows[i + 1..] {
            assert!(a.iter().zip(b).filter(|(x, y)| x != y).count() >= 2);
        }
    }
}

#[test]
fn test_multi_digit_symbols_stay_delimited() {
    let output =
        run_fgbarcodes(&["combinations", "--counts", "12", "1", "--min-distance", "1", "--seed", "10,1"]);
    assert_success(&output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0], "10,1");
    assert_eq!(rows[11], "12,1");
}
