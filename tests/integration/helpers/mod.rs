//! Helper utilities for integration tests.

pub mod assertions;

pub use assertions::*;

use std::path::Path;
use std::process::{Command, Output};

/// Runs the fgbarcodes binary with `args`, returning its captured output.
pub fn run_fgbarcodes(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fgbarcodes"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run fgbarcodes")
}

/// Reads a file into its non-empty lines.
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output")
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Converts a path to `&str` for use on a command line.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("Temporary path is not UTF-8")
}
