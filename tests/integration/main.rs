//! End-to-end tests for the fgbarcodes binary.
//!
//! Each test runs the built `fgbarcodes` binary on temporary files and checks its output.

mod helpers;
mod test_check_command;
mod test_combinations_command;
mod test_design_command;
mod test_error_paths;
mod test_revcomp_command;
