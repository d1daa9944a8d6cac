//! Input validation for command-line parameters and files.
//!
//! Each check returns a [`BarcodeError`] naming the offending parameter, so commands can report
//! bad input before doing any work.

use std::fmt::Display;
use std::path::Path;

use crate::errors::{BarcodeError, Result};

/// Validate that a file exists.
///
/// # Errors
/// Returns [`BarcodeError::InvalidFileFormat`] if the file does not exist
///
/// # Example
/// ```
/// use fgbarcodes_lib::validation::validate_file_exists;
///
/// let result = validate_file_exists("/nonexistent/barcodes.txt", "Barcode list");
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BarcodeError::InvalidFileFormat {
            file_type: description.to_string(),
            path: path.display().to_string(),
            reason: "File does not exist".to_string(),
        });
    }
    Ok(())
}

/// Validate that a value is positive (> 0).
///
/// # Errors
/// Returns [`BarcodeError::InvalidParameter`] if the value is zero or negative
///
/// # Example
/// ```
/// use fgbarcodes_lib::validation::validate_positive;
///
/// validate_positive(8, "length").unwrap();
/// assert!(validate_positive(0, "length").is_err());
/// ```
#[allow(clippy::needless_pass_by_value)]
pub fn validate_positive<T: Ord + Display + Default>(value: T, name: &str) -> Result<()> {
    if value <= T::default() {
        return Err(BarcodeError::InvalidParameter {
            parameter: name.to_string(),
            reason: format!("Must be positive (> 0), got: {value}"),
        });
    }
    Ok(())
}

/// Validate that a minimum distance can be met by codes of `code_length` symbols.
///
/// # Errors
/// Returns [`BarcodeError::InvalidThreshold`] unless `1 <= min_distance <= code_length`
///
/// # Example
/// ```
/// use fgbarcodes_lib::validation::validate_min_distance;
///
/// validate_min_distance(3, 8).unwrap();
/// assert!(validate_min_distance(9, 8).is_err());
/// ```
pub fn validate_min_distance(min_distance: usize, code_length: usize) -> Result<()> {
    if min_distance == 0 || min_distance > code_length {
        return Err(BarcodeError::InvalidThreshold { min_distance, code_length });
    }
    Ok(())
}

/// Validate a literal symbol set: non-empty, no repeats, and no delimiter characters.
///
/// Commas and whitespace are rejected since output rows are comma-delimited.
///
/// # Errors
/// Returns [`BarcodeError::InvalidParameter`] describing the first problem found
///
/// # Example
/// ```
/// use fgbarcodes_lib::validation::validate_symbol_set;
///
/// validate_symbol_set(&['A', 'C', 'G', 'T'], "alphabet").unwrap();
/// assert!(validate_symbol_set(&['A', 'A'], "alphabet").is_err());
/// ```
pub fn validate_symbol_set(symbols: &[char], name: &str) -> Result<()> {
    let invalid =
        |reason: String| BarcodeError::InvalidParameter { parameter: name.to_string(), reason };

    if symbols.is_empty() {
        return Err(invalid("At least one symbol is required".to_string()));
    }
    for (i, &symbol) in symbols.iter().enumerate() {
        if symbol == ',' || symbol.is_whitespace() {
            return Err(invalid(format!("Symbol {symbol:?} is a delimiter")));
        }
        if symbols[..i].contains(&symbol) {
            return Err(invalid(format!("Symbol '{symbol}' is listed more than once")));
        }
    }
    Ok(())
}
