//! Hamming distance between codes.
//!
//! Distances are exact integer mismatch counts. Deriving them from a normalised fraction
//! multiplied back by the code length can round to just below an integer threshold for long
//! codes, which silently flips accept/reject decisions; nothing here goes through floating point.

use crate::alphabet::Symbol;
use crate::code::Code;
use crate::errors::{BarcodeError, Result};

/// Counts the positions at which two equal-length codes differ.
///
/// # Errors
///
/// Returns [`BarcodeError::LengthMismatch`] if the codes have different lengths.
///
/// # Examples
///
/// ```
/// use fgbarcodes_lib::code::Code;
/// use fgbarcodes_lib::distance::hamming_distance;
///
/// let a = Code::from_literal("ACGT");
/// let b = Code::from_literal("ACTA");
/// assert_eq!(hamming_distance(&a, &b).unwrap(), 2);
/// assert!(hamming_distance(&a, &Code::from_literal("ACG")).is_err());
/// ```
pub fn hamming_distance(a: &Code, b: &Code) -> Result<usize> {
    check_lengths(a, b)?;
    Ok(count_mismatches(a.symbols(), b.symbols()))
}

/// Fails with [`BarcodeError::LengthMismatch`] unless both codes have the same length.
///
/// # Errors
///
/// Returns [`BarcodeError::LengthMismatch`] if the codes have different lengths.
#[inline]
pub fn check_lengths(a: &Code, b: &Code) -> Result<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(BarcodeError::LengthMismatch { expected: a.len(), actual: b.len() })
    }
}

/// Counts mismatching positions of two equal-length symbol slices.
#[inline]
#[must_use]
pub fn count_mismatches(a: &[Symbol], b: &[Symbol]) -> usize {
    debug_assert_eq!(a.len(), b.len(), "Codes must have equal length");
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Counts mismatches with early termination once `max_mismatches` is exceeded.
///
/// The returned value is exact when it is at most `max_mismatches`; otherwise it is some value
/// greater than `max_mismatches`.
///
/// # Examples
///
/// ```
/// use fgbarcodes_lib::code::Code;
/// use fgbarcodes_lib::distance::count_mismatches_with_max;
///
/// let a = Code::from_literal("AAAAAA");
/// assert_eq!(count_mismatches_with_max(a.symbols(), Code::from_literal("AAAAAT").symbols(), 10), 1);
/// assert_eq!(count_mismatches_with_max(a.symbols(), Code::from_literal("CCCCCC").symbols(), 2), 3);
/// ```
#[inline]
#[must_use]
pub fn count_mismatches_with_max(a: &[Symbol], b: &[Symbol], max_mismatches: usize) -> usize {
    debug_assert_eq!(a.len(), b.len(), "Codes must have equal length");
    let mut mismatches = 0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            mismatches += 1;
            if mismatches > max_mismatches {
                return mismatches;
            }
        }
    }
    mismatches
}

/// True if two equal-length symbol slices differ in at least `min_distance` positions.
///
/// Stops comparing as soon as `min_distance` mismatches have been seen.
#[inline]
#[must_use]
pub fn is_at_least_distance(a: &[Symbol], b: &[Symbol], min_distance: usize) -> bool {
    min_distance == 0 || count_mismatches_with_max(a, b, min_distance - 1) >= min_distance
}

/// Finds all pairs of codes closer than `min_distance`.
///
/// Returns `(i, j, distance)` triples with `i < j`, in input order. Duplicated codes show up
/// as pairs at distance zero.
///
/// # Errors
///
/// Returns [`BarcodeError::LengthMismatch`] if the codes do not all share the length of the
/// first code.
pub fn find_pairs_below_distance(
    codes: &[Code],
    min_distance: usize,
) -> Result<Vec<(usize, usize, usize)>> {
    if let Some(first) = codes.first() {
        for code in codes {
            check_lengths(first, code)?;
        }
    }

    let mut pairs = Vec::new();
    if min_distance == 0 {
        return Ok(pairs);
    }
    for i in 0..codes.len() {
        for j in (i + 1)..codes.len() {
            let d =
                count_mismatches_with_max(codes[i].symbols(), codes[j].symbols(), min_distance - 1);
            if d < min_distance {
                pairs.push((i, j, d));
            }
        }
    }
    Ok(pairs)
}
