//! Custom error types for fgbarcodes operations.

use fgbarcodes_dna::{PairingError, UnmappedSymbol};
use thiserror::Error;

/// Result type alias for fgbarcodes operations
pub type Result<T> = std::result::Result<T, BarcodeError>;

/// Error type for fgbarcodes operations.
///
/// Every variant describes a deterministic input problem: the same inputs always produce the
/// same error, so none of them is worth retrying.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BarcodeError {
    /// A per-position symbol list is empty or otherwise unusable
    #[error("Invalid alphabet at position {position}: {reason}")]
    InvalidAlphabet {
        /// Zero-based position of the offending symbol list
        position: usize,
        /// Explanation of the problem
        reason: String,
    },

    /// Two codes of different lengths were compared
    #[error("Code length mismatch: expected {expected} symbols, found {actual}")]
    LengthMismatch {
        /// Length of the reference code
        expected: usize,
        /// Length of the other code
        actual: usize,
    },

    /// The seed code does not have the same length as the candidate codes
    #[error("Seed has {seed_length} symbols but candidate codes have {code_length}")]
    SeedLengthMismatch {
        /// Length of the seed
        seed_length: usize,
        /// Length of every candidate code
        code_length: usize,
    },

    /// The minimum distance is zero or larger than the code length
    #[error("Invalid minimum distance {min_distance}: must be between 1 and {code_length}")]
    InvalidThreshold {
        /// The rejected minimum distance
        min_distance: usize,
        /// Code length bounding the distance
        code_length: usize,
    },

    /// Reverse complement requested for a symbol outside the pairing map
    #[error(transparent)]
    UnmappedSymbol(#[from] UnmappedSymbol),

    /// A symbol pairing specification is not a bijection
    #[error("Invalid symbol pairing: {0}")]
    InvalidPairing(#[from] PairingError),

    /// A symbol cannot be rendered as a single character when flattening a code
    #[error("Symbol '{symbol}' cannot be flattened to a single character")]
    UnflattenableSymbol {
        /// The symbol as it would be displayed
        symbol: String,
    },

    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// File format error
    #[error("Invalid {file_type} file '{path}': {reason}")]
    InvalidFileFormat {
        /// Type of file (e.g., "barcode list")
        file_type: String,
        /// Path to the file
        path: String,
        /// Explanation of the problem
        reason: String,
    },
}
