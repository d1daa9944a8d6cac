#![deny(unsafe_code)]

//! Symbol pairing and reverse-complement utilities.
//!
//! This crate provides the one sequence transform barcode design needs after selection:
//! - A bijective symbol-pairing map ([`PairingMap`]), defaulting to Watson-Crick pairs
//! - Strict reverse complement of flattened codes, failing on unmapped symbols

pub mod dna;

// Re-export submodule contents at crate root for convenience
pub use dna::{PairingError, PairingMap, UnmappedSymbol, reverse_complement, reverse_complements};

/// Default pairing specification for nucleotide barcodes (A<->T, C<->G).
pub const DNA_PAIRS: &str = "AT,CG";
