//! Symbol pairing and reverse complements.
//!
//! Re-exported from the `fgbarcodes-dna` crate so the library exposes one import path.

pub use fgbarcodes_dna::{
    DNA_PAIRS, PairingError, PairingMap, UnmappedSymbol, reverse_complement, reverse_complements,
};
