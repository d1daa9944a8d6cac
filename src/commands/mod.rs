//! CLI command implementations for fgbarcodes.
//!
//! # Commands
//!
//! ## Design
//! - [`design`] - Design literal barcodes (e.g. DNA) at a minimum Hamming distance
//! - [`combinations`] - Select combinations of numbered barcodes at a minimum distance
//!
//! ## Utilities
//! - [`revcomp`] - Reverse complement a list of barcodes
//! - [`check`] - Audit an existing barcode list

#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]

pub mod check;
pub mod combinations;
pub mod command;
pub mod common;
pub mod design;
pub mod revcomp;
