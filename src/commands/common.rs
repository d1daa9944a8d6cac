//! Common CLI options shared across commands.
//!
//! This module provides shared argument structures that can be composed into
//! command structs using `#[command(flatten)]`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fgbarcodes_lib::dna::{DNA_PAIRS, PairingMap};
use fgbarcodes_lib::errors::BarcodeError;
use fgbarcodes_lib::io::open_output;

/// Output destination for barcode records.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputOptions {
    /// Output file; barcodes are written to standard output when omitted
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl OutputOptions {
    /// Opens the output file, or standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        open_output(self.output.as_deref())
    }

    /// Human-readable description of the destination for logging.
    #[must_use]
    pub fn describe(&self) -> String {
        self.output.as_ref().map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string())
    }
}

/// Optional metrics file.
#[derive(Debug, Clone, Default, Args)]
pub struct MetricsOptions {
    /// Optional output TSV file for selection metrics
    #[arg(short = 'm', long = "metrics")]
    pub metrics: Option<PathBuf>,
}

/// Threading options for distance comparisons.
#[derive(Debug, Clone, Args)]
pub struct ThreadingOptions {
    /// Number of threads used to compare each candidate against large accepted sets.
    ///
    /// Candidates are always decided one at a time in generation order, so the output does not
    /// depend on the thread count.
    #[arg(short = 't', long = "threads", default_value_t = 1)]
    pub threads: usize,
}

impl Default for ThreadingOptions {
    fn default() -> Self {
        Self { threads: 1 }
    }
}

impl ThreadingOptions {
    /// Returns a description of the threading mode for logging.
    #[must_use]
    pub fn log_message(&self) -> String {
        if self.threads > 1 {
            format!("Using {} threads for distance comparisons", self.threads)
        } else {
            "Using single-threaded distance comparisons".to_string()
        }
    }
}

/// Symbol pairing used for reverse complements.
#[derive(Debug, Clone, Args)]
pub struct PairingOptions {
    /// Comma-separated symbol pairs, each pair complementing in both directions
    #[arg(long = "pairs", default_value = DNA_PAIRS)]
    pub pairs: String,
}

impl Default for PairingOptions {
    fn default() -> Self {
        Self { pairs: DNA_PAIRS.to_string() }
    }
}

impl PairingOptions {
    /// Parses the pairing specification, upper-casing it first.
    ///
    /// # Errors
    ///
    /// Returns an error if the pairs are malformed or not a bijection.
    pub fn pairing_map(&self) -> Result<PairingMap> {
        Ok(PairingMap::parse(&self.pairs.to_uppercase()).map_err(BarcodeError::from)?)
    }
}
