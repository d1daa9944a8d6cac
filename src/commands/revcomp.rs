//! Reverse complement a list of barcodes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fgbarcodes_lib::dna::reverse_complement;
use fgbarcodes_lib::io::{read_barcodes, write_barcodes};
use fgbarcodes_lib::logging::OperationTimer;
use fgbarcodes_lib::validation::validate_file_exists;
use log::{debug, info};

use crate::commands::command::Command;
use crate::commands::common::{OutputOptions, PairingOptions};

/// Write each barcode in a file next to its reverse complement.
#[derive(Debug, Parser)]
#[command(
    name = "revcomp",
    about = "\x1b[38;5;166m[UTILITIES]\x1b[0m      \x1b[36mReverse complement a list of barcodes\x1b[0m",
    long_about = r#"
Reverse complement a list of barcodes.

The input has one barcode per line. Comma-, tab- or space-delimited fields on a line are joined
into a single barcode, so the output of `fgbarcodes combinations` or a single-column CSV both
work. Blank lines are skipped and barcodes are upper-cased.

Output is barcode,reverse-complement per line with no header. Every symbol must have a partner
in --pairs.

Example usage:
  fgbarcodes revcomp -i barcodes.txt -o barcodes_with_revcomp.csv
"#
)]
pub struct Revcomp {
    /// Input file with one barcode per line
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub pairing: PairingOptions,
}

impl Command for Revcomp {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        validate_file_exists(&self.input, "Barcode list")?;
        let pairing = self.pairing.pairing_map()?;

        info!("Starting Revcomp");
        info!("Input: {}", self.input.display());
        info!("Output: {}", self.output.describe());
        info!("Pairs: {pairing}");

        let timer = OperationTimer::new("Reverse complementing barcodes");
        let barcodes: Vec<String> =
            read_barcodes(&self.input)?.iter().map(|b| b.to_uppercase()).collect();
        let complements = barcodes
            .iter()
            .enumerate()
            .map(|(index, barcode)| {
                reverse_complement(barcode, &pairing).with_context(|| {
                    format!(
                        "Cannot reverse complement barcode {} ({barcode}) in {}",
                        index + 1,
                        self.input.display()
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut writer = self.output.open()?;
        let written = write_barcodes(&mut writer, &barcodes, Some(complements.as_slice()))?;
        timer.log_completion(written, "barcodes");
        Ok(())
    }
}
