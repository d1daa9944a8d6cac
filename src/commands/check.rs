//! Audit an existing barcode list.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use fgbarcodes_lib::code::Code;
use fgbarcodes_lib::distance::find_pairs_below_distance;
use fgbarcodes_lib::io::read_barcodes;
use fgbarcodes_lib::logging::OperationTimer;
use fgbarcodes_lib::metrics::{CodePairMetric, format_count, write_metrics_auto};
use fgbarcodes_lib::restriction::RestrictionSites;
use fgbarcodes_lib::validation::{validate_file_exists, validate_positive};
use log::{debug, info, warn};

use crate::commands::command::Command;

/// Maximum number of close pairs logged individually.
const MAX_LOGGED_PAIRS: usize = 10;

/// Check that a barcode list keeps a minimum Hamming distance.
#[derive(Debug, Parser)]
#[command(
    name = "check",
    about = "\x1b[38;5;166m[UTILITIES]\x1b[0m      \x1b[36mCheck a barcode list for close pairs\x1b[0m",
    long_about = r#"
Check an existing barcode list.

Reports barcodes of inconsistent length, duplicated barcodes, barcodes containing any
--restriction-site and every pair of barcodes differing in fewer than --min-distance positions.
Close pairs can be written to a TSV file with --pairs-output.

Exits with an error if any problem is found, unless --allow-close-pairs is given, in which case
close pairs and duplicates are only reported.

Example usage:
  fgbarcodes check -i barcodes.txt --min-distance 3
  fgbarcodes check -i barcodes.txt -d 3 --pairs-output close_pairs.tsv --allow-close-pairs
"#
)]
pub struct Check {
    /// Input file with one barcode per line
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Minimum number of differing positions required between any two barcodes
    #[arg(short = 'd', long = "min-distance", default_value_t = 3)]
    pub min_distance: usize,

    /// Forbidden substring; may be given multiple times
    #[arg(short = 'r', long = "restriction-site")]
    pub restriction_sites: Vec<String>,

    /// Optional output TSV of barcode pairs closer than the minimum distance
    #[arg(short = 'p', long = "pairs-output")]
    pub pairs_output: Option<PathBuf>,

    /// Report close pairs and duplicates without failing
    #[arg(long = "allow-close-pairs", default_value = "false")]
    pub allow_close_pairs: bool,
}

impl Command for Check {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        validate_file_exists(&self.input, "Barcode list")?;
        validate_positive(self.min_distance, "min-distance")?;
        let sites = RestrictionSites::new(self.restriction_sites.iter().map(|s| s.to_uppercase()))?;

        info!("Starting Check");
        info!("Input: {}", self.input.display());
        info!("Minimum distance: {}", self.min_distance);

        let timer = OperationTimer::new("Checking barcodes");
        let barcodes: Vec<String> =
            read_barcodes(&self.input)?.iter().map(|b| b.to_uppercase()).collect();
        info!("Read {} barcodes", format_count(barcodes.len() as u64));

        if let Some(first) = barcodes.first() {
            let expected = first.chars().count();
            if let Some((index, odd)) =
                barcodes.iter().enumerate().find(|(_, b)| b.chars().count() != expected)
            {
                bail!(
                    "Barcode {odd} on record {} has {} symbols but the first barcode has {expected}",
                    index + 1,
                    odd.chars().count()
                );
            }
        }

        let mut site_hits = 0usize;
        for barcode in &barcodes {
            if let Some(site) = sites.first_match(barcode) {
                warn!("Barcode {barcode} contains restriction site {site}");
                site_hits += 1;
            }
        }

        let codes: Vec<Code> = barcodes.iter().map(|b| Code::from_literal(b)).collect();
        let pairs = find_pairs_below_distance(&codes, self.min_distance)?;
        let duplicates = pairs.iter().filter(|(_, _, d)| *d == 0).count();

        for (i, j, distance) in pairs.iter().take(MAX_LOGGED_PAIRS) {
            warn!(
                "Barcodes {} and {} differ at only {distance} positions",
                barcodes[*i], barcodes[*j]
            );
        }
        if pairs.len() > MAX_LOGGED_PAIRS {
            let remaining = (pairs.len() - MAX_LOGGED_PAIRS) as u64;
            warn!("... and {} more close pairs", format_count(remaining));
        }

        if let Some(path) = &self.pairs_output {
            let metrics: Vec<CodePairMetric> = pairs
                .iter()
                .map(|&(i, j, distance)| CodePairMetric {
                    code1: barcodes[i].clone(),
                    code2: barcodes[j].clone(),
                    distance: distance as u64,
                })
                .collect();
            write_metrics_auto(path, &metrics)?;
        }

        info!("Duplicated barcodes: {}", format_count(duplicates as u64));
        info!("Pairs closer than {}: {}", self.min_distance, format_count(pairs.len() as u64));
        if !sites.is_empty() {
            info!("Barcodes containing a restriction site: {}", format_count(site_hits as u64));
        }
        timer.log_completion(barcodes.len() as u64, "barcodes");

        if site_hits > 0 {
            bail!("{site_hits} barcodes contain a restriction site");
        }
        if !pairs.is_empty() && !self.allow_close_pairs {
            bail!(
                "{} barcode pairs differ in fewer than {} positions",
                pairs.len(),
                self.min_distance
            );
        }
        Ok(())
    }
}
