//! Design literal barcodes with a minimum pairwise Hamming distance.
//!
//! Every position draws from the same symbol set (DNA by default). Candidates are enumerated in
//! lexicographic order of the symbol set as given, and accepted greedily starting from the seed.

use anyhow::{Result, bail};
use clap::Parser;
use fgbarcodes_lib::alphabet::{Alphabet, parse_symbols};
use fgbarcodes_lib::code::Code;
use fgbarcodes_lib::io::write_barcodes;
use fgbarcodes_lib::logging::{OperationTimer, log_selection_summary};
use fgbarcodes_lib::metrics::write_metrics_auto;
use fgbarcodes_lib::pipeline::{DesignParams, FilterOrder, design_barcodes};
use fgbarcodes_lib::restriction::RestrictionSites;
use fgbarcodes_lib::validation::{validate_min_distance, validate_positive, validate_symbol_set};
use log::{debug, info};

use crate::commands::command::Command;
use crate::commands::common::{MetricsOptions, OutputOptions, PairingOptions, ThreadingOptions};

/// Design a set of barcodes over a shared literal alphabet.
#[derive(Debug, Parser)]
#[command(
    name = "design",
    about = "\x1b[38;5;30m[DESIGN]\x1b[0m         \x1b[36mDesign barcodes with a minimum Hamming distance\x1b[0m",
    long_about = r#"
Design a set of barcodes in which every pair differs in at least --min-distance positions.

All barcodes of --length symbols over the --alphabet are enumerated in order (the last position
changing fastest) and each is accepted if it is far enough from every barcode accepted before it.
The --seed is always accepted first; without one, the first barcode in enumeration order is used.
The result is reproducible but not the largest possible set.

Barcodes containing any --restriction-site are removed. By default this happens after selection,
which can leave the set smaller than necessary; use --filter-order filter-then-select to drop
such candidates before selection instead.

Output is one barcode per line with no header, or barcode,reverse-complement with --revcomp.

Example usage:
  fgbarcodes design --length 8 --min-distance 3 -o barcodes.txt
  fgbarcodes design -l 6 -d 3 --seed AACCGG --restriction-site GAATTC --revcomp
"#
)]
pub struct Design {
    /// Number of symbols in each barcode
    #[arg(short = 'l', long = "length")]
    pub length: usize,

    /// Symbols available at every position, in enumeration order
    #[arg(short = 'a', long = "alphabet", default_value = "ACGT")]
    pub alphabet: String,

    /// First barcode of the set; defaults to the first barcode in enumeration order
    #[arg(short = 's', long = "seed")]
    pub seed: Option<String>,

    /// Minimum number of differing positions between any two barcodes
    #[arg(short = 'd', long = "min-distance", default_value_t = 3)]
    pub min_distance: usize,

    /// Forbidden substring; may be given multiple times
    #[arg(short = 'r', long = "restriction-site")]
    pub restriction_sites: Vec<String>,

    /// When restriction sites are applied relative to selection
    #[arg(long = "filter-order", value_enum, default_value_t = FilterOrder::default())]
    pub filter_order: FilterOrder,

    /// Also write the reverse complement of each barcode
    #[arg(long = "revcomp", default_value = "false")]
    pub revcomp: bool,

    #[command(flatten)]
    pub pairing: PairingOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub metrics: MetricsOptions,

    #[command(flatten)]
    pub threading: ThreadingOptions,
}

impl Design {
    fn symbols(&self) -> Vec<char> {
        parse_symbols(&self.alphabet.to_uppercase())
    }

    fn validate(&self) -> Result<()> {
        validate_positive(self.length, "length")?;
        validate_min_distance(self.min_distance, self.length)?;
        validate_symbol_set(&self.symbols(), "alphabet")?;
        if let Some(seed) = &self.seed {
            let seed_length = seed.chars().count();
            if seed_length != self.length {
                bail!("--seed {seed} has {seed_length} symbols but --length is {}", self.length);
            }
        }
        Ok(())
    }

    fn params(&self) -> Result<DesignParams> {
        let sites = RestrictionSites::new(self.restriction_sites.iter().map(|s| s.to_uppercase()))?;
        let pairing = if self.revcomp { Some(self.pairing.pairing_map()?) } else { None };
        Ok(DesignParams {
            min_distance: self.min_distance,
            restriction_sites: sites,
            filter_order: self.filter_order,
            pairing,
            threads: self.threading.threads,
        })
    }
}

impl Command for Design {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        self.validate()?;

        let alphabet = Alphabet::shared(&self.symbols(), self.length)?;
        let seed = self.seed.as_ref().map(|s| Code::from_literal(&s.to_uppercase()));
        let params = self.params()?;

        info!("Starting Design");
        info!("Alphabet: {}", self.alphabet.to_uppercase());
        info!("Length: {}", self.length);
        info!("Minimum distance: {}", self.min_distance);
        if !params.restriction_sites.is_empty() {
            info!(
                "Restriction sites ({}): {}",
                params.filter_order,
                params.restriction_sites.sites().join(", ")
            );
        }
        info!("Output: {}", self.output.describe());
        info!("{}", self.threading.log_message());

        let timer = OperationTimer::new("Designing barcodes");
        let design = design_barcodes(&alphabet, seed, &params)?;

        // Literal symbols always flatten
        let barcodes = design.barcodes.unwrap_or_default();
        let mut writer = self.output.open()?;
        let written = write_barcodes(&mut writer, &barcodes, design.complements.as_deref())?;

        if let Some(path) = &self.metrics.metrics {
            write_metrics_auto(path, &[design.metrics.clone()])?;
        }

        log_selection_summary(&design.metrics);
        timer.log_completion(written, "barcodes");
        Ok(())
    }
}
