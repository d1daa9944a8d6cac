//! Select combinations of numbered barcodes with a minimum Hamming distance.
//!
//! Each position holds one of `count` numbered barcodes (for example i5, i7, i5nn and i7nn
//! indices). Two combinations are at distance `k` when they use a different barcode at `k` of
//! the positions.

use anyhow::{Result, bail};
use clap::Parser;
use fgbarcodes_lib::alphabet::Alphabet;
use fgbarcodes_lib::code::Code;
use fgbarcodes_lib::io::write_records;
use fgbarcodes_lib::logging::{OperationTimer, log_selection_summary};
use fgbarcodes_lib::metrics::write_metrics_auto;
use fgbarcodes_lib::pipeline::{DesignParams, design_barcodes};
use fgbarcodes_lib::validation::validate_min_distance;
use log::{debug, info};

use crate::commands::command::Command;
use crate::commands::common::{MetricsOptions, OutputOptions, ThreadingOptions};

/// Select barcode combinations from per-position barcode counts.
#[derive(Debug, Parser)]
#[command(
    name = "combinations",
    about = "\x1b[38;5;30m[DESIGN]\x1b[0m         \x1b[36mSelect barcode combinations with a minimum distance\x1b[0m",
    long_about = r#"
Select combinations of numbered barcodes in which every pair of combinations uses different
barcodes in at least --min-distance positions.

Each value given to --counts is the number of barcodes available for one position, numbered
1..=count. All combinations are enumerated in order (the last position changing fastest) and
accepted greedily, starting from --seed or, without one, the combination 1,1,...,1.

Output is one comma-delimited combination per line with no header.

Example usage:
  fgbarcodes combinations --counts 4 8 2 2 --min-distance 2 -o combinations.csv
  fgbarcodes combinations --counts 12 8 --min-distance 1 --seed 3,1
"#
)]
pub struct Combinations {
    /// Number of barcodes available at each position
    #[arg(short = 'c', long = "counts", num_args = 1.., required = true)]
    pub counts: Vec<usize>,

    /// Minimum number of positions at which any two combinations differ
    #[arg(short = 'd', long = "min-distance", default_value_t = 2)]
    pub min_distance: usize,

    /// First combination, as comma-separated barcode numbers
    #[arg(short = 's', long = "seed")]
    pub seed: Option<String>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub metrics: MetricsOptions,

    #[command(flatten)]
    pub threading: ThreadingOptions,
}

impl Combinations {
    fn seed(&self) -> Result<Option<Code>> {
        let Some(seed) = &self.seed else {
            return Ok(None);
        };
        let code = Code::parse_ordinals(seed)?;
        if code.len() != self.counts.len() {
            bail!(
                "--seed {seed} has {} positions but {} counts were given",
                code.len(),
                self.counts.len()
            );
        }
        Ok(Some(code))
    }
}

impl Command for Combinations {
    fn execute(&self, command_line: &str) -> Result<()> {
        debug!("Command line: {command_line}");
        validate_min_distance(self.min_distance, self.counts.len())?;
        let alphabet = Alphabet::from_counts(&self.counts)?;
        let seed = self.seed()?;

        info!("Starting Combinations");
        info!(
            "Barcode counts: {}",
            self.counts.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        );
        if let Some(total) = alphabet.candidate_count() {
            info!("Candidate combinations: {total}");
        }
        info!("Minimum distance: {}", self.min_distance);
        info!("Output: {}", self.output.describe());
        info!("{}", self.threading.log_message());

        let timer = OperationTimer::new("Selecting combinations");
        let params = DesignParams {
            threads: self.threading.threads,
            ..DesignParams::new(self.min_distance)
        };
        let design = design_barcodes(&alphabet, seed, &params)?;

        let mut writer = self.output.open()?;
        let written = write_records(&mut writer, design.codes.iter().map(Code::fields))?;

        if let Some(path) = &self.metrics.metrics {
            write_metrics_auto(path, &[design.metrics.clone()])?;
        }

        log_selection_summary(&design.metrics);
        timer.log_completion(written, "combinations");
        Ok(())
    }
}
