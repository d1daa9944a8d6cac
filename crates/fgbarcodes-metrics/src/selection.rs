//! Metrics for barcode design and barcode set audits.

use serde::{Deserialize, Serialize};

use super::{Metric, ProcessingMetrics};

/// Summary of a single barcode design run.
///
/// `selected` counts the codes accepted by the greedy distance scan (including the seed);
/// `barcodes` counts what survived the restriction-site filter and was written out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMetrics {
    /// Number of positions in every code
    pub code_length: u64,

    /// Minimum pairwise Hamming distance enforced
    pub min_distance: u64,

    /// Order in which selection and restriction filtering were applied
    pub filter_order: String,

    /// Candidates read from the candidate space
    pub candidates_scanned: u64,

    /// Candidates removed before selection because they contained a restriction site
    pub prefiltered_by_restriction_site: u64,

    /// Candidates rejected because they were too close to an accepted code
    pub rejected_by_distance: u64,

    /// Codes accepted by the greedy scan, seed included
    pub selected: u64,

    /// Selected codes removed afterwards because they contained a restriction site
    pub removed_by_restriction_site: u64,

    /// Final number of barcodes
    pub barcodes: u64,
}

impl Metric for SelectionMetrics {
    fn metric_name() -> &'static str {
        "barcode selection"
    }
}

impl ProcessingMetrics for SelectionMetrics {
    fn total_input(&self) -> u64 {
        self.candidates_scanned
    }

    fn total_output(&self) -> u64 {
        self.barcodes
    }

    fn total_filtered(&self) -> u64 {
        self.prefiltered_by_restriction_site
            + self.rejected_by_distance
            + self.removed_by_restriction_site
    }
}

/// A pair of barcodes closer than the required minimum distance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePairMetric {
    /// The first barcode of the pair, in input order
    pub code1: String,

    /// The second barcode of the pair
    pub code2: String,

    /// Hamming distance between the two barcodes
    pub distance: u64,
}

impl Metric for CodePairMetric {
    fn metric_name() -> &'static str {
        "barcode pair"
    }
}
