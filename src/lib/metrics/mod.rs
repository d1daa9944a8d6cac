//! Metrics types for fgbarcodes runs.
//!
//! The types live in the `fgbarcodes-metrics` crate and are re-exported here:
//! - [`selection`] - per-run selection counts and close-pair audit rows
//! - [`writer`] - TSV output
//!
//! # Traits
//!
//! - [`Metric`] - Core trait for serializable metrics
//! - [`ProcessingMetrics`] - Common interface for input/output metrics

pub use fgbarcodes_metrics::{Metric, ProcessingMetrics, format_count};

pub use fgbarcodes_metrics::selection;
pub use fgbarcodes_metrics::writer;

pub use selection::{CodePairMetric, SelectionMetrics};
pub use writer::{write_metrics, write_metrics_auto};
