//! Formatting helpers and run summaries for log output.

use std::time::{Duration, Instant};

use fgbarcodes_metrics::{ProcessingMetrics, format_count};

use crate::metrics::SelectionMetrics;

/// Formats a fraction as a percentage with `decimals` decimal places.
///
/// # Examples
///
/// ```
/// use fgbarcodes_lib::logging::format_percent;
///
/// assert_eq!(format_percent(0.9543, 2), "95.43%");
/// assert_eq!(format_percent(1.0, 0), "100%");
/// ```
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0)
}

/// Formats a duration as e.g. "45s", "2m 15s" or "1h 30m".
///
/// # Examples
///
/// ```
/// use fgbarcodes_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// assert_eq!(format_duration(Duration::from_secs(5400)), "1h 30m");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    match secs {
        0..60 => format!("{secs}s"),
        60..3600 if secs % 60 == 0 => format!("{}m", secs / 60),
        60..3600 => format!("{}m {}s", secs / 60, secs % 60),
        _ if (secs % 3600) / 60 == 0 => format!("{}h", secs / 3600),
        _ => format!("{}h {}m", secs / 3600, (secs % 3600) / 60),
    }
}

/// Formats a processing rate, falling back to per-minute for slow rates.
///
/// # Examples
///
/// ```
/// use fgbarcodes_lib::logging::format_rate;
/// use std::time::Duration;
///
/// assert_eq!(format_rate(1000, Duration::from_secs(1), "candidates"), "1,000 candidates/s");
/// assert_eq!(format_rate(30, Duration::from_secs(60), "codes"), "30.0 codes/min");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_rate(count: u64, duration: Duration, noun: &str) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        return format!("{} {noun}/s", format_count(count));
    }
    let rate = count as f64 / secs;
    if rate >= 1.0 {
        format!("{} {noun}/s", format_count(rate as u64))
    } else {
        format!("{:.1} {noun}/min", rate * 60.0)
    }
}

/// Logs a summary of a design run.
///
/// # Examples
///
/// ```
/// use fgbarcodes_lib::logging::log_selection_summary;
/// use fgbarcodes_lib::metrics::SelectionMetrics;
///
/// let metrics = SelectionMetrics { candidates_scanned: 256, selected: 12, barcodes: 12, ..Default::default() };
/// log_selection_summary(&metrics);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn log_selection_summary(metrics: &SelectionMetrics) {
    log::info!("Barcode Selection Summary:");
    log::info!("  Code length: {}", metrics.code_length);
    log::info!("  Minimum distance: {}", metrics.min_distance);
    log::info!("  Candidates scanned: {}", format_count(metrics.candidates_scanned));
    if metrics.prefiltered_by_restriction_site > 0 {
        log::info!(
            "  Candidates containing a restriction site: {}",
            format_count(metrics.prefiltered_by_restriction_site)
        );
    }
    log::info!("  Rejected by distance: {}", format_count(metrics.rejected_by_distance));
    log::info!("  Selected: {}", format_count(metrics.selected));
    if metrics.removed_by_restriction_site > 0 {
        log::info!(
            "  Selected codes removed for a restriction site: {}",
            format_count(metrics.removed_by_restriction_site)
        );
    }
    log::info!("  Barcodes: {}", format_count(metrics.barcodes));
    if metrics.total_input() > 0 {
        log::info!("  Yield: {}", format_percent(metrics.efficiency() / 100.0, 4));
    }
}

/// Times an operation and logs its start and completion.
///
/// # Examples
///
/// ```
/// use fgbarcodes_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Selecting barcodes");
/// timer.log_completion(96, "barcodes");
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Starts timing and logs that the operation began.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Time since the timer was started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs completion with a count of what was produced.
    pub fn log_completion(&self, count: u64, noun: &str) {
        let duration = self.elapsed();
        log::info!(
            "{} completed: {} {noun} in {} ({})",
            self.operation,
            format_count(count),
            format_duration(duration),
            format_rate(count, duration, noun)
        );
    }
}
