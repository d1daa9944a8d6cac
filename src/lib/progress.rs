//! Progress logging for long scans.
//!
//! The candidate space grows combinatorially with code length, so a selection pass can run for
//! a long time. [`ProgressTracker`] counts processed items and logs a line every time the count
//! crosses a multiple of its interval.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use fgbarcodes_metrics::format_count;
use log::info;

use crate::logging::format_duration;

/// Thread-safe counter that logs at regular intervals.
///
/// # Example
/// ```
/// use fgbarcodes_lib::progress::ProgressTracker;
///
/// let tracker = ProgressTracker::new("Scanned").with_interval(100);
/// for _ in 0..250 {
///     tracker.record(1); // logs at 100 and 200
/// }
/// tracker.finish(); // logs "Scanned 250 candidates (complete)"
/// assert_eq!(tracker.count(), 250);
/// ```
pub struct ProgressTracker {
    /// Count interval between log lines
    interval: u64,
    /// Verb or phrase leading each log line
    message: String,
    /// What is being counted
    noun: String,
    count: AtomicU64,
    started: Instant,
}

impl ProgressTracker {
    /// Creates a tracker counting candidates, logging every 10,000 by default.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            interval: 10_000,
            message: message.into(),
            noun: "candidates".to_string(),
            count: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    /// Sets the count interval between log lines. An interval of 0 is treated as 1.
    #[must_use]
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval.max(1);
        self
    }

    /// Sets the noun printed after the count.
    #[must_use]
    pub fn with_noun(mut self, noun: impl Into<String>) -> Self {
        self.noun = noun.into();
        self
    }

    /// Adds `additional` to the count, logging once per interval boundary crossed.
    ///
    /// Returns `true` if the new count sits exactly on an interval boundary.
    pub fn record(&self, additional: u64) -> bool {
        let previous = self.count.fetch_add(additional, Ordering::Relaxed);
        let current = previous + additional;

        for milestone in (previous / self.interval + 1)..=(current / self.interval) {
            info!(
                "{} {} {} ({} elapsed)",
                self.message,
                format_count(milestone * self.interval),
                self.noun,
                format_duration(self.started.elapsed())
            );
        }
        current > 0 && current % self.interval == 0
    }

    /// Logs the final count unless it was just logged at an interval boundary.
    pub fn finish(&self) {
        let count = self.count();
        if count > 0 && count % self.interval != 0 {
            info!("{} {} {} (complete)", self.message, format_count(count), self.noun);
        }
    }

    /// Number of items recorded so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
