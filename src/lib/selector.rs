//! Greedy distance-constrained selection.
//!
//! The [`GreedySelector`] scans candidates once, in the order given, and accepts each candidate
//! that is at least `min_distance` mismatches away from every code accepted before it. The seed
//! is accepted first and unconditionally. The result depends on candidate order: it is a
//! reproducible heuristic, not a maximum set.
//!
//! Two things keep the scan fast without changing a single accept/reject decision:
//!
//! - comparisons stop at the first conflicting accepted code, and each distance computation
//!   stops once `min_distance` mismatches have been counted
//! - the accepted code that rejected the previous candidate is tried first, since neighbouring
//!   candidates in generation order usually share a prefix and tend to collide with the same code
//!
//! With more than one thread, the comparisons for a single candidate are spread over a rayon
//! pool once the accepted set is large. Candidates themselves are always decided one at a time.

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::code::Code;
use crate::distance::is_at_least_distance;
use crate::errors::{BarcodeError, Result};
use crate::progress::ProgressTracker;

/// Accepted set size above which comparisons for one candidate are run on the thread pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Number of scanned candidates between progress log messages.
pub const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Outcome of a greedy selection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Accepted codes in acceptance order, seed first
    pub codes: Vec<Code>,
    /// Number of candidates examined
    pub candidates_scanned: u64,
    /// Number of candidates rejected for being too close to an accepted code
    pub rejected: u64,
}

/// Running state threaded through the scan.
struct Accumulator {
    accepted: Vec<Code>,
    blocker: Option<usize>,
    scanned: u64,
    rejected: u64,
}

impl Accumulator {
    fn new(seed: Code) -> Self {
        Self { accepted: vec![seed], blocker: None, scanned: 0, rejected: 0 }
    }

    fn into_selection(self) -> Selection {
        Selection {
            codes: self.accepted,
            candidates_scanned: self.scanned,
            rejected: self.rejected,
        }
    }
}

/// Greedy selector for codes of a fixed length.
pub struct GreedySelector {
    code_length: usize,
    min_distance: usize,
    pool: Option<ThreadPool>,
    parallel_threshold: usize,
}

impl std::fmt::Debug for GreedySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreedySelector")
            .field("code_length", &self.code_length)
            .field("min_distance", &self.min_distance)
            .field("threads", &self.threads())
            .finish()
    }
}

impl GreedySelector {
    /// Creates a single-threaded selector.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::InvalidThreshold`] unless `1 <= min_distance <= code_length`.
    pub fn new(code_length: usize, min_distance: usize) -> Result<Self> {
        if min_distance == 0 || min_distance > code_length {
            return Err(BarcodeError::InvalidThreshold { min_distance, code_length });
        }
        Ok(Self { code_length, min_distance, pool: None, parallel_threshold: PARALLEL_THRESHOLD })
    }

    /// Uses `threads` threads for distance comparisons against large accepted sets.
    ///
    /// A value of 0 or 1 keeps the selector single-threaded.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::InvalidParameter`] if the thread pool cannot be built.
    pub fn with_threads(mut self, threads: usize) -> Result<Self> {
        self.pool = if threads > 1 {
            let pool = ThreadPoolBuilder::new().num_threads(threads).build().map_err(|e| {
                BarcodeError::InvalidParameter {
                    parameter: "threads".to_string(),
                    reason: format!("could not build a pool of {threads} threads: {e}"),
                }
            })?;
            Some(pool)
        } else {
            None
        };
        Ok(self)
    }

    /// Length every seed and candidate must have.
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Minimum pairwise distance between accepted codes.
    #[must_use]
    pub fn min_distance(&self) -> usize {
        self.min_distance
    }

    /// Number of threads used for comparisons.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.as_ref().map_or(1, ThreadPool::current_num_threads)
    }

    /// Runs the greedy pass over `candidates`, starting from `seed`.
    ///
    /// Candidates are consumed lazily in one forward pass. A candidate equal to an accepted code
    /// is at distance zero and is rejected, so the seed is never accepted twice.
    ///
    /// # Errors
    ///
    /// - [`BarcodeError::SeedLengthMismatch`] if the seed does not have the selector's length,
    ///   reported before any candidate is read
    /// - [`BarcodeError::LengthMismatch`] on the first candidate of the wrong length
    ///
    /// # Examples
    ///
    /// ```
    /// use fgbarcodes_lib::alphabet::Alphabet;
    /// use fgbarcodes_lib::candidates::CandidateSpace;
    /// use fgbarcodes_lib::code::Code;
    /// use fgbarcodes_lib::selector::GreedySelector;
    ///
    /// let space = CandidateSpace::new(Alphabet::from_counts(&[2, 2]).unwrap());
    /// let selector = GreedySelector::new(2, 2).unwrap();
    /// let selection = selector.select(Code::from_ordinals(&[1, 1]), &space).unwrap();
    /// assert_eq!(selection.codes, vec![Code::from_ordinals(&[1, 1]), Code::from_ordinals(&[2, 2])]);
    /// ```
    pub fn select<I>(&self, seed: Code, candidates: I) -> Result<Selection>
    where
        I: IntoIterator<Item = Code>,
    {
        if seed.len() != self.code_length {
            return Err(BarcodeError::SeedLengthMismatch {
                seed_length: seed.len(),
                code_length: self.code_length,
            });
        }

        let progress = ProgressTracker::new("Scanned").with_interval(PROGRESS_INTERVAL);
        let state = candidates.into_iter().try_fold(Accumulator::new(seed), |state, candidate| {
            progress.record(1);
            self.consider(state, candidate)
        })?;
        progress.finish();

        debug!(
            "Accepted {} of {} candidates at minimum distance {}",
            state.accepted.len(),
            state.scanned,
            self.min_distance
        );
        Ok(state.into_selection())
    }

    /// Decides a single candidate and folds the decision into the running state.
    fn consider(&self, mut state: Accumulator, candidate: Code) -> Result<Accumulator> {
        if candidate.len() != self.code_length {
            return Err(BarcodeError::LengthMismatch {
                expected: self.code_length,
                actual: candidate.len(),
            });
        }
        state.scanned += 1;

        if let Some(index) = state.blocker {
            if !self.far_enough(&state.accepted[index], &candidate) {
                state.rejected += 1;
                return Ok(state);
            }
        }

        match self.find_conflict(&state.accepted, &candidate) {
            Some(index) => {
                state.blocker = Some(index);
                state.rejected += 1;
            }
            None => state.accepted.push(candidate),
        }
        Ok(state)
    }

    #[inline]
    fn far_enough(&self, accepted: &Code, candidate: &Code) -> bool {
        is_at_least_distance(accepted.symbols(), candidate.symbols(), self.min_distance)
    }

    /// Index of some accepted code closer than the minimum distance, if any.
    fn find_conflict(&self, accepted: &[Code], candidate: &Code) -> Option<usize> {
        match &self.pool {
            Some(pool) if accepted.len() >= self.parallel_threshold => pool.install(|| {
                accepted.par_iter().position_any(|code| !self.far_enough(code, candidate))
            }),
            _ => accepted.iter().position(|code| !self.far_enough(code, candidate)),
        }
    }
}
