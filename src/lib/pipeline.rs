//! End-to-end barcode design.
//!
//! [`design_barcodes`] wires the pieces together: candidate generation, greedy selection from a
//! seed, flattening, restriction-site filtering and optional reverse complements. It performs no
//! I/O; commands write the returned [`BarcodeDesign`] wherever they like.

use std::cell::Cell;
use std::fmt;

use clap::ValueEnum;
use fgbarcodes_dna::{PairingMap, reverse_complements};
use log::{info, warn};

use crate::alphabet::Alphabet;
use crate::candidates::CandidateSpace;
use crate::code::Code;
use crate::errors::{BarcodeError, Result};
use crate::metrics::SelectionMetrics;
use crate::restriction::RestrictionSites;
use crate::selector::GreedySelector;

/// When restriction sites are applied relative to distance selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FilterOrder {
    /// Select first, then drop selected codes containing a site.
    ///
    /// Dropped codes are not replaced, so the final set can be smaller than necessary.
    #[default]
    SelectThenFilter,
    /// Drop candidates containing a site before they reach the selector.
    FilterThenSelect,
}

impl fmt::Display for FilterOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectThenFilter => write!(f, "select-then-filter"),
            Self::FilterThenSelect => write!(f, "filter-then-select"),
        }
    }
}

/// Parameters of a design run.
#[derive(Debug, Clone)]
pub struct DesignParams {
    /// Minimum pairwise Hamming distance between selected codes
    pub min_distance: usize,
    /// Forbidden substrings; empty for no filtering
    pub restriction_sites: RestrictionSites,
    /// When restriction sites are applied
    pub filter_order: FilterOrder,
    /// Pairing map for reverse complements; `None` to skip them
    pub pairing: Option<PairingMap>,
    /// Threads used for distance comparisons
    pub threads: usize,
}

impl DesignParams {
    /// Parameters with the given minimum distance and no filtering, complements or threading.
    #[must_use]
    pub fn new(min_distance: usize) -> Self {
        Self {
            min_distance,
            restriction_sites: RestrictionSites::default(),
            filter_order: FilterOrder::default(),
            pairing: None,
            threads: 1,
        }
    }
}

/// Result of a design run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeDesign {
    /// Final codes in acceptance order
    pub codes: Vec<Code>,
    /// Flattened codes aligned with `codes`; `None` when some symbol has no one-character form
    pub barcodes: Option<Vec<String>>,
    /// Reverse complements aligned with `barcodes`, when a pairing map was given
    pub complements: Option<Vec<String>>,
    /// Counts describing the run
    pub metrics: SelectionMetrics,
}

/// Designs a barcode set over `alphabet`.
///
/// The seed defaults to the first candidate of the space. A seed containing a restriction site
/// is kept by [`FilterOrder::FilterThenSelect`] (the selector always retains it) and removed by
/// [`FilterOrder::SelectThenFilter`]; either way a warning is logged.
///
/// # Errors
///
/// - [`BarcodeError::InvalidThreshold`] for a minimum distance outside `1..=code_length`
/// - [`BarcodeError::SeedLengthMismatch`] if the seed has the wrong length
/// - [`BarcodeError::UnflattenableSymbol`] if restriction sites or complements are requested
///   over an alphabet whose symbols cannot each be rendered as one character
/// - [`BarcodeError::UnmappedSymbol`] if a barcode symbol has no pairing
///
/// # Examples
///
/// ```
/// use fgbarcodes_lib::alphabet::Alphabet;
/// use fgbarcodes_lib::pipeline::{DesignParams, design_barcodes};
///
/// let design = design_barcodes(&Alphabet::dna(2).unwrap(), None, &DesignParams::new(2)).unwrap();
/// assert_eq!(design.barcodes.unwrap(), vec!["AA", "CC", "GG", "TT"]);
/// ```
pub fn design_barcodes(
    alphabet: &Alphabet,
    seed: Option<Code>,
    params: &DesignParams,
) -> Result<BarcodeDesign> {
    let code_length = alphabet.code_length();
    let selector =
        GreedySelector::new(code_length, params.min_distance)?.with_threads(params.threads)?;
    let space = CandidateSpace::new(alphabet.clone());

    let seed = match seed {
        Some(seed) => seed,
        None => space.iter().next().ok_or_else(|| BarcodeError::InvalidAlphabet {
            position: 0,
            reason: "candidate space is empty".to_string(),
        })?,
    };
    if seed.len() != code_length {
        return Err(BarcodeError::SeedLengthMismatch { seed_length: seed.len(), code_length });
    }

    let flattenable = alphabet.positions().iter().flatten().all(|s| s.token().is_some())
        && seed.symbols().iter().all(|s| s.token().is_some());
    let sites = &params.restriction_sites;
    if !flattenable && (!sites.is_empty() || params.pairing.is_some()) {
        // Surface the offending symbol
        let symbol = alphabet
            .positions()
            .iter()
            .flatten()
            .chain(seed.symbols())
            .find(|s| s.token().is_none())
            .map(ToString::to_string)
            .unwrap_or_default();
        return Err(BarcodeError::UnflattenableSymbol { symbol });
    }

    if !sites.is_empty() {
        if let Some(site) = sites.first_match(&seed.flatten()?) {
            warn!("Seed {seed} contains restriction site {site}");
        }
    }

    info!(
        "Selecting codes of length {code_length} at minimum distance {} from seed {seed}",
        params.min_distance
    );
    let prefiltered = Cell::new(0u64);
    let selection = match params.filter_order {
        FilterOrder::FilterThenSelect if !sites.is_empty() => {
            let candidates = space.iter().filter(|code| {
                // Every symbol has a token here, so flattening cannot fail
                let keep = code.flatten().map_or(true, |flat| sites.permits(&flat));
                if !keep {
                    prefiltered.set(prefiltered.get() + 1);
                }
                keep
            });
            selector.select(seed, candidates)?
        }
        _ => selector.select(seed, &space)?,
    };

    let selected = selection.codes.len() as u64;
    let mut codes = selection.codes;
    let mut removed = 0u64;
    if params.filter_order == FilterOrder::SelectThenFilter && !sites.is_empty() {
        let before = codes.len();
        codes.retain(|code| code.flatten().map_or(true, |flat| sites.permits(&flat)));
        removed = (before - codes.len()) as u64;
    }

    let barcodes = if flattenable {
        Some(codes.iter().map(Code::flatten).collect::<Result<Vec<_>>>()?)
    } else {
        None
    };
    let complements = match (&params.pairing, &barcodes) {
        (Some(pairing), Some(barcodes)) => Some(reverse_complements(barcodes, pairing)?),
        _ => None,
    };

    let metrics = SelectionMetrics {
        code_length: code_length as u64,
        min_distance: params.min_distance as u64,
        filter_order: params.filter_order.to_string(),
        candidates_scanned: selection.candidates_scanned + prefiltered.get(),
        prefiltered_by_restriction_site: prefiltered.get(),
        rejected_by_distance: selection.rejected,
        selected,
        removed_by_restriction_site: removed,
        barcodes: codes.len() as u64,
    };

    Ok(BarcodeDesign { codes, barcodes, complements, metrics })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with_sites(min_distance: usize, sites: &[&str], order: FilterOrder) -> DesignParams {
        DesignParams {
            restriction_sites: RestrictionSites::new(sites.iter().copied()).unwrap(),
            filter_order: order,
            ..DesignParams::new(min_distance)
        }
    }

    #[test]
    fn test_default_seed_is_first_candidate() {
        let design =
            design_barcodes(&Alphabet::from_counts(&[2, 2]).unwrap(), None, &DesignParams::new(2))
                .unwrap();
        assert_eq!(design.codes, vec![Code::from_ordinals(&[1, 1]), Code::from_ordinals(&[2, 2])]);
        assert_eq!(design.barcodes, Some(vec!["11".to_string(), "22".to_string()]));
        assert_eq!(design.complements, None);
        assert_eq!(design.metrics.candidates_scanned, 4);
        assert_eq!(design.metrics.selected, 2);
        assert_eq!(design.metrics.barcodes, 2);
    }

    #[test]
    fn test_select_then_filter_removes_without_backfill() {
        let params = params_with_sites(2, &["CC"], FilterOrder::SelectThenFilter);
        let design = design_barcodes(&Alphabet::dna(2).unwrap(), None, &params).unwrap();
        assert_eq!(design.barcodes.unwrap(), vec!["AA", "GG", "TT"]);
        assert_eq!(design.metrics.selected, 4);
        assert_eq!(design.metrics.removed_by_restriction_site, 1);
        assert_eq!(design.metrics.prefiltered_by_restriction_site, 0);
    }

    #[test]
    fn test_filter_then_select_backfills() {
        let params = params_with_sites(2, &["CC"], FilterOrder::FilterThenSelect);
        let design = design_barcodes(&Alphabet::dna(2).unwrap(), None, &params).unwrap();
        // CG takes the slot CC would have had
        assert_eq!(design.barcodes.unwrap(), vec!["AA", "CG", "GC", "TT"]);
        assert_eq!(design.metrics.prefiltered_by_restriction_site, 1);
        assert_eq!(design.metrics.candidates_scanned, 16);
        assert_eq!(design.metrics.removed_by_restriction_site, 0);
    }

    #[test]
    fn test_seed_with_site() {
        let seed = Some(Code::from_literal("CC"));
        let select_first = params_with_sites(2, &["CC"], FilterOrder::SelectThenFilter);
        let design = design_barcodes(&Alphabet::dna(2).unwrap(), seed.clone(), &select_first).unwrap();
        assert!(!design.barcodes.unwrap().contains(&"CC".to_string()));

        let filter_first = params_with_sites(2, &["CC"], FilterOrder::FilterThenSelect);
        let design = design_barcodes(&Alphabet::dna(2).unwrap(), seed, &filter_first).unwrap();
        assert_eq!(design.barcodes.unwrap()[0], "CC");
    }

    #[test]
    fn test_reverse_complements() {
        let params = DesignParams { pairing: Some(PairingMap::dna()), ..DesignParams::new(2) };
        let design = design_barcodes(&Alphabet::dna(2).unwrap(), None, &params).unwrap();
        assert_eq!(design.complements.unwrap(), vec!["TT", "GG", "CC", "AA"]);
    }

    #[test]
    fn test_unflattenable_alphabet() {
        let alphabet = Alphabet::from_counts(&[12, 2]).unwrap();
        let design = design_barcodes(&alphabet, None, &DesignParams::new(2)).unwrap();
        assert_eq!(design.barcodes, None);
        assert_eq!(design.codes.len(), 2);

        let params = params_with_sites(2, &["11"], FilterOrder::SelectThenFilter);
        assert_eq!(
            design_barcodes(&alphabet, None, &params).unwrap_err(),
            BarcodeError::UnflattenableSymbol { symbol: "10".to_string() }
        );
    }

    #[test]
    fn test_unmapped_symbol() {
        let alphabet = Alphabet::shared(&['A', 'C', 'N'], 2).unwrap();
        let params = DesignParams { pairing: Some(PairingMap::dna()), ..DesignParams::new(1) };
        let result = design_barcodes(&alphabet, None, &params);
        assert!(matches!(result, Err(BarcodeError::UnmappedSymbol(_))));
    }

    #[test]
    fn test_errors() {
        let alphabet = Alphabet::dna(4).unwrap();
        assert_eq!(
            design_barcodes(&alphabet, None, &DesignParams::new(5)).unwrap_err(),
            BarcodeError::InvalidThreshold { min_distance: 5, code_length: 4 }
        );
        assert_eq!(
            design_barcodes(&alphabet, Some(Code::from_literal("AC")), &DesignParams::new(2))
                .unwrap_err(),
            BarcodeError::SeedLengthMismatch { seed_length: 2, code_length: 4 }
        );
    }

    #[test]
    fn test_filter_order_display() {
        assert_eq!(FilterOrder::SelectThenFilter.to_string(), "select-then-filter");
        assert_eq!(FilterOrder::FilterThenSelect.to_string(), "filter-then-select");
        assert_eq!(FilterOrder::default(), FilterOrder::SelectThenFilter);
    }
}
