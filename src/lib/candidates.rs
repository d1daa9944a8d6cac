//! Candidate space generation.
//!
//! The candidate space is the Cartesian product of the per-position symbol lists of an
//! [`Alphabet`], enumerated like a standard product: the first position varies slowest and the
//! last position cycles fastest. Greedy selection is order-dependent, so this order is part of
//! the contract.
//!
//! The space is never materialised. [`CandidateSpace::iter`] returns a lazy odometer over symbol
//! indices and every call starts a fresh enumeration, so a space can be scanned as many times as
//! needed.
//!
//! # Example
//!
//! ```
//! use fgbarcodes_lib::alphabet::Alphabet;
//! use fgbarcodes_lib::candidates::CandidateSpace;
//!
//! let space = CandidateSpace::new(Alphabet::dna(2).unwrap());
//! let codes: Vec<String> = space.iter().take(5).map(|c| c.to_string()).collect();
//! assert_eq!(codes, vec!["AA", "AC", "AG", "AT", "CA"]);
//! ```

use std::iter::FusedIterator;

use crate::alphabet::{Alphabet, Symbol};
use crate::code::Code;
use crate::errors::Result;

/// The full Cartesian product of an alphabet's positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSpace {
    alphabet: Alphabet,
}

impl CandidateSpace {
    /// Creates the candidate space of an alphabet.
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet this space enumerates.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Length of every candidate code.
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.alphabet.code_length()
    }

    /// Number of candidates, or `None` if the count overflows a `u128`.
    #[must_use]
    pub fn len(&self) -> Option<u128> {
        self.alphabet.candidate_count()
    }

    /// Always false: every position of a valid alphabet has at least one symbol.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Starts a new enumeration of the space.
    #[must_use]
    pub fn iter(&self) -> Candidates<'_> {
        Candidates {
            positions: self.alphabet.positions(),
            indices: vec![0; self.alphabet.code_length()],
            remaining: self.len(),
            exhausted: false,
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSpace {
    type Item = Code;
    type IntoIter = Candidates<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a candidate space directly from per-position symbol lists.
///
/// # Errors
///
/// Returns [`crate::errors::BarcodeError::InvalidAlphabet`] if any position is empty.
pub fn generate_candidates(positions: Vec<Vec<Symbol>>) -> Result<CandidateSpace> {
    Ok(CandidateSpace::new(Alphabet::per_position(positions)?))
}

/// Lazy enumeration of a [`CandidateSpace`].
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    positions: &'a [Vec<Symbol>],
    /// Index of the current symbol at every position.
    indices: Vec<usize>,
    /// Candidates left to emit; `None` when the total overflows a `u128`.
    remaining: Option<u128>,
    exhausted: bool,
}

impl Candidates<'_> {
    /// Moves the odometer one step, rightmost position first.
    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.positions[pos].len() {
                return;
            }
            self.indices[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for Candidates<'_> {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        if self.exhausted {
            return None;
        }
        let code: Code =
            self.indices.iter().zip(self.positions).map(|(&i, symbols)| symbols[i]).collect();
        self.advance();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Candidates<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ordinal_product_order() {
        let space = CandidateSpace::new(Alphabet::from_counts(&[2, 2]).unwrap());
        let codes: Vec<Code> = space.iter().collect();
        assert_eq!(
            codes,
            vec![
                Code::from_ordinals(&[1, 1]),
                Code::from_ordinals(&[1, 2]),
                Code::from_ordinals(&[2, 1]),
                Code::from_ordinals(&[2, 2]),
            ]
        );
    }

    #[test]
    fn test_mixed_position_sizes() {
        let space = CandidateSpace::new(Alphabet::from_counts(&[1, 3, 2]).unwrap());
        let codes: Vec<String> = space.iter().map(|c| c.flatten().unwrap()).collect();
        assert_eq!(codes, vec!["111", "112", "121", "122", "131", "132"]);
    }

    #[test]
    fn test_dna_order_last_position_fastest() {
        let space = CandidateSpace::new(Alphabet::dna(3).unwrap());
        let codes: Vec<String> = space.iter().map(|c| c.to_string()).collect();
        assert_eq!(codes.len(), 64);
        assert_eq!(&codes[..5], &["AAA", "AAC", "AAG", "AAT", "ACA"]);
        assert_eq!(codes[63], "TTT");

        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(sorted, codes, "ACGT ordering should enumerate lexicographically");
    }

    #[test]
    fn test_iteration_is_restartable() {
        let space = CandidateSpace::new(Alphabet::dna(2).unwrap());
        let first: Vec<Code> = space.iter().collect();
        let second: Vec<Code> = (&space).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_symbol_space() {
        let space = CandidateSpace::new(Alphabet::from_counts(&[1, 1, 1]).unwrap());
        let mut iter = space.iter();
        assert_eq!(iter.size_hint(), (1, Some(1)));
        assert_eq!(iter.next(), Some(Code::from_ordinals(&[1, 1, 1])));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_size_hint_counts_down() {
        let space = CandidateSpace::new(Alphabet::from_counts(&[3, 2]).unwrap());
        let mut iter = space.iter();
        assert_eq!(iter.size_hint(), (6, Some(6)));
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (4, Some(4)));
    }

    #[test]
    fn test_huge_space_is_lazy() {
        // 4^40 candidates: only the first few are ever built
        let space = CandidateSpace::new(Alphabet::dna(40).unwrap());
        assert_eq!(space.len(), Some(1u128 << 80));
        let mut iter = space.iter();
        assert_eq!(iter.size_hint(), (usize::MAX, None));
        let first = iter.next().unwrap();
        assert_eq!(first.to_string(), "A".repeat(40));
        let second = iter.next().unwrap();
        assert_eq!(second.to_string(), format!("{}C", "A".repeat(39)));
    }

    #[test]
    fn test_generate_candidates_rejects_empty_position() {
        let result =
            generate_candidates(vec![vec![Symbol::Literal('A')], vec![], vec![Symbol::Literal('C')]]);
        assert!(matches!(
            result,
            Err(crate::errors::BarcodeError::InvalidAlphabet { position: 1, .. })
        ));
    }

    proptest! {
        /// Property: the number of candidates equals the product of the position sizes, all distinct
        #[test]
        fn prop_candidate_count_is_product(counts in prop::collection::vec(1usize..5, 1..5)) {
            let space = CandidateSpace::new(Alphabet::from_counts(&counts).unwrap());
            let codes: Vec<Code> = space.iter().collect();
            let expected: usize = counts.iter().product();
            prop_assert_eq!(codes.len(), expected);

            let unique: std::collections::HashSet<&Code> = codes.iter().collect();
            prop_assert_eq!(unique.len(), expected);
            prop_assert!(codes.iter().all(|c| c.len() == counts.len()));
        }
    }
}
