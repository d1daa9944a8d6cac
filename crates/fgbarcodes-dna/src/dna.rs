//! Reverse complement of flattened codes.
//!
//! Unlike a read-level reverse complement, barcodes are design artefacts: a symbol without a
//! defined partner is a caller error, so [`reverse_complement`] fails rather than passing the
//! symbol through unchanged.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// A symbol in a code has no partner in the pairing map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Symbol '{symbol}' at position {position} has no defined pairing")]
pub struct UnmappedSymbol {
    /// The offending symbol.
    pub symbol: char,
    /// Zero-based position of the symbol in the input code.
    pub position: usize,
}

/// Errors raised while building a [`PairingMap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    /// A pair in a textual specification did not contain exactly two symbols.
    #[error("Invalid pair '{pair}': expected exactly two symbols (e.g. 'AT')")]
    Malformed {
        /// The malformed pair as written
        pair: String,
    },

    /// A symbol was paired with two different partners, so the map is not bijective.
    #[error("Symbol '{symbol}' is paired with both '{first}' and '{second}'")]
    Conflict {
        /// The symbol with two partners
        symbol: char,
        /// The partner seen first
        first: char,
        /// The conflicting partner
        second: char,
    },

    /// No pairs were given.
    #[error("A pairing map must define at least one pair")]
    Empty,
}

/// A fixed, bijective symbol-pairing map.
///
/// Every pair is stored in both directions, so `complement(complement(x)) == x` for every mapped
/// symbol. A symbol may be paired with itself (e.g. `N` with `N`).
///
/// # Examples
///
/// ```
/// use fgbarcodes_dna::PairingMap;
///
/// let map = PairingMap::dna();
/// assert_eq!(map.complement('A'), Some('T'));
/// assert_eq!(map.complement('G'), Some('C'));
/// assert_eq!(map.complement('N'), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingMap {
    partners: BTreeMap<char, char>,
}

impl PairingMap {
    /// Builds a map from unordered pairs.
    ///
    /// # Errors
    ///
    /// Returns [`PairingError::Empty`] if no pairs are given and [`PairingError::Conflict`] if a
    /// symbol would be paired with two different partners.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, PairingError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut partners = BTreeMap::new();
        for (a, b) in pairs {
            Self::insert(&mut partners, a, b)?;
            Self::insert(&mut partners, b, a)?;
        }
        if partners.is_empty() {
            return Err(PairingError::Empty);
        }
        Ok(Self { partners })
    }

    fn insert(
        partners: &mut BTreeMap<char, char>,
        from: char,
        to: char,
    ) -> Result<(), PairingError> {
        match partners.get(&from) {
            Some(&existing) if existing != to => {
                Err(PairingError::Conflict { symbol: from, first: existing, second: to })
            }
            Some(_) => Ok(()),
            None => {
                partners.insert(from, to);
                Ok(())
            }
        }
    }

    /// Parses a comma-separated list of two-symbol pairs, e.g. `"AT,CG"`.
    ///
    /// Whitespace around pairs is ignored; empty entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PairingError::Malformed`] for entries that are not exactly two symbols, plus any
    /// error from [`PairingMap::from_pairs`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fgbarcodes_dna::PairingMap;
    ///
    /// let map = PairingMap::parse("AT, CG").unwrap();
    /// assert_eq!(map, PairingMap::dna());
    /// assert!(PairingMap::parse("ATG").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self, PairingError> {
        let mut pairs = Vec::new();
        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let mut chars = entry.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => pairs.push((a, b)),
                _ => return Err(PairingError::Malformed { pair: entry.to_string() }),
            }
        }
        Self::from_pairs(pairs)
    }

    /// The Watson-Crick pairing A<->T, C<->G.
    #[must_use]
    pub fn dna() -> Self {
        let partners = [('A', 'T'), ('T', 'A'), ('C', 'G'), ('G', 'C')].into_iter().collect();
        Self { partners }
    }

    /// Returns the partner of `symbol`, or `None` if it is unmapped.
    #[inline]
    #[must_use]
    pub fn complement(&self, symbol: char) -> Option<char> {
        self.partners.get(&symbol).copied()
    }

    /// Number of mapped symbols (each side of a pair counts once).
    #[must_use]
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// True if the map has no symbols. Never true for a constructed map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

impl Default for PairingMap {
    fn default() -> Self {
        Self::dna()
    }
}

impl fmt::Display for PairingMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .partners
            .iter()
            .filter(|(a, b)| a <= b)
            .map(|(a, b)| format!("{a}{b}"))
            .collect();
        write!(f, "{}", pairs.join(","))
    }
}

/// Reverse complements a flattened code.
///
/// The code is reversed in position order and every symbol is replaced by its partner.
///
/// # Errors
///
/// Returns [`UnmappedSymbol`] for the leftmost symbol without a partner. Nothing is produced
/// for a code that contains an unmapped symbol.
///
/// # Examples
///
/// ```
/// use fgbarcodes_dna::{PairingMap, reverse_complement};
///
/// let map = PairingMap::dna();
/// assert_eq!(reverse_complement("AACG", &map).unwrap(), "CGTT");
/// assert!(reverse_complement("AANG", &map).is_err());
/// ```
pub fn reverse_complement(code: &str, map: &PairingMap) -> Result<String, UnmappedSymbol> {
    if let Some((position, symbol)) =
        code.chars().enumerate().find(|&(_, symbol)| map.complement(symbol).is_none())
    {
        return Err(UnmappedSymbol { symbol, position });
    }
    Ok(code.chars().rev().filter_map(|symbol| map.complement(symbol)).collect())
}

/// Reverse complements a batch of flattened codes.
///
/// The output aligns index-for-index with the input.
///
/// # Errors
///
/// Returns the first [`UnmappedSymbol`] found, scanning codes in order.
pub fn reverse_complements<S: AsRef<str>>(
    codes: &[S],
    map: &PairingMap,
) -> Result<Vec<String>, UnmappedSymbol> {
    codes.iter().map(|code| reverse_complement(code.as_ref(), map)).collect()
}
