//! Symbols and per-position alphabets.
//!
//! An alphabet is an ordered list of symbols for every position of a code. It can be given as
//! integer counts per position (position `i` then holds the implicit symbols `1..=count_i`), as
//! one literal symbol set shared by every position, or position by position. All three reduce to
//! the same per-position representation, and the order of symbols within a position is the
//! order in which candidates are enumerated.

use std::fmt;

use ahash::AHashSet;

use crate::code::Code;
use crate::errors::{BarcodeError, Result};

/// Nucleotide symbols in enumeration order.
pub const DNA_SYMBOLS: [char; 4] = ['A', 'C', 'G', 'T'];

/// A single symbol of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// One of the implicit symbols `1..=count` of a position given by a count
    Ordinal(u32),
    /// A literal symbol such as a nucleotide
    Literal(char),
}

impl Symbol {
    /// Returns the symbol rendered as one character, if it has such a rendering.
    ///
    /// Literals render as themselves; ordinals render as a decimal digit when below ten.
    ///
    /// # Examples
    ///
    /// ```
    /// use fgbarcodes_lib::alphabet::Symbol;
    ///
    /// assert_eq!(Symbol::Literal('G').token(), Some('G'));
    /// assert_eq!(Symbol::Ordinal(7).token(), Some('7'));
    /// assert_eq!(Symbol::Ordinal(12).token(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn token(self) -> Option<char> {
        match self {
            Symbol::Literal(c) => Some(c),
            Symbol::Ordinal(n) => char::from_digit(n, 10),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Ordinal(n) => write!(f, "{n}"),
            Symbol::Literal(c) => write!(f, "{c}"),
        }
    }
}

/// Ordered symbol lists, one per code position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    positions: Vec<Vec<Symbol>>,
}

impl Alphabet {
    /// Builds an alphabet from explicit per-position symbol lists.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::InvalidAlphabet`] if there are no positions, if any position has no
    /// symbols, or if a position lists the same symbol twice.
    pub fn per_position(positions: Vec<Vec<Symbol>>) -> Result<Self> {
        if positions.is_empty() {
            return Err(BarcodeError::InvalidAlphabet {
                position: 0,
                reason: "an alphabet needs at least one position".to_string(),
            });
        }

        for (position, symbols) in positions.iter().enumerate() {
            if symbols.is_empty() {
                return Err(BarcodeError::InvalidAlphabet {
                    position,
                    reason: "no symbols".to_string(),
                });
            }
            let mut seen = AHashSet::with_capacity(symbols.len());
            if let Some(dup) = symbols.iter().find(|s| !seen.insert(**s)) {
                return Err(BarcodeError::InvalidAlphabet {
                    position,
                    reason: format!("symbol '{dup}' is listed more than once"),
                });
            }
        }

        Ok(Self { positions })
    }

    /// Builds an alphabet from per-position symbol counts.
    ///
    /// Position `i` holds the ordinal symbols `1..=counts[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::InvalidAlphabet`] if `counts` is empty or any count is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fgbarcodes_lib::alphabet::{Alphabet, Symbol};
    ///
    /// let alphabet = Alphabet::from_counts(&[2, 3]).unwrap();
    /// assert_eq!(alphabet.code_length(), 2);
    /// assert_eq!(alphabet.positions()[1], vec![Symbol::Ordinal(1), Symbol::Ordinal(2), Symbol::Ordinal(3)]);
    /// assert_eq!(alphabet.candidate_count(), Some(6));
    /// ```
    pub fn from_counts(counts: &[usize]) -> Result<Self> {
        let positions = counts
            .iter()
            .enumerate()
            .map(|(position, &count)| {
                let count = u32::try_from(count).map_err(|_| BarcodeError::InvalidAlphabet {
                    position,
                    reason: format!("{count} symbols is more than supported"),
                })?;
                Ok((1..=count).map(Symbol::Ordinal).collect())
            })
            .collect::<Result<Vec<Vec<Symbol>>>>()?;
        Self::per_position(positions)
    }

    /// Builds an alphabet that repeats one literal symbol set over `length` positions.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::InvalidAlphabet`] if `symbols` is empty, contains duplicates,
    /// or `length` is zero.
    pub fn shared(symbols: &[char], length: usize) -> Result<Self> {
        let position: Vec<Symbol> = symbols.iter().copied().map(Symbol::Literal).collect();
        Self::per_position(vec![position; length])
    }

    /// The nucleotide alphabet `ACGT` over `length` positions.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::InvalidAlphabet`] if `length` is zero.
    pub fn dna(length: usize) -> Result<Self> {
        Self::shared(&DNA_SYMBOLS, length)
    }

    /// Number of positions in every code drawn from this alphabet.
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.positions.len()
    }

    /// Per-position symbol lists, in enumeration order.
    #[must_use]
    pub fn positions(&self) -> &[Vec<Symbol>] {
        &self.positions
    }

    /// Size of the Cartesian product of all positions, or `None` if it overflows a `u128`.
    #[must_use]
    pub fn candidate_count(&self) -> Option<u128> {
        self.positions.iter().try_fold(1u128, |acc, symbols| acc.checked_mul(symbols.len() as u128))
    }

    /// True if `code` has one symbol per position and every symbol belongs to its position.
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        code.len() == self.code_length()
            && code.symbols().iter().zip(&self.positions).all(|(s, symbols)| symbols.contains(s))
    }
}

/// Parses a literal symbol set such as `"ACGT"` or `"A,C,G,T"`.
///
/// Commas and whitespace are separators, not symbols.
///
/// # Examples
///
/// ```
/// use fgbarcodes_lib::alphabet::parse_symbols;
///
/// assert_eq!(parse_symbols("ACGT"), vec!['A', 'C', 'G', 'T']);
/// assert_eq!(parse_symbols("A, C,G T"), vec!['A', 'C', 'G', 'T']);
/// ```
#[must_use]
pub fn parse_symbols(spec: &str) -> Vec<char> {
    spec.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect()
}
