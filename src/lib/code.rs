//! Fixed-length codes.
//!
//! A [`Code`] is an immutable sequence of [`Symbol`]s. Codes are produced by the candidate
//! generator or supplied literally as a seed, and are only compared against codes of the same
//! length.

use std::fmt;

use crate::alphabet::Symbol;
use crate::errors::{BarcodeError, Result};

/// An ordered, fixed-length, immutable sequence of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    symbols: Box<[Symbol]>,
}

impl Code {
    /// Creates a code from its symbols.
    #[must_use]
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols: symbols.into_boxed_slice() }
    }

    /// Creates a code of literal symbols, one per character.
    ///
    /// # Examples
    ///
    /// ```
    /// use fgbarcodes_lib::code::Code;
    ///
    /// let code = Code::from_literal("AACG");
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.flatten().unwrap(), "AACG");
    /// ```
    #[must_use]
    pub fn from_literal(code: &str) -> Self {
        code.chars().map(Symbol::Literal).collect()
    }

    /// Creates a code of ordinal symbols.
    #[must_use]
    pub fn from_ordinals(ordinals: &[u32]) -> Self {
        ordinals.iter().copied().map(Symbol::Ordinal).collect()
    }

    /// Parses a delimited list of ordinals such as `"1,1,2,1"`.
    ///
    /// Fields may be separated by commas, tabs or spaces.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::InvalidParameter`] if any field is not a non-negative integer or
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fgbarcodes_lib::code::Code;
    ///
    /// assert_eq!(Code::parse_ordinals("1,2, 3").unwrap(), Code::from_ordinals(&[1, 2, 3]));
    /// assert!(Code::parse_ordinals("1,x").is_err());
    /// ```
    pub fn parse_ordinals(fields: &str) -> Result<Self> {
        let ordinals = fields
            .split(|c: char| c == ',' || c == '\t' || c == ' ')
            .filter(|f| !f.is_empty())
            .map(|f| {
                f.parse::<u32>().map_err(|_| BarcodeError::InvalidParameter {
                    parameter: "code".to_string(),
                    reason: format!("'{f}' is not a valid symbol number in '{fields}'"),
                })
            })
            .collect::<Result<Vec<u32>>>()?;

        if ordinals.is_empty() {
            return Err(BarcodeError::InvalidParameter {
                parameter: "code".to_string(),
                reason: "no symbols given".to_string(),
            });
        }
        Ok(Self::from_ordinals(&ordinals))
    }

    /// Number of symbols in the code.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the code has no symbols.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols of the code in position order.
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Renders the code as a string with exactly one character per symbol.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::UnflattenableSymbol`] for a symbol without a single-character
    /// rendering (an ordinal of ten or more), since concatenating it would lose symbol identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use fgbarcodes_lib::code::Code;
    ///
    /// assert_eq!(Code::from_ordinals(&[1, 2, 9]).flatten().unwrap(), "129");
    /// assert!(Code::from_ordinals(&[1, 12]).flatten().is_err());
    /// ```
    pub fn flatten(&self) -> Result<String> {
        self.symbols
            .iter()
            .map(|s| {
                s.token().ok_or_else(|| BarcodeError::UnflattenableSymbol { symbol: s.to_string() })
            })
            .collect()
    }

    /// Renders every symbol as its own field, for delimited output.
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        self.symbols.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<Symbol> for Code {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self { symbols: iter.into_iter().collect() }
    }
}

impl fmt::Display for Code {
    /// Flattened form when possible, otherwise comma-separated fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flatten() {
            Ok(flat) => write!(f, "{flat}"),
            Err(_) => write!(f, "{}", self.fields().join(",")),
        }
    }
}
