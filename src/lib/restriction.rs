//! Restriction-site filtering of flattened codes.
//!
//! A restriction site is a forbidden substring: a barcode containing one would be cut by the
//! matching enzyme. Filtering is a plain predicate over flattened strings and knows nothing
//! about distances. Removing a code does not bring back candidates that were rejected for being
//! too close to it.

use ahash::AHashSet;

use crate::errors::{BarcodeError, Result};

/// A set of forbidden substrings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestrictionSites {
    /// Distinct sites in first-seen order
    sites: Vec<String>,
}

impl RestrictionSites {
    /// Builds a site set, dropping repeated sites.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::InvalidParameter`] for an empty site, which would match every code.
    ///
    /// # Examples
    ///
    /// ```
    /// use fgbarcodes_lib::restriction::RestrictionSites;
    ///
    /// let sites = RestrictionSites::new(["GAATTC", "GGATCC", "GAATTC"]).unwrap();
    /// assert_eq!(sites.len(), 2);
    /// assert!(sites.permits("ACGTACGT"));
    /// assert!(!sites.permits("AGAATTCA"));
    /// ```
    pub fn new<I, S>(sites: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = AHashSet::new();
        let mut distinct = Vec::new();
        for site in sites {
            let site = site.into();
            if site.is_empty() {
                return Err(BarcodeError::InvalidParameter {
                    parameter: "restriction-site".to_string(),
                    reason: "restriction sites must not be empty".to_string(),
                });
            }
            if seen.insert(site.clone()) {
                distinct.push(site);
            }
        }
        Ok(Self { sites: distinct })
    }

    /// The distinct sites in first-seen order.
    #[must_use]
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Number of distinct sites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// True if there are no sites, in which case every code is permitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// The first site, in first-seen order, contained in `code`.
    #[must_use]
    pub fn first_match(&self, code: &str) -> Option<&str> {
        self.sites.iter().map(String::as_str).find(|site| code.contains(site))
    }

    /// True if `code` contains none of the sites.
    #[must_use]
    pub fn permits(&self, code: &str) -> bool {
        self.first_match(code).is_none()
    }

    /// Keeps the codes containing none of the sites, in their original order.
    #[must_use]
    pub fn filter<S: AsRef<str>>(&self, codes: &[S]) -> Vec<String> {
        codes
            .iter()
            .map(AsRef::as_ref)
            .filter(|code| self.permits(code))
            .map(str::to_string)
            .collect()
    }
}

/// Removes every code containing any of `sites`.
///
/// # Errors
///
/// Returns [`BarcodeError::InvalidParameter`] if any site is empty.
///
/// # Examples
///
/// ```
/// use fgbarcodes_lib::restriction::filter_restriction_sites;
///
/// let kept = filter_restriction_sites(&["AACC", "AAGG", "CCTT"], &["CC"]).unwrap();
/// assert_eq!(kept, vec!["AAGG"]);
/// ```
pub fn filter_restriction_sites<S, T>(codes: &[S], sites: &[T]) -> Result<Vec<String>>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let sites = RestrictionSites::new(sites.iter().map(|s| s.as_ref().to_string()))?;
    Ok(sites.filter(codes))
}
