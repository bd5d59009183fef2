//! Party identity.

use std::fmt;
use std::str::FromStr;

use partyplay_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Party whose activities can be played.
pub const ONE_PIECE: &str = "one-piece";

/// Teaser page without a catalog.
pub const COMING_SOON: &str = "coming-soon";

/// A validated party identifier (`one-piece`, ...).
///
/// Slugs are lowercase ASCII alphanumerics and `-`, which keeps them safe
/// to embed in file names and storage keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartySlug(String);

impl PartySlug {
    /// Validates and wraps `raw`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `raw` is empty or contains
    /// anything other than lowercase ASCII alphanumerics and `-`.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let valid = !raw.is_empty()
            && raw
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
        if valid {
            Ok(Self(raw.to_owned()))
        } else {
            Err(DomainError::Validation(format!("invalid party slug: {raw:?}")))
        }
    }

    /// The slug of the playable party.
    #[must_use]
    pub fn one_piece() -> Self {
        Self(ONE_PIECE.to_owned())
    }

    /// Returns the slug text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this slug names the teaser page rather than a real party.
    #[must_use]
    pub fn is_teaser(&self) -> bool {
        self.0 == COMING_SOON
    }
}

impl fmt::Display for PartySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PartySlug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PartySlug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PartySlug> for String {
    fn from(slug: PartySlug) -> Self {
        slug.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs_are_accepted() {
        assert_eq!(PartySlug::new("one-piece").unwrap().as_str(), "one-piece");
        assert_eq!(PartySlug::new("party2").unwrap().as_str(), "party2");
    }

    #[test]
    fn test_invalid_slugs_are_rejected() {
        for raw in ["", "One-Piece", "one piece", "../etc", "one:piece"] {
            match PartySlug::new(raw) {
                Err(DomainError::Validation(_)) => {}
                other => panic!("expected Validation for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_teaser_detection() {
        assert!(PartySlug::new(COMING_SOON).unwrap().is_teaser());
        assert!(!PartySlug::one_piece().is_teaser());
    }
}
