//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Only the catalog variants are ever surfaced to a player. Stale progress,
/// unknown crew selectors and store failures are normalised where they are
/// detected and never travel upward as errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The party catalog could not be obtained or parsed.
    #[error("party catalog unavailable: {0}")]
    CatalogLoad(String),

    /// No catalog exists for the requested party.
    #[error("party not found: {0}")]
    PartyNotFound(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Returns `true` for the failures that mean "no catalog for this page".
    #[must_use]
    pub fn is_catalog_failure(&self) -> bool {
        matches!(self, Self::CatalogLoad(_) | Self::PartyNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_variants_are_catalog_failures() {
        assert!(DomainError::CatalogLoad("io".into()).is_catalog_failure());
        assert!(DomainError::PartyNotFound("pirates".into()).is_catalog_failure());
        assert!(!DomainError::Validation("bad slug".into()).is_catalog_failure());
        assert!(!DomainError::Infrastructure("disk full".into()).is_catalog_failure());
    }

    #[test]
    fn test_display_includes_detail() {
        let err = DomainError::PartyNotFound("pirates".into());
        assert_eq!(err.to_string(), "party not found: pirates");
    }
}
