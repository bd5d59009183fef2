//! Test loaders — mock `CatalogLoader` implementations for tests.

use async_trait::async_trait;
use partyplay_catalog::application::loader::CatalogLoader;
use partyplay_catalog::domain::catalog::PartyCatalog;
use partyplay_catalog::domain::locale::Locale;
use partyplay_catalog::domain::party::PartySlug;
use partyplay_core::error::DomainError;
use tokio::sync::Notify;

/// A loader that returns a clone of the same catalog for every party and locale.
#[derive(Debug, Clone)]
pub struct StaticCatalogLoader(pub PartyCatalog);

#[async_trait]
impl CatalogLoader for StaticCatalogLoader {
    async fn load(&self, _party: &PartySlug, _locale: Locale) -> Result<PartyCatalog, DomainError> {
        Ok(self.0.clone())
    }
}

/// A loader that always fails. `not_found` selects `PartyNotFound` over
/// `CatalogLoad`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCatalogLoader {
    pub not_found: bool,
}

#[async_trait]
impl CatalogLoader for FailingCatalogLoader {
    async fn load(&self, party: &PartySlug, _locale: Locale) -> Result<PartyCatalog, DomainError> {
        if self.not_found {
            Err(DomainError::PartyNotFound(party.to_string()))
        } else {
            Err(DomainError::CatalogLoad("unexpected end of input".into()))
        }
    }
}

/// A loader that holds its result until [`GatedCatalogLoader::release`] is
/// called. Used to interleave teardown with an in-flight load.
#[derive(Debug)]
pub struct GatedCatalogLoader {
    catalog: PartyCatalog,
    gate: Notify,
}

impl GatedCatalogLoader {
    /// Creates a closed gate in front of `catalog`.
    #[must_use]
    pub fn new(catalog: PartyCatalog) -> Self {
        Self {
            catalog,
            gate: Notify::new(),
        }
    }

    /// Lets the pending (or next) load complete.
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl CatalogLoader for GatedCatalogLoader {
    async fn load(&self, _party: &PartySlug, _locale: Locale) -> Result<PartyCatalog, DomainError> {
        self.gate.notified().await;
        Ok(self.catalog.clone())
    }
}
