//! Catalog loading.
//!
//! A catalog is loaded once per page view for one party in one locale.
//! Callers treat every failure as a single "catalog unavailable" signal;
//! the `PartyNotFound` / `CatalogLoad` split only matters to HTTP status codes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use partyplay_core::error::DomainError;
use tracing::{debug, info, instrument, warn};

use crate::domain::catalog::PartyCatalog;
use crate::domain::locale::Locale;
use crate::domain::party::PartySlug;

/// Asynchronous source of party catalogs.
#[async_trait]
pub trait CatalogLoader: Send + Sync {
    /// Loads the catalog for `party` in `locale`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PartyNotFound` when no catalog exists for the
    /// party, or `DomainError::CatalogLoad` when it exists but cannot be read
    /// or parsed.
    async fn load(&self, party: &PartySlug, locale: Locale) -> Result<PartyCatalog, DomainError>;
}

/// Loads catalogs from `{root}/{locale}/{party}-party.json`, falling back to
/// a `.yaml` file of the same stem.
#[derive(Debug, Clone)]
pub struct FsCatalogLoader {
    root: PathBuf,
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Json,
    Yaml,
}

impl FsCatalogLoader {
    /// Creates a loader rooted at the content directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the content root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidate(&self, party: &PartySlug, locale: Locale, format: Format) -> PathBuf {
        let extension = match format {
            Format::Json => "json",
            Format::Yaml => "yaml",
        };
        self.root
            .join(locale.code())
            .join(format!("{party}-party.{extension}"))
    }
}

fn parse(raw: &str, format: Format, path: &Path) -> Result<PartyCatalog, DomainError> {
    let parsed = match format {
        Format::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(raw).map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| DomainError::CatalogLoad(format!("{}: {e}", path.display())))
}

#[async_trait]
impl CatalogLoader for FsCatalogLoader {
    #[instrument(skip(self), fields(party = %party, locale = %locale))]
    async fn load(&self, party: &PartySlug, locale: Locale) -> Result<PartyCatalog, DomainError> {
        if party.is_teaser() {
            return Err(DomainError::PartyNotFound(party.to_string()));
        }

        for format in [Format::Json, Format::Yaml] {
            let path = self.candidate(party, locale, format);
            match tokio::fs::read_to_string(&path).await {
                Ok(raw) => {
                    let catalog = parse(&raw, format, &path).inspect_err(|e| {
                        warn!(error = %e, "party catalog failed to parse");
                    })?;
                    let version_hash = catalog.version_hash()?;
                    info!(
                        path = %path.display(),
                        activities = catalog.activity_count(),
                        %version_hash,
                        "party catalog loaded"
                    );
                    return Ok(catalog);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!(path = %path.display(), "no catalog file at candidate path");
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "party catalog unreadable");
                    return Err(DomainError::CatalogLoad(format!("{}: {e}", path.display())));
                }
            }
        }

        Err(DomainError::PartyNotFound(party.to_string()))
    }
}
