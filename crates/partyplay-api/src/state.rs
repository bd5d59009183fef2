//! Shared application state.

use std::sync::Arc;

use partyplay_catalog::application::loader::CatalogLoader;

/// Application state shared across all request handlers.
///
/// The API is read-only: it serves catalog views and never holds a
/// player's progress.
#[derive(Clone)]
pub struct AppState {
    /// Source of party catalogs.
    pub loader: Arc<dyn CatalogLoader>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(loader: Arc<dyn CatalogLoader>) -> Self {
        Self { loader }
    }
}
