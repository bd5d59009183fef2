//! Mounting a play session.
//!
//! A session starts in `Loading`, fetches the catalog, builds the sequence
//! and resumes the stored cursor. Exactly one of `Ready` or `Failed`
//! follows, unless the session was torn down while the catalog was in
//! flight, in which case the result is discarded without touching storage.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use partyplay_catalog::application::loader::CatalogLoader;
use partyplay_catalog::domain::locale::Locale;
use partyplay_catalog::domain::party::PartySlug;
use partyplay_core::clock::Clock;
use partyplay_core::error::DomainError;
use partyplay_core::storage::KeyValueStore;
use tracing::{debug, info, instrument, warn};

use crate::application::navigation::NavigationController;
use crate::application::progress_store::ProgressStore;
use crate::domain::crew::Crew;
use crate::domain::progress_key::ProgressKey;
use crate::domain::sequence::{Sequence, SequencePolicy};

/// Which sequencing a session plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayMode {
    /// Every activity in authored order, tracked per party.
    SingleCrew,
    /// Crew rotation, tracked per party and crew. An absent or unknown
    /// selector falls back to the default crew.
    Crews { selector: Option<String> },
}

impl PlayMode {
    fn policy(&self) -> SequencePolicy {
        match self {
            Self::SingleCrew => SequencePolicy::SingleCrew,
            Self::Crews { selector } => SequencePolicy::CrewRotation(Crew::resolve(selector.as_deref())),
        }
    }
}

/// What to mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRequest {
    pub party: PartySlug,
    pub locale: Locale,
    pub mode: PlayMode,
}

/// Lifecycle state of a play session.
#[derive(Debug, Default)]
pub enum PlayState {
    /// The catalog is being fetched.
    #[default]
    Loading,
    /// The sequence is built and the cursor resumed.
    Ready(NavigationController),
    /// The catalog could not be obtained. Terminal.
    Failed(DomainError),
}

impl PlayState {
    /// Whether the catalog is still being fetched.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Signals that the consumer of a mount has gone away.
#[derive(Debug, Clone, Default)]
pub struct Teardown(Arc<AtomicBool>);

impl Teardown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the session as torn down. Idempotent.
    pub fn trigger(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Result of [`mount_play_session`].
#[derive(Debug)]
pub enum MountOutcome {
    /// The state to apply.
    Applied(PlayState),
    /// Teardown happened first; nothing was applied.
    Discarded,
}

/// Loads the catalog for `request` and resumes the stored cursor.
///
/// Storage is read only after the catalog arrives and only if `teardown`
/// has not been triggered by then.
#[instrument(skip(loader, store, clock, teardown), fields(party = %request.party, locale = %request.locale))]
pub async fn mount_play_session(
    request: &PlayRequest,
    loader: &dyn CatalogLoader,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    teardown: &Teardown,
) -> MountOutcome {
    debug!("loading party catalog");
    let loaded = loader.load(&request.party, request.locale).await;

    if teardown.is_triggered() {
        debug!("session torn down while loading, discarding result");
        return MountOutcome::Discarded;
    }

    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(error = %e, "catalog unavailable");
            return MountOutcome::Applied(PlayState::Failed(e));
        }
    };

    let policy = request.mode.policy();
    let sequence = Sequence::build(Arc::new(catalog), policy);
    let key = ProgressKey::new(request.party.clone(), policy.crew());
    info!(key = %key, activities = sequence.len(), "sequence built");

    let controller = NavigationController::resume(sequence, key, ProgressStore::new(store), clock);
    MountOutcome::Applied(PlayState::Ready(controller))
}
