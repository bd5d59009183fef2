//! Navigation over a built sequence.
//!
//! The controller is the only owner of a cursor for its key. Every change
//! is persisted immediately and reported as a [`NavigationEvent`].

use std::sync::Arc;

use partyplay_catalog::domain::activity::Activity;
use partyplay_catalog::domain::catalog::Phase;
use partyplay_core::clock::Clock;
use partyplay_core::event::EventMetadata;
use tracing::{debug, info, warn};

use crate::application::progress_store::ProgressStore;
use crate::domain::crew::Crew;
use crate::domain::cursor::Cursor;
use crate::domain::events::{NavigationEvent, NavigationEventKind};
use crate::domain::progress_key::ProgressKey;
use crate::domain::sequence::Sequence;

/// Everything needed to render the current activity.
#[derive(Debug, Clone, Copy)]
pub struct ActivityFrame<'a> {
    pub activity: &'a Activity,
    pub phase: &'a Phase,
    /// 0-based position.
    pub position: usize,
    pub total: usize,
    pub has_next: bool,
    pub has_prev: bool,
    pub crew: Option<Crew>,
}

/// What the presentation layer should show.
#[derive(Debug, Clone, Copy)]
pub enum PlayView<'a> {
    /// An activity is in progress.
    Activity(ActivityFrame<'a>),
    /// Every activity has been played.
    Completed { total: usize },
}

/// Holds the cursor over one sequence and persists it under one key.
pub struct NavigationController {
    sequence: Sequence,
    cursor: Cursor,
    key: ProgressKey,
    progress: ProgressStore,
    clock: Arc<dyn Clock>,
    events_emitted: u64,
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("key", &self.key)
            .field("cursor", &self.cursor)
            .field("len", &self.sequence.len())
            .finish_non_exhaustive()
    }
}

impl NavigationController {
    /// Creates a controller, seeding the cursor from stored progress.
    ///
    /// A stored cursor beyond the sequence (left over from longer content)
    /// is clamped to the completed sentinel and the clamped value is written
    /// back.
    #[must_use]
    pub fn resume(
        sequence: Sequence,
        key: ProgressKey,
        progress: ProgressStore,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let stored = progress.load(&key);
        let cursor = Cursor::seeded(stored, sequence.len());
        if let Some(stored) = stored.filter(|s| *s != cursor.position()) {
            warn!(key = %key, stored, clamped = cursor.position(), "stored progress out of range");
            progress.save(&key, cursor.position());
        }
        info!(key = %key, cursor = cursor.position(), len = sequence.len(), "play session ready");
        Self {
            sequence,
            cursor,
            key,
            progress,
            clock,
            events_emitted: 0,
        }
    }

    /// Current cursor position, in `0..=len`.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor.position()
    }

    /// Sequence length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the sequence has no activities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Whether the cursor sits on the completed sentinel.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.cursor.is_completed(self.sequence.len())
    }

    #[must_use]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    #[must_use]
    pub fn key(&self) -> &ProgressKey {
        &self.key
    }

    /// The current view.
    #[must_use]
    pub fn view(&self) -> PlayView<'_> {
        let total = self.sequence.len();
        match self.sequence.get(self.cursor.position()) {
            Some(step) => PlayView::Activity(ActivityFrame {
                activity: step.activity,
                phase: step.phase,
                position: step.position,
                total,
                has_next: self.cursor.has_next(total),
                has_prev: self.cursor.has_prev(total),
                crew: self.key.crew(),
            }),
            None => PlayView::Completed { total },
        }
    }

    /// Moves to the next activity, or onto the completed sentinel from the
    /// last one. Returns `None` once completed.
    pub fn advance(&mut self) -> Option<NavigationEvent> {
        let len = self.sequence.len();
        let from = self.cursor.position();
        let next = self.cursor.advanced(len)?;
        let kind = if next.is_completed(len) {
            NavigationEventKind::Completed { from, to: next.position() }
        } else {
            NavigationEventKind::Advanced { from, to: next.position() }
        };
        self.cursor = next;
        self.progress.save(&self.key, next.position());
        Some(self.emit(kind))
    }

    /// Moves back one activity. Returns `None` at the first activity and
    /// once completed.
    pub fn retreat(&mut self) -> Option<NavigationEvent> {
        let from = self.cursor.position();
        let previous = self.cursor.retreated(self.sequence.len())?;
        self.cursor = previous;
        self.progress.save(&self.key, previous.position());
        Some(self.emit(NavigationEventKind::Retreated {
            from,
            to: previous.position(),
        }))
    }

    /// Returns to the first activity and erases the stored cursor.
    pub fn reset(&mut self) -> NavigationEvent {
        let from = self.cursor.position();
        self.cursor = Cursor::START;
        self.progress.clear(&self.key);
        self.emit(NavigationEventKind::Restarted { from })
    }

    fn emit(&mut self, kind: NavigationEventKind) -> NavigationEvent {
        self.events_emitted += 1;
        debug!(key = %self.key, event = kind.event_type(), cursor = kind.cursor_after(), "navigation");
        NavigationEvent {
            metadata: EventMetadata::new(kind.event_type(), self.events_emitted, self.clock.now()),
            kind,
        }
    }
}
