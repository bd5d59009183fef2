//! Domain events for the Session & Progress context.
//!
//! Every cursor change produces one event, handed back to the caller so the
//! presentation layer can react (scroll to top, animate, ...).

use partyplay_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Event type identifier for [`NavigationEventKind::Advanced`].
pub const ADVANCED_EVENT_TYPE: &str = "progress.advanced";

/// Event type identifier for [`NavigationEventKind::Completed`].
pub const COMPLETED_EVENT_TYPE: &str = "progress.completed";

/// Event type identifier for [`NavigationEventKind::Retreated`].
pub const RETREATED_EVENT_TYPE: &str = "progress.retreated";

/// Event type identifier for [`NavigationEventKind::Restarted`].
pub const RESTARTED_EVENT_TYPE: &str = "progress.restarted";

/// What happened to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEventKind {
    /// Moved forward onto another activity.
    Advanced { from: usize, to: usize },
    /// Moved from the last activity onto the completed sentinel.
    Completed { from: usize, to: usize },
    /// Moved back one activity.
    Retreated { from: usize, to: usize },
    /// Returned to the start and erased stored progress.
    Restarted { from: usize },
}

impl NavigationEventKind {
    /// The cursor position after the transition.
    #[must_use]
    pub fn cursor_after(self) -> usize {
        match self {
            Self::Advanced { to, .. } | Self::Completed { to, .. } | Self::Retreated { to, .. } => to,
            Self::Restarted { .. } => 0,
        }
    }

    /// The event type identifier for this kind.
    #[must_use]
    pub fn event_type(self) -> &'static str {
        match self {
            Self::Advanced { .. } => ADVANCED_EVENT_TYPE,
            Self::Completed { .. } => COMPLETED_EVENT_TYPE,
            Self::Retreated { .. } => RETREATED_EVENT_TYPE,
            Self::Restarted { .. } => RESTARTED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the Session & Progress context.
#[derive(Debug, Clone)]
pub struct NavigationEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: NavigationEventKind,
}

impl DomainEvent for NavigationEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        match self.kind {
            NavigationEventKind::Advanced { from, to } => json!({ "Advanced": { "from": from, "to": to } }),
            NavigationEventKind::Completed { from, to } => json!({ "Completed": { "from": from, "to": to } }),
            NavigationEventKind::Retreated { from, to } => json!({ "Retreated": { "from": from, "to": to } }),
            NavigationEventKind::Restarted { from } => json!({ "Restarted": { "from": from } }),
        }
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
