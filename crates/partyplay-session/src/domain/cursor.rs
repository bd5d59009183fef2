//! Position within a sequence.
//!
//! Valid positions are `0..=len`; `len` itself is the completed sentinel,
//! one past the last activity.

use serde::{Deserialize, Serialize};

/// Current position in a sequence of a known length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cursor(usize);

impl Cursor {
    /// The first activity.
    pub const START: Cursor = Cursor(0);

    /// Seeds a cursor from a stored position, clamped to the completed
    /// sentinel of a sequence of length `len`.
    #[must_use]
    pub fn seeded(stored: Option<usize>, len: usize) -> Self {
        Self(stored.unwrap_or(0).min(len))
    }

    /// The raw 0-based position.
    #[must_use]
    pub fn position(self) -> usize {
        self.0
    }

    /// Whether the cursor sits on the completed sentinel.
    #[must_use]
    pub fn is_completed(self, len: usize) -> bool {
        self.0 >= len
    }

    /// The next position: one step forward, or the sentinel after the last
    /// activity. `None` once completed.
    #[must_use]
    pub fn advanced(self, len: usize) -> Option<Self> {
        (self.0 < len).then_some(Self(self.0 + 1))
    }

    /// The previous position. `None` at the first activity and once completed.
    #[must_use]
    pub fn retreated(self, len: usize) -> Option<Self> {
        (self.0 > 0 && self.0 < len).then(|| Self(self.0 - 1))
    }

    /// Whether another activity follows the current one.
    #[must_use]
    pub fn has_next(self, len: usize) -> bool {
        self.0 + 1 < len
    }

    /// Whether an activity precedes the current one.
    #[must_use]
    pub fn has_prev(self, len: usize) -> bool {
        self.0 > 0 && self.0 < len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seeded_defaults_to_start_and_clamps_to_sentinel() {
        assert_eq!(Cursor::seeded(None, 6), Cursor::START);
        assert_eq!(Cursor::seeded(Some(3), 6).position(), 3);
        assert_eq!(Cursor::seeded(Some(2), 1).position(), 1);
        assert_eq!(Cursor::seeded(Some(9), 0).position(), 0);
    }

    #[test]
    fn test_advance_from_last_activity_reaches_sentinel_then_stops() {
        // Arrange
        let last = Cursor::seeded(Some(2), 3);

        // Act
        let completed = last.advanced(3).unwrap();

        // Assert
        assert_eq!(completed.position(), 3);
        assert!(completed.is_completed(3));
        assert_eq!(completed.advanced(3), None);
    }

    #[test]
    fn test_retreat_is_noop_at_start_and_when_completed() {
        assert_eq!(Cursor::START.retreated(3), None);
        assert_eq!(Cursor::seeded(Some(3), 3).retreated(3), None);
        assert_eq!(Cursor::seeded(Some(2), 3).retreated(3), Some(Cursor::seeded(Some(1), 3)));
    }

    #[test]
    fn test_neighbour_flags() {
        let first = Cursor::START;
        let last = Cursor::seeded(Some(2), 3);

        assert!(first.has_next(3));
        assert!(!first.has_prev(3));
        assert!(!last.has_next(3));
        assert!(last.has_prev(3));
    }

    #[test]
    fn test_empty_sequence_starts_completed() {
        let cursor = Cursor::seeded(None, 0);

        assert!(cursor.is_completed(0));
        assert_eq!(cursor.advanced(0), None);
        assert_eq!(cursor.retreated(0), None);
    }

    proptest! {
        #[test]
        fn prop_cursor_stays_within_bounds(
            len in 0usize..20,
            start in 0usize..40,
            moves in proptest::collection::vec(any::<bool>(), 0..60),
        ) {
            let mut cursor = Cursor::seeded(Some(start), len);
            for forward in moves {
                let next = if forward { cursor.advanced(len) } else { cursor.retreated(len) };
                if let Some(next) = next {
                    cursor = next;
                }
                prop_assert!(cursor.position() <= len);
            }
        }
    }
}
