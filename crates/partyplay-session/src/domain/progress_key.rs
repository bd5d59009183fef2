//! Composite persistence key for a crew's progress.

use std::fmt;

use partyplay_catalog::domain::party::PartySlug;

use super::crew::Crew;

const NAMESPACE: &str = "partyplay";

/// Identifies one persisted cursor: a party, and the crew when crews rotate.
///
/// Party slugs never contain `:`, and crew ids are fixed, so the storage
/// form cannot collide across parties or crews.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProgressKey {
    party: PartySlug,
    crew: Option<Crew>,
}

impl ProgressKey {
    /// Key for `party`, scoped to `crew` when given.
    #[must_use]
    pub fn new(party: PartySlug, crew: Option<Crew>) -> Self {
        Self { party, crew }
    }

    #[must_use]
    pub fn party(&self) -> &PartySlug {
        &self.party
    }

    #[must_use]
    pub fn crew(&self) -> Option<Crew> {
        self.crew
    }

    /// The string used against the key-value store.
    #[must_use]
    pub fn storage_key(&self) -> String {
        match self.crew {
            Some(crew) => format!("{NAMESPACE}:{}:{crew}:progress", self.party),
            None => format!("{NAMESPACE}:{}:progress", self.party),
        }
    }
}

impl fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}
