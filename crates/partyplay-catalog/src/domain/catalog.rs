//! The party catalog: one party, one locale.

use partyplay_core::error::DomainError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::activity::Activity;

/// Headline information about a party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMeta {
    pub title: String,
    pub theme: String,
    pub subtitle: String,
    /// Authored activity count, as advertised on the landing page.
    pub total_activities: u32,
    pub estimated_duration: String,
    pub age_range: String,
}

/// A phase of the party ("island"), holding activities in authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// Stable identifier (`phase_0`, `phase_1`, ...).
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Presentation color for every activity of the phase.
    pub color: String,
    pub description: String,
    pub island_name: String,
    pub order: u32,
    pub activities: Vec<Activity>,
}

/// Presentation details of one crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewProfile {
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// How the children are split into crews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewConfig {
    pub description: String,
    pub teams: Vec<CrewProfile>,
    #[serde(default)]
    pub rotation_tips: Vec<String>,
}

/// An invited family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub adults: u32,
    pub children: u32,
    pub contact: String,
}

/// Headcount totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestSummary {
    pub total_adults: u32,
    pub total_children: u32,
}

/// The guest list with its authored summary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuestList {
    pub summary: GuestSummary,
    pub guests: Vec<Guest>,
}

/// Items that have to be printed before the party.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Printables {
    pub needed: Vec<String>,
}

/// Root aggregate for one party in one locale. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyCatalog {
    pub meta: PartyMeta,
    pub phases: Vec<Phase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crews: Option<CrewConfig>,
    #[serde(default)]
    pub guest_list: GuestList,
    #[serde(default)]
    pub printables: Printables,
}

impl PartyCatalog {
    /// Looks up a phase by id. The first phase with the id wins.
    #[must_use]
    pub fn phase(&self, id: &str) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.id == id)
    }

    /// Number of activities across every phase.
    #[must_use]
    pub fn activity_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.activities.len()).sum()
    }

    /// Hex SHA-256 of the catalog's JSON form, identifying this content revision.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the catalog cannot be
    /// serialized.
    pub fn version_hash(&self) -> Result<String, DomainError> {
        let bytes = serde_json::to_vec(self)
            .map_err(|e| DomainError::Infrastructure(format!("catalog not serializable: {e}")))?;
        Ok(format!("{:x}", Sha256::digest(&bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r##"{
        "meta": {
            "title": "Pirate Party",
            "theme": "pirates",
            "subtitle": "Set sail",
            "totalActivities": 2,
            "estimatedDuration": "2h",
            "ageRange": "4-7"
        },
        "phases": [
            {
                "id": "phase_0", "name": "Arrival", "icon": "⚓", "color": "#0ea5e9",
                "description": "Welcome", "islandName": "Dawn", "order": 0,
                "activities": [{
                    "id": "1", "title": "Time Capsule", "type": "arrival", "typeLabel": "Welcome",
                    "character": { "name": "Luffy", "icon": "👒" },
                    "objective": "Say hi", "description": "Draw a map",
                    "duration": "15 min", "difficulty": "easy"
                }]
            },
            {
                "id": "phase_1", "name": "Adventure", "icon": "🗺️", "color": "#f59e0b",
                "description": "Games", "islandName": "Grand Line", "order": 1,
                "activities": [{
                    "id": "11", "title": "Final Battle", "type": "finale", "typeLabel": "Finale",
                    "character": { "name": "Zoro", "icon": "⚔️", "color": "#16a34a" },
                    "objective": "Win", "description": "Everyone together",
                    "duration": "20 min", "difficulty": "hard"
                }]
            }
        ],
        "guestList": {
            "summary": { "totalAdults": 2, "totalChildren": 3 },
            "guests": [{ "name": "García", "adults": 2, "children": 3, "contact": "555-0100" }]
        },
        "printables": { "needed": ["Treasure map"] }
    }"##;

    fn catalog() -> PartyCatalog {
        serde_json::from_str(CATALOG).unwrap()
    }

    #[test]
    fn test_catalog_deserializes_from_authored_json() {
        // Act
        let catalog = catalog();

        // Assert
        assert_eq!(catalog.meta.title, "Pirate Party");
        assert_eq!(catalog.phases.len(), 2);
        assert_eq!(catalog.phases[1].island_name, "Grand Line");
        assert!(catalog.crews.is_none());
        assert_eq!(catalog.guest_list.summary.total_children, 3);
        assert_eq!(catalog.printables.needed, vec!["Treasure map".to_owned()]);
    }

    #[test]
    fn test_phase_lookup_and_activity_count() {
        let catalog = catalog();

        assert_eq!(catalog.phase("phase_1").unwrap().activities[0].id, "11");
        assert!(catalog.phase("phase_9").is_none());
        assert_eq!(catalog.activity_count(), 2);
    }

    #[test]
    fn test_version_hash_is_stable_and_content_sensitive() {
        // Arrange
        let original = catalog();
        let mut edited = catalog();
        edited.phases[0].activities[0].title = "Welcome Map".to_owned();

        // Act
        let first = original.version_hash().unwrap();
        let second = original.version_hash().unwrap();
        let changed = edited.version_hash().unwrap();

        // Assert
        assert_eq!(first.len(), 64);
        assert_eq!(first, second);
        assert_ne!(first, changed);
    }
}
