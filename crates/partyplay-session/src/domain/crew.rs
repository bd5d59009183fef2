//! Crew selection.

use std::fmt;

use partyplay_catalog::domain::catalog::{CrewProfile, PartyCatalog};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction a crew walks the main adventure activities in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Authored order.
    Authored,
    /// Reverse authored order.
    Reversed,
}

/// One of the crews the children are split into.
///
/// The id doubles as the persistence key component, so it must never change
/// for an existing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crew {
    Red,
    Blue,
}

impl Crew {
    /// Every crew, in the order the catalog lists their profiles.
    pub const ALL: [Crew; 2] = [Crew::Red, Crew::Blue];

    /// Crew used whenever the selector is missing or unrecognised.
    pub const DEFAULT: Crew = Crew::Red;

    /// Stable identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }

    /// The route this crew takes through the main adventure.
    #[must_use]
    pub fn route(self) -> Route {
        match self {
            Self::Red => Route::Authored,
            Self::Blue => Route::Reversed,
        }
    }

    /// Parses a crew id, ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|crew| crew.id().eq_ignore_ascii_case(raw))
    }

    /// Resolves an external selector, falling back to [`Crew::DEFAULT`].
    #[must_use]
    pub fn resolve(selector: Option<&str>) -> Self {
        match selector {
            Some(raw) => Self::parse(raw).unwrap_or_else(|| {
                debug!(selector = raw, fallback = Self::DEFAULT.id(), "unknown crew selector");
                Self::DEFAULT
            }),
            None => Self::DEFAULT,
        }
    }

    /// The catalog's presentation profile for this crew, if configured.
    #[must_use]
    pub fn profile(self, catalog: &PartyCatalog) -> Option<&CrewProfile> {
        let index = Self::ALL.iter().position(|crew| *crew == self)?;
        catalog.crews.as_ref()?.teams.get(index)
    }
}

impl fmt::Display for Crew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partyplay_test_support::scenario_catalog;

    #[test]
    fn test_parse_accepts_known_ids_case_insensitively() {
        assert_eq!(Crew::parse("red"), Some(Crew::Red));
        assert_eq!(Crew::parse(" BLUE "), Some(Crew::Blue));
        assert_eq!(Crew::parse("green"), None);
        assert_eq!(Crew::parse(""), None);
    }

    #[test]
    fn test_resolve_falls_back_to_default_crew() {
        assert_eq!(Crew::resolve(None), Crew::Red);
        assert_eq!(Crew::resolve(Some("not-a-real-team")), Crew::Red);
        assert_eq!(Crew::resolve(Some("blue")), Crew::Blue);
    }

    #[test]
    fn test_routes_differ_between_crews() {
        assert_eq!(Crew::DEFAULT.route(), Route::Authored);
        assert_eq!(Crew::Blue.route(), Route::Reversed);
    }

    #[test]
    fn test_profile_is_looked_up_by_position() {
        // Arrange
        let catalog = scenario_catalog();

        // Act
        let blue = Crew::Blue.profile(&catalog).unwrap();

        // Assert
        assert_eq!(blue.name, "Blue Crew");
    }

    #[test]
    fn test_profile_absent_without_crew_config() {
        // Arrange
        let mut catalog = scenario_catalog();
        catalog.crews = None;

        // Act / Assert
        assert!(Crew::Red.profile(&catalog).is_none());
    }
}
