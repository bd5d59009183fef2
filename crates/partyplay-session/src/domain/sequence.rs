//! Flattening a catalog into the linear order a crew plays it in.
//!
//! Building is pure: the same catalog and policy always produce the same
//! sequence, so it is rebuilt on every load rather than persisted.

use std::sync::Arc;

use partyplay_catalog::domain::activity::Activity;
use partyplay_catalog::domain::catalog::{PartyCatalog, Phase};

use super::crew::{Crew, Route};

/// Arrival phase, identical for every crew.
pub const ARRIVAL_PHASE_ID: &str = "phase_0";
/// Main adventure phase, whose order depends on the crew.
pub const ADVENTURE_PHASE_ID: &str = "phase_1";
/// Treasure phase, identical for every crew.
pub const TREASURE_PHASE_ID: &str = "phase_2";
/// Id marking the adventure finale when no activity carries an explicit tag.
pub const FINALE_ACTIVITY_ID: &str = "11";

/// How a catalog is turned into a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePolicy {
    /// Every phase's activities, in phase order then authored order.
    SingleCrew,
    /// Arrival, adventure (routed per crew, finale last) and treasure phases.
    CrewRotation(Crew),
}

impl SequencePolicy {
    /// The crew this policy plays for, if any.
    #[must_use]
    pub fn crew(self) -> Option<Crew> {
        match self {
            Self::SingleCrew => None,
            Self::CrewRotation(crew) => Some(crew),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    phase: usize,
    activity: usize,
}

/// One element of a built sequence.
#[derive(Debug, Clone, Copy)]
pub struct SequenceStep<'a> {
    pub activity: &'a Activity,
    /// Phase the activity came from, for presentation attributes.
    pub phase: &'a Phase,
    /// 0-based position in the sequence.
    pub position: usize,
}

/// An ordered traversal of a catalog's activities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    catalog: Arc<PartyCatalog>,
    slots: Vec<Slot>,
}

impl Sequence {
    /// Builds the sequence for `catalog` under `policy`.
    ///
    /// Missing phases contribute nothing, and a missing finale simply
    /// leaves the adventure phase with its main activities.
    #[must_use]
    pub fn build(catalog: Arc<PartyCatalog>, policy: SequencePolicy) -> Self {
        let slots = match policy {
            SequencePolicy::SingleCrew => authored_slots(&catalog),
            SequencePolicy::CrewRotation(crew) => rotation_slots(&catalog, crew.route()),
        };
        Self { catalog, slots }
    }

    /// Number of activities in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the sequence holds no activity at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The step at `position`, or `None` past the end.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<SequenceStep<'_>> {
        let slot = self.slots.get(position)?;
        let phase = &self.catalog.phases[slot.phase];
        Some(SequenceStep {
            activity: &phase.activities[slot.activity],
            phase,
            position,
        })
    }

    /// Iterates over every step in order.
    pub fn iter(&self) -> impl Iterator<Item = SequenceStep<'_>> {
        (0..self.slots.len()).filter_map(|position| self.get(position))
    }

    /// The catalog the sequence indexes into.
    #[must_use]
    pub fn catalog(&self) -> &PartyCatalog {
        &self.catalog
    }
}

fn authored_slots(catalog: &PartyCatalog) -> Vec<Slot> {
    catalog
        .phases
        .iter()
        .enumerate()
        .flat_map(|(phase, p)| (0..p.activities.len()).map(move |activity| Slot { phase, activity }))
        .collect()
}

fn rotation_slots(catalog: &PartyCatalog, route: Route) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(catalog.activity_count());

    if let Some(phase) = phase_index(catalog, ARRIVAL_PHASE_ID) {
        push_authored(&mut slots, catalog, phase);
    }

    if let Some(phase) = phase_index(catalog, ADVENTURE_PHASE_ID) {
        let activities = &catalog.phases[phase].activities;
        let finale = finale_index(activities);
        let mains = (0..activities.len()).filter(|index| Some(*index) != finale);
        let to_slot = |activity| Slot { phase, activity };
        match route {
            Route::Authored => slots.extend(mains.map(to_slot)),
            Route::Reversed => slots.extend(mains.rev().map(to_slot)),
        }
        if let Some(activity) = finale {
            slots.push(Slot { phase, activity });
        }
    }

    if let Some(phase) = phase_index(catalog, TREASURE_PHASE_ID) {
        push_authored(&mut slots, catalog, phase);
    }

    slots
}

fn push_authored(slots: &mut Vec<Slot>, catalog: &PartyCatalog, phase: usize) {
    let count = catalog.phases[phase].activities.len();
    slots.extend((0..count).map(|activity| Slot { phase, activity }));
}

fn phase_index(catalog: &PartyCatalog, id: &str) -> Option<usize> {
    catalog.phases.iter().position(|phase| phase.id == id)
}

/// The reserved id marks the finale; the explicit tag is only consulted
/// when no activity carries it.
fn finale_index(activities: &[Activity]) -> Option<usize> {
    activities
        .iter()
        .position(|activity| activity.id == FINALE_ACTIVITY_ID)
        .or_else(|| activities.iter().position(|activity| activity.is_finale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use partyplay_test_support::{activity, catalog_with_phases, finale, phase, scenario_catalog};
    use proptest::prelude::*;

    fn titles(sequence: &Sequence) -> Vec<String> {
        sequence.iter().map(|step| step.activity.title.clone()).collect()
    }

    fn build(catalog: PartyCatalog, policy: SequencePolicy) -> Sequence {
        Sequence::build(Arc::new(catalog), policy)
    }

    #[test]
    fn test_default_crew_plays_authored_order() {
        // Act
        let sequence = build(scenario_catalog(), SequencePolicy::CrewRotation(Crew::Red));

        // Assert
        assert_eq!(titles(&sequence), vec!["a1", "a2", "a3", "a4", "finale", "a5"]);
    }

    #[test]
    fn test_alternate_crew_reverses_main_activities_and_meets_at_finale() {
        // Act
        let sequence = build(scenario_catalog(), SequencePolicy::CrewRotation(Crew::Blue));

        // Assert
        assert_eq!(titles(&sequence), vec!["a1", "a2", "a4", "a3", "finale", "a5"]);
    }

    #[test]
    fn test_single_crew_concatenates_phases_in_list_order() {
        // Arrange
        let catalog = catalog_with_phases(vec![
            phase("phase_2", 2, vec![activity("1", "z")]),
            phase("phase_0", 0, vec![activity("1", "x"), activity("11", "y")]),
        ]);

        // Act
        let sequence = build(catalog, SequencePolicy::SingleCrew);

        // Assert
        assert_eq!(titles(&sequence), vec!["z", "x", "y"]);
    }

    #[test]
    fn test_steps_carry_phase_and_position() {
        // Arrange
        let sequence = build(scenario_catalog(), SequencePolicy::CrewRotation(Crew::Blue));

        // Act
        let step = sequence.get(4).unwrap();

        // Assert
        assert_eq!(step.position, 4);
        assert_eq!(step.phase.id, ADVENTURE_PHASE_ID);
        assert_eq!(step.activity.id, FINALE_ACTIVITY_ID);
        assert!(sequence.get(6).is_none());
    }

    #[test]
    fn test_finale_id_is_only_special_inside_adventure_phase() {
        // Arrange
        let catalog = catalog_with_phases(vec![
            phase("phase_0", 0, vec![activity("11", "early"), activity("2", "b")]),
            phase("phase_1", 1, vec![activity("3", "c"), activity("4", "d")]),
        ]);

        // Act
        let sequence = build(catalog, SequencePolicy::CrewRotation(Crew::Blue));

        // Assert
        assert_eq!(titles(&sequence), vec!["early", "b", "d", "c"]);
    }

    #[test]
    fn test_reserved_id_stays_finale_when_another_activity_is_tagged() {
        // Arrange
        let mut tagged = activity("9", "tagged");
        tagged.is_finale = true;
        let catalog = catalog_with_phases(vec![phase(
            "phase_1",
            1,
            vec![activity("3", "a3"), finale(), tagged, activity("4", "a4")],
        )]);

        // Act
        let red = build(catalog.clone(), SequencePolicy::CrewRotation(Crew::Red));
        let blue = build(catalog, SequencePolicy::CrewRotation(Crew::Blue));

        // Assert
        assert_eq!(titles(&red), vec!["a3", "tagged", "a4", "finale"]);
        assert_eq!(titles(&blue), vec!["a4", "tagged", "a3", "finale"]);
    }

    #[test]
    fn test_finale_tag_is_used_without_reserved_id() {
        // Arrange
        let mut tagged = activity("9", "tagged");
        tagged.is_finale = true;
        let catalog = catalog_with_phases(vec![phase(
            "phase_1",
            1,
            vec![tagged, activity("3", "a3"), activity("4", "a4")],
        )]);

        // Act
        let blue = build(catalog, SequencePolicy::CrewRotation(Crew::Blue));

        // Assert
        assert_eq!(titles(&blue), vec!["a4", "a3", "tagged"]);
    }

    #[test]
    fn test_missing_phases_and_finale_are_tolerated() {
        // Arrange
        let catalog = catalog_with_phases(vec![phase(
            "phase_1",
            1,
            vec![activity("3", "a3"), activity("4", "a4")],
        )]);

        // Act
        let sequence = build(catalog, SequencePolicy::CrewRotation(Crew::Blue));

        // Assert
        assert_eq!(titles(&sequence), vec!["a4", "a3"]);
    }

    #[test]
    fn test_unlisted_phases_are_skipped_by_crew_rotation() {
        // Arrange
        let catalog = catalog_with_phases(vec![
            phase("phase_0", 0, vec![activity("1", "a1")]),
            phase("bonus", 3, vec![activity("1", "bonus")]),
        ]);

        // Act
        let rotation = build(catalog.clone(), SequencePolicy::CrewRotation(Crew::Red));
        let single = build(catalog, SequencePolicy::SingleCrew);

        // Assert
        assert_eq!(titles(&rotation), vec!["a1"]);
        assert_eq!(titles(&single), vec!["a1", "bonus"]);
    }

    #[test]
    fn test_empty_catalog_builds_empty_sequence() {
        let sequence = build(catalog_with_phases(Vec::new()), SequencePolicy::SingleCrew);

        assert!(sequence.is_empty());
        assert_eq!(sequence.iter().count(), 0);
    }

    #[test]
    fn test_build_is_deterministic() {
        // Arrange
        let catalog = Arc::new(scenario_catalog());

        // Act
        let first = Sequence::build(Arc::clone(&catalog), SequencePolicy::CrewRotation(Crew::Blue));
        let second = Sequence::build(catalog, SequencePolicy::CrewRotation(Crew::Blue));

        // Assert
        assert_eq!(first, second);
    }

    fn arb_catalog() -> impl Strategy<Value = PartyCatalog> {
        (0usize..5, 0usize..8, 0usize..5, any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(arrival, mains, treasure, with_finale, finale_first, with_tagged)| {
                let mut adventure: Vec<Activity> = (0..mains)
                    .map(|i| activity(&format!("m{i}"), &format!("main-{i}")))
                    .collect();
                if with_finale {
                    if with_tagged {
                        let mut tagged = activity("tagged", "tagged");
                        tagged.is_finale = true;
                        adventure.push(tagged);
                    }
                    let at = if finale_first { 0 } else { adventure.len() / 2 };
                    adventure.insert(at, finale());
                }
                catalog_with_phases(vec![
                    phase(
                        "phase_0",
                        0,
                        (0..arrival).map(|i| activity(&i.to_string(), &format!("arrival-{i}"))).collect(),
                    ),
                    phase("phase_1", 1, adventure),
                    phase(
                        "phase_2",
                        2,
                        (0..treasure).map(|i| activity(&i.to_string(), &format!("treasure-{i}"))).collect(),
                    ),
                ])
            },
        )
    }

    fn main_titles(sequence: &Sequence) -> Vec<String> {
        sequence
            .iter()
            .filter(|step| step.phase.id == ADVENTURE_PHASE_ID && step.activity.id != FINALE_ACTIVITY_ID)
            .map(|step| step.activity.title.clone())
            .collect()
    }

    proptest! {
        #[test]
        fn prop_length_is_crew_invariant(catalog in arb_catalog()) {
            let catalog = Arc::new(catalog);
            let red = Sequence::build(Arc::clone(&catalog), SequencePolicy::CrewRotation(Crew::Red));
            let blue = Sequence::build(Arc::clone(&catalog), SequencePolicy::CrewRotation(Crew::Blue));
            prop_assert_eq!(red.len(), blue.len());
            prop_assert_eq!(red.len(), catalog.activity_count());
        }

        #[test]
        fn prop_finale_position_is_crew_invariant(catalog in arb_catalog()) {
            let catalog = Arc::new(catalog);
            let position = |crew| {
                Sequence::build(Arc::clone(&catalog), SequencePolicy::CrewRotation(crew))
                    .iter()
                    .find(|step| step.activity.id == FINALE_ACTIVITY_ID)
                    .map(|step| step.position)
            };
            prop_assert_eq!(position(Crew::Red), position(Crew::Blue));
        }

        #[test]
        fn prop_alternate_crew_reverses_main_activities(catalog in arb_catalog()) {
            let catalog = Arc::new(catalog);
            let red = Sequence::build(Arc::clone(&catalog), SequencePolicy::CrewRotation(Crew::Red));
            let blue = Sequence::build(Arc::clone(&catalog), SequencePolicy::CrewRotation(Crew::Blue));
            let mut reversed = main_titles(&red);
            reversed.reverse();
            prop_assert_eq!(main_titles(&blue), reversed);
        }

        #[test]
        fn prop_unknown_selector_matches_default_crew(catalog in arb_catalog(), selector in "[a-z]{0,8}") {
            prop_assume!(Crew::parse(&selector).is_none());
            let catalog = Arc::new(catalog);
            let fallback = Sequence::build(
                Arc::clone(&catalog),
                SequencePolicy::CrewRotation(Crew::resolve(Some(&selector))),
            );
            let default = Sequence::build(catalog, SequencePolicy::CrewRotation(Crew::DEFAULT));
            prop_assert_eq!(fallback, default);
        }
    }
}
