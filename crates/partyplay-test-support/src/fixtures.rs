//! Catalog fixtures.

use partyplay_catalog::domain::activity::{Activity, Character, Difficulty};
use partyplay_catalog::domain::catalog::{
    CrewConfig, CrewProfile, GuestList, PartyCatalog, PartyMeta, Phase, Printables,
};

/// An activity with the given id and title and no optional blocks.
#[must_use]
pub fn activity(id: &str, title: &str) -> Activity {
    Activity {
        id: id.to_owned(),
        title: title.to_owned(),
        kind: "cooperative".to_owned(),
        type_label: "Team game".to_owned(),
        character: Character {
            name: "Luffy".to_owned(),
            icon: "👒".to_owned(),
            color: None,
        },
        station_intro: None,
        location: None,
        objective: format!("Complete {title}"),
        description: format!("Play {title}"),
        materials: Vec::new(),
        instructions: Vec::new(),
        tips: Vec::new(),
        steps: Vec::new(),
        rules: Vec::new(),
        script: None,
        training: None,
        puzzle: None,
        levels: Vec::new(),
        treasure_contents: Vec::new(),
        prompt_suggestions: Vec::new(),
        shout: None,
        duration: "10 min".to_owned(),
        difficulty: Difficulty::Easy,
        min_players: None,
        max_players: None,
        is_finale: false,
    }
}

/// The finale activity, identified by the reserved id `"11"` only.
#[must_use]
pub fn finale() -> Activity {
    let mut finale = activity("11", "finale");
    finale.kind = "finale".to_owned();
    finale.difficulty = Difficulty::Hard;
    finale
}

/// A phase with the given id, display order and activities.
#[must_use]
pub fn phase(id: &str, order: u32, activities: Vec<Activity>) -> Phase {
    Phase {
        id: id.to_owned(),
        name: format!("Phase {order}"),
        icon: "🏝️".to_owned(),
        color: format!("#00000{order}"),
        description: format!("Island {order}"),
        island_name: format!("Island {order}"),
        order,
        activities,
    }
}

/// A catalog made of the given phases, with two crews configured.
#[must_use]
pub fn catalog_with_phases(phases: Vec<Phase>) -> PartyCatalog {
    let total = phases.iter().map(|p| p.activities.len()).sum::<usize>();
    PartyCatalog {
        meta: PartyMeta {
            title: "Pirate Party".to_owned(),
            theme: "pirates".to_owned(),
            subtitle: "Set sail".to_owned(),
            total_activities: u32::try_from(total).unwrap_or(u32::MAX),
            estimated_duration: "2h".to_owned(),
            age_range: "4-7".to_owned(),
        },
        phases,
        crews: Some(CrewConfig {
            description: "Two crews take turns".to_owned(),
            teams: vec![
                CrewProfile {
                    name: "Red Crew".to_owned(),
                    icon: "🔴".to_owned(),
                    color: "#dc2626".to_owned(),
                },
                CrewProfile {
                    name: "Blue Crew".to_owned(),
                    icon: "🔵".to_owned(),
                    color: "#2563eb".to_owned(),
                },
            ],
            rotation_tips: vec!["Swap stations at the whistle".to_owned()],
        }),
        guest_list: GuestList::default(),
        printables: Printables::default(),
    }
}

/// `phase_0 = [a1, a2]`, `phase_1 = [a3, a4, finale]`, `phase_2 = [a5]`.
#[must_use]
pub fn scenario_catalog() -> PartyCatalog {
    catalog_with_phases(vec![
        phase("phase_0", 0, vec![activity("1", "a1"), activity("2", "a2")]),
        phase("phase_1", 1, vec![activity("3", "a3"), activity("4", "a4"), finale()]),
        phase("phase_2", 2, vec![activity("1", "a5")]),
    ])
}
