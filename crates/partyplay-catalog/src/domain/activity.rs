//! Activities and their optional presentation blocks.

use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// How demanding an activity is for the children playing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for everyone.
    Easy,
    /// Needs some coordination.
    Medium,
    /// The hardest challenges.
    Hard,
}

impl Difficulty {
    /// Localised label shown next to the activity title.
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Easy, Locale::Es) => "Fácil",
            (Self::Easy, Locale::En) => "Easy",
            (Self::Medium, Locale::Es) => "Medio",
            (Self::Medium, Locale::En) => "Medium",
            (Self::Hard, Locale::Es) => "Difícil",
            (Self::Hard, Locale::En) => "Hard",
        }
    }

    /// Number of stars used to visualise the difficulty.
    #[must_use]
    pub fn stars(self) -> usize {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }
}

/// The character hosting an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Emoji or icon reference.
    pub icon: String,
    /// Optional badge color; the phase color is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A named step of a multi-step activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStep {
    pub name: String,
    pub instruction: String,
}

/// A game rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub title: String,
    pub description: String,
}

/// A trigger word and the movement it asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingMove {
    pub trigger: String,
    pub action: String,
}

/// Moves taught before an activity starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Training {
    pub intro: String,
    pub moves: Vec<TrainingMove>,
}

/// Text read aloud by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub intro: String,
    pub text: String,
}

/// One card of a letter puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleCard {
    pub number: u32,
    pub image: String,
    pub letter: String,
}

/// A letter puzzle and its solution word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub cards: Vec<PuzzleCard>,
    pub solution: String,
}

/// A level of a rhythm game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhythmLevel {
    pub level: u32,
    pub name: String,
    pub pattern: String,
}

/// A single party activity.
///
/// The sequencing engine only ever looks at `id` and `is_finale`; every
/// other field is payload for whoever renders the activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Identifier, unique within the owning phase only.
    pub id: String,
    pub title: String,
    /// Free-form activity type (`arrival`, `relay`, `finale`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub type_label: String,
    pub character: Character,
    /// Short intro read aloud when the children arrive at the station.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_intro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub objective: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<ActivityStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training: Option<Training>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle: Option<Puzzle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<RhythmLevel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub treasure_contents: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prompt_suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shout: Option<String>,
    pub duration: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_players: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    /// Explicit finale tag.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_finale: bool,
}

/// A presentation block of an activity, in the order it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBlock<'a> {
    Script(&'a Script),
    Training(&'a Training),
    Levels(&'a [RhythmLevel]),
    Puzzle(&'a Puzzle),
    Steps(&'a [ActivityStep]),
    Rules(&'a [Rule]),
    /// Plain instructions; only shown when the activity has no steps.
    Instructions(&'a [String]),
    Shout(&'a str),
    Treasure(&'a [String]),
    Prompts(&'a [String]),
}

impl Activity {
    /// Returns the optional blocks this activity carries, in render order.
    #[must_use]
    pub fn content_blocks(&self) -> Vec<ContentBlock<'_>> {
        let mut blocks = Vec::new();
        if let Some(script) = &self.script {
            blocks.push(ContentBlock::Script(script));
        }
        if let Some(training) = &self.training {
            blocks.push(ContentBlock::Training(training));
        }
        if !self.levels.is_empty() {
            blocks.push(ContentBlock::Levels(&self.levels));
        }
        if let Some(puzzle) = &self.puzzle {
            blocks.push(ContentBlock::Puzzle(puzzle));
        }
        if !self.steps.is_empty() {
            blocks.push(ContentBlock::Steps(&self.steps));
        }
        if !self.rules.is_empty() {
            blocks.push(ContentBlock::Rules(&self.rules));
        }
        if self.steps.is_empty() && !self.instructions.is_empty() {
            blocks.push(ContentBlock::Instructions(&self.instructions));
        }
        if let Some(shout) = &self.shout {
            blocks.push(ContentBlock::Shout(shout));
        }
        if !self.treasure_contents.is_empty() {
            blocks.push(ContentBlock::Treasure(&self.treasure_contents));
        }
        if !self.prompt_suggestions.is_empty() {
            blocks.push(ContentBlock::Prompts(&self.prompt_suggestions));
        }
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Activity {
        serde_json::from_str(json).unwrap()
    }

    const MINIMAL: &str = r#"{
        "id": "3",
        "title": "Cannon Practice",
        "type": "accuracy",
        "typeLabel": "Aim",
        "character": { "name": "Usopp", "icon": "🎯" },
        "objective": "Hit the targets",
        "description": "Throw the balls",
        "duration": "10 min",
        "difficulty": "medium"
    }"#;

    #[test]
    fn test_minimal_activity_deserializes_with_empty_blocks() {
        // Act
        let activity = parse(MINIMAL);

        // Assert
        assert_eq!(activity.id, "3");
        assert_eq!(activity.kind, "accuracy");
        assert_eq!(activity.difficulty, Difficulty::Medium);
        assert!(!activity.is_finale);
        assert!(activity.materials.is_empty());
        assert!(activity.content_blocks().is_empty());
    }

    #[test]
    fn test_content_blocks_follow_render_order() {
        // Arrange
        let mut activity = parse(MINIMAL);
        activity.shout = Some("Yo-ho!".to_owned());
        activity.rules = vec![Rule {
            title: "No pushing".to_owned(),
            description: "Wait your turn".to_owned(),
        }];
        activity.script = Some(Script {
            intro: "Read this".to_owned(),
            text: "Ahoy".to_owned(),
        });

        // Act
        let blocks = activity.content_blocks();

        // Assert
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], ContentBlock::Script(_)));
        assert!(matches!(blocks[1], ContentBlock::Rules(_)));
        assert!(matches!(blocks[2], ContentBlock::Shout("Yo-ho!")));
    }

    #[test]
    fn test_instructions_are_hidden_when_steps_exist() {
        // Arrange
        let mut activity = parse(MINIMAL);
        activity.instructions = vec!["Line up".to_owned()];
        activity.steps = vec![ActivityStep {
            name: "One".to_owned(),
            instruction: "Line up".to_owned(),
        }];

        // Act
        let blocks = activity.content_blocks();

        // Assert
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], ContentBlock::Steps(_)));
    }

    #[test]
    fn test_difficulty_labels_are_localised() {
        assert_eq!(Difficulty::Hard.label(Locale::Es), "Difícil");
        assert_eq!(Difficulty::Hard.label(Locale::En), "Hard");
        assert_eq!(Difficulty::Easy.stars(), 1);
    }

    #[test]
    fn test_finale_tag_is_read_from_camel_case_key() {
        // Arrange
        let json = MINIMAL.replace(r#""difficulty": "medium""#, r#""difficulty": "hard", "isFinale": true"#);

        // Act
        let activity = parse(&json);

        // Assert
        assert!(activity.is_finale);
    }
}
