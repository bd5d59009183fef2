//! Terminal rendering of play views.
//!
//! Every screen is a `Display` type so the caller decides where it goes.

use std::fmt::{self, Display, Formatter};

use partyplay_catalog::domain::activity::{Activity, ContentBlock};
use partyplay_catalog::domain::catalog::PartyCatalog;
use partyplay_catalog::domain::locale::Locale;
use partyplay_core::error::DomainError;
use partyplay_session::application::navigation::{ActivityFrame, PlayView};
use partyplay_session::application::query_handlers::SequencePreview;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::labels::{Labels, labels};

/// Flattens inline markdown to plain terminal text.
#[must_use]
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            Event::Start(Tag::Item) => out.push_str("• "),
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::Heading(_)) => out.push('\n'),
            _ => {}
        }
    }
    out.trim_end().to_owned()
}

/// Any screen of a play session.
#[derive(Debug)]
pub struct Screen<'a> {
    pub view: PlayView<'a>,
    pub catalog: &'a PartyCatalog,
    pub locale: Locale,
}

impl Display for Screen<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let labels = labels(self.locale);
        match self.view {
            PlayView::Activity(frame) => write_frame(f, &frame, self.catalog, self.locale, labels),
            PlayView::Completed { total } => {
                writeln!(f, "🎉 {}", labels.completed_title)?;
                writeln!(f, "{}", labels.completed_body)?;
                writeln!(f, "({total}/{total})")?;
                writeln!(f)?;
                write!(f, "[r] {}  [q] {}", labels.restart, labels.quit)
            }
        }
    }
}

/// Shown when the catalog could not be loaded.
#[derive(Debug)]
pub struct LoadErrorScreen<'a> {
    pub error: &'a DomainError,
    pub locale: Locale,
}

impl Display for LoadErrorScreen<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let labels = labels(self.locale);
        writeln!(f, "⚠️  {}", labels.load_error)?;
        writeln!(f, "{}", self.error)?;
        write!(f, "← {}", labels.go_back)
    }
}

/// A numbered listing of a sequence.
#[derive(Debug)]
pub struct SequenceListing<'a> {
    pub preview: &'a SequencePreview,
}

impl Display for SequenceListing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let labels = labels(self.preview.locale);
        if let Some(crew) = self.preview.crew {
            writeln!(f, "{}: {crew}", labels.crew)?;
        }
        for entry in &self.preview.entries {
            writeln!(
                f,
                "{:>3}. [{}] {} ({})",
                entry.position + 1,
                entry.phase_name,
                entry.title,
                entry.character
            )?;
        }
        Ok(())
    }
}

fn write_frame(
    f: &mut Formatter<'_>,
    frame: &ActivityFrame<'_>,
    catalog: &PartyCatalog,
    locale: Locale,
    labels: &Labels,
) -> fmt::Result {
    let activity = frame.activity;
    let phase = frame.phase;

    writeln!(f, "{} {} · {}", phase.icon, phase.name, phase.island_name)?;
    write!(f, "{} {}/{}", labels.activity, frame.position + 1, frame.total)?;
    if let Some(crew) = frame.crew {
        match crew.profile(catalog) {
            Some(profile) => write!(f, "  {} {}", profile.icon, profile.name)?,
            None => write!(f, "  {}: {crew}", labels.crew)?,
        }
    }
    writeln!(f)?;
    writeln!(f)?;

    writeln!(f, "{} {} · {}", activity.character.icon, activity.character.name, activity.type_label)?;
    writeln!(f, "== {} ==", activity.title)?;
    write!(
        f,
        "{} · {} {}",
        activity.duration,
        "⭐".repeat(activity.difficulty.stars()),
        activity.difficulty.label(locale)
    )?;
    if let (Some(min), Some(max)) = (activity.min_players, activity.max_players) {
        write!(f, " · {min}-{max} {}", labels.players)?;
    } else if let Some(min) = activity.min_players {
        write!(f, " · {min}+ {}", labels.players)?;
    }
    writeln!(f)?;

    if let Some(intro) = &activity.station_intro {
        writeln!(f)?;
        writeln!(f, "📢 {}", labels.read_aloud)?;
        writeln!(f, "{}", plain_text(intro))?;
    }

    writeln!(f)?;
    writeln!(f, "{}: {}", labels.objective, plain_text(&activity.objective))?;
    writeln!(f, "{}", plain_text(&activity.description))?;

    for block in activity.content_blocks() {
        writeln!(f)?;
        write_block(f, block, labels)?;
    }

    write_lists(f, activity, labels)?;

    writeln!(f)?;
    let prev = if frame.has_prev {
        format!("[p] ← {}", labels.previous)
    } else {
        String::new()
    };
    let next = if frame.has_next {
        format!("[n] {} →", labels.next)
    } else {
        format!("[n] 🎉 {}", labels.finish)
    };
    write!(f, "{prev:<20}{next}")
}

fn write_block(f: &mut Formatter<'_>, block: ContentBlock<'_>, labels: &Labels) -> fmt::Result {
    match block {
        ContentBlock::Script(script) => {
            writeln!(f, "📜 {}", labels.script)?;
            writeln!(f, "{}", plain_text(&script.intro))?;
            writeln!(f, "  \"{}\"", plain_text(&script.text))
        }
        ContentBlock::Training(training) => {
            writeln!(f, "🥋 {}", labels.teach_first)?;
            writeln!(f, "{}", plain_text(&training.intro))?;
            for step in &training.moves {
                writeln!(f, "  {} → {}", step.trigger, step.action)?;
            }
            Ok(())
        }
        ContentBlock::Levels(levels) => {
            writeln!(f, "🎵 {}", labels.rhythm_levels)?;
            for level in levels {
                writeln!(f, "  {} {}: {}  {}", labels.level, level.level, level.name, level.pattern)?;
            }
            Ok(())
        }
        ContentBlock::Puzzle(puzzle) => {
            writeln!(f, "🧩 {}", labels.puzzle_cards)?;
            for card in &puzzle.cards {
                writeln!(f, "  #{} {} = {}", card.number, card.image, card.letter)?;
            }
            writeln!(f, "  {}: {}", labels.solution, puzzle.solution)
        }
        ContentBlock::Steps(steps) => {
            writeln!(f, "{}", labels.steps)?;
            for (index, step) in steps.iter().enumerate() {
                writeln!(f, "  {}. {}: {}", index + 1, step.name, plain_text(&step.instruction))?;
            }
            Ok(())
        }
        ContentBlock::Rules(rules) => {
            writeln!(f, "{}", labels.rules)?;
            for rule in rules {
                writeln!(f, "  • {}: {}", rule.title, plain_text(&rule.description))?;
            }
            Ok(())
        }
        ContentBlock::Instructions(instructions) => {
            writeln!(f, "{}", labels.instructions)?;
            for (index, line) in instructions.iter().enumerate() {
                writeln!(f, "  {}. {}", index + 1, plain_text(line))?;
            }
            Ok(())
        }
        ContentBlock::Shout(shout) => writeln!(f, "💪 {}: \"{shout}\"", labels.battle_cry),
        ContentBlock::Treasure(items) => write_bullets(f, &format!("💰 {}", labels.treasure), items),
        ContentBlock::Prompts(prompts) => write_bullets(f, &format!("💡 {}", labels.prompts), prompts),
    }
}

fn write_lists(f: &mut Formatter<'_>, activity: &Activity, labels: &Labels) -> fmt::Result {
    if !activity.materials.is_empty() {
        writeln!(f)?;
        write_bullets(f, &format!("📦 {}", labels.materials), &activity.materials)?;
    }
    if !activity.tips.is_empty() {
        writeln!(f)?;
        write_bullets(f, &format!("💡 {}", labels.tips), &activity.tips)?;
    }
    Ok(())
}

fn write_bullets(f: &mut Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    writeln!(f, "{heading}")?;
    for item in items {
        writeln!(f, "  • {}", plain_text(item))?;
    }
    Ok(())
}
