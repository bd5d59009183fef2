//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use partyplay_catalog::domain::locale::Locale;
use partyplay_catalog::domain::party::{ONE_PIECE, PartySlug};
use partyplay_session::application::play::{PlayMode, PlayRequest};

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "partyplay")]
#[command(about = "Play a children's party activity by activity", long_about = None)]
pub struct Cli {
    /// Directory holding `{locale}/{party}-party.json` catalogs
    #[arg(long, env = "PARTYPLAY_CONTENT_DIR", default_value = "content")]
    pub content_dir: PathBuf,

    /// Directory progress is stored in
    #[arg(long, env = "PARTYPLAY_PROFILE_DIR", default_value = ".partyplay")]
    pub profile_dir: PathBuf,

    /// Party to play
    #[arg(long, default_value = ONE_PIECE)]
    pub party: String,

    /// Content locale (`es` or `en`); taken from LANG when omitted
    #[arg(long)]
    pub locale: Option<String>,

    /// Crew to play as (`red` or `blue`); omit to play every activity in order
    #[arg(long)]
    pub crew: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the current activity
    Show,
    /// Move to the next activity
    Next,
    /// Move back to the previous activity
    Prev,
    /// Start over from the first activity
    Restart,
    /// List the order activities are played in
    Sequence,
    /// Play interactively
    Play,
}

impl Cli {
    /// Resolves the content locale from `--locale`, then `lang`, then the
    /// default.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Usage` if `--locale` names an unsupported locale.
    pub fn resolve_locale(&self, lang: Option<&str>) -> Result<Locale, CliError> {
        match &self.locale {
            Some(code) => Locale::parse(code)
                .ok_or_else(|| CliError::Usage(format!("unsupported locale: {code}"))),
            None => Ok(lang.and_then(Locale::from_lang_env).unwrap_or(Locale::DEFAULT)),
        }
    }

    /// Builds the mount request.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Usage` for an unsupported locale or an invalid
    /// party slug.
    pub fn play_request(&self, lang: Option<&str>) -> Result<PlayRequest, CliError> {
        let mode = match &self.crew {
            Some(selector) => PlayMode::Crews {
                selector: Some(selector.clone()),
            },
            None => PlayMode::SingleCrew,
        };
        Ok(PlayRequest {
            party: PartySlug::new(&self.party).map_err(|e| CliError::Usage(e.to_string()))?,
            locale: self.resolve_locale(lang)?,
            mode,
        })
    }
}
