//! Command execution.

use std::io::{BufRead, Write};
use std::sync::Arc;

use partyplay_catalog::application::loader::FsCatalogLoader;
use partyplay_catalog::domain::locale::Locale;
use partyplay_core::clock::SystemClock;
use partyplay_core::storage::KeyValueStore;
use partyplay_session::application::navigation::NavigationController;
use partyplay_session::application::play::{
    MountOutcome, PlayRequest, PlayState, Teardown, mount_play_session,
};
use partyplay_session::application::query_handlers::get_sequence_preview;
use partyplay_store::FileStore;
use tracing::{debug, info, warn};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::render::{LoadErrorScreen, Screen, SequenceListing};

/// Runs `cli.command`, rendering to `out` and reading interactive input
/// from `input`.
///
/// # Errors
///
/// Returns `CliError` for invalid arguments, an unavailable catalog (after
/// rendering the error screen), an interrupted load or terminal I/O failure.
pub async fn run<R: BufRead, W: Write>(
    cli: &Cli,
    lang: Option<&str>,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    let request = cli.play_request(lang)?;
    let loader = FsCatalogLoader::new(&cli.content_dir);

    if cli.command == Command::Sequence {
        return match get_sequence_preview(&request.party, request.locale, cli.crew.as_deref(), &loader).await {
            Ok(preview) => {
                write!(out, "{}", SequenceListing { preview: &preview })?;
                Ok(())
            }
            Err(e) => {
                writeln!(out, "{}", LoadErrorScreen { error: &e, locale: request.locale })?;
                Err(e.into())
            }
        };
    }

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&cli.profile_dir));
    let mut nav = match mount(&request, &loader, store).await? {
        PlayState::Ready(nav) => nav,
        PlayState::Failed(e) => {
            writeln!(out, "{}", LoadErrorScreen { error: &e, locale: request.locale })?;
            return Err(e.into());
        }
        PlayState::Loading => return Err(CliError::Interrupted),
    };

    match cli.command {
        Command::Show | Command::Sequence => {}
        Command::Next => {
            nav.advance();
        }
        Command::Prev => {
            nav.retreat();
        }
        Command::Restart => {
            nav.reset();
        }
        Command::Play => return play(&mut nav, request.locale, input, out),
    }
    writeln!(out, "{}", screen(&nav, request.locale))?;
    Ok(())
}

/// Mounts the session, tearing it down if Ctrl-C arrives during the load.
async fn mount(
    request: &PlayRequest,
    loader: &FsCatalogLoader,
    store: Arc<dyn KeyValueStore>,
) -> Result<PlayState, CliError> {
    let teardown = Teardown::new();
    let mounting = mount_play_session(request, loader, store, Arc::new(SystemClock), &teardown);
    tokio::pin!(mounting);

    let outcome = tokio::select! {
        outcome = &mut mounting => outcome,
        Ok(()) = tokio::signal::ctrl_c() => {
            warn!("interrupted while loading");
            teardown.trigger();
            mounting.await
        }
    };

    match outcome {
        MountOutcome::Applied(state) => Ok(state),
        MountOutcome::Discarded => Err(CliError::Interrupted),
    }
}

/// Interactive loop: `n` next, `p` previous, `r` restart, `q` or end of
/// input quits.
fn play<R: BufRead, W: Write>(
    nav: &mut NavigationController,
    locale: Locale,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    info!(key = %nav.key(), "interactive play started");
    let prompt = crate::labels::labels(locale).prompt;
    writeln!(out, "{}", screen(nav, locale))?;
    writeln!(out, "{prompt}")?;

    for line in input.lines() {
        let line = line?;
        let event = match line.trim() {
            "n" => nav.advance(),
            "p" => nav.retreat(),
            "r" => Some(nav.reset()),
            "q" => break,
            other => {
                debug!(input = other, "ignoring unknown command");
                writeln!(out, "{prompt}")?;
                continue;
            }
        };
        if event.is_some() {
            writeln!(out)?;
            writeln!(out, "{}", screen(nav, locale))?;
        }
        writeln!(out, "{prompt}")?;
    }
    Ok(())
}

fn screen(nav: &NavigationController, locale: Locale) -> Screen<'_> {
    Screen {
        view: nav.view(),
        catalog: nav.sequence().catalog(),
        locale,
    }
}
