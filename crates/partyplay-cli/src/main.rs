//! Partyplay terminal player entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod error;
mod labels;
mod render;

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the rendered activity.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let lang = std::env::var("LANG").ok();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match app::run(&cli, lang.as_deref(), stdin.lock(), &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "partyplay failed");
            e.exit_code()
        }
    }
}
