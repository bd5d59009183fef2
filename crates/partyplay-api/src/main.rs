//! Partyplay API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use partyplay_api::error::AppError;
use partyplay_api::state::AppState;
use partyplay_catalog::application::loader::FsCatalogLoader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting partyplay API server");

    // Read configuration from environment.
    let content_dir =
        std::env::var("PARTYPLAY_CONTENT_DIR").unwrap_or_else(|_| "content".to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

    // Build application state.
    let loader = FsCatalogLoader::new(&content_dir);
    tracing::info!(content_dir = %loader.root().display(), "serving party catalogs");
    let app_state = AppState::new(Arc::new(loader));

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = partyplay_api::app(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
