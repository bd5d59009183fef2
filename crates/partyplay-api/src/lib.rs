//! Partyplay HTTP API.
//!
//! Read-only JSON surfaces over party catalogs, behind a middleware that
//! adds a locale prefix to unprefixed paths.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::parties::router())
        .fallback(routes::not_found)
        .layer(middleware::from_fn(routes::locale::redirect_to_locale))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
