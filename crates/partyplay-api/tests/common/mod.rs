//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use partyplay_catalog::application::loader::{CatalogLoader, FsCatalogLoader};
use partyplay_test_support::{StaticCatalogLoader, scenario_catalog};
use tower::ServiceExt;

use partyplay_api::state::AppState;

/// The sample content shipped at the workspace root.
pub fn content_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../content")
}

/// Build the full app router around `loader`. Uses the same router as
/// `main.rs`.
pub fn build_test_app_with(loader: Arc<dyn CatalogLoader>) -> Router {
    partyplay_api::app(AppState::new(loader))
}

/// Build the full app router over the scenario catalog fixture.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(StaticCatalogLoader(scenario_catalog())))
}

/// Build the full app router over the shipped sample content.
pub fn build_content_app() -> Router {
    build_test_app_with(Arc::new(FsCatalogLoader::new(content_dir())))
}

/// Send a GET request with optional headers and return the raw response.
pub async fn get(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).unwrap();

    app.oneshot(request).await.unwrap()
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = get(app, uri, &[]).await;
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
