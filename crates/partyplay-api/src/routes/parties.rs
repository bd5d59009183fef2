//! Routes for party catalogs.

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tracing::{info, instrument};

use partyplay_catalog::application::query_handlers::{
    self, GuestListView, MaterialsView, PartyOverview,
};
use partyplay_catalog::domain::locale::Locale;
use partyplay_catalog::domain::party::PartySlug;
use partyplay_session::application::query_handlers::{SequencePreview, get_sequence_preview};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /sequence.
#[derive(Debug, Deserialize)]
pub struct SequenceQuery {
    /// Crew selector; omitted for single-crew play.
    pub crew: Option<String>,
}

fn parse_path(locale: &str, party: &str) -> Result<(Locale, PartySlug), ApiError> {
    let locale = Locale::parse(locale).ok_or_else(|| ApiError::UnknownLocale(locale.to_owned()))?;
    let party = PartySlug::new(party)?;
    Ok((locale, party))
}

/// GET /{locale}/parties/{party}
#[instrument(skip(state))]
async fn get_overview(
    State(state): State<AppState>,
    Path((locale, party)): Path<(String, String)>,
) -> Result<Json<PartyOverview>, ApiError> {
    let (locale, party) = parse_path(&locale, &party)?;
    let overview = query_handlers::get_party_overview(&party, locale, &*state.loader).await?;
    info!(version_hash = %overview.version_hash, "serving party overview");
    Ok(Json(overview))
}

/// GET /{locale}/parties/{party}/materials
#[instrument(skip(state))]
async fn get_materials(
    State(state): State<AppState>,
    Path((locale, party)): Path<(String, String)>,
) -> Result<Json<MaterialsView>, ApiError> {
    let (locale, party) = parse_path(&locale, &party)?;
    let view = query_handlers::get_materials(&party, locale, &*state.loader).await?;
    Ok(Json(view))
}

/// GET /{locale}/parties/{party}/guests
#[instrument(skip(state))]
async fn get_guests(
    State(state): State<AppState>,
    Path((locale, party)): Path<(String, String)>,
) -> Result<Json<GuestListView>, ApiError> {
    let (locale, party) = parse_path(&locale, &party)?;
    let view = query_handlers::get_guest_list(&party, locale, &*state.loader).await?;
    Ok(Json(view))
}

/// GET /{locale}/parties/{party}/sequence
#[instrument(skip(state))]
async fn get_sequence(
    State(state): State<AppState>,
    Path((locale, party)): Path<(String, String)>,
    Query(query): Query<SequenceQuery>,
) -> Result<Json<SequencePreview>, ApiError> {
    let (locale, party) = parse_path(&locale, &party)?;
    let preview =
        get_sequence_preview(&party, locale, query.crew.as_deref(), &*state.loader).await?;
    Ok(Json(preview))
}

/// Returns the router for party catalogs.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{locale}/parties/{party}", get(get_overview))
        .route("/{locale}/parties/{party}/materials", get(get_materials))
        .route("/{locale}/parties/{party}/guests", get(get_guests))
        .route("/{locale}/parties/{party}/sequence", get(get_sequence))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use partyplay_catalog::application::loader::CatalogLoader;
    use partyplay_test_support::{FailingCatalogLoader, StaticCatalogLoader, scenario_catalog};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_state_with(loader: Arc<dyn CatalogLoader>) -> AppState {
        AppState::new(loader)
    }

    fn test_app_state() -> AppState {
        app_state_with(Arc::new(StaticCatalogLoader(scenario_catalog())))
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let app = router().with_state(state);
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_overview_returns_200_with_phases() {
        // Act
        let (status, json) = get_json(test_app_state(), "/en/parties/one-piece").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["party"], "one-piece");
        assert_eq!(json["locale"], "en");
        assert_eq!(json["total_activities"], 6);
        assert_eq!(json["phases"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_sequence_with_crew_returns_rotated_order() {
        // Act
        let (status, json) =
            get_json(test_app_state(), "/es/parties/one-piece/sequence?crew=blue").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["crew"], "blue");
        let titles: Vec<&str> = json["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["a1", "a2", "a4", "a3", "finale", "a5"]);
    }

    #[tokio::test]
    async fn test_get_sequence_without_crew_is_single_crew() {
        let (status, json) = get_json(test_app_state(), "/es/parties/one-piece/sequence").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["crew"].is_null());
        assert_eq!(json["total"], 6);
    }

    #[tokio::test]
    async fn test_unknown_locale_returns_404() {
        // Act
        let (status, json) = get_json(test_app_state(), "/fr/parties/one-piece").await;

        // Assert
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "unknown_locale");
    }

    #[tokio::test]
    async fn test_invalid_party_slug_returns_400() {
        let (status, json) = get_json(test_app_state(), "/es/parties/One_Piece").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_missing_party_returns_404() {
        // Arrange
        let state = app_state_with(Arc::new(FailingCatalogLoader { not_found: true }));

        // Act
        let (status, json) = get_json(state, "/es/parties/one-piece/materials").await;

        // Assert
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "party_not_found");
    }

    #[tokio::test]
    async fn test_broken_catalog_returns_502() {
        // Arrange
        let state = app_state_with(Arc::new(FailingCatalogLoader { not_found: false }));

        // Act
        let (status, json) = get_json(state, "/en/parties/one-piece/guests").await;

        // Assert
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"], "catalog_unavailable");
    }
}
