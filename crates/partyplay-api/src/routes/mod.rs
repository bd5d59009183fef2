//! Route modules.

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;

use crate::error::ErrorBody;

pub mod health;
pub mod locale;
pub mod parties;

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "not_found",
            message: format!("no route for {}", uri.path()),
        }),
    )
}
