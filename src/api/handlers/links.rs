//! Handlers for the links settings document.

use axum::{Json, extract::State};
use serde_json::Value;

use crate::api::dto::track::AckResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current links document, or the defaults if none is stored.
///
/// # Endpoint
///
/// `GET /api/admin/links`
///
/// # Errors
///
/// Returns 500 Internal Server Error on database errors.
pub async fn get_links_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    Ok(Json(state.settings_service.get_links().await?))
}

/// Replaces the links document.
///
/// # Endpoint
///
/// `POST /api/admin/links`
///
/// # Merge Rules
///
/// The payload is laid over the default document and the result replaces the
/// stored one. Missing or non-string `fortune`, `job` and button URLs fall back
/// to their defaults; this is not a field-level patch of the previous document.
///
/// # Errors
///
/// Returns 4xx if the body is not JSON, 500 on database errors.
pub async fn set_links_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<AckResponse>, AppError> {
    state.settings_service.set_links(payload).await?;
    tracing::info!("Links document updated");
    Ok(Json(AckResponse::ok()))
}
