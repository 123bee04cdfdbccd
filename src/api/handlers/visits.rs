//! Handler for the recent visits listing.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::visits::{VisitItem, VisitsQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most recent visits, newest first.
///
/// # Endpoint
///
/// `GET /api/admin/visits`
///
/// # Query Parameters
///
/// - `limit` (optional): rows to return (default: 100, max: 500). Negative or
///   non-numeric values fall back to the default.
///
/// # Errors
///
/// Returns 500 Internal Server Error on database errors.
pub async fn visits_handler(
    State(state): State<AppState>,
    Query(params): Query<VisitsQuery>,
) -> Result<Json<Vec<VisitItem>>, AppError> {
    let visits = state.visit_service.recent(params.limit).await?;
    Ok(Json(visits.into_iter().map(VisitItem::from).collect()))
}
