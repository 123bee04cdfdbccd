//! Handler for windowed visit statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns visit totals and top countries per reporting window.
///
/// # Endpoint
///
/// `GET /api/admin/stats`
///
/// # Response
///
/// ```json
/// {
///   "day":   { "visits": 12,  "countries": [{ "country": "DE", "c": 7 }] },
///   "week":  { "visits": 80,  "countries": [...] },
///   "month": { "visits": 310, "countries": [...] },
///   "all":   { "visits": 920, "countries": [...] }
/// }
/// ```
///
/// Windows end now; day starts at local midnight, week and month 6 and 29 days
/// earlier. At most 10 countries per window.
///
/// # Errors
///
/// Returns 500 Internal Server Error on database errors.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let report = state.visit_service.report().await?;
    Ok(Json(report.into()))
}
