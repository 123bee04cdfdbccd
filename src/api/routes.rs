//! API route configuration.

use crate::api::handlers::{
    get_links_handler, set_links_handler, stats_handler, track_handler, visits_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Admin API routes, mounted under `/api/admin` behind
/// [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `GET  /stats`  - Visit totals and top countries per window
/// - `GET  /visits` - Most recent visits (`?limit=N`, max 500)
/// - `GET  /links`  - Current links document
/// - `POST /links`  - Replace the links document (merged with defaults)
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats_handler))
        .route("/visits", get(visits_handler))
        .route("/links", get(get_links_handler).post(set_links_handler))
}

/// Public API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /track` - Record a page view
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/track", post(track_handler))
}
