//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /track.js`     - Tracking script (public)
//! - `POST /api/track`    - Visit tracking (public)
//! - `GET  /health`       - Health check (public)
//! - `/api/admin/*`       - Admin API (HTTP Basic)
//! - `GET  /admin`        - Admin page from `PUBLIC_DIR/admin.html` (HTTP Basic)
//! - `GET  /admin.html`   - Same page, same protection
//! - everything else      - Static files from `PUBLIC_DIR`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - HTTP Basic on the admin API and page
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, track_script_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// File name of the admin page inside the public directory.
pub const ADMIN_PAGE: &str = "admin.html";

/// Builds the application router without path normalization.
///
/// Integration tests drive this router directly.
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    let admin_api = api::routes::admin_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::layer,
    ));

    let api_router = api::routes::public_routes().nest("/admin", admin_api);

    // Also claims the raw file path so the static fallback never serves it.
    let admin_file = ServeFile::new(public_dir.join(ADMIN_PAGE));
    let admin_page = Router::new()
        .route_service("/admin", admin_file.clone())
        .route_service(&format!("/{ADMIN_PAGE}"), admin_file)
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/track.js", get(track_script_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(admin_page)
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory holding static assets and the admin page
pub fn app_router(state: AppState, public_dir: &Path) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, public_dir))
}
