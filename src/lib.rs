//! # Visit Tracker
//!
//! A small self-hosted page-visit tracker with an admin dashboard, built with
//! Axum and an embedded SQLite database.
//!
//! ## Architecture
//!
//! The crate keeps a layered layout:
//!
//! - **Domain Layer** ([`domain`]) - Visits, statistics windows, link settings and repository traits
//! - **Application Layer** ([`application`]) - Recording, reporting, settings and auth services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and repositories
//! - **API Layer** ([`api`]) - Tracking endpoint, admin API, DTOs and middleware
//!
//! ## Features
//!
//! - Public tracking endpoint and a drop-in `/track.js` beacon script
//! - Visit counts and top countries for today, the last 7 and 30 days and all time
//! - Recent visits listing
//! - Editable links document with default backfill
//! - HTTP Basic protected admin API and page
//!
//! ## Quick Start
//!
//! ```bash
//! export ADMIN_USER="admin"
//! export ADMIN_PASS="a-long-random-password"
//!
//! # Database file and schema are created on first start
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, SettingsService, VisitService};
    pub use crate::domain::entities::{NewVisit, StatsReport, Visit};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
