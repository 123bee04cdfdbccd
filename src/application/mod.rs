//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations HTTP handlers
//! and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::visit_service::VisitService`] - Visit recording, recent listing and windowed stats
//! - [`services::settings_service::SettingsService`] - Links document with default backfill
//! - [`services::auth_service::AuthService`] - Admin Basic credential check

pub mod services;
