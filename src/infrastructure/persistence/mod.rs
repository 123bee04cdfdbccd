//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements against a single embedded database in WAL mode.
//!
//! # Repositories
//!
//! - [`SqliteVisitRepository`] - Visit log and aggregate queries
//! - [`SqliteSettingsRepository`] - Keyed JSON settings documents

pub mod database;
pub mod sqlite_settings_repository;
pub mod sqlite_visit_repository;

pub use database::{connect, migrate};
pub use sqlite_settings_repository::SqliteSettingsRepository;
pub use sqlite_visit_repository::SqliteVisitRepository;
