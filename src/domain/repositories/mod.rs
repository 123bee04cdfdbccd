//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access; concrete SQLite implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated with
//! `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`VisitRepository`] - Append-only visit log and its aggregate queries
//! - [`SettingsRepository`] - Keyed JSON settings documents
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod settings_repository;
pub mod visit_repository;

pub use settings_repository::SettingsRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
