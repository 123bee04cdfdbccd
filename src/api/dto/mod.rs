//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. The links document is passed
//! through as raw JSON and has no DTO of its own.

pub mod health;
pub mod stats;
pub mod track;
pub mod visits;
