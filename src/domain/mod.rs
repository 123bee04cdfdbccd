//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository interfaces and the pure reporting-window
//! arithmetic, independent of storage and HTTP concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures and settings defaults
//! - [`repositories`] - Data access trait definitions
//! - [`windows`] - Day/week/month/all reporting windows
//!
//! # Tracking Flow
//!
//! 1. `POST /api/track` builds an [`entities::NewVisit`] from the body and headers
//! 2. [`crate::application::services::VisitService`] appends it
//! 3. The visit is persisted via [`repositories::VisitRepository`]

pub mod entities;
pub mod repositories;
pub mod windows;
