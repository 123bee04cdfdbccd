//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; persistence lives in
//! [`crate::infrastructure::persistence`].
//!
//! # Entity Types
//!
//! - [`Visit`] - A recorded page view
//! - [`CountryCount`], [`WindowStats`], [`StatsReport`] - Aggregated statistics
//! - [`StoredSettings`] - A persisted settings document
//!
//! Creation input is kept separate from stored records (`NewVisit` vs `Visit`).

pub mod settings;
pub mod stats;
pub mod visit;

pub use settings::{BUTTON_KEYS, LINKS_KEY, StoredSettings, default_links, merge_links};
pub use stats::{CountryCount, StatsReport, WindowStats};
pub use visit::{
    DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT, NewVisit, UNKNOWN_COUNTRY, Visit, clamp_recent_limit,
};
