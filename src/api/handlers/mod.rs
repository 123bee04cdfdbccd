//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod script;
pub mod stats;
pub mod track;
pub mod visits;

pub use health::health_handler;
pub use links::{get_links_handler, set_links_handler};
pub use script::track_script_handler;
pub use stats::stats_handler;
pub use track::track_handler;
pub use visits::visits_handler;
