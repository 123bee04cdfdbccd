//! Utility functions for request handling.
//!
//! - [`client_info`] - Client IP, user agent and country derived from headers
//! - [`time`] - Millisecond timestamp formatting for logs and CLI output

pub mod client_info;
pub mod time;
