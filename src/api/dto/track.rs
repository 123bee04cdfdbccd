//! DTOs for the public tracking endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

/// Body posted by the tracking script.
///
/// Only the path and referrer are accepted from the client. A field of the
/// wrong type is dropped on its own without discarding the other one.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct TrackRequest {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub path: Option<String>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default, rename = "ref")]
    pub referrer: Option<String>,
}

impl TrackRequest {
    /// Parses a raw body, treating anything unparsable as an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Acknowledgment returned by tracking and settings writes.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub ok: bool,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_full() {
        let req = TrackRequest::from_body(br#"{"path": "/a", "ref": "https://b"}"#);
        assert_eq!(req.path.as_deref(), Some("/a"));
        assert_eq!(req.referrer.as_deref(), Some("https://b"));
    }

    #[test]
    fn test_from_body_empty_object() {
        let req = TrackRequest::from_body(b"{}");
        assert!(req.path.is_none());
        assert!(req.referrer.is_none());
    }

    #[test]
    fn test_from_body_garbage() {
        let req = TrackRequest::from_body(b"not json");
        assert!(req.path.is_none());

        let req = TrackRequest::from_body(b"");
        assert!(req.path.is_none());
    }

    #[test]
    fn test_from_body_mistyped_field_keeps_the_other() {
        let req = TrackRequest::from_body(br#"{"path": 5, "ref": "x"}"#);
        assert!(req.path.is_none());
        assert_eq!(req.referrer.as_deref(), Some("x"));

        let req = TrackRequest::from_body(br#"{"path": "/a", "ref": {"u": 1}}"#);
        assert_eq!(req.path.as_deref(), Some("/a"));
        assert!(req.referrer.is_none());
    }

    #[test]
    fn test_from_body_ignores_unknown_fields() {
        let req = TrackRequest::from_body(br#"{"path": "/x", "ip": "6.6.6.6", "country": "ZZ"}"#);
        assert_eq!(req.path.as_deref(), Some("/x"));
    }
}
