//! Visit entity representing a single recorded page view.

/// Default number of rows returned by a recent-visits query.
pub const DEFAULT_RECENT_LIMIT: i64 = 100;

/// Hard cap on the number of rows a recent-visits query may return.
pub const MAX_RECENT_LIMIT: i64 = 500;

/// Country recorded when no proxy/CDN country header is present.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// A page view stored in the visit log.
///
/// Visits are append-only: once inserted they are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: i64,
    /// Milliseconds since the Unix epoch, assigned at insertion.
    pub timestamp: i64,
    pub ip: String,
    pub user_agent: String,
    pub country: String,
    pub path: String,
    pub referrer: String,
}

/// Input data for appending a visit.
///
/// The store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub ip: String,
    pub user_agent: String,
    pub country: String,
    pub path: String,
    pub referrer: String,
}

impl NewVisit {
    /// Builds a visit from client-reported fields, applying the `/` and empty-string
    /// defaults for a missing path and referrer.
    pub fn new(
        ip: String,
        user_agent: String,
        country: String,
        path: Option<String>,
        referrer: Option<String>,
    ) -> Self {
        Self {
            ip,
            user_agent,
            country,
            path: path.unwrap_or_else(|| "/".to_string()),
            referrer: referrer.unwrap_or_default(),
        }
    }
}

/// Resolves a requested recent-visits limit.
///
/// Missing or negative values fall back to [`DEFAULT_RECENT_LIMIT`]; anything above
/// [`MAX_RECENT_LIMIT`] is capped.
pub fn clamp_recent_limit(requested: Option<i64>) -> i64 {
    match requested {
        Some(limit) if limit >= 0 => limit.min(MAX_RECENT_LIMIT),
        _ => DEFAULT_RECENT_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_visit_defaults() {
        let visit = NewVisit::new(
            "10.0.0.1".to_string(),
            String::new(),
            UNKNOWN_COUNTRY.to_string(),
            None,
            None,
        );

        assert_eq!(visit.path, "/");
        assert_eq!(visit.referrer, "");
        assert_eq!(visit.country, "Unknown");
    }

    #[test]
    fn test_new_visit_keeps_supplied_fields() {
        let visit = NewVisit::new(
            "10.0.0.1".to_string(),
            "Mozilla/5.0".to_string(),
            "DE".to_string(),
            Some("/pricing".to_string()),
            Some("https://google.com".to_string()),
        );

        assert_eq!(visit.path, "/pricing");
        assert_eq!(visit.referrer, "https://google.com");
        assert_eq!(visit.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn test_clamp_recent_limit() {
        assert_eq!(clamp_recent_limit(None), 100);
        assert_eq!(clamp_recent_limit(Some(-5)), 100);
        assert_eq!(clamp_recent_limit(Some(0)), 0);
        assert_eq!(clamp_recent_limit(Some(20)), 20);
        assert_eq!(clamp_recent_limit(Some(500)), 500);
        assert_eq!(clamp_recent_limit(Some(10_000)), 500);
    }
}
