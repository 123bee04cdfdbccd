//! DTOs for the recent visits endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

use crate::domain::entities::Visit;

/// Query parameters for `GET /api/admin/visits`.
///
/// A `limit` that does not parse as an integer is treated as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct VisitsQuery {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

/// A visit as listed in the admin area. The user agent is not exposed.
#[derive(Debug, Serialize)]
pub struct VisitItem {
    pub ts: i64,
    pub ip: String,
    pub country: String,
    pub path: String,
    #[serde(rename = "ref")]
    pub referrer: String,
}

impl From<Visit> for VisitItem {
    fn from(visit: Visit) -> Self {
        Self {
            ts: visit.timestamp,
            ip: visit.ip,
            country: visit.country,
            path: visit.path,
            referrer: visit.referrer,
        }
    }
}
