//! Handler for the public visit tracking endpoint.

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};

use crate::api::dto::track::{AckResponse, TrackRequest};
use crate::domain::entities::NewVisit;
use crate::state::AppState;
use crate::utils::client_info::{PeerAddr, client_ip, detect_country, user_agent};

/// Records a page view.
///
/// # Endpoint
///
/// `POST /api/track`
///
/// # Request Body
///
/// ```json
/// { "path": "/pricing", "ref": "https://google.com" }
/// ```
///
/// Both fields are optional (`path` defaults to `/`, `ref` to empty). The body is
/// read leniently: a missing, empty or malformed body counts as `{}`.
///
/// # Derived Fields
///
/// - IP: first `X-Forwarded-For` entry, else the socket peer
/// - User agent: `User-Agent` header
/// - Country: `CF-IPCountry`, `X-Vercel-IP-Country`, `X-Country`, else `Unknown`
///
/// # Response
///
/// Always `200 {"ok": true}`. The script runs fire-and-forget on arbitrary pages,
/// so storage failures are logged and swallowed.
pub async fn track_handler(
    State(state): State<AppState>,
    PeerAddr(peer): PeerAddr,
    headers: HeaderMap,
    body: Bytes,
) -> Json<AckResponse> {
    let request = TrackRequest::from_body(&body);

    let visit = NewVisit::new(
        client_ip(&headers, peer),
        user_agent(&headers),
        detect_country(&headers),
        request.path,
        request.referrer,
    );

    match state.visit_service.record(visit).await {
        Ok(id) => tracing::debug!(id, "Visit recorded"),
        Err(e) => tracing::warn!(error = %e, "Failed to record visit"),
    }

    Json(AckResponse::ok())
}
