//! Handler serving the client-side tracking script.

use axum::{http::header, response::IntoResponse};

/// Reports the current path and referrer to `/api/track`.
///
/// Uses `navigator.sendBeacon` when available so page unloads do not cancel the
/// request, otherwise a plain `fetch`. All failures are ignored.
pub const TRACK_SCRIPT: &str = r#"(function(){
  try{
    var data = { path: location.pathname, ref: document.referrer||"" };
    var blob = new Blob([JSON.stringify(data)], {type:"application/json"});
    if (navigator.sendBeacon) {
      navigator.sendBeacon("/api/track", blob);
    } else {
      fetch("/api/track", {method:"POST", headers:{"Content-Type":"application/json"}, body: JSON.stringify(data), keepalive: true}).catch(function(){});
    }
  }catch(e){}
})();"#;

/// Serves the tracking script.
///
/// # Endpoint
///
/// `GET /track.js`
pub async fn track_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        TRACK_SCRIPT,
    )
}
