//! Client metadata derived from request headers and the socket peer.
//!
//! Tracking never trusts client-supplied IP, user agent or country fields in the
//! body; they are taken from what the proxy chain and the connection report.

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
};
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::domain::entities::UNKNOWN_COUNTRY;

/// Country headers set by common proxies and CDNs, in priority order.
pub const COUNTRY_HEADERS: [&str; 3] = ["cf-ipcountry", "x-vercel-ip-country", "x-country"];

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Socket peer address, when the server was started with connect info.
///
/// Never rejects: `None` when no [`ConnectInfo`] is attached to the request,
/// as with in-process test servers.
#[derive(Debug, Clone, Copy)]
pub struct PeerAddr(pub Option<SocketAddr>);

impl<S> FromRequestParts<S> for PeerAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| *addr),
        ))
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Best-effort client address.
///
/// First entry of `X-Forwarded-For`, then the peer address, then an empty string.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = header_str(headers, FORWARDED_FOR)
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    match (forwarded, peer) {
        (Some(ip), _) => ip.to_string(),
        (None, Some(addr)) => addr.ip().to_string(),
        (None, None) => String::new(),
    }
}

/// Raw `User-Agent` header, or an empty string.
pub fn user_agent(headers: &HeaderMap) -> String {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// First non-empty country header from [`COUNTRY_HEADERS`], or `"Unknown"`.
pub fn detect_country(headers: &HeaderMap) -> String {
    COUNTRY_HEADERS
        .iter()
        .filter_map(|name| header_str(headers, name))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(UNKNOWN_COUNTRY)
        .to_string()
}
