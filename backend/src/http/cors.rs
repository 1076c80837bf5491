//! Cross-origin policy.
//!
//! Browser clients served from the local machine (any port) may call the API.
//! Further origins can be added through [`CorsSettings::extra_origins`].

use axum::http::{request::Parts, HeaderValue};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsSettings;

const LOOPBACK_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

/// Whether `origin` is `http(s)://<loopback host>[:port]`.
pub fn is_loopback_origin(origin: &str) -> bool {
    let Some(rest) = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
    else {
        return false;
    };

    let (host, port) = match rest.strip_prefix("[::1]") {
        Some(port) => ("[::1]", port),
        None => match rest.find(':') {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        },
    };

    let port_ok = port.is_empty()
        || port.strip_prefix(':').is_some_and(|p| {
            !p.is_empty() && p.len() <= 5 && p.bytes().all(|b| b.is_ascii_digit())
        });

    port_ok && LOOPBACK_HOSTS.contains(&host)
}

/// Build the CORS layer: loopback plus configured origins, any method, any header.
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let extra_origins = settings.extra_origins.clone();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| is_loopback_origin(o) || extra_origins.iter().any(|e| e == o))
                    .unwrap_or(false)
            },
        ))
        .allow_methods(Any)
        .allow_headers(Any)
}
