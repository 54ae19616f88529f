use axum::http::{request::Parts, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::constants::CORS_MAX_AGE_SECS;

/// Build the CORS layer from the configured origin allow-list.
///
/// Entries may use a `*` label (`https://*.vercel.app`) to admit preview
/// deployments. Request headers are mirrored rather than wildcarded since
/// credentials are allowed.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let patterns: Vec<String> = allowed_origins.to_vec();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _request: &Parts| {
                origin
                    .to_str()
                    .map(|origin| patterns.iter().any(|p| origin_matches(p, origin)))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(CORS_MAX_AGE_SECS))
}

/// Match an origin against one allow-list entry
pub fn origin_matches(pattern: &str, origin: &str) -> bool {
    let Some((prefix, suffix)) = pattern.split_once('*') else {
        return pattern == origin;
    };

    if origin.len() < prefix.len() + suffix.len()
        || !origin.starts_with(prefix)
        || !origin.ends_with(suffix)
    {
        return false;
    }

    // The wildcard covers exactly one non-empty host label
    let label = &origin[prefix.len()..origin.len() - suffix.len()];
    !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
