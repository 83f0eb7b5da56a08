//! Cross-origin resource sharing for browser clients.

use axum::http::{HeaderName, HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::auth::{X_AUTHORIZATION, X_SESSION_TOKEN};
use crate::api::dto::pagination::TOTAL_COUNT_HEADER;

/// How long browsers may cache a preflight response.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Creates the CORS layer.
///
/// `allowed_origins` containing `*` (or empty) allows any origin; otherwise
/// only the listed origins are echoed back. Invalid origins are skipped with
/// a warning.
///
/// Preflight `OPTIONS` requests are answered by the layer itself, so routes
/// never see them.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(X_AUTHORIZATION),
            HeaderName::from_static(X_SESSION_TOKEN),
        ])
        .expose_headers([HeaderName::from_static(TOTAL_COUNT_HEADER)])
        .max_age(PREFLIGHT_MAX_AGE)
}
