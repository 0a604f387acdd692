//! Request-level middleware.
//!
//! # Responsibilities
//! - Generate or propagate `x-request-id`
//! - Apply the cross-origin policy
//! - Count requests per matched route

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tower_http::cors::CorsLayer;

use crate::config::CorsConfig;
use crate::observability::metrics;

/// Header carrying the request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Build the CORS layer.
///
/// Permissive mode mirrors the caller's origin, method and headers and
/// allows credentials, which is the closest valid equivalent of a
/// wildcard-with-credentials policy.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.permissive {
        CorsLayer::very_permissive()
    } else {
        CorsLayer::new()
    }
}

/// Record every routed request with its matched path and final status.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(request).await;
    metrics::record_request(route, response.status().as_u16());
    response
}
