//! HTTP metrics middleware for capturing all request/response metrics
//!
//! This middleware captures metrics for ALL HTTP responses including
//! framework-level responses that never reach a handler:
//! - 404 Not Found
//! - 405 Method Not Allowed
//! - 500 Internal Server Error from a panicking handler (converted by the
//!   panic-catching layer that sits inside this one)
//!
//! Requests that match no route are labelled `/other` rather than with the
//! raw request path, so probing arbitrary URLs cannot grow label cardinality.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::observability::metrics::{record_http_request, UNMATCHED_PATH};

/// Middleware that records HTTP request metrics for all responses
///
/// This captures:
/// - Request method
/// - Route template (query string never included; unmatched requests
///   collapse into `/other`)
/// - Response status code
/// - Request duration
///
/// Applied as the outermost layer to capture all responses including
/// framework-level errors.
pub async fn http_metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string());

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status_code = response.status().as_u16();
    record_http_request(&method, &path, status_code, duration);

    response
}
