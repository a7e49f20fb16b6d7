//! Prometheus metrics endpoint handler.
//!
//! Provides the `/metrics` endpoint for Prometheus scraping.
//!
//! # Security
//!
//! This endpoint is unauthenticated to allow Prometheus to scrape metrics.
//! Labels carry only route templates, methods and status codes.

use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};
use metrics_exporter_prometheus::PrometheusHandle;

/// Media type of the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Handler for GET /metrics
///
/// # Response
///
/// Returns 200 OK with Prometheus text format:
/// ```text
/// # HELP http_requests_total Total HTTP requests
/// # TYPE http_requests_total counter
/// http_requests_total{path="/predict",method="GET",status="200"} 42
/// ```
#[tracing::instrument(skip_all, name = "predict.metrics.scrape")]
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    ([(CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], handle.render())
}
