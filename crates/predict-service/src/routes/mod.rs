//! HTTP routes for Predict Service.
//!
//! Defines the Axum router and its middleware stack.

use crate::handlers;
use crate::middleware::http_metrics_middleware;
use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `/predict` - Static prediction score
/// - `/healthz` - Liveness probe
/// - `/readyz` - Readiness probe (stub, always ready)
/// - `/metrics` - Prometheus metrics endpoint
/// - TraceLayer for request logging
/// - CatchPanicLayer turning handler panics into 500 responses
/// - HTTP metrics middleware
pub fn build_routes(metrics_handle: PrometheusHandle) -> Router {
    let api_routes = Router::new()
        .route("/predict", get(handlers::predict))
        .route("/healthz", get(handlers::health_check))
        .route("/readyz", get(handlers::readiness_check));

    // Metrics route with its own state
    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics_handle);

    // Layer order (bottom-to-top execution):
    // 1. CatchPanicLayer - Convert handler panics to 500 (innermost)
    // 2. TraceLayer - Log request details
    // 3. http_metrics_middleware - Record ALL responses (outermost)
    api_routes
        .merge(metrics_routes)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(http_metrics_middleware))
}
