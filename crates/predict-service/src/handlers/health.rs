//! Health check handlers.
//!
//! Provides health check endpoints for Kubernetes liveness and readiness probes.
//!
//! - `/healthz`: Liveness probe - returns `{"status":"ok"}` while the process runs
//! - `/readyz`: Readiness probe - returns `{"status":"ready"}`; no dependency is checked

use crate::models::ProbeResponse;
use axum::Json;

/// Liveness probe handler.
///
/// Does NOT check any dependencies - failure means the process is hung/deadlocked.
pub async fn health_check() -> Json<ProbeResponse> {
    Json(ProbeResponse::ok())
}

/// Readiness probe handler.
///
/// The service has no downstream dependencies, so it is ready as soon as it
/// accepts connections.
#[tracing::instrument(skip_all, name = "predict.health.readiness")]
pub async fn readiness_check() -> Json<ProbeResponse> {
    Json(ProbeResponse::ready())
}
