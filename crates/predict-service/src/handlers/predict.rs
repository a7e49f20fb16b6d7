//! Prediction handler.

use crate::models::PredictionResponse;
use axum::Json;

/// Handler for GET /predict
///
/// Returns the static score. The request carries no input and the handler
/// has no side effects beyond the metrics recorded by the middleware.
#[tracing::instrument(skip_all, name = "predict.predict.score")]
pub async fn predict() -> Json<PredictionResponse> {
    Json(PredictionResponse::default())
}
