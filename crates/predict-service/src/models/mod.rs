//! Predict Service models.
//!
//! Response bodies returned by the HTTP handlers.

use serde::{Deserialize, Serialize};

/// Score returned by every prediction.
pub const STATIC_PREDICTION_SCORE: f64 = 0.87;

/// Prediction response.
///
/// Returned by the `/predict` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Model score.
    pub score: f64,
}

impl Default for PredictionResponse {
    fn default() -> Self {
        Self {
            score: STATIC_PREDICTION_SCORE,
        }
    }
}

/// Probe response.
///
/// Returned by `/healthz` ("ok") and `/readyz` ("ready").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
}

impl ProbeResponse {
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }

    pub const fn ready() -> Self {
        Self { status: "ready" }
    }
}
