//! HTTP request handlers for Predict Service.

pub mod health;
pub mod metrics;
pub mod predict;

pub use health::{health_check, readiness_check};
pub use self::metrics::metrics_handler;
pub use predict::predict;
