//! Observability module for Predict Service.
//!
//! Provides metric definitions and the Prometheus recorder setup used by
//! the HTTP metrics middleware and the `/metrics` endpoint.

pub mod metrics;

pub use self::metrics::{init_metrics_recorder, record_http_request};
