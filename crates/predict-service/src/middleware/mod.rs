//! Middleware for Predict Service.
//!
//! # Components
//!
//! - `http_metrics` - HTTP request count and latency middleware

pub mod http_metrics;

pub use http_metrics::http_metrics_middleware;
