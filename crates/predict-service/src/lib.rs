//! Predict Service Library
//!
//! A small HTTP service that serves a fixed prediction score alongside
//! Kubernetes liveness/readiness probes and a Prometheus scrape endpoint.
//!
//! # Architecture
//!
//! ```text
//! routes/mod.rs -> middleware/http_metrics.rs -> handlers/*.rs
//!                         |
//!                         v
//!               observability/metrics.rs (global Prometheus recorder)
//! ```
//!
//! # Modules
//!
//! - `config` - Process configuration from environment
//! - `errors` - Startup error types
//! - `handlers` - HTTP request handlers
//! - `middleware` - HTTP metrics middleware
//! - `models` - Response bodies
//! - `observability` - Metric definitions and recorder setup
//! - `routes` - Axum router setup

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod routes;
