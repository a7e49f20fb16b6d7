//! # Predict Test Utilities
//!
//! Shared test utilities for the Predict Service.
//!
//! This crate provides:
//! - Server test harness (`TestPredictServer` for E2E tests)
//! - Prometheus exposition parsing (`MetricsScrape`) for asserting on
//!   `/metrics` output
//!
//! ## Usage
//!
//! ```rust,ignore
//! use predict_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestPredictServer::spawn().await?;
//!
//!     let response = reqwest::get(format!("{}/healthz", server.url())).await?;
//!     assert_eq!(response.status(), 200);
//!
//!     let scrape = server.scrape().await?;
//!     assert!(scrape.counter("http_requests_total", &[("path", "/healthz")]).is_some());
//!     Ok(())
//! }
//! ```

pub mod scrape;
pub mod server_harness;

// Re-export commonly used items
pub use scrape::*;
pub use server_harness::*;
