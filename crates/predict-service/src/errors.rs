//! Predict Service error types.
//!
//! The served endpoints never produce custom error payloads; unknown paths
//! and methods fall through to axum's 404/405 and a panicking handler becomes
//! a 500. The errors here cover process startup and serving.

use crate::config::ConfigError;
use thiserror::Error;

/// Failure while setting up the Prometheus recorder.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Failed to set histogram buckets for {metric}: {reason}")]
    Buckets { metric: &'static str, reason: String },

    #[error("Failed to install Prometheus recorder: {0}")]
    Install(String),
}

/// Top-level service error returned from startup and the serve loop.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_buckets_error() {
        let error = MetricsError::Buckets {
            metric: "http_request_duration_seconds",
            reason: "empty bucket list".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to set histogram buckets for http_request_duration_seconds: empty bucket list"
        );
    }

    #[test]
    fn test_display_install_error() {
        let error = MetricsError::Install("recorder already set".to_string());
        assert_eq!(
            format!("{}", error),
            "Failed to install Prometheus recorder: recorder already set"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let error: ServiceError = ConfigError::InvalidBindAddress("x".to_string()).into();
        assert!(matches!(error, ServiceError::Config(_)));
        assert_eq!(
            format!("{}", error),
            "Configuration error: Invalid bind address: x"
        );
    }

    #[test]
    fn test_metrics_error_converts() {
        let error: ServiceError = MetricsError::Install("boom".to_string()).into();
        assert!(matches!(error, ServiceError::Metrics(_)));
    }

    #[test]
    fn test_bind_error_keeps_source() {
        let error = ServiceError::Bind {
            addr: "127.0.0.1:8000".parse().unwrap(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };

        assert!(format!("{}", error).starts_with("Failed to bind 127.0.0.1:8000"));
        assert!(error.source().is_some());
    }
}
