//! Predict Service configuration.
//!
//! Configuration is loaded from environment variables. Only process-level
//! settings live here; the served endpoints have no tunables.

use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Default HTTP bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Default drain period after a shutdown signal, in seconds.
pub const DEFAULT_SHUTDOWN_DRAIN_SECONDS: u64 = 0;

/// Upper bound for the drain period, in seconds.
pub const MAX_SHUTDOWN_DRAIN_SECONDS: u64 = 300;

/// Predict Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: "0.0.0.0:8000").
    pub bind_address: SocketAddr,

    /// Seconds to keep serving after SIGINT/SIGTERM before stopping (default: 0).
    pub shutdown_drain_seconds: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid shutdown drain configuration: {0}")]
    InvalidShutdownDrain(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address_str = vars
            .get("BIND_ADDRESS")
            .map(String::as_str)
            .unwrap_or(DEFAULT_BIND_ADDRESS);

        let bind_address: SocketAddr = bind_address_str.parse().map_err(|e| {
            ConfigError::InvalidBindAddress(format!(
                "BIND_ADDRESS must be a socket address like 0.0.0.0:8000, got '{}': {}",
                bind_address_str, e
            ))
        })?;

        let shutdown_drain_seconds = if let Some(value_str) = vars.get("SHUTDOWN_DRAIN_SECONDS") {
            let value: u64 = value_str.parse().map_err(|e| {
                ConfigError::InvalidShutdownDrain(format!(
                    "SHUTDOWN_DRAIN_SECONDS must be a valid non-negative integer, got '{}': {}",
                    value_str, e
                ))
            })?;

            if value > MAX_SHUTDOWN_DRAIN_SECONDS {
                return Err(ConfigError::InvalidShutdownDrain(format!(
                    "SHUTDOWN_DRAIN_SECONDS must not exceed {} seconds, got {}",
                    MAX_SHUTDOWN_DRAIN_SECONDS, value
                )));
            }

            value
        } else {
            DEFAULT_SHUTDOWN_DRAIN_SECONDS
        };

        Ok(Config {
            bind_address,
            shutdown_drain_seconds,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8000)),
            shutdown_drain_seconds: DEFAULT_SHUTDOWN_DRAIN_SECONDS,
        }
    }
}
