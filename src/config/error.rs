//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidHost(String),

    #[error("Invalid data API timeout")]
    InvalidTimeout,

    #[error("Request timeout {request}s is shorter than the {required}s the data API calls may take")]
    RequestTimeoutTooShort { request: u64, required: u64 },

    #[error("Invalid log directive: {0}")]
    InvalidLogLevel(String),

    #[error("Data API location must be an http(s) URL")]
    InvalidApiLocation,

    #[error("Default time period {default} precedes earliest cycle {earliest}")]
    DefaultBeforeEarliestCycle { default: i32, earliest: i32 },
}
