//! Page server listener, logging and request budget

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// A candidate or committee page makes two sequential data API calls.
const DATA_API_CALLS_PER_PAGE: u64 = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// `production` switches logs to JSON
    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whole-request budget, data API calls included
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Where the server runs; only the log format depends on it.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validates the listener and log directive, and checks that a request
    /// outlasts the data API calls it waits on.
    pub fn validate(&self, api_timeout_secs: u64) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;

        EnvFilter::try_new(&self.log_level)
            .map_err(|e| ValidationError::InvalidLogLevel(format!("{}: {}", self.log_level, e)))?;

        let required = api_timeout_secs.saturating_mul(DATA_API_CALLS_PER_PAGE).max(1);
        if self.request_timeout_secs < required {
            return Err(ValidationError::RequestTimeoutTooShort {
                request: self.request_timeout_secs,
                required,
            });
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,fec_web=debug,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
