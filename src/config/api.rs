//! Data API configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Remote campaign finance data API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// API origin; also the target of the `/api/` redirect
    #[serde(default = "default_location")]
    pub location: String,

    /// Version path segment
    #[serde(default = "default_version")]
    pub version: String,

    /// API key sent with every request
    pub key: SecretString,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Developer portal, the target of the `/developers/` redirect
    pub fn developers_url(&self) -> String {
        format!("{}/developers/", self.location.trim_end_matches('/'))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.location.starts_with("https://") && !self.location.starts_with("http://") {
            return Err(ValidationError::InvalidApiLocation);
        }
        if self.key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("api.key"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_location() -> String {
    "https://api.open.fec.gov".to_string()
}

fn default_version() -> String {
    "v1".to_string()
}

fn default_timeout() -> u64 {
    10
}
