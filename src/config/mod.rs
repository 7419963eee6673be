//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FEC_WEB` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use fec_web::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Data API at {}", config.api.location);
//! ```

mod api;
mod calendar;
mod error;
mod server;

pub use api::ApiConfig;
pub use calendar::CalendarConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote data API (location, key)
    pub api: ApiConfig,

    /// Election calendar constants
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FEC_WEB` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FEC_WEB__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FEC_WEB__API__KEY=...` -> `api.key = ...`
    /// - `FEC_WEB__CALENDAR__DEFAULT_TIME_PERIOD=2018` -> `calendar.default_time_period = 2018`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FEC_WEB")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate(self.api.timeout_secs)?;
        self.api.validate()?;
        self.calendar.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("FEC_WEB__API__KEY", "DEMO_KEY");
    }

    fn clear_env() {
        env::remove_var("FEC_WEB__API__KEY");
        env::remove_var("FEC_WEB__API__LOCATION");
        env::remove_var("FEC_WEB__SERVER__PORT");
        env::remove_var("FEC_WEB__SERVER__ENVIRONMENT");
        env::remove_var("FEC_WEB__CALENDAR__DEFAULT_TIME_PERIOD");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.key.expose_secret(), "DEMO_KEY");
        assert_eq!(config.api.location, "https://api.open.fec.gov");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_api_key_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }

    #[test]
    fn test_server_and_calendar_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.calendar.earliest_cycle.year(), 1976);
        assert_eq!(config.calendar.default_time_period.year(), 2016);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("FEC_WEB__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_default_time_period() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("FEC_WEB__CALENDAR__DEFAULT_TIME_PERIOD", "2018");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().calendar.default_time_period.year(), 2018);
    }

    #[test]
    fn test_odd_default_time_period_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("FEC_WEB__CALENDAR__DEFAULT_TIME_PERIOD", "2017");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_err());
    }
}
