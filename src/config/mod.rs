use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

/// Prefix shared by every environment variable the service reads
pub const ENV_PREFIX: &str = "GALAXY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading error: {message}")]
    LoadError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_max_request_size")]
    pub max_request_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_service_version")]
    pub service_version: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub enable_json_logging: bool,
}

impl Config {
    pub fn from_environment() -> Result<Self, ConfigError> {
        let config = Config {
            server: ServerConfig::from_env()?,
            observability: ObservabilityConfig::from_env()?,
        };

        config.validate()?;

        info!("Configuration loaded successfully");
        debug!("Configuration: {:?}", config);

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Request timeout cannot be 0".to_string(),
            });
        }

        if self.server.max_request_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "Max request size cannot be 0".to_string(),
            });
        }

        if self.observability.service_name.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Service name cannot be empty".to_string(),
            });
        }

        if self.observability.log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid log level: {}", self.observability.log_level),
            });
        }

        Ok(())
    }
}

/// Deserialize one config section from `GALAXY_*` variables
fn load_section<T: serde::de::DeserializeOwned>(section: &str) -> Result<T, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()
        .map_err(|e| ConfigError::LoadError {
            message: format!("Failed to load {} config: {}", section, e),
        })?;

    settings
        .try_deserialize()
        .map_err(|e| ConfigError::LoadError {
            message: format!("Failed to deserialize {} config: {}", section, e),
        })
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        load_section("server")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl ObservabilityConfig {
    fn from_env() -> Result<Self, ConfigError> {
        load_section("observability")
    }
}

// Default value functions
pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8000
}

pub(crate) fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_max_request_size() -> usize {
    1024 * 1024 // 1MB
}

pub(crate) fn default_service_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

pub(crate) fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}
