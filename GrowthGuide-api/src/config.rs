use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default value of `APP_ENV`
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Server configuration read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Listen port
    pub port: u16,
    /// JSON reference file; `None` uses the bundled tables
    pub reference_data_path: Option<PathBuf>,
    /// Deployment environment reported by the health check
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            reference_data_path: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through a variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            None => DEFAULT_PORT,
        };

        let reference_data_path = lookup("REFERENCE_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        if reference_data_path.is_none() {
            debug!("REFERENCE_DATA_PATH not set - using bundled reference tables.");
        }

        let environment = lookup("APP_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self {
            port,
            reference_data_path,
            environment,
        })
    }
}
