//! Environment-driven server configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the HTTP server binds to when `BIND_ADDRESS` is unset.
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Server configuration loaded from environment variables.
pub struct Config {
    /// Connection string for the account store (`DATABASE_URL`)
    pub database_url: String,
    /// Socket address the HTTP server listens on (`BIND_ADDRESS`)
    pub bind_address: SocketAddr,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `BIND_ADDRESS` is not a socket address
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url,
            bind_address,
        })
    }
}
