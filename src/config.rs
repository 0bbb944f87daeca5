/**
 * Application Configuration
 *
 * This module loads and validates server configuration from environment
 * variables. Configuration is read exactly once at startup and passed by
 * reference to the components that need it; nothing else in the crate
 * touches the environment.
 *
 * # Variables
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET` - session token signing secret (required, non-empty)
 * - `SERVER_PORT` - listening port (optional, defaults to 3000)
 *
 * # Fail-fast Policy
 *
 * Missing or empty mandatory variables abort startup with a `ConfigError`.
 * There is no fallback signing secret: a server that cannot prove it holds
 * a real secret must not issue tokens.
 */

use thiserror::Error;

/// Server configuration, built once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Session token signing secret
    pub jwt_secret: String,
    /// Listening port
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingValue` if `DATABASE_URL` or `JWT_SECRET`
    /// is unset or empty, and `ConfigError::InvalidValue` if `SERVER_PORT`
    /// is set but not a valid port number.
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        let database_url = require_env("DATABASE_URL")?;
        let jwt_secret = require_env("JWT_SECRET")?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(AppConfig {
            database_url,
            jwt_secret,
            port,
        })
    }
}

/// Default listening port when `SERVER_PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Read a mandatory environment variable, rejecting empty values
fn require_env(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingValue(name)),
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
