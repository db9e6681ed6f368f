/**
 * Server Configuration
 *
 * Configuration is loaded once at startup from environment variables and
 * passed down by value; nothing reads process-wide state after this
 * point. In particular the signing secret and token lifetime are fixed
 * here and injected into `AuthTokens` at construction.
 *
 * # Variables
 *
 * - `JWT_SECRET` (required) - token signing secret; startup fails
 *   without it rather than falling back to a baked-in default
 * - `DATABASE_URL` (optional) - PostgreSQL connection string; when
 *   absent the server runs on the in-memory store
 * - `SERVER_PORT` (optional, default 3000)
 * - `TOKEN_TTL_SECS` (optional, default 3600)
 */

use chrono::Duration;
use thiserror::Error;

use crate::auth::tokens::{AuthConfig, DEFAULT_TOKEN_TTL_SECS};

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration failures; all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set")]
    MissingJwtSecret,
    #[error("invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Immutable server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// PostgreSQL connection string, if any
    pub database_url: Option<String>,
    /// Token signing secret and lifetime
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingJwtSecret)?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let token_ttl_secs = match std::env::var("TOKEN_TTL_SECS") {
            Ok(value) => value.parse::<i64>().ok().filter(|ttl| *ttl > 0).ok_or(
                ConfigError::InvalidValue {
                    name: "TOKEN_TTL_SECS",
                    value,
                },
            )?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        let database_url = std::env::var("DATABASE_URL").ok();

        Ok(Self {
            port,
            database_url,
            auth: AuthConfig {
                jwt_secret,
                token_ttl: Duration::seconds(token_ttl_secs),
            },
        })
    }
}
