//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate, with `SPRINTDECK__`-prefixed environment variables layered
//! on top. Each sub-module represents a logical configuration section.

pub mod auth;
pub mod cache;
pub mod logging;
pub mod server;

use serde::{Deserialize, Serialize};

use self::auth::AuthConfig;
use self::cache::CacheConfig;
use self::logging::LoggingConfig;
use self::server::ServerConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration files
/// (default.toml + environment overlay + environment variables).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Cache provider settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `SPRINTDECK__`. Fails with a
    /// configuration error when the result is invalid; missing secrets are a
    /// startup failure, never a per-request error.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SPRINTDECK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field invariants that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.auth.validate()?;
        if self.cache.default_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "cache.default_ttl_seconds must be greater than zero",
            ));
        }
        Ok(())
    }
}
