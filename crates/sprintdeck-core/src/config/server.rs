//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Deployment environment: `"development"` or `"production"`.
    ///
    /// In production, store and internal error messages are redacted from
    /// HTTP responses; in development they are returned verbatim.
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl ServerConfig {
    /// Whether the server is running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> String {
    "development".to_string()
}
