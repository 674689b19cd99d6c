//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and token signing configuration.
///
/// Access and refresh tokens are signed with distinct secrets so that a
/// compromise of one cannot forge the other.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Secret key for access token signing (HMAC-SHA256). Required.
    #[serde(default)]
    pub access_secret: String,
    /// Secret key for refresh token signing (HMAC-SHA256). Required.
    #[serde(default)]
    pub refresh_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
}

impl AuthConfig {
    /// Ensure both signing secrets are present and actually distinct.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.access_secret.is_empty() {
            return Err(AppError::configuration("auth.access_secret is not set"));
        }
        if self.refresh_secret.is_empty() {
            return Err(AppError::configuration("auth.refresh_secret is not set"));
        }
        if self.access_secret == self.refresh_secret {
            return Err(AppError::configuration(
                "auth.access_secret and auth.refresh_secret must differ",
            ));
        }
        if self.access_ttl_minutes == 0 || self.refresh_ttl_days == 0 {
            return Err(AppError::configuration("auth token TTLs must be non-zero"));
        }
        Ok(())
    }
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7
}
