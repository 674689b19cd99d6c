//! JWT token creation with per-type signing keys and TTLs.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use sprintdeck_core::config::auth::AuthConfig;
use sprintdeck_core::error::AppError;
use sprintdeck_entity::Principal;

use super::claims::{Claims, TokenType};

/// Creates signed JWT access and refresh tokens.
///
/// The two token types are signed with distinct secrets so that a compromise
/// of the refresh key cannot forge access tokens and vice versa.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC key for access token signing.
    access_key: EncodingKey,
    /// HMAC key for refresh token signing.
    refresh_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token, returned in the response body.
    pub access_token: String,
    /// Long-lived refresh token, delivered only via an HTTP-only cookie.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails with a configuration error when either signing secret is unset;
    /// token issuance never fails per-request on missing secrets.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self {
            access_key: EncodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            access_ttl_minutes: config.access_ttl_minutes as i64,
            refresh_ttl_days: config.refresh_ttl_days as i64,
        })
    }

    /// Issues a standalone access token for the given principal.
    pub fn issue_access_token(
        &self,
        principal: &Principal,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.access_ttl_minutes);
        let claims = self.build_claims(principal, now, exp, TokenType::Access);

        let token = encode(&Header::default(), &claims, &self.access_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok((token, exp))
    }

    /// Issues a standalone refresh token for the given principal.
    pub fn issue_refresh_token(
        &self,
        principal: &Principal,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::days(self.refresh_ttl_days);
        let claims = self.build_claims(principal, now, exp, TokenType::Refresh);

        let token = encode(&Header::default(), &claims, &self.refresh_key)
            .map_err(|e| AppError::internal(format!("Failed to encode refresh token: {e}")))?;

        Ok((token, exp))
    }

    /// Issues an access + refresh token pair, e.g. at login.
    pub fn issue_token_pair(&self, principal: &Principal) -> Result<TokenPair, AppError> {
        let (access_token, access_expires_at) = self.issue_access_token(principal)?;
        let (refresh_token, refresh_expires_at) = self.issue_refresh_token(principal)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }

    fn build_claims(
        &self,
        principal: &Principal,
        now: DateTime<Utc>,
        exp: DateTime<Utc>,
        token_type: TokenType,
    ) -> Claims {
        Claims {
            sub: principal.id,
            email: principal.email.clone(),
            role: principal.role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            token_type,
        }
    }
}
