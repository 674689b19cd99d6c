//! JWT token validation and denylist checking.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::warn;
use uuid::Uuid;

use sprintdeck_cache::keys;
use sprintdeck_cache::provider::CacheManager;
use sprintdeck_core::config::auth::AuthConfig;
use sprintdeck_core::error::AppError;
use sprintdeck_core::traits::CacheProvider;

use super::claims::{Claims, TokenType};
use super::error::TokenError;

/// Validates JWT tokens against the key matching their expected type and
/// checks the revocation denylist.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC key for access token verification.
    access_key: DecodingKey,
    /// HMAC key for refresh token verification.
    refresh_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Cache manager for denylist lookups.
    cache: Arc<CacheManager>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, cache: Arc<CacheManager>) -> Result<Self, AppError> {
        config.validate()?;

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked explicitly after signature verification so the
        // failure mode is distinguishable from a bad signature.
        validation.validate_exp = false;
        validation.required_spec_claims = Default::default();

        Ok(Self {
            access_key: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
            cache,
        })
    }

    /// Decodes and checks a token against the key for `expected_type`.
    ///
    /// Pure signature/claims validation, in order:
    /// 1. Signature under the key matching `expected_type` (key separation:
    ///    a refresh-signed token never verifies as an access token)
    /// 2. Claims shape
    /// 3. Token type claim matches `expected_type`
    /// 4. Expiry
    pub fn decode(&self, token: &str, expected_type: TokenType) -> Result<Claims, TokenError> {
        let key = match expected_type {
            TokenType::Access => &self.access_key,
            TokenType::Refresh => &self.refresh_key,
        };

        let data = decode::<Claims>(token, key, &self.validation)?;
        let claims = data.claims;

        if claims.token_type != expected_type {
            return Err(TokenError::WrongType);
        }
        if claims.is_expired() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Fully verifies a token: signature, type, expiry, and denylist.
    ///
    /// The specific failure mode is logged here; the returned error carries
    /// only a generic message so the HTTP response never discloses it.
    pub async fn verify(&self, token: &str, expected_type: TokenType) -> Result<Claims, AppError> {
        let claims = self
            .decode(token, expected_type)
            .inspect_err(|e| warn!(reason = %e, "token rejected"))?;

        if self.is_revoked(&claims.jti).await? {
            warn!(jti = %claims.jti, "token rejected: revoked");
            return Err(TokenError::Revoked.into());
        }

        Ok(claims)
    }

    /// Checks whether the given JWT ID has been revoked.
    async fn is_revoked(&self, jti: &Uuid) -> Result<bool, AppError> {
        let revoked = self.cache.get(&keys::token_denylist(*jti)).await?;
        Ok(revoked.is_some())
    }

    /// Revokes a token by JWT ID for the remainder of its lifetime.
    ///
    /// The denylist entry only needs to outlive the token itself, so it is
    /// stored with the token's remaining TTL.
    pub async fn revoke(&self, jti: Uuid, remaining_ttl_seconds: u64) -> Result<(), AppError> {
        let ttl = std::time::Duration::from_secs(remaining_ttl_seconds.max(60));
        self.cache
            .set(&keys::token_denylist(jti), "revoked", ttl)
            .await
            .map_err(|e| AppError::cache(format!("Failed to revoke token: {e}")))?;
        Ok(())
    }
}
