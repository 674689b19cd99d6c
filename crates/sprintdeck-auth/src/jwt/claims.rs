//! JWT claims structure used in access and refresh tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sprintdeck_entity::{Principal, UserRole};

/// JWT claims payload embedded in every token.
///
/// Access claims are a strict subset of the refresh claims they are derived
/// from: same subject, email, and role, with a shorter expiry. The role is
/// fixed at issuance and never re-derived mid-session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: Uuid,
    /// Email address of the subject.
    pub email: String,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID for denylist tracking.
    pub jti: Uuid,
    /// Token type: "access" or "refresh".
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived access token for API requests.
    Access,
    /// Long-lived refresh token for obtaining new access tokens.
    Refresh,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Reconstructs the verified principal carried by this token.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.sub,
            email: self.email.clone(),
            role: self.role,
        }
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}
