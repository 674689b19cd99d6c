//! Verified request identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::{User, UserRole};

/// The verified identity attached to a request by the authorization gateway.
///
/// A `Principal` is reconstructed per request from validated token claims and
/// is never persisted. Downstream handlers read it from the request context;
/// identity values supplied directly by the caller are never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Role at the time the token was issued; immutable for the token's lifetime.
    pub role: UserRole,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}
