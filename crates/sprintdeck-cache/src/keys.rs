//! Cache key builders for all Sprintdeck cache entries.
//!
//! Centralising key construction keeps derivation deterministic and
//! collision-free: every logical resource maps to exactly one key, and
//! distinct resources ("all users" vs "user #7") never share one.

use uuid::Uuid;

/// Prefix applied to all Sprintdeck cache keys.
const PREFIX: &str = "sprintdeck";

/// Cache key for the list of all users.
pub fn users_all() -> String {
    format!("{PREFIX}:users:all")
}

/// Cache key for a single user by ID.
pub fn user_by_id(user_id: Uuid) -> String {
    format!("{PREFIX}:user:{user_id}")
}

/// Cache key for a revoked token's denylist entry.
pub fn token_denylist(jti: Uuid) -> String {
    format!("{PREFIX}:jwt:denylist:{jti}")
}
