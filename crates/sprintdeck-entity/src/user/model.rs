//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::UserRole;

/// A registered user in the Sprintdeck system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Unique email address, used as the login identifier.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role (RBAC).
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Human-readable name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
}

/// Data for updating an existing user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
}
