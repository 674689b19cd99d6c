//! User role enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Roles available in the RBAC system.
///
/// A closed set, fixed at compile time. Ordered by privilege level:
/// Admin > Editor > Viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access to every resource and permission.
    Admin,
    /// Can read and update existing resources.
    Editor,
    /// Read-only access.
    Viewer,
}

impl UserRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Admin => 3,
            Self::Editor => 2,
            Self::Viewer => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &UserRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = sprintdeck_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            "viewer" => Ok(Self::Viewer),
            _ => Err(sprintdeck_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, editor, viewer"
            ))),
        }
    }
}
