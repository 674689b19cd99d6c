//! RBAC enforcement: checks whether a role holds a required permission.

use tracing::debug;

use sprintdeck_core::error::AppError;
use sprintdeck_entity::UserRole;

use super::policies::{Permission, PermissionTable};

/// Enforces role-based access control.
///
/// The same enforcer instance backs both the gateway's coarse route-level
/// role check and the handlers' fine-grained per-action checks, so policy
/// never diverges between the two call sites.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    /// The policy table, fixed at construction.
    table: PermissionTable,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy table.
    pub fn new() -> Self {
        Self {
            table: PermissionTable::new(),
        }
    }

    /// Checks whether the given role has the required permission.
    pub fn has_permission(&self, role: &UserRole, permission: Permission) -> bool {
        let allowed = self.table.has_permission(role, permission);
        debug!(%role, ?permission, allowed, "RBAC permission check");
        allowed
    }

    /// Requires the given permission, or fails with an authorization error.
    pub fn require_permission(
        &self,
        role: &UserRole,
        permission: Permission,
    ) -> Result<(), AppError> {
        if self.has_permission(role, permission) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' does not have permission '{}'",
                permission_name(permission)
            )))
        }
    }

    /// Requires at least the given role in the privilege hierarchy.
    pub fn require_minimum_role(
        &self,
        actual_role: &UserRole,
        minimum_role: &UserRole,
    ) -> Result<(), AppError> {
        if actual_role.has_at_least(minimum_role) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{actual_role}' is insufficient; minimum required: '{minimum_role}'"
            )))
        }
    }

    /// Returns a reference to the underlying policy table.
    pub fn table(&self) -> &PermissionTable {
        &self.table
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}

fn permission_name(permission: Permission) -> &'static str {
    match permission {
        Permission::Create => "create",
        Permission::Read => "read",
        Permission::Update => "update",
        Permission::Delete => "delete",
    }
}
