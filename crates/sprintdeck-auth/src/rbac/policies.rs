//! Role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use sprintdeck_entity::UserRole;

/// A CRUD permission on user data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Create new resources.
    Create,
    /// Read existing resources.
    Read,
    /// Update existing resources.
    Update,
    /// Delete resources.
    Delete,
}

/// The mapping from each role to its set of allowed permissions.
///
/// Fixed at process start and read-only thereafter; there are no dynamic
/// permission grants. Changing the table requires a new process.
#[derive(Debug, Clone)]
pub struct PermissionTable {
    /// Role → set of permissions.
    policies: HashMap<UserRole, HashSet<Permission>>,
}

impl PermissionTable {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let mut policies = HashMap::new();

        policies.insert(
            UserRole::Admin,
            HashSet::from([
                Permission::Create,
                Permission::Read,
                Permission::Update,
                Permission::Delete,
            ]),
        );
        policies.insert(
            UserRole::Editor,
            HashSet::from([Permission::Read, Permission::Update]),
        );
        policies.insert(UserRole::Viewer, HashSet::from([Permission::Read]));

        Self { policies }
    }

    /// Checks whether the given role has the specified permission.
    ///
    /// Deny-by-default: an unknown role or an ungranted permission yields
    /// `false`, never an error.
    pub fn has_permission(&self, role: &UserRole, permission: Permission) -> bool {
        self.policies
            .get(role)
            .map(|perms| perms.contains(&permission))
            .unwrap_or(false)
    }

    /// Returns the set of permissions for the given role.
    pub fn permissions_for_role(&self, role: &UserRole) -> HashSet<Permission> {
        self.policies.get(role).cloned().unwrap_or_default()
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::new()
    }
}
