//! Role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use bloodlink_entity::user::UserRole;

/// A system-level permission checked before dispatching an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemPermission {
    /// List and inspect user accounts.
    UserRead,
    /// Change a user's role.
    UserChangeRole,
    /// Delete a user account.
    UserDelete,
    /// List pending volunteers and approve them.
    VolunteerApprove,
    /// View system-wide statistics.
    StatsView,
    /// Mark a blood request fulfilled.
    RequestFulfill,
    /// Record a donation on a donor's behalf.
    DonationRecord,
}

/// Maps each role to the set of permissions it holds.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    grants: HashMap<UserRole, HashSet<SystemPermission>>,
}

impl RbacPolicies {
    /// Builds the default policy set.
    ///
    /// Admins and super admins hold every permission; volunteers can
    /// fulfill requests and record donations; donors and plain users hold
    /// no system permissions (they act on their own resources only).
    pub fn new() -> Self {
        use SystemPermission::*;

        let all: HashSet<SystemPermission> = [
            UserRead,
            UserChangeRole,
            UserDelete,
            VolunteerApprove,
            StatsView,
            RequestFulfill,
            DonationRecord,
        ]
        .into_iter()
        .collect();

        let volunteer: HashSet<SystemPermission> =
            [RequestFulfill, DonationRecord].into_iter().collect();

        let mut grants = HashMap::new();
        grants.insert(UserRole::SuperAdmin, all.clone());
        grants.insert(UserRole::Admin, all);
        grants.insert(UserRole::Volunteer, volunteer);
        grants.insert(UserRole::Donor, HashSet::new());
        grants.insert(UserRole::User, HashSet::new());

        Self { grants }
    }

    /// Checks whether the role holds the permission.
    pub fn has_permission(&self, role: &UserRole, permission: &SystemPermission) -> bool {
        self.grants
            .get(role)
            .map(|set| set.contains(permission))
            .unwrap_or(false)
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
