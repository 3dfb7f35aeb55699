//! RBAC enforcement logic — checks whether a role has a required system permission.

use bloodlink_core::error::AppError;
use bloodlink_entity::user::UserRole;

use super::policies::{RbacPolicies, SystemPermission};

/// Enforces role-based access control for system-level operations.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    /// The policy configuration.
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Creates an enforcer with custom policies.
    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// Checks whether the given role has the required permission.
    ///
    /// Returns `Ok(())` if allowed, or an authorization error if denied.
    pub fn require_permission(
        &self,
        role: &UserRole,
        permission: &SystemPermission,
    ) -> Result<(), AppError> {
        if self.policies.has_permission(role, permission) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' does not have permission '{permission:?}'"
            )))
        }
    }

    /// Checks whether the role has the required permission (returns bool).
    pub fn has_permission(&self, role: &UserRole, permission: &SystemPermission) -> bool {
        self.policies.has_permission(role, permission)
    }

    /// Checks whether the given role is at least the specified minimum role.
    ///
    /// Role hierarchy: SuperAdmin > Admin > Volunteer > Donor > User.
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

    /// Returns whether the role carries admin privileges.
    pub fn is_admin(&self, role: &UserRole) -> bool {
        role.is_admin()
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_holds_all_permissions() {
        let enforcer = RbacEnforcer::new();
        assert!(enforcer
            .require_permission(&UserRole::Admin, &SystemPermission::UserDelete)
            .is_ok());
        assert!(enforcer
            .require_permission(&UserRole::SuperAdmin, &SystemPermission::StatsView)
            .is_ok());
    }

    #[test]
    fn test_volunteer_scope() {
        let enforcer = RbacEnforcer::new();
        assert!(enforcer
            .require_permission(&UserRole::Volunteer, &SystemPermission::RequestFulfill)
            .is_ok());
        assert!(enforcer
            .require_permission(&UserRole::Volunteer, &SystemPermission::UserDelete)
            .is_err());
    }

    #[test]
    fn test_plain_user_denied() {
        let enforcer = RbacEnforcer::new();
        assert!(enforcer
            .require_permission(&UserRole::User, &SystemPermission::DonationRecord)
            .is_err());
    }
}
