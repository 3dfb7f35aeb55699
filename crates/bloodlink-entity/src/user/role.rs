//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the RBAC system.
///
/// Roles are ordered by privilege level:
/// SuperAdmin > Admin > Volunteer > Donor > User.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full system owner, can manage admins.
    SuperAdmin,
    /// Can manage users, volunteers, and requests.
    Admin,
    /// Can record donations and fulfill blood requests.
    Volunteer,
    /// A registered blood donor.
    Donor,
    /// Default role for a plain account.
    User,
}

impl UserRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::SuperAdmin => 5,
            Self::Admin => 4,
            Self::Volunteer => 3,
            Self::Donor => 2,
            Self::User => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &UserRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role carries admin privileges.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }

    /// Check if this role is a volunteer or higher.
    pub fn is_volunteer_or_above(&self) -> bool {
        self.has_at_least(&Self::Volunteer)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Volunteer => "volunteer",
            Self::Donor => "donor",
            Self::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = bloodlink_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "volunteer" => Ok(Self::Volunteer),
            "donor" => Ok(Self::Donor),
            "user" => Ok(Self::User),
            _ => Err(bloodlink_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: super_admin, admin, volunteer, donor, user"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_ordering() {
        assert!(UserRole::SuperAdmin.has_at_least(&UserRole::Admin));
        assert!(UserRole::Admin.has_at_least(&UserRole::Volunteer));
        assert!(UserRole::Admin.has_at_least(&UserRole::Admin));
        assert!(!UserRole::Donor.has_at_least(&UserRole::Volunteer));
        assert!(!UserRole::User.has_at_least(&UserRole::Donor));
    }

    #[test]
    fn test_is_admin() {
        assert!(UserRole::SuperAdmin.is_admin());
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Volunteer.is_admin());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(
            "SUPER_ADMIN".parse::<UserRole>().unwrap(),
            UserRole::SuperAdmin
        );
        assert!("moderator".parse::<UserRole>().is_err());
    }
}
