//! Request context carrying the authenticated principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bloodlink_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted from the verified JWT and passed into service methods so that
/// every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at the time the JWT was issued.
    pub role: UserRole,
    /// The user's name (convenience field from JWT claims).
    pub name: String,
    /// The user's email (login identity).
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: UserRole, name: String, email: String) -> Self {
        Self {
            user_id,
            role,
            name,
            email,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user carries admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns whether the current user is at least a volunteer.
    pub fn is_volunteer_or_above(&self) -> bool {
        self.role.is_volunteer_or_above()
    }
}
