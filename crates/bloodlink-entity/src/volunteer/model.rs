//! Volunteer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::VolunteerStatus;

/// A volunteer who coordinates donations and request fulfillment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    /// Unique volunteer identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// District of operation.
    pub district: String,
    /// Upazila of operation.
    pub upazila: String,
    /// Approval status.
    pub status: VolunteerStatus,
    /// When the volunteer was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new volunteer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVolunteer {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// District of operation.
    pub district: String,
    /// Upazila of operation.
    pub upazila: String,
}
