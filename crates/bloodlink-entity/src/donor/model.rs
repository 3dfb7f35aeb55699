//! Donor entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::blood_group::BloodGroup;

/// A person registered as willing and able to give blood.
///
/// Linked to a [`crate::user::User`] by email (soft reference, not enforced
/// by a foreign key).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    /// Unique donor identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// ABO/Rh blood group.
    pub blood_group: BloodGroup,
    /// District of residence.
    pub district: String,
    /// Upazila (sub-district) of residence.
    pub upazila: String,
    /// Village (empty string when not provided).
    pub village: String,
    /// Contact phone number.
    pub phone: String,
    /// Email address (soft link to a user account).
    pub email: String,
    /// Date of the most recent recorded donation.
    pub last_donation: Option<NaiveDate>,
    /// When the donor was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new donor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDonor {
    /// Full name.
    pub name: String,
    /// ABO/Rh blood group.
    pub blood_group: BloodGroup,
    /// District of residence.
    pub district: String,
    /// Upazila of residence.
    pub upazila: String,
    /// Village (defaults to empty string).
    pub village: Option<String>,
    /// Contact phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
}

/// Optional filters for donor directory searches.
///
/// All present filters compose with logical AND. District and upazila are
/// case-insensitive substring matches; blood group is an exact match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DonorFilter {
    /// Exact blood group match.
    pub blood_group: Option<BloodGroup>,
    /// Case-insensitive district substring.
    pub district: Option<String>,
    /// Case-insensitive upazila substring.
    pub upazila: Option<String>,
}
