//! Donation history entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::donor::BloodGroup;

/// A single recorded donation. Rows are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Unique donation identifier.
    pub id: Uuid,
    /// The donor who gave blood.
    pub donor_id: Uuid,
    /// Date the donation took place.
    pub donation_date: NaiveDate,
    /// Where the donation took place.
    pub location: String,
    /// Blood group donated.
    pub blood_group: BloodGroup,
    /// Units donated.
    pub units: i64,
    /// Recipient name, when known.
    pub recipient: Option<String>,
    /// When the record was inserted.
    pub created_at: DateTime<Utc>,
}

/// Data required to record a donation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDonation {
    /// The donor who gave blood.
    pub donor_id: Uuid,
    /// Date the donation took place.
    pub donation_date: NaiveDate,
    /// Where the donation took place.
    pub location: String,
    /// Blood group donated.
    pub blood_group: BloodGroup,
    /// Units donated (defaults to 1).
    pub units: Option<i64>,
    /// Recipient name, when known.
    pub recipient: Option<String>,
}
