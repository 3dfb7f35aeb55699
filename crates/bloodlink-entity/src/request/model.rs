//! Blood request entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::donor::BloodGroup;

use super::status::RequestStatus;
use super::urgency::Urgency;

/// An open need for blood of a given group and urgency.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// Name of the patient needing blood.
    pub patient_name: String,
    /// Required blood group.
    pub blood_group: BloodGroup,
    /// Number of units required.
    pub units: i64,
    /// Priority classification.
    pub urgency: Urgency,
    /// Hospital where the blood is needed.
    pub hospital: String,
    /// District of the hospital.
    pub district: String,
    /// Upazila of the hospital.
    pub upazila: String,
    /// Phone number of the contact person.
    pub contact_phone: String,
    /// Email of the contact person.
    pub contact_email: String,
    /// Name of the person who raised the request.
    pub requested_by: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Fulfillment status.
    pub status: RequestStatus,
    /// Date the request was fulfilled (set together with the status).
    pub fulfilled_at: Option<NaiveDate>,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to open a new blood request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBloodRequest {
    /// Name of the patient needing blood.
    pub patient_name: String,
    /// Required blood group.
    pub blood_group: BloodGroup,
    /// Number of units required.
    pub units: i64,
    /// Priority classification (defaults to normal).
    pub urgency: Option<Urgency>,
    /// Hospital where the blood is needed.
    pub hospital: String,
    /// District of the hospital.
    pub district: String,
    /// Upazila of the hospital.
    pub upazila: String,
    /// Phone number of the contact person.
    pub contact_phone: String,
    /// Email of the contact person.
    pub contact_email: String,
    /// Name of the person who raised the request.
    pub requested_by: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Optional filters for request listings.
///
/// Filters are independent and compose with logical AND; results are
/// ordered newest-created-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestFilter {
    /// Filter by fulfillment status.
    pub status: Option<RequestStatus>,
    /// Filter by urgency.
    pub urgency: Option<Urgency>,
    /// Filter by required blood group.
    pub blood_group: Option<BloodGroup>,
}
