//! Request DTOs with validation.
//!
//! Wire field names are camelCase; empty query parameter values are
//! treated as absent filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bloodlink_core::error::AppError;
use bloodlink_entity::donor::BloodGroup;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Requested role (defaults to `user`).
    pub role: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Donor registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonorRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// ABO/Rh blood group.
    pub blood_group: BloodGroup,
    /// District of residence.
    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,
    /// Upazila of residence.
    #[validate(length(min = 1, message = "Upazila is required"))]
    pub upazila: String,
    /// Village (optional).
    pub village: Option<String>,
    /// Contact phone number.
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Donor directory query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorListParams {
    /// Exact blood group match.
    pub blood_group: Option<String>,
    /// Case-insensitive district substring.
    pub district: Option<String>,
    /// Case-insensitive upazila substring.
    pub upazila: Option<String>,
}

/// Volunteer registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVolunteerRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    /// District of operation.
    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,
    /// Upazila of operation.
    #[validate(length(min = 1, message = "Upazila is required"))]
    pub upazila: String,
}

/// Blood request creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestRequest {
    /// Name of the patient needing blood.
    #[validate(length(min = 1, message = "Patient name is required"))]
    pub patient_name: String,
    /// Required blood group.
    pub blood_group: BloodGroup,
    /// Number of units required.
    #[validate(range(min = 1, message = "Units must be at least 1"))]
    pub units: i64,
    /// Priority classification (defaults to normal).
    pub urgency: Option<String>,
    /// Hospital where the blood is needed.
    #[validate(length(min = 1, message = "Hospital is required"))]
    pub hospital: String,
    /// District of the hospital.
    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,
    /// Upazila of the hospital.
    #[validate(length(min = 1, message = "Upazila is required"))]
    pub upazila: String,
    /// Phone number of the contact person.
    #[validate(length(min = 1, message = "Contact phone is required"))]
    pub contact_phone: String,
    /// Email of the contact person.
    #[validate(length(min = 1, message = "Contact email is required"))]
    pub contact_email: String,
    /// Name of the person who raised the request.
    pub requested_by: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Request listing query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestListParams {
    /// Filter by fulfillment status.
    pub status: Option<String>,
    /// Filter by urgency.
    pub urgency: Option<String>,
    /// Filter by required blood group.
    pub blood_group: Option<String>,
}

/// Request status update body (PATCH /requests).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatus {
    /// The request to update.
    pub id: Uuid,
    /// Target status.
    pub status: String,
    /// Fulfillment date (defaults to today).
    pub fulfilled_at: Option<NaiveDate>,
}

/// Donation recording request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    /// The donor who gave blood.
    pub donor_id: Uuid,
    /// Date the donation took place.
    pub donation_date: NaiveDate,
    /// Where the donation took place.
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    /// Blood group donated.
    pub blood_group: BloodGroup,
    /// Units donated (defaults to 1).
    pub units: Option<i64>,
    /// Recipient name, when known.
    pub recipient: Option<String>,
}

/// Profile query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileParams {
    /// Target user (defaults to the authenticated user).
    pub user_id: Option<Uuid>,
}

/// Admin GET query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminQuery {
    /// Action discriminator: `users`, `stats`, or `pending_volunteers`.
    pub action: String,
}

/// Admin POST command body. Fields beyond `action` are optional and
/// checked per action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCommand {
    /// Action discriminator: `update_role`, `approve_volunteer`, or
    /// `delete_user`.
    pub action: String,
    /// Target user (update_role, delete_user).
    pub user_id: Option<Uuid>,
    /// Target volunteer (approve_volunteer).
    pub volunteer_id: Option<Uuid>,
    /// New role (update_role).
    pub role: Option<String>,
}

/// Treat an absent or empty query parameter as no filter.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse an optional blood group query parameter.
///
/// Query-string decoding turns `+` into a space, so `O+` arrives as
/// `"O "`; normalize before parsing.
pub(crate) fn parse_blood_group_param(
    value: Option<String>,
) -> Result<Option<BloodGroup>, AppError> {
    match non_empty(value) {
        Some(s) => s
            .trim()
            .parse()
            .or_else(|_| s.replace(' ', "+").parse())
            .map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_are_no_filter() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("Dhaka".to_string())), Some("Dhaka".to_string()));
    }

    #[test]
    fn test_blood_group_param_space_decoding() {
        // `?bloodGroup=O+` decodes the plus as a space.
        assert_eq!(
            parse_blood_group_param(Some("O ".to_string())).unwrap(),
            Some(BloodGroup::OPositive)
        );
        assert_eq!(
            parse_blood_group_param(Some("O+".to_string())).unwrap(),
            Some(BloodGroup::OPositive)
        );
        assert_eq!(parse_blood_group_param(Some(String::new())).unwrap(), None);
        assert!(parse_blood_group_param(Some("Z+".to_string())).is_err());
    }
}
