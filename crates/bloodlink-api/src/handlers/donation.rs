//! Donation recording handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use bloodlink_auth::rbac::SystemPermission;
use bloodlink_core::error::AppError;
use bloodlink_entity::donation::model::CreateDonation;

use crate::dto::request::CreateDonationRequest;
use crate::dto::response::DonationResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/donations — volunteer or above.
///
/// Side effects: the donor's last-donation date is overwritten and badges
/// may be granted, atomically with the insert.
pub async fn record_donation(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateDonationRequest>,
) -> Result<Json<DonationResponse>, AppError> {
    state
        .rbac_enforcer
        .require_permission(&auth.role, &SystemPermission::DonationRecord)?;

    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state
        .donation_service
        .record(CreateDonation {
            donor_id: req.donor_id,
            donation_date: req.donation_date,
            location: req.location,
            blood_group: req.blood_group,
            units: req.units,
            recipient: req.recipient,
        })
        .await?;

    Ok(Json(DonationResponse {
        success: true,
        id: outcome.donation.id,
        badges_granted: outcome.badges_granted,
    }))
}
