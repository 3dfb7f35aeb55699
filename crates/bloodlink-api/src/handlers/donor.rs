//! Donor directory handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use validator::Validate;

use bloodlink_core::error::AppError;
use bloodlink_entity::donor::Donor;
use bloodlink_entity::donor::model::{CreateDonor, DonorFilter};

use crate::dto::request::{CreateDonorRequest, DonorListParams, non_empty, parse_blood_group_param};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/donors
pub async fn create_donor(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateDonorRequest>,
) -> Result<(StatusCode, Json<Donor>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let donor = state
        .donor_service
        .create(CreateDonor {
            name: req.name,
            blood_group: req.blood_group,
            district: req.district,
            upazila: req.upazila,
            village: req.village,
            phone: req.phone,
            email: req.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(donor)))
}

/// GET /api/donors?bloodGroup=&district=&upazila=
pub async fn list_donors(
    State(state): State<AppState>,
    Query(params): Query<DonorListParams>,
) -> Result<Json<Vec<Donor>>, AppError> {
    let filter = DonorFilter {
        blood_group: parse_blood_group_param(params.blood_group)?,
        district: non_empty(params.district),
        upazila: non_empty(params.upazila),
    };

    let donors = state.donor_service.list(filter).await?;
    Ok(Json(donors))
}
