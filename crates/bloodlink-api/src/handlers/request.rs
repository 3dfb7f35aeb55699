//! Blood request handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use validator::Validate;

use bloodlink_auth::rbac::SystemPermission;
use bloodlink_core::error::AppError;
use bloodlink_entity::request::BloodRequest;
use bloodlink_entity::request::model::{CreateBloodRequest, RequestFilter};

use crate::dto::request::{
    CreateRequestRequest, RequestListParams, UpdateRequestStatus, non_empty,
    parse_blood_group_param,
};
use crate::dto::response::SuccessResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/requests
pub async fn create_request(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateRequestRequest>,
) -> Result<(StatusCode, Json<BloodRequest>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let urgency = match non_empty(req.urgency) {
        Some(u) => Some(u.parse()?),
        None => None,
    };

    let request = state
        .request_service
        .create(CreateBloodRequest {
            patient_name: req.patient_name,
            blood_group: req.blood_group,
            units: req.units,
            urgency,
            hospital: req.hospital,
            district: req.district,
            upazila: req.upazila,
            contact_phone: req.contact_phone,
            contact_email: req.contact_email,
            requested_by: req.requested_by,
            notes: req.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/requests?status=&urgency=&bloodGroup=
pub async fn list_requests(
    State(state): State<AppState>,
    Query(params): Query<RequestListParams>,
) -> Result<Json<Vec<BloodRequest>>, AppError> {
    let filter = RequestFilter {
        status: match non_empty(params.status) {
            Some(s) => Some(s.parse()?),
            None => None,
        },
        urgency: match non_empty(params.urgency) {
            Some(u) => Some(u.parse()?),
            None => None,
        },
        blood_group: parse_blood_group_param(params.blood_group)?,
    };

    let requests = state.request_service.list(filter).await?;
    Ok(Json(requests))
}

/// PATCH /api/requests — status update, volunteer or above.
pub async fn update_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateRequestStatus>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .rbac_enforcer
        .require_permission(&auth.role, &SystemPermission::RequestFulfill)?;

    let status = req.status.parse()?;
    state
        .request_service
        .update_status(req.id, status, req.fulfilled_at)
        .await?;

    Ok(Json(SuccessResponse::ok()))
}
