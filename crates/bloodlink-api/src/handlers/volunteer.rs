//! Volunteer handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use bloodlink_core::error::AppError;
use bloodlink_entity::volunteer::Volunteer;
use bloodlink_entity::volunteer::model::CreateVolunteer;

use crate::dto::request::CreateVolunteerRequest;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/volunteers
pub async fn create_volunteer(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateVolunteerRequest>,
) -> Result<(StatusCode, Json<Volunteer>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let volunteer = state
        .volunteer_service
        .create(CreateVolunteer {
            name: req.name,
            email: req.email,
            phone: req.phone,
            district: req.district,
            upazila: req.upazila,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(volunteer)))
}

/// GET /api/volunteers — active volunteers only.
pub async fn list_volunteers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Volunteer>>, AppError> {
    let volunteers = state.volunteer_service.list_active().await?;
    Ok(Json(volunteers))
}
