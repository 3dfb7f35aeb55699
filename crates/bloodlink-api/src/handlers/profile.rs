//! Profile read-model handler.

use axum::Json;
use axum::extract::{Query, State};

use bloodlink_auth::rbac::SystemPermission;
use bloodlink_core::error::AppError;
use bloodlink_service::profile::ProfileView;

use crate::dto::request::ProfileParams;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/profile?userId=
///
/// Defaults to the authenticated user; reading someone else's profile
/// requires admin privileges.
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ProfileParams>,
) -> Result<Json<ProfileView>, AppError> {
    let target = params.user_id.unwrap_or(auth.user_id);

    if target != auth.user_id {
        state
            .rbac_enforcer
            .require_permission(&auth.role, &SystemPermission::UserRead)?;
    }

    let profile = state.profile_service.get(target).await?;
    Ok(Json(profile))
}
