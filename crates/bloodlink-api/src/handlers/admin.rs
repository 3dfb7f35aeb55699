//! Admin handlers — multi-action endpoints dispatching on an `action`
//! discriminator.

use axum::Json;
use axum::extract::{Query, State};

use bloodlink_auth::rbac::SystemPermission;
use bloodlink_core::error::AppError;

use crate::dto::request::{AdminCommand, AdminQuery};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin?action=users|stats|pending_volunteers
pub async fn admin_query(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AdminQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let data = match query.action.as_str() {
        "users" => {
            state
                .rbac_enforcer
                .require_permission(&auth.role, &SystemPermission::UserRead)?;
            serde_json::to_value(state.admin_service.list_users().await?)?
        }
        "stats" => {
            state
                .rbac_enforcer
                .require_permission(&auth.role, &SystemPermission::StatsView)?;
            serde_json::to_value(state.admin_service.stats().await?)?
        }
        "pending_volunteers" => {
            state
                .rbac_enforcer
                .require_permission(&auth.role, &SystemPermission::VolunteerApprove)?;
            serde_json::to_value(state.admin_service.pending_volunteers().await?)?
        }
        _ => return Err(AppError::validation("Invalid action")),
    };

    Ok(Json(serde_json::json!({ "success": true, "data": data })))
}

/// POST /api/admin with `{action: update_role|approve_volunteer|delete_user, ...}`
pub async fn admin_command(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(cmd): Json<AdminCommand>,
) -> Result<Json<serde_json::Value>, AppError> {
    let data = match cmd.action.as_str() {
        "update_role" => {
            state
                .rbac_enforcer
                .require_permission(&auth.role, &SystemPermission::UserChangeRole)?;
            let user_id = cmd
                .user_id
                .ok_or_else(|| AppError::validation("userId is required"))?;
            let role = cmd
                .role
                .ok_or_else(|| AppError::validation("role is required"))?
                .parse()?;
            let user = state.admin_service.update_role(&auth, user_id, role).await?;
            serde_json::to_value(user)?
        }
        "approve_volunteer" => {
            state
                .rbac_enforcer
                .require_permission(&auth.role, &SystemPermission::VolunteerApprove)?;
            let volunteer_id = cmd
                .volunteer_id
                .ok_or_else(|| AppError::validation("volunteerId is required"))?;
            let volunteer = state
                .admin_service
                .approve_volunteer(&auth, volunteer_id)
                .await?;
            serde_json::to_value(volunteer)?
        }
        "delete_user" => {
            state
                .rbac_enforcer
                .require_permission(&auth.role, &SystemPermission::UserDelete)?;
            let user_id = cmd
                .user_id
                .ok_or_else(|| AppError::validation("userId is required"))?;
            state.admin_service.delete_user(&auth, user_id).await?;
            serde_json::Value::Null
        }
        _ => return Err(AppError::validation("Invalid action")),
    };

    Ok(Json(serde_json::json!({ "success": true, "data": data })))
}
