//! Health check handlers.

use axum::Json;
use axum::extract::State;

use bloodlink_core::error::AppError;

use crate::dto::response::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health/detailed — includes database connectivity.
pub async fn detailed_health(
    State(state): State<AppState>,
) -> Result<Json<DetailedHealthResponse>, AppError> {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
    {
        Ok(_) => "ok",
        Err(_) => "unavailable",
    };

    let status = if database == "ok" { "ok" } else { "degraded" };

    Ok(Json(DetailedHealthResponse {
        status: status.to_string(),
        database: database.to_string(),
    }))
}
