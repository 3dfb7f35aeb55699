//! Volunteer repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use bloodlink_core::error::{AppError, ErrorKind};
use bloodlink_core::result::AppResult;
use bloodlink_entity::volunteer::model::CreateVolunteer;
use bloodlink_entity::volunteer::{Volunteer, VolunteerStatus};

/// Repository for volunteer CRUD operations.
#[derive(Debug, Clone)]
pub struct VolunteerRepository {
    pool: SqlitePool,
}

impl VolunteerRepository {
    /// Create a new volunteer repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a volunteer by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Volunteer>> {
        sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find volunteer by id", e)
            })
    }

    /// List volunteers with the given status, newest first.
    pub async fn list_by_status(&self, status: VolunteerStatus) -> AppResult<Vec<Volunteer>> {
        sqlx::query_as::<_, Volunteer>(
            "SELECT * FROM volunteers WHERE status = ? ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list volunteers", e))
    }

    /// Register a new volunteer with the given initial status.
    pub async fn create(
        &self,
        id: Uuid,
        data: &CreateVolunteer,
        status: VolunteerStatus,
    ) -> AppResult<Volunteer> {
        sqlx::query_as::<_, Volunteer>(
            "INSERT INTO volunteers (id, name, email, phone, district, upazila, status, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.district)
        .bind(&data.upazila)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create volunteer", e))
    }

    /// Update a volunteer's status.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: VolunteerStatus,
    ) -> AppResult<Volunteer> {
        sqlx::query_as::<_, Volunteer>(
            "UPDATE volunteers SET status = ? WHERE id = ? RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update volunteer status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Volunteer {id} not found")))
    }

    /// Count total volunteers.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM volunteers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count volunteers", e)
            })
    }
}
