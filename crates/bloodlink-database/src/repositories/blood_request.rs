//! Blood request repository implementation.

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use bloodlink_core::error::{AppError, ErrorKind};
use bloodlink_core::result::AppResult;
use bloodlink_entity::request::model::{CreateBloodRequest, RequestFilter};
use bloodlink_entity::request::{BloodRequest, RequestStatus, Urgency};

/// Repository for blood request CRUD and fulfillment updates.
#[derive(Debug, Clone)]
pub struct BloodRequestRepository {
    pool: SqlitePool,
}

impl BloodRequestRepository {
    /// Create a new blood request repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a request by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<BloodRequest>> {
        sqlx::query_as::<_, BloodRequest>("SELECT * FROM blood_requests WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find request by id", e)
            })
    }

    /// List requests matching the given filter, newest-created-first.
    pub async fn list(&self, filter: &RequestFilter) -> AppResult<Vec<BloodRequest>> {
        sqlx::query_as::<_, BloodRequest>(
            "SELECT * FROM blood_requests \
             WHERE (?1 IS NULL OR status = ?1) \
               AND (?2 IS NULL OR urgency = ?2) \
               AND (?3 IS NULL OR blood_group = ?3) \
             ORDER BY created_at DESC",
        )
        .bind(filter.status)
        .bind(filter.urgency)
        .bind(filter.blood_group)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list requests", e))
    }

    /// Open a new blood request with pending status.
    pub async fn create(&self, id: Uuid, data: &CreateBloodRequest) -> AppResult<BloodRequest> {
        sqlx::query_as::<_, BloodRequest>(
            "INSERT INTO blood_requests (id, patient_name, blood_group, units, urgency, hospital, \
                                         district, upazila, contact_phone, contact_email, \
                                         requested_by, notes, status, fulfilled_at, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NULL, ?) \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.patient_name)
        .bind(data.blood_group)
        .bind(data.units)
        .bind(data.urgency.unwrap_or(Urgency::Normal))
        .bind(&data.hospital)
        .bind(&data.district)
        .bind(&data.upazila)
        .bind(&data.contact_phone)
        .bind(&data.contact_email)
        .bind(&data.requested_by)
        .bind(&data.notes)
        .bind(RequestStatus::Pending)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create request", e))
    }

    /// Mark a request fulfilled, setting status and fulfillment date
    /// together.
    pub async fn fulfill(&self, id: Uuid, fulfilled_at: NaiveDate) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE blood_requests SET status = ?, fulfilled_at = ? WHERE id = ?",
        )
        .bind(RequestStatus::Fulfilled)
        .bind(fulfilled_at)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fulfill request", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Request {id} not found")));
        }
        Ok(())
    }

    /// Count requests with the given status.
    pub async fn count_by_status(&self, status: RequestStatus) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM blood_requests WHERE status = ?")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count requests", e)
            })
    }

    /// Count total requests.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM blood_requests")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count requests", e)
            })
    }
}
