//! Donation history repository implementation.
//!
//! Donation rows are append-only; the write path methods take an explicit
//! connection so the caller can run them inside a transaction together
//! with the donor update and badge grants.

use chrono::Utc;
use sqlx::sqlite::SqliteConnection;
use sqlx::SqlitePool;
use uuid::Uuid;

use bloodlink_core::error::{AppError, ErrorKind};
use bloodlink_core::result::AppResult;
use bloodlink_entity::donation::model::CreateDonation;
use bloodlink_entity::donation::Donation;

/// Repository for the append-only donation history.
#[derive(Debug, Clone)]
pub struct DonationRepository {
    pool: SqlitePool,
}

impl DonationRepository {
    /// Create a new donation repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a donation row inside the caller's transaction.
    pub async fn insert(
        &self,
        conn: &mut SqliteConnection,
        id: Uuid,
        data: &CreateDonation,
    ) -> AppResult<Donation> {
        sqlx::query_as::<_, Donation>(
            "INSERT INTO donation_history (id, donor_id, donation_date, location, blood_group, \
                                           units, recipient, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING *",
        )
        .bind(id)
        .bind(data.donor_id)
        .bind(data.donation_date)
        .bind(&data.location)
        .bind(data.blood_group)
        .bind(data.units.unwrap_or(1))
        .bind(&data.recipient)
        .bind(Utc::now())
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert donation", e))
    }

    /// Count a donor's donations inside the caller's transaction.
    pub async fn count_for_donor(
        &self,
        conn: &mut SqliteConnection,
        donor_id: Uuid,
    ) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM donation_history WHERE donor_id = ?")
            .bind(donor_id)
            .fetch_one(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count donations", e)
            })
    }

    /// List a donor's donations, most recent donation date first.
    pub async fn list_for_donor(&self, donor_id: Uuid) -> AppResult<Vec<Donation>> {
        sqlx::query_as::<_, Donation>(
            "SELECT * FROM donation_history WHERE donor_id = ? \
             ORDER BY donation_date DESC, created_at DESC",
        )
        .bind(donor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list donations", e))
    }

    /// Count total donations.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM donation_history")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count donations", e)
            })
    }
}
