//! Donor repository implementation.

use chrono::{NaiveDate, Utc};
use sqlx::sqlite::SqliteConnection;
use sqlx::SqlitePool;
use uuid::Uuid;

use bloodlink_core::error::{AppError, ErrorKind};
use bloodlink_core::result::AppResult;
use bloodlink_entity::donor::model::{CreateDonor, DonorFilter};
use bloodlink_entity::donor::Donor;

/// Repository for donor CRUD and directory queries.
#[derive(Debug, Clone)]
pub struct DonorRepository {
    pool: SqlitePool,
}

impl DonorRepository {
    /// Create a new donor repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a donor by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Donor>> {
        sqlx::query_as::<_, Donor>("SELECT * FROM donors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find donor by id", e)
            })
    }

    /// Find the most recently registered donor with the given email
    /// (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Donor>> {
        sqlx::query_as::<_, Donor>(
            "SELECT * FROM donors WHERE LOWER(email) = LOWER(?) \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find donor by email", e)
        })
    }

    /// List donors matching the given filter, newest first.
    ///
    /// Blood group is an exact match; district and upazila are
    /// case-insensitive substring matches. Absent filters are skipped.
    pub async fn list(&self, filter: &DonorFilter) -> AppResult<Vec<Donor>> {
        sqlx::query_as::<_, Donor>(
            "SELECT * FROM donors \
             WHERE (?1 IS NULL OR blood_group = ?1) \
               AND (?2 IS NULL OR instr(LOWER(district), LOWER(?2)) > 0) \
               AND (?3 IS NULL OR instr(LOWER(upazila), LOWER(?3)) > 0) \
             ORDER BY created_at DESC",
        )
        .bind(filter.blood_group)
        .bind(&filter.district)
        .bind(&filter.upazila)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list donors", e))
    }

    /// Register a new donor.
    pub async fn create(&self, id: Uuid, data: &CreateDonor) -> AppResult<Donor> {
        sqlx::query_as::<_, Donor>(
            "INSERT INTO donors (id, name, blood_group, district, upazila, village, phone, \
                                 email, last_donation, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, NULL, ?) \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.blood_group)
        .bind(&data.district)
        .bind(&data.upazila)
        .bind(data.village.as_deref().unwrap_or(""))
        .bind(&data.phone)
        .bind(&data.email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create donor", e))
    }

    /// Overwrite the donor's last-donation date.
    ///
    /// Runs inside the donation transaction; last write wins with no
    /// ordering check against the existing value.
    pub async fn set_last_donation(
        &self,
        conn: &mut SqliteConnection,
        donor_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<()> {
        let result = sqlx::query("UPDATE donors SET last_donation = ? WHERE id = ?")
            .bind(date)
            .bind(donor_id)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last donation", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Donor {donor_id} not found")));
        }
        Ok(())
    }

    /// Count total donors.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM donors")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count donors", e))
    }
}
