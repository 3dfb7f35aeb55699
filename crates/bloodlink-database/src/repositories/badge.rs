//! Badge and earned-badge repository implementation.

use chrono::Utc;
use sqlx::sqlite::SqliteConnection;
use sqlx::SqlitePool;
use uuid::Uuid;

use bloodlink_core::error::{AppError, ErrorKind};
use bloodlink_core::result::AppResult;
use bloodlink_entity::badge::{Badge, UserBadge};

/// Repository for the badge catalog and per-donor badge grants.
#[derive(Debug, Clone)]
pub struct BadgeRepository {
    pool: SqlitePool,
}

impl BadgeRepository {
    /// Create a new badge repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the full badge catalog, lowest criteria first.
    pub async fn list_all(&self) -> AppResult<Vec<Badge>> {
        sqlx::query_as::<_, Badge>("SELECT * FROM badges ORDER BY criteria ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list badges", e))
    }

    /// List badges whose criteria is satisfied by the given donation
    /// count, inside the caller's transaction.
    pub async fn list_eligible(
        &self,
        conn: &mut SqliteConnection,
        donation_count: i64,
    ) -> AppResult<Vec<Badge>> {
        sqlx::query_as::<_, Badge>(
            "SELECT * FROM badges WHERE criteria <= ? ORDER BY criteria ASC",
        )
        .bind(donation_count)
        .fetch_all(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list eligible badges", e)
        })
    }

    /// Check whether the donor already holds the badge, inside the
    /// caller's transaction.
    pub async fn is_granted(
        &self,
        conn: &mut SqliteConnection,
        donor_id: Uuid,
        badge_id: Uuid,
    ) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_badges WHERE donor_id = ? AND badge_id = ?",
        )
        .bind(donor_id)
        .bind(badge_id)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check badge grant", e)
        })?;

        Ok(count > 0)
    }

    /// Grant a badge to a donor, inside the caller's transaction.
    pub async fn grant(
        &self,
        conn: &mut SqliteConnection,
        donor_id: Uuid,
        badge_id: Uuid,
    ) -> AppResult<UserBadge> {
        sqlx::query_as::<_, UserBadge>(
            "INSERT INTO user_badges (id, donor_id, badge_id, earned_at) \
             VALUES (?, ?, ?, ?) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(donor_id)
        .bind(badge_id)
        .bind(Utc::now())
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to grant badge", e))
    }

    /// List the badges a donor has earned, lowest criteria first.
    pub async fn earned_by_donor(&self, donor_id: Uuid) -> AppResult<Vec<Badge>> {
        sqlx::query_as::<_, Badge>(
            "SELECT b.* FROM badges b \
             JOIN user_badges ub ON ub.badge_id = b.id \
             WHERE ub.donor_id = ? \
             ORDER BY b.criteria ASC",
        )
        .bind(donor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list earned badges", e)
        })
    }
}
