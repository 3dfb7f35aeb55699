//! Idempotent schema creation and seed data.
//!
//! The schema is applied with `CREATE TABLE IF NOT EXISTS` on every
//! startup; the `badges` table is seeded with its four fixed rows when
//! empty.

use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use bloodlink_core::error::{AppError, ErrorKind};

/// DDL statements for all seven tables, applied in order.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id BLOB PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE COLLATE NOCASE,
        password_hash TEXT NOT NULL,
        role TEXT NOT NULL,
        phone TEXT,
        district TEXT,
        upazila TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        last_login_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS donors (
        id BLOB PRIMARY KEY,
        name TEXT NOT NULL,
        blood_group TEXT NOT NULL,
        district TEXT NOT NULL,
        upazila TEXT NOT NULL,
        village TEXT NOT NULL DEFAULT '',
        phone TEXT NOT NULL,
        email TEXT NOT NULL,
        last_donation TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS volunteers (
        id BLOB PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        district TEXT NOT NULL,
        upazila TEXT NOT NULL,
        status TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS blood_requests (
        id BLOB PRIMARY KEY,
        patient_name TEXT NOT NULL,
        blood_group TEXT NOT NULL,
        units INTEGER NOT NULL,
        urgency TEXT NOT NULL,
        hospital TEXT NOT NULL,
        district TEXT NOT NULL,
        upazila TEXT NOT NULL,
        contact_phone TEXT NOT NULL,
        contact_email TEXT NOT NULL,
        requested_by TEXT,
        notes TEXT,
        status TEXT NOT NULL,
        fulfilled_at TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS donation_history (
        id BLOB PRIMARY KEY,
        donor_id BLOB NOT NULL REFERENCES donors(id),
        donation_date TEXT NOT NULL,
        location TEXT NOT NULL,
        blood_group TEXT NOT NULL,
        units INTEGER NOT NULL,
        recipient TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS badges (
        id BLOB PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        criteria INTEGER NOT NULL,
        icon TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS user_badges (
        id BLOB PRIMARY KEY,
        donor_id BLOB NOT NULL,
        badge_id BLOB NOT NULL REFERENCES badges(id),
        earned_at TEXT NOT NULL
    )",
];

/// The fixed badge catalog: (name, description, minimum donations, icon).
const BADGE_SEED: &[(&str, &str, i64, &str)] = &[
    ("First Donation", "Completed a first blood donation", 1, "drop"),
    ("Committed Donor", "Donated blood three times", 3, "handshake"),
    ("Lifesaver", "Donated blood five times", 5, "medal"),
    ("Hero", "Donated blood ten times", 10, "trophy"),
];

/// Apply the schema and seed the badge catalog.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!("Applying database schema...");

    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to apply schema: {e}"),
                e,
            )
        })?;
    }

    seed_badges(pool).await?;

    info!("Database schema ready");
    Ok(())
}

/// Insert the four fixed badge rows when the table is empty.
async fn seed_badges(pool: &SqlitePool) -> Result<(), AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM badges")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count badges", e))?;

    if count > 0 {
        return Ok(());
    }

    for (name, description, criteria, icon) in BADGE_SEED {
        sqlx::query(
            "INSERT INTO badges (id, name, description, criteria, icon) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(description)
        .bind(criteria)
        .bind(icon)
        .execute(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to seed badge: {e}"), e)
        })?;
    }

    info!(badges = BADGE_SEED.len(), "Seeded badge catalog");
    Ok(())
}
