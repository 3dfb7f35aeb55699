//! Badge and earned-badge entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An achievement marker granted once a donor's cumulative donation count
/// crosses a threshold. Seeded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Unique badge identifier.
    pub id: Uuid,
    /// Badge name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Minimum donation count required to earn this badge.
    pub criteria: i64,
    /// Display icon.
    pub icon: String,
}

/// Junction row recording that a donor has earned a badge.
///
/// At most one row exists per (donor, badge) pair; the check runs inside
/// the donation transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserBadge {
    /// Unique row identifier.
    pub id: Uuid,
    /// The donor who earned the badge.
    pub donor_id: Uuid,
    /// The badge earned.
    pub badge_id: Uuid,
    /// When the badge was granted.
    pub earned_at: DateTime<Utc>,
}
