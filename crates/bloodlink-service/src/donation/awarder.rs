//! Badge awarder — derives achievement badges from donation counts.

use std::sync::Arc;

use sqlx::sqlite::SqliteConnection;
use tracing::info;
use uuid::Uuid;

use bloodlink_core::error::AppError;
use bloodlink_database::repositories::badge::BadgeRepository;
use bloodlink_database::repositories::donation::DonationRepository;
use bloodlink_entity::badge::Badge;

/// Grants badges once a donor's cumulative donation count crosses each
/// badge's criteria.
///
/// Monotonic: badges once earned are never revoked. Idempotent: re-running
/// at the same donation count grants nothing new.
#[derive(Debug, Clone)]
pub struct BadgeAwarder {
    /// Donation history repository.
    donation_repo: Arc<DonationRepository>,
    /// Badge repository.
    badge_repo: Arc<BadgeRepository>,
}

impl BadgeAwarder {
    /// Creates a new badge awarder.
    pub fn new(donation_repo: Arc<DonationRepository>, badge_repo: Arc<BadgeRepository>) -> Self {
        Self {
            donation_repo,
            badge_repo,
        }
    }

    /// Runs the award check for a donor inside the caller's transaction.
    ///
    /// Counts the donor's donations, selects every badge whose criteria is
    /// met, and inserts a grant for each (donor, badge) pair not already
    /// present. Returns the newly granted badges.
    pub async fn run(
        &self,
        conn: &mut SqliteConnection,
        donor_id: Uuid,
    ) -> Result<Vec<Badge>, AppError> {
        let count = self.donation_repo.count_for_donor(conn, donor_id).await?;
        let eligible = self.badge_repo.list_eligible(conn, count).await?;

        let mut granted = Vec::new();
        for badge in eligible {
            if self.badge_repo.is_granted(conn, donor_id, badge.id).await? {
                continue;
            }
            self.badge_repo.grant(conn, donor_id, badge.id).await?;
            info!(
                donor_id = %donor_id,
                badge = %badge.name,
                donations = count,
                "Badge granted"
            );
            granted.push(badge);
        }

        Ok(granted)
    }
}
