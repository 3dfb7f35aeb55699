//! Donation recording — the one multi-step write path in the system.

use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use bloodlink_core::error::{AppError, ErrorKind};
use bloodlink_database::repositories::donation::DonationRepository;
use bloodlink_database::repositories::donor::DonorRepository;
use bloodlink_entity::badge::Badge;
use bloodlink_entity::donation::model::CreateDonation;
use bloodlink_entity::donation::Donation;

use super::awarder::BadgeAwarder;

/// Handles donation recording with its side effects.
#[derive(Debug, Clone)]
pub struct DonationService {
    /// Connection pool, owned for transaction control.
    pool: SqlitePool,
    /// Donor repository.
    donor_repo: Arc<DonorRepository>,
    /// Donation history repository.
    donation_repo: Arc<DonationRepository>,
    /// Badge awarder.
    awarder: BadgeAwarder,
}

/// Result of recording a donation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationOutcome {
    /// The inserted donation row.
    pub donation: Donation,
    /// Badges newly granted by this donation.
    pub badges_granted: Vec<Badge>,
}

impl DonationService {
    /// Creates a new donation service.
    pub fn new(
        pool: SqlitePool,
        donor_repo: Arc<DonorRepository>,
        donation_repo: Arc<DonationRepository>,
        awarder: BadgeAwarder,
    ) -> Self {
        Self {
            pool,
            donor_repo,
            donation_repo,
            awarder,
        }
    }

    /// Records a donation.
    ///
    /// Inserts the history row, overwrites the donor's last-donation date
    /// (last write wins, no ordering check), and runs the badge awarder.
    /// All three steps commit or roll back together.
    pub async fn record(&self, data: CreateDonation) -> Result<DonationOutcome, AppError> {
        let donor = self
            .donor_repo
            .find_by_id(data.donor_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Donor {} not found", data.donor_id)))?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let donation = self
            .donation_repo
            .insert(&mut tx, Uuid::new_v4(), &data)
            .await?;

        self.donor_repo
            .set_last_donation(&mut tx, donor.id, data.donation_date)
            .await?;

        let badges_granted = self.awarder.run(&mut tx, donor.id).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit donation", e)
        })?;

        info!(
            donation_id = %donation.id,
            donor_id = %donor.id,
            badges = badges_granted.len(),
            "Donation recorded"
        );

        Ok(DonationOutcome {
            donation,
            badges_granted,
        })
    }
}
