//! Profile aggregation — one user with their donor record, donation
//! history, and earned badges.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bloodlink_core::error::AppError;
use bloodlink_database::repositories::badge::BadgeRepository;
use bloodlink_database::repositories::donation::DonationRepository;
use bloodlink_database::repositories::donor::DonorRepository;
use bloodlink_database::repositories::user::UserRepository;
use bloodlink_entity::badge::Badge;
use bloodlink_entity::donation::Donation;
use bloodlink_entity::donor::Donor;
use bloodlink_entity::user::User;

/// Each donated unit is counted as helping three recipients.
const LIVES_SAVED_PER_DONATION: i64 = 3;

/// Aggregated profile for a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    /// The account.
    pub user: User,
    /// The donor record linked by email, when one exists.
    pub donor: Option<Donor>,
    /// The donor's donation history, most recent first.
    pub donations: Vec<Donation>,
    /// Badges the donor has earned.
    pub badges: Vec<Badge>,
    /// Derived statistics.
    pub stats: ProfileStats,
}

/// Derived statistics shown on a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    /// Total recorded donations.
    pub donation_count: i64,
    /// Estimated lives saved (donation count x 3).
    pub lives_saved: i64,
}

/// Builds the aggregated profile read-model.
#[derive(Debug, Clone)]
pub struct ProfileService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Donor repository.
    donor_repo: Arc<DonorRepository>,
    /// Donation history repository.
    donation_repo: Arc<DonationRepository>,
    /// Badge repository.
    badge_repo: Arc<BadgeRepository>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        donor_repo: Arc<DonorRepository>,
        donation_repo: Arc<DonationRepository>,
        badge_repo: Arc<BadgeRepository>,
    ) -> Self {
        Self {
            user_repo,
            donor_repo,
            donation_repo,
            badge_repo,
        }
    }

    /// Aggregates the profile for the given user.
    ///
    /// The donor record is matched by email (soft reference). A user with
    /// no donor record gets an empty history and zeroed stats.
    pub async fn get(&self, user_id: Uuid) -> Result<ProfileView, AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        let donor = self.donor_repo.find_by_email(&user.email).await?;

        let (donations, badges) = match &donor {
            Some(d) => (
                self.donation_repo.list_for_donor(d.id).await?,
                self.badge_repo.earned_by_donor(d.id).await?,
            ),
            None => (Vec::new(), Vec::new()),
        };

        let donation_count = donations.len() as i64;
        let stats = ProfileStats {
            donation_count,
            lives_saved: donation_count * LIVES_SAVED_PER_DONATION,
        };

        Ok(ProfileView {
            user,
            donor,
            donations,
            badges,
            stats,
        })
    }
}
