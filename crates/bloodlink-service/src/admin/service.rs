//! Admin operations — user management, volunteer approval, system stats.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use bloodlink_core::error::AppError;
use bloodlink_database::repositories::blood_request::BloodRequestRepository;
use bloodlink_database::repositories::donation::DonationRepository;
use bloodlink_database::repositories::donor::DonorRepository;
use bloodlink_database::repositories::user::UserRepository;
use bloodlink_database::repositories::volunteer::VolunteerRepository;
use bloodlink_entity::request::RequestStatus;
use bloodlink_entity::user::{User, UserRole};
use bloodlink_entity::volunteer::{Volunteer, VolunteerStatus};

use crate::context::RequestContext;

/// System-wide counters shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    /// Registered accounts.
    pub total_users: i64,
    /// Registered donors.
    pub total_donors: i64,
    /// Registered volunteers.
    pub total_volunteers: i64,
    /// All blood requests.
    pub total_requests: i64,
    /// Requests still pending.
    pub pending_requests: i64,
    /// Requests fulfilled.
    pub fulfilled_requests: i64,
    /// Recorded donations.
    pub total_donations: i64,
}

/// Handles administrative operations.
///
/// Callers are expected to have passed the RBAC check before dispatch;
/// the context is taken for audit logging.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Donor repository.
    donor_repo: Arc<DonorRepository>,
    /// Volunteer repository.
    volunteer_repo: Arc<VolunteerRepository>,
    /// Blood request repository.
    request_repo: Arc<BloodRequestRepository>,
    /// Donation history repository.
    donation_repo: Arc<DonationRepository>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        donor_repo: Arc<DonorRepository>,
        volunteer_repo: Arc<VolunteerRepository>,
        request_repo: Arc<BloodRequestRepository>,
        donation_repo: Arc<DonationRepository>,
    ) -> Self {
        Self {
            user_repo,
            donor_repo,
            volunteer_repo,
            request_repo,
            donation_repo,
        }
    }

    /// Lists all user accounts, newest first.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.find_all().await
    }

    /// Computes system-wide counters.
    pub async fn stats(&self) -> Result<AdminStats, AppError> {
        Ok(AdminStats {
            total_users: self.user_repo.count().await?,
            total_donors: self.donor_repo.count().await?,
            total_volunteers: self.volunteer_repo.count().await?,
            total_requests: self.request_repo.count().await?,
            pending_requests: self
                .request_repo
                .count_by_status(RequestStatus::Pending)
                .await?,
            fulfilled_requests: self
                .request_repo
                .count_by_status(RequestStatus::Fulfilled)
                .await?,
            total_donations: self.donation_repo.count().await?,
        })
    }

    /// Lists volunteers awaiting approval.
    pub async fn pending_volunteers(&self) -> Result<Vec<Volunteer>, AppError> {
        self.volunteer_repo
            .list_by_status(VolunteerStatus::Pending)
            .await
    }

    /// Changes a user's role.
    pub async fn update_role(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<User, AppError> {
        let user = self.user_repo.update_role(user_id, role).await?;
        info!(admin = %ctx.user_id, user_id = %user_id, role = %role, "Role updated");
        Ok(user)
    }

    /// Approves a pending volunteer. Approving an already-active
    /// volunteer is a no-op.
    pub async fn approve_volunteer(
        &self,
        ctx: &RequestContext,
        volunteer_id: Uuid,
    ) -> Result<Volunteer, AppError> {
        let volunteer = self
            .volunteer_repo
            .update_status(volunteer_id, VolunteerStatus::Active)
            .await?;
        info!(admin = %ctx.user_id, volunteer_id = %volunteer_id, "Volunteer approved");
        Ok(volunteer)
    }

    /// Deletes a user account.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        if ctx.user_id == user_id {
            return Err(AppError::validation("Cannot delete your own account"));
        }
        let deleted = self.user_repo.delete(user_id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        info!(admin = %ctx.user_id, user_id = %user_id, "User deleted");
        Ok(())
    }
}
