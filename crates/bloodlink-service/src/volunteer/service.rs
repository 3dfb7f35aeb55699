//! Volunteer registration and listing.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bloodlink_core::error::AppError;
use bloodlink_database::repositories::volunteer::VolunteerRepository;
use bloodlink_entity::volunteer::model::CreateVolunteer;
use bloodlink_entity::volunteer::{Volunteer, VolunteerStatus};

/// Handles volunteer registration and listing.
#[derive(Debug, Clone)]
pub struct VolunteerService {
    /// Volunteer repository.
    volunteer_repo: Arc<VolunteerRepository>,
}

impl VolunteerService {
    /// Creates a new volunteer service.
    pub fn new(volunteer_repo: Arc<VolunteerRepository>) -> Self {
        Self { volunteer_repo }
    }

    /// Registers a new volunteer; status defaults to active.
    pub async fn create(&self, data: CreateVolunteer) -> Result<Volunteer, AppError> {
        let volunteer = self
            .volunteer_repo
            .create(Uuid::new_v4(), &data, VolunteerStatus::Active)
            .await?;
        info!(volunteer_id = %volunteer.id, "Volunteer registered");
        Ok(volunteer)
    }

    /// Lists active volunteers.
    pub async fn list_active(&self) -> Result<Vec<Volunteer>, AppError> {
        self.volunteer_repo
            .list_by_status(VolunteerStatus::Active)
            .await
    }
}
