//! Donor registration and directory searches.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bloodlink_core::error::AppError;
use bloodlink_database::repositories::donor::DonorRepository;
use bloodlink_entity::donor::model::{CreateDonor, DonorFilter};
use bloodlink_entity::donor::Donor;

/// Handles donor registration and directory queries.
#[derive(Debug, Clone)]
pub struct DonorService {
    /// Donor repository.
    donor_repo: Arc<DonorRepository>,
}

impl DonorService {
    /// Creates a new donor service.
    pub fn new(donor_repo: Arc<DonorRepository>) -> Self {
        Self { donor_repo }
    }

    /// Registers a new donor with a fresh identifier.
    ///
    /// `village` defaults to an empty string and `last_donation` starts
    /// null.
    pub async fn create(&self, data: CreateDonor) -> Result<Donor, AppError> {
        let donor = self.donor_repo.create(Uuid::new_v4(), &data).await?;
        info!(donor_id = %donor.id, blood_group = %donor.blood_group, "Donor registered");
        Ok(donor)
    }

    /// Lists donors matching the given filter.
    ///
    /// Blood group is an exact match; district and upazila are
    /// case-insensitive substring matches; filters compose with AND.
    pub async fn list(&self, filter: DonorFilter) -> Result<Vec<Donor>, AppError> {
        self.donor_repo.list(&filter).await
    }
}
