//! Blood request creation, listing, and fulfillment.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use bloodlink_core::error::AppError;
use bloodlink_database::repositories::blood_request::BloodRequestRepository;
use bloodlink_entity::request::model::{CreateBloodRequest, RequestFilter};
use bloodlink_entity::request::{BloodRequest, RequestStatus};

/// Handles the blood request lifecycle.
#[derive(Debug, Clone)]
pub struct RequestService {
    /// Blood request repository.
    request_repo: Arc<BloodRequestRepository>,
}

impl RequestService {
    /// Creates a new request service.
    pub fn new(request_repo: Arc<BloodRequestRepository>) -> Self {
        Self { request_repo }
    }

    /// Opens a new blood request; status defaults to pending, urgency to
    /// normal.
    pub async fn create(&self, data: CreateBloodRequest) -> Result<BloodRequest, AppError> {
        let request = self.request_repo.create(Uuid::new_v4(), &data).await?;
        info!(
            request_id = %request.id,
            blood_group = %request.blood_group,
            urgency = %request.urgency,
            "Blood request opened"
        );
        Ok(request)
    }

    /// Lists requests matching the filter, newest-created-first.
    pub async fn list(&self, filter: RequestFilter) -> Result<Vec<BloodRequest>, AppError> {
        self.request_repo.list(&filter).await
    }

    /// Updates a request's status, setting the fulfillment date together
    /// with it.
    ///
    /// The only legal transition is pending -> fulfilled; a fulfilled
    /// request is never reverted. Setting a pending request to pending is
    /// a no-op.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: RequestStatus,
        fulfilled_at: Option<NaiveDate>,
    ) -> Result<(), AppError> {
        let request = self
            .request_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))?;

        if !request.status.can_transition_to(status) {
            return Err(AppError::validation(format!(
                "Illegal status transition: {} -> {}",
                request.status, status
            )));
        }

        if status == RequestStatus::Fulfilled {
            let date = fulfilled_at.unwrap_or_else(|| Utc::now().date_naive());
            self.request_repo.fulfill(id, date).await?;
            info!(request_id = %id, fulfilled_at = %date, "Blood request fulfilled");
        }

        Ok(())
    }
}
