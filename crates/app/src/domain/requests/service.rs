//! Requests service.

use std::sync::Arc;

use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};
use voyage::requests::{ClientRequest, RequestDraft, RequestId, RequestStats, RequestStatus};

use crate::{
    domain::requests::{errors::RequestsServiceError, repository::StoreRequestsRepository},
    storage::DocumentStore,
};

#[derive(Debug)]
pub struct StoreRequestsService {
    repository: StoreRequestsRepository,
}

impl StoreRequestsService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: StoreRequestsRepository::new(store),
        }
    }
}

impl RequestsService for StoreRequestsService {
    fn list_requests(&self) -> Result<Vec<ClientRequest>, RequestsServiceError> {
        Ok(self.repository.list_requests()?)
    }

    fn save_request(&self, request: ClientRequest) -> Result<(), RequestsServiceError> {
        let id = request.id.clone();

        self.repository.prepend_request(request)?;

        info!(request = %id, "request saved");

        Ok(())
    }

    fn submit_request(&self, draft: RequestDraft) -> Result<ClientRequest, RequestsServiceError> {
        let request = draft.into_request(RequestId::new(), Timestamp::now())?;

        self.repository.prepend_request(request.clone())?;

        info!(
            request = %request.id,
            offer = ?request.offer_id.as_ref().map(ToString::to_string),
            "request submitted"
        );

        Ok(request)
    }

    fn update_request_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
    ) -> Result<(), RequestsServiceError> {
        let updated = self.repository.update_status(id, status)?;

        if updated {
            info!(request = %id, %status, "request status updated");
        } else {
            debug!(request = %id, "status update skipped, request not found");
        }

        Ok(())
    }

    fn delete_request(&self, id: &RequestId) -> Result<(), RequestsServiceError> {
        let removed = self.repository.delete_request(id)?;

        info!(request = %id, removed, "request deleted");

        Ok(())
    }

    fn request_stats(&self) -> Result<RequestStats, RequestsServiceError> {
        Ok(RequestStats::from_requests(&self.repository.list_requests()?))
    }
}

#[automock]
pub trait RequestsService: Send + Sync {
    /// Retrieves all requests, most recent first.
    fn list_requests(&self) -> Result<Vec<ClientRequest>, RequestsServiceError>;

    /// Stores a request at the front of the collection.
    fn save_request(&self, request: ClientRequest) -> Result<(), RequestsServiceError>;

    /// Validates a visitor's form and stores it as a `New` request.
    fn submit_request(&self, draft: RequestDraft) -> Result<ClientRequest, RequestsServiceError>;

    /// Changes the status of a request. Unknown ids are a no-op.
    fn update_request_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
    ) -> Result<(), RequestsServiceError>;

    /// Deletes a request. Unknown ids are a no-op.
    fn delete_request(&self, id: &RequestId) -> Result<(), RequestsServiceError>;

    /// Counts requests by status.
    fn request_stats(&self) -> Result<RequestStats, RequestsServiceError>;
}
