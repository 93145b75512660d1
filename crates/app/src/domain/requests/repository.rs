//! Requests Repository

use std::sync::Arc;

use voyage::requests::{ClientRequest, RequestId, RequestStatus};

use crate::storage::{Collection, DocumentStore, REQUESTS_KEY, StorageError};

#[derive(Debug)]
pub(crate) struct StoreRequestsRepository {
    requests: Collection<ClientRequest>,
}

impl StoreRequestsRepository {
    pub(crate) fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            requests: Collection::new(store, REQUESTS_KEY),
        }
    }

    pub(crate) fn list_requests(&self) -> Result<Vec<ClientRequest>, StorageError> {
        self.requests.load()
    }

    /// New requests go first; the collection is kept most-recent-first.
    pub(crate) fn prepend_request(&self, request: ClientRequest) -> Result<(), StorageError> {
        self.requests.modify(|requests| requests.insert(0, request))
    }

    pub(crate) fn update_status(
        &self,
        id: &RequestId,
        status: RequestStatus,
    ) -> Result<bool, StorageError> {
        self.requests.modify(|requests| {
            requests
                .iter_mut()
                .find(|r| &r.id == id)
                .map(|request| request.status = status)
                .is_some()
        })
    }

    pub(crate) fn delete_request(&self, id: &RequestId) -> Result<bool, StorageError> {
        self.requests.modify(|requests| {
            let before = requests.len();

            requests.retain(|r| &r.id != id);

            requests.len() != before
        })
    }
}
