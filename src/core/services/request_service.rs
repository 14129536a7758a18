use tracing::{debug, info};

use crate::core::errors::{Result, ShiftSwapError};
use crate::core::models::swap_request::{
    Decision, NewRequest, RequestDocument, RequestStatus, SwapRequest,
};
use crate::core::services::request_validator;
use crate::core::traits::request_store::RequestStore;
use crate::core::traits::sources::{Clock, IdGenerator};

/// Creates swap requests and moves them between states.
///
/// Every operation loads the whole document from the store, changes it in
/// memory and saves it back. Nothing here touches the file system directly.
pub struct RequestService<S: RequestStore, C: Clock, G: IdGenerator> {
    store: S,
    clock: C,
    ids: G,
}

impl<S: RequestStore, C: Clock, G: IdGenerator> RequestService<S, C, G> {
    pub fn new(store: S, clock: C, ids: G) -> Self {
        Self { store, clock, ids }
    }

    /// Validate and persist a new request in the `PENDING` state.
    ///
    /// The record is inserted at the front so the document stays
    /// newest-first.
    pub fn create_request(&self, input: NewRequest) -> Result<SwapRequest> {
        request_validator::validate(&input)?;

        let mut document = self.store.load()?;
        let now = self.clock.now();

        let record = SwapRequest {
            id: self.fresh_id(&document),
            from: input.from,
            to: input.to,
            with: input.with,
            reason: input.reason,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        document.requests.insert(0, record.clone());
        self.store.save(&document)?;

        info!(id = %record.id, "swap request created");
        Ok(record)
    }

    /// All requests, newest first.
    pub fn list_requests(&self) -> Result<Vec<SwapRequest>> {
        Ok(self.store.load()?.requests)
    }

    /// Set the status of an existing request and refresh `updatedAt`.
    ///
    /// Re-applying a status, or leaving `APPROVED`/`DENIED`, is allowed.
    pub fn set_status(&self, id: &str, decision: Decision) -> Result<SwapRequest> {
        let mut document = self.store.load()?;
        let now = self.clock.now();

        let record = document
            .find_mut(id)
            .ok_or_else(|| ShiftSwapError::NotFound { id: id.to_string() })?;

        let previous = record.status;
        record.status = decision.status();
        // A clock that steps backwards must not move updatedAt backwards.
        record.updated_at = now.max(record.updated_at);
        let updated = record.clone();

        self.store.save(&document)?;

        info!(id = %updated.id, from = %previous, to = %updated.status, "swap request status changed");
        Ok(updated)
    }

    /// Draw ids until one is not already in the document.
    fn fresh_id(&self, document: &RequestDocument) -> String {
        loop {
            let id = self.ids.next_id();
            if !document.contains_id(&id) {
                return id;
            }
            debug!(%id, "generated id already in use, drawing another");
        }
    }
}
