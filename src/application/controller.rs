use std::sync::Arc;

use super::store::{Action, ConsoleState, Store};
use super::transport::BfhlTransport;
use crate::domain::{Projection, RequestPayload, ResponseObject, ServerStatus, SubmitError};

/// Drives the console: health check, submission and projection.
///
/// Every step is expressed as an [`Action`] on the shared [`Store`], so any
/// view subscribed to the store sees each transition.
pub struct Controller<T> {
    transport: Arc<T>,
    store: Arc<Store>,
}

impl<T> Clone for Controller<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            store: self.store.clone(),
        }
    }
}

impl<T: BfhlTransport> Controller<T> {
    pub fn new(transport: T) -> Self {
        Self::with_store(transport, Arc::new(Store::new()))
    }

    pub fn with_store(transport: T, store: Arc<Store>) -> Self {
        Self {
            transport: Arc::new(transport),
            store,
        }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn snapshot(&self) -> ConsoleState {
        self.store.snapshot()
    }

    /// Single health check against the service root. Never retried.
    pub async fn check_status(&self) -> ServerStatus {
        self.store.dispatch(Action::HealthCheckStarted);
        let result = self.transport.health().await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "Server status check failed");
        }
        let status = ServerStatus::from(result.clone());
        self.store.dispatch(Action::HealthCheckFinished(result));
        status
    }

    /// Validate `input` and post it to the service.
    ///
    /// The previous outcome is cleared before anything else happens. Input
    /// that is not JSON, or has no array-valued `data`, fails without a
    /// network call. The returned result belongs to this submission even if a
    /// newer one has since replaced it in the store.
    pub async fn submit(&self, input: &str) -> Result<ResponseObject, SubmitError> {
        let seq = self.store.begin_submission();

        let result = match RequestPayload::parse(input) {
            Ok(payload) => self.dispatch_payload(&payload).await,
            Err(err) => Err(err),
        };

        self.store.dispatch(Action::SubmitFinished {
            seq,
            result: result.clone(),
        });
        result
    }

    /// Post an already validated payload
    pub async fn submit_payload(
        &self,
        payload: &RequestPayload,
    ) -> Result<ResponseObject, SubmitError> {
        let seq = self.store.begin_submission();
        let result = self.dispatch_payload(payload).await;
        self.store.dispatch(Action::SubmitFinished {
            seq,
            result: result.clone(),
        });
        result
    }

    /// Submit whatever input text the store currently holds
    pub async fn submit_current_input(&self) -> Result<ResponseObject, SubmitError> {
        let input = self.store.snapshot().input;
        self.submit(&input).await
    }

    pub fn dispatch(&self, action: Action) -> bool {
        self.store.dispatch(action)
    }

    /// Current response reduced to the current selection
    pub fn projection(&self) -> Option<Projection> {
        self.store.snapshot().projection()
    }

    async fn dispatch_payload(
        &self,
        payload: &RequestPayload,
    ) -> Result<ResponseObject, SubmitError> {
        tracing::info!(items = payload.data().len(), "Sending request to server");
        match self.transport.submit(payload).await {
            Ok(response) => {
                tracing::info!(fields = response.len(), "Received response from server");
                Ok(response)
            }
            Err(err) => {
                let err = SubmitError::from(err);
                tracing::error!(error = %err, "API error");
                Err(err)
            }
        }
    }
}
