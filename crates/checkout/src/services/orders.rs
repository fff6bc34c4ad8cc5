//! Order gateway trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use domain::OrderPayload;

use crate::error::TransportError;

/// Trait for submitting a finalized invoice to the remote API.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Persists the order remotely.
    ///
    /// Fails with [`TransportError`] on network failure or a
    /// non-success response; callers must keep the cart intact so the
    /// user can retry without re-entering items.
    async fn submit_order(&self, payload: &OrderPayload) -> Result<(), TransportError>;
}

#[derive(Debug, Default)]
struct InMemoryOrderState {
    submitted: Vec<OrderPayload>,
    fail_on_submit: bool,
}

/// In-memory order gateway for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderGateway {
    state: Arc<RwLock<InMemoryOrderState>>,
}

impl InMemoryOrderGateway {
    /// Creates a new in-memory gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the gateway to fail on subsequent submissions.
    pub fn set_fail_on_submit(&self, fail: bool) {
        self.state.write().unwrap().fail_on_submit = fail;
    }

    /// Returns the number of successfully submitted orders.
    pub fn submission_count(&self) -> usize {
        self.state.read().unwrap().submitted.len()
    }

    /// Returns the most recently submitted payload, if any.
    pub fn last_submitted(&self) -> Option<OrderPayload> {
        self.state.read().unwrap().submitted.last().cloned()
    }

    /// Returns all submitted payloads in order.
    pub fn submitted(&self) -> Vec<OrderPayload> {
        self.state.read().unwrap().submitted.clone()
    }
}

#[async_trait]
impl OrderGateway for InMemoryOrderGateway {
    async fn submit_order(&self, payload: &OrderPayload) -> Result<(), TransportError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_submit {
            return Err(TransportError::Status { status: 500 });
        }

        state.submitted.push(payload.clone());
        Ok(())
    }
}
