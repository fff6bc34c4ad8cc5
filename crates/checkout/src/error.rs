//! Checkout error types.

use domain::ValidationError;
use thiserror::Error;

/// Failure of a remote call, as reported by a collaborator.
///
/// Covers both network-level failures and non-success responses; the
/// concrete HTTP client behind the seam decides which variant applies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never completed (connection refused, timeout, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16 },
}

/// Errors that can occur while driving the invoice screen.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The order payload failed local validation; nothing was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A remote call failed; prior screen state is left unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
