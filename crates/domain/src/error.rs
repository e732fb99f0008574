//! Domain error types.

use common::OrderId;
use thiserror::Error;

use crate::order::ValidationError;
use crate::store::StoreError;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The intake failed a field check.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No order with this ID exists.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The requested status is not one of the recognised ones.
    #[error("Invalid status: {0:?}")]
    InvalidStatus(String),

    /// Unexpected inconsistency inside the core.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        DomainError::Internal(e.to_string())
    }
}
