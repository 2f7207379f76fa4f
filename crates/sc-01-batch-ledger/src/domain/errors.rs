//! # Domain Errors
//!
//! Error types for the batch ledger. Every failed operation leaves the store
//! unchanged, so all of these are safe to surface to the caller and retry.

use sc_shared_types::{AddressError, BatchId};
use thiserror::Error;

/// Malformed input to a ledger operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Product name missing or blank.
    #[error("Product name must not be empty")]
    EmptyProductName,

    /// Batch size must be at least one unit.
    #[error("Batch size must be at least 1")]
    ZeroBatchSize,

    /// Location missing or blank.
    #[error("Location must not be empty")]
    EmptyLocation,

    /// Party identifier is not a `0x` + 40 hex digit address.
    #[error("Invalid address: {0:?}")]
    MalformedAddress(String),

    /// Custody cannot move once the batch has been delivered.
    #[error("Batch {0} has already been delivered")]
    AlreadyDelivered(BatchId),
}

impl From<AddressError> for ValidationError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::Malformed(input) => ValidationError::MalformedAddress(input),
        }
    }
}

/// Ledger error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Input failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No batch with this id.
    #[error("Batch not found: {0}")]
    NotFound(BatchId),

    /// A transition was attempted before `connect`.
    #[error("Ledger not initialized: connect a session first")]
    NotInitialized,

    /// Every generated batch id collided with an existing one.
    #[error("Could not allocate a unique batch id after {attempts} attempts")]
    IdExhausted {
        /// Attempts made
        attempts: u32,
    },

    /// Configuration rejected by `LedgerConfig::validate`.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<AddressError> for LedgerError {
    fn from(err: AddressError) -> Self {
        LedgerError::Validation(err.into())
    }
}
