//! Error types for integrity evaluation and anomaly reporting.

use thiserror::Error;

/// Integrity error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// A required field was missing or blank.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Thresholds out of order or out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
