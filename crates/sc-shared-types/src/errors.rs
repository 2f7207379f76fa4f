//! # Error Types
//!
//! Errors raised while parsing shared primitives.

use thiserror::Error;

/// Party address parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Input is not `0x` followed by exactly 40 hex digits.
    #[error("Malformed address: {0:?}")]
    Malformed(String),
}
