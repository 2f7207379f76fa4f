//! # Domain Value Objects
//!
//! Batch status machine and history actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Batch lifecycle state.
///
/// ```text
/// CREATED --transfer--> IN_TRANSIT --transfer--> IN_TRANSIT
/// IN_TRANSIT --confirm--> DELIVERED
/// CREATED --confirm--> DELIVERED
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    /// Registered by the manufacturer, not yet moved.
    #[default]
    Created,
    /// Custody handed to at least one downstream party.
    InTransit,
    /// Receipt confirmed. Terminal.
    Delivered,
    /// Reserved by the dashboards; never assigned by the ledger.
    Verified,
}

impl BatchStatus {
    /// Position along the custody chain. `Verified` has no position.
    fn rank(&self) -> Option<u8> {
        match self {
            Self::Created => Some(0),
            Self::InTransit => Some(1),
            Self::Delivered => Some(2),
            Self::Verified => None,
        }
    }

    /// Check if transition is valid.
    ///
    /// Moves are monotonic. Staying in `IN_TRANSIT` (another hop) and in
    /// `DELIVERED` (a repeated confirmation) are both allowed.
    pub fn can_transition_to(&self, next: BatchStatus) -> bool {
        match (self.rank(), next.rank()) {
            (Some(from), Some(to)) => to >= from && to > 0,
            _ => false,
        }
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Still moving through the chain.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Created | Self::InTransit)
    }

    /// Wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::InTransit => "IN_TRANSIT",
            Self::Delivered => "DELIVERED",
            Self::Verified => "VERIFIED",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action recorded by a history event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
    /// Batch registered.
    Created,
    /// Custody handed over.
    Transferred,
    /// Receipt confirmed.
    Confirmed,
}

impl HistoryAction {
    /// Status a batch is left in after this action.
    pub fn resulting_status(&self) -> BatchStatus {
        match self {
            Self::Created => BatchStatus::Created,
            Self::Transferred => BatchStatus::InTransit,
            Self::Confirmed => BatchStatus::Delivered,
        }
    }

    /// Wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Transferred => "TRANSFERRED",
            Self::Confirmed => "CONFIRMED",
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_created_to_in_transit() {
        assert!(BatchStatus::Created.can_transition_to(BatchStatus::InTransit));
    }

    #[test]
    fn test_status_repeat_transfer() {
        assert!(BatchStatus::InTransit.can_transition_to(BatchStatus::InTransit));
    }

    #[test]
    fn test_status_confirm_from_created_allowed() {
        assert!(BatchStatus::Created.can_transition_to(BatchStatus::Delivered));
    }

    #[test]
    fn test_status_no_reverse() {
        assert!(!BatchStatus::Delivered.can_transition_to(BatchStatus::InTransit));
        assert!(!BatchStatus::InTransit.can_transition_to(BatchStatus::Created));
        assert!(!BatchStatus::Created.can_transition_to(BatchStatus::Created));
    }

    #[test]
    fn test_status_verified_never_reachable() {
        assert!(!BatchStatus::Delivered.can_transition_to(BatchStatus::Verified));
        assert!(!BatchStatus::Verified.can_transition_to(BatchStatus::Delivered));
    }

    #[test]
    fn test_status_terminal() {
        assert!(BatchStatus::Delivered.is_terminal());
        assert!(!BatchStatus::InTransit.is_terminal());
        assert!(BatchStatus::InTransit.is_active());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&BatchStatus::InTransit).unwrap();
        assert_eq!(json, "\"IN_TRANSIT\"");
        assert_eq!(BatchStatus::InTransit.to_string(), "IN_TRANSIT");
    }

    #[test]
    fn test_action_resulting_status() {
        assert_eq!(
            HistoryAction::Transferred.resulting_status(),
            BatchStatus::InTransit
        );
        assert_eq!(
            HistoryAction::Confirmed.resulting_status(),
            BatchStatus::Delivered
        );
    }
}
