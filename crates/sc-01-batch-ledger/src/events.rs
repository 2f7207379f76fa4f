//! # Ledger Events
//!
//! Notifications published after every successful transition, so views can
//! refresh without polling.

use crate::domain::{HistoryAction, HistoryEvent};
use sc_shared_types::{BatchId, PartyAddress, Timestamp, TxHash};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload shared by every ledger event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRecord {
    /// Correlates the event with the call that produced it.
    pub correlation_id: Uuid,
    /// Batch affected.
    pub batch_id: BatchId,
    /// Acting party.
    pub handler: PartyAddress,
    /// Location recorded.
    pub location: String,
    /// Event time.
    pub timestamp: Timestamp,
    /// Simulated transaction reference.
    pub tx_hash: TxHash,
}

impl TransitionRecord {
    /// Build from the history entry the transition appended.
    pub fn new(batch_id: BatchId, event: &HistoryEvent, tx_hash: TxHash) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            batch_id,
            handler: event.handler.clone(),
            location: event.location.clone(),
            timestamp: event.timestamp,
            tx_hash,
        }
    }
}

/// Event emitted by the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum LedgerEvent {
    /// A batch was registered.
    BatchCreated(TransitionRecord),
    /// Custody moved to a new handler.
    BatchTransferred(TransitionRecord),
    /// Receipt was confirmed.
    ReceiptConfirmed(TransitionRecord),
}

impl LedgerEvent {
    /// Wrap a record according to the action it describes.
    pub fn from_action(action: HistoryAction, record: TransitionRecord) -> Self {
        match action {
            HistoryAction::Created => Self::BatchCreated(record),
            HistoryAction::Transferred => Self::BatchTransferred(record),
            HistoryAction::Confirmed => Self::ReceiptConfirmed(record),
        }
    }

    /// Shared payload.
    pub fn record(&self) -> &TransitionRecord {
        match self {
            Self::BatchCreated(r) | Self::BatchTransferred(r) | Self::ReceiptConfirmed(r) => r,
        }
    }

    /// Action this event reports.
    pub fn action(&self) -> HistoryAction {
        match self {
            Self::BatchCreated(_) => HistoryAction::Created,
            Self::BatchTransferred(_) => HistoryAction::Transferred,
            Self::ReceiptConfirmed(_) => HistoryAction::Confirmed,
        }
    }

    /// Topic name used in logs.
    pub fn topic(&self) -> &'static str {
        match self {
            Self::BatchCreated(_) => "batch.created",
            Self::BatchTransferred(_) => "batch.transferred",
            Self::ReceiptConfirmed(_) => "batch.confirmed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TransitionRecord {
        let event = HistoryEvent {
            handler: PartyAddress::parse("0x1234567890123456789012345678901234567890").unwrap(),
            location: "Miami, FL".into(),
            timestamp: 42,
            action: HistoryAction::Transferred,
        };
        TransitionRecord::new(BatchId::from("B-9"), &event, TxHash::from_bytes(&[1, 2]))
    }

    #[test]
    fn test_from_action_roundtrip() {
        for action in [
            HistoryAction::Created,
            HistoryAction::Transferred,
            HistoryAction::Confirmed,
        ] {
            assert_eq!(LedgerEvent::from_action(action, record()).action(), action);
        }
    }

    #[test]
    fn test_topic_names() {
        let event = LedgerEvent::BatchTransferred(record());
        assert_eq!(event.topic(), "batch.transferred");
        assert_eq!(event.record().batch_id.as_str(), "B-9");
    }

    #[test]
    fn test_event_json_is_tagged() {
        let json = serde_json::to_value(LedgerEvent::ReceiptConfirmed(record())).unwrap();
        assert_eq!(json["type"], "ReceiptConfirmed");
        assert_eq!(json["payload"]["location"], "Miami, FL");
    }
}
