//! # Domain Entities
//!
//! The batch record, its append-only history and the results handed back to
//! callers of the ledger.

use super::errors::ValidationError;
use super::value_objects::{BatchStatus, HistoryAction};
use sc_shared_types::{BatchId, PartyAddress, Timestamp, TxHash};
use serde::{Deserialize, Serialize};

/// One entry of a batch's custody history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    /// Party performing the action.
    pub handler: PartyAddress,
    /// Location at the time of the action.
    pub location: String,
    /// Event time.
    pub timestamp: Timestamp,
    /// What happened.
    pub action: HistoryAction,
}

/// Validated input for `Batch::create`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBatch {
    /// Free-text product label.
    pub product_name: String,
    /// Units in the batch, at least one.
    pub batch_size: u32,
    /// Origin location.
    pub location: String,
    /// Creating party.
    pub creator: PartyAddress,
}

impl NewBatch {
    /// Validate raw form input.
    pub fn validate(
        product_name: &str,
        batch_size: u32,
        location: &str,
        creator: &str,
    ) -> Result<Self, ValidationError> {
        let product_name = product_name.trim();
        if product_name.is_empty() {
            return Err(ValidationError::EmptyProductName);
        }
        if batch_size == 0 {
            return Err(ValidationError::ZeroBatchSize);
        }
        let location = location.trim();
        if location.is_empty() {
            return Err(ValidationError::EmptyLocation);
        }
        let creator = PartyAddress::parse(creator.trim())?;

        Ok(Self {
            product_name: product_name.to_string(),
            batch_size,
            location: location.to_string(),
            creator,
        })
    }
}

/// A tracked unit of product moving through custody stages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// Unique identifier.
    pub batch_id: BatchId,
    /// Free-text product label.
    pub product_name: String,
    /// Units in the batch.
    pub batch_size: u32,
    /// Location recorded at creation.
    pub location: String,
    /// Creating party. Never changes.
    pub manufacturer: PartyAddress,
    /// Party currently in custody.
    pub current_handler: PartyAddress,
    /// Lifecycle state.
    pub status: BatchStatus,
    /// Creation time.
    pub created_at: Timestamp,
    /// Append-only custody history.
    pub history: Vec<HistoryEvent>,
}

impl Batch {
    /// Register a new batch with its `CREATED` event.
    pub fn create(params: NewBatch, batch_id: BatchId, now: Timestamp) -> Self {
        let genesis = HistoryEvent {
            handler: params.creator.clone(),
            location: params.location.clone(),
            timestamp: now,
            action: HistoryAction::Created,
        };

        Self {
            batch_id,
            product_name: params.product_name,
            batch_size: params.batch_size,
            location: params.location,
            manufacturer: params.creator.clone(),
            current_handler: params.creator,
            status: BatchStatus::Created,
            created_at: now,
            history: vec![genesis],
        }
    }

    /// Check that custody can still move.
    pub fn ensure_transferable(&self) -> Result<(), ValidationError> {
        if self.status.is_terminal() {
            Err(ValidationError::AlreadyDelivered(self.batch_id.clone()))
        } else {
            Ok(())
        }
    }

    /// Hand custody to `next_handler`.
    pub fn transfer(
        &mut self,
        next_handler: PartyAddress,
        location: &str,
        now: Timestamp,
    ) -> Result<&HistoryEvent, ValidationError> {
        self.ensure_transferable()?;
        Ok(self.append(next_handler, location, now, HistoryAction::Transferred))
    }

    /// Record receipt by `party`. Allowed from any non-reserved state.
    pub fn confirm(&mut self, party: PartyAddress, location: &str, now: Timestamp) -> &HistoryEvent {
        self.append(party, location, now, HistoryAction::Confirmed)
    }

    /// Most recent history entry.
    pub fn last_event(&self) -> Option<&HistoryEvent> {
        self.history.last()
    }

    /// True if `address` created or currently holds the batch.
    pub fn involves(&self, address: &PartyAddress) -> bool {
        self.manufacturer == *address || self.current_handler == *address
    }

    fn append(
        &mut self,
        handler: PartyAddress,
        location: &str,
        now: Timestamp,
        action: HistoryAction,
    ) -> &HistoryEvent {
        self.current_handler = handler.clone();
        self.status = action.resulting_status();
        self.history.push(HistoryEvent {
            handler,
            location: location.trim().to_string(),
            timestamp: now,
            action,
        });
        // Non-empty: just pushed.
        &self.history[self.history.len() - 1]
    }
}

/// Ledger session established by `connect`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Connected wallet.
    pub signer: PartyAddress,
    /// Connection time.
    pub connected_at: Timestamp,
}

/// Receipt for a transfer or confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    /// Batch affected.
    pub batch_id: BatchId,
    /// Simulated transaction reference.
    pub tx_hash: TxHash,
    /// Action recorded.
    pub action: HistoryAction,
    /// Time the action was recorded.
    pub timestamp: Timestamp,
    /// Always true; failures are returned as errors.
    pub success: bool,
}

/// Result of `create_batch`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBatchResult {
    /// The stored batch.
    pub batch: Batch,
    /// Creation receipt.
    pub receipt: TxReceipt,
}

/// History entry as served to timeline views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// 1-based position in the history.
    pub id: u32,
    /// What happened.
    pub action: HistoryAction,
    /// Acting party.
    pub handler: PartyAddress,
    /// Location at the time.
    pub location: String,
    /// Event time.
    pub timestamp: Timestamp,
    /// Temperature reading in °C, when one was captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Relative humidity in percent, when one was captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f32>,
}

impl HistoryRecord {
    /// Number a ledger event for display.
    pub fn from_event(position: usize, event: &HistoryEvent) -> Self {
        Self {
            id: position as u32 + 1,
            action: event.action,
            handler: event.handler.clone(),
            location: event.location.clone(),
            timestamp: event.timestamp,
            temperature: None,
            humidity: None,
        }
    }
}

/// Timeline of a batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchHistory {
    /// Batch requested.
    pub batch_id: BatchId,
    /// Events in order. Empty for unknown ids.
    pub events: Vec<HistoryRecord>,
}

impl BatchHistory {
    /// Empty timeline for an unknown batch.
    pub fn empty(batch_id: BatchId) -> Self {
        Self {
            batch_id,
            events: Vec::new(),
        }
    }

    /// Timeline of a stored batch.
    pub fn of(batch: &Batch) -> Self {
        Self {
            batch_id: batch.batch_id.clone(),
            events: batch
                .history
                .iter()
                .enumerate()
                .map(|(i, event)| HistoryRecord::from_event(i, event))
                .collect(),
        }
    }

    /// Actions in order.
    pub fn actions(&self) -> Vec<HistoryAction> {
        self.events.iter().map(|e| e.action).collect()
    }
}

/// Batch counts for one party.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartySummary {
    /// Party summarized.
    pub address: PartyAddress,
    /// Batches created or held.
    pub total_batches: usize,
    /// Of those, not yet delivered.
    pub active_batches: usize,
}
