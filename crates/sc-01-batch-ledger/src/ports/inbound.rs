//! # Inbound Ports
//!
//! What the batch ledger offers to the role dashboards and tools.

use crate::domain::{
    Batch, BatchHistory, CreateBatchResult, LedgerError, PartySummary, Session, TxReceipt,
};
use async_trait::async_trait;
use sc_shared_types::BatchId;

/// State-changing ledger operations - inbound port.
///
/// Party identifiers arrive as text from forms and scanners; malformed ones
/// are rejected with `ValidationError::MalformedAddress`.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Establish the session transitions run under.
    async fn connect(&self, signer: &str) -> Result<Session, LedgerError>;

    /// Drop the session.
    fn disconnect(&self);

    /// Current session, if connected.
    fn session(&self) -> Option<Session>;

    /// Register a new batch.
    ///
    /// # Errors
    /// - `NotInitialized`: no session
    /// - `Validation`: blank name or location, zero size, malformed creator
    async fn create_batch(
        &self,
        product_name: &str,
        batch_size: u32,
        location: &str,
        creator: &str,
    ) -> Result<CreateBatchResult, LedgerError>;

    /// Hand custody of a batch to `next_handler`.
    ///
    /// # Errors
    /// - `NotInitialized`: no session
    /// - `NotFound`: unknown batch
    /// - `Validation`: malformed address, or batch already delivered
    async fn transfer_batch(
        &self,
        batch_id: &BatchId,
        next_handler: &str,
        location: &str,
    ) -> Result<TxReceipt, LedgerError>;

    /// Confirm receipt of a batch by `confirming_party`.
    ///
    /// # Errors
    /// - `NotInitialized`: no session
    /// - `NotFound`: unknown batch
    /// - `Validation`: malformed address
    async fn confirm_receipt(
        &self,
        batch_id: &BatchId,
        location: &str,
        confirming_party: &str,
    ) -> Result<TxReceipt, LedgerError>;
}

/// Read-only lookups - inbound port.
#[async_trait]
pub trait QueryApi: Send + Sync {
    /// Stored batch, or the canned demo batch for unknown ids containing `DEMO`.
    async fn get_batch(&self, batch_id: &BatchId) -> Result<Batch, LedgerError>;

    /// Timeline of a batch. Unknown non-demo ids yield an empty timeline.
    async fn get_history(&self, batch_id: &BatchId) -> BatchHistory;

    /// Batches created or currently held by `address`.
    async fn list_by_party(&self, address: &str) -> Result<Vec<Batch>, LedgerError>;

    /// Batch counts for `address`.
    async fn summary_for(&self, address: &str) -> Result<PartySummary, LedgerError>;
}
