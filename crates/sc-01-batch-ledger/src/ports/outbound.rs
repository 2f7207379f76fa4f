//! # Outbound Ports
//!
//! Dependencies the ledger service needs: storage, time, identifiers and
//! event delivery.

use crate::domain::{Batch, LedgerError};
use crate::events::LedgerEvent;
use async_trait::async_trait;
use sc_shared_types::{BatchId, PartyAddress, Timestamp, TxHash};
use std::sync::atomic::{AtomicU64, Ordering};

/// Authoritative mapping from batch id to batch.
///
/// Production: `InMemoryBatchStore` (adapters/memory_store.rs)
pub trait BatchStore: Send + Sync {
    /// Insert or overwrite the entry for `batch.batch_id`.
    fn put(&self, batch: Batch);

    /// Insert only if the id is unused. Returns the batch back on collision.
    fn insert_new(&self, batch: Batch) -> Result<(), Box<Batch>>;

    /// Fetch a batch.
    ///
    /// # Errors
    /// - `NotFound`: no entry for `batch_id`
    fn get(&self, batch_id: &BatchId) -> Result<Batch, LedgerError>;

    /// Check if an id is taken.
    fn contains(&self, batch_id: &BatchId) -> bool;

    /// Batches where `address` is the manufacturer or the current handler.
    fn list_by_party(&self, address: &PartyAddress) -> Vec<Batch>;

    /// Every stored batch.
    fn all(&self) -> Vec<Batch>;

    /// Number of stored batches.
    fn len(&self) -> usize;

    /// True if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Time source for consistent timestamp handling.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Hand-driven clock for tests and scripted runs.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    now: AtomicU64,
}

impl ManualTimeSource {
    /// Start the clock at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }

    /// Jump to an absolute time.
    pub fn set(&self, now: Timestamp) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}

/// Source of batch ids and transaction references.
pub trait IdGenerator: Send + Sync {
    /// Draw a candidate batch id. Uniqueness is checked by the caller.
    fn batch_id(&self, now: Timestamp) -> BatchId;

    /// Draw a simulated transaction reference.
    fn tx_hash(&self) -> TxHash;
}

/// Delivery of ledger events - outbound port.
#[async_trait]
pub trait LedgerEventPublisher: Send + Sync {
    /// Publish an event.
    ///
    /// # Returns
    ///
    /// The number of active subscribers that received the event.
    async fn publish(&self, event: LedgerEvent) -> usize;

    /// Get the total number of events published.
    fn events_published(&self) -> u64;
}

/// Publisher that drops every event.
#[derive(Debug, Default)]
pub struct NoOpEventPublisher {
    published: AtomicU64,
}

#[async_trait]
impl LedgerEventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: LedgerEvent) -> usize {
        self.published.fetch_add(1, Ordering::Relaxed);
        0
    }

    fn events_published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualTimeSource::new(1_000);
        clock.advance(500);
        assert_eq!(clock.now(), 1_500);
        clock.set(10);
        assert_eq!(clock.now(), 10);
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemTimeSource.now() > 1_577_836_800_000);
    }
}
