//! In-Memory Batch Store Adapter
//!
//! Implements `BatchStore` over a `HashMap` behind a `parking_lot::RwLock`.
//! State lives for the lifetime of the process.

use crate::domain::{Batch, LedgerError};
use crate::ports::outbound::BatchStore;
use parking_lot::RwLock;
use sc_shared_types::{BatchId, PartyAddress};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Volatile batch store.
#[derive(Default)]
pub struct InMemoryBatchStore {
    batches: RwLock<HashMap<BatchId, Batch>>,
}

impl InMemoryBatchStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted by creation time, then id, so listings are stable.
    fn sorted(mut batches: Vec<Batch>) -> Vec<Batch> {
        batches.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.batch_id.cmp(&b.batch_id))
        });
        batches
    }
}

impl BatchStore for InMemoryBatchStore {
    fn put(&self, batch: Batch) {
        debug!(batch_id = %batch.batch_id, "[sc-01] put batch");
        self.batches.write().insert(batch.batch_id.clone(), batch);
    }

    fn insert_new(&self, batch: Batch) -> Result<(), Box<Batch>> {
        match self.batches.write().entry(batch.batch_id.clone()) {
            Entry::Occupied(_) => Err(Box::new(batch)),
            Entry::Vacant(slot) => {
                slot.insert(batch);
                Ok(())
            }
        }
    }

    fn get(&self, batch_id: &BatchId) -> Result<Batch, LedgerError> {
        self.batches
            .read()
            .get(batch_id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(batch_id.clone()))
    }

    fn contains(&self, batch_id: &BatchId) -> bool {
        self.batches.read().contains_key(batch_id)
    }

    fn list_by_party(&self, address: &PartyAddress) -> Vec<Batch> {
        let matching = self
            .batches
            .read()
            .values()
            .filter(|b| b.involves(address))
            .cloned()
            .collect();
        Self::sorted(matching)
    }

    fn all(&self) -> Vec<Batch> {
        Self::sorted(self.batches.read().values().cloned().collect())
    }

    fn len(&self) -> usize {
        self.batches.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewBatch;

    const MAKER: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0";
    const OTHER: &str = "0x1234567890123456789012345678901234567890";

    fn batch(id: &str, creator: &str, at: u64) -> Batch {
        Batch::create(
            NewBatch::validate("Cocoa", 20, "Accra", creator).unwrap(),
            BatchId::from(id),
            at,
        )
    }

    #[test]
    fn test_put_then_get() {
        let store = InMemoryBatchStore::new();
        store.put(batch("B-1", MAKER, 1));
        assert_eq!(store.get(&BatchId::from("B-1")).unwrap().batch_size, 20);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = InMemoryBatchStore::new();
        let err = store.get(&BatchId::from("B-404")).unwrap_err();
        assert_eq!(err, LedgerError::NotFound(BatchId::from("B-404")));
    }

    #[test]
    fn test_contains_tracks_inserts() {
        let store = InMemoryBatchStore::new();
        assert!(!store.contains(&BatchId::from("B-1")));
        store.insert_new(batch("B-1", MAKER, 1)).unwrap();
        assert!(store.contains(&BatchId::from("B-1")));
        assert!(!store.contains(&BatchId::from("B-2")));
    }

    #[test]
    fn test_put_overwrites() {
        let store = InMemoryBatchStore::new();
        store.put(batch("B-1", MAKER, 1));
        let mut updated = batch("B-1", MAKER, 1);
        updated.batch_size = 99;
        store.put(updated);
        assert_eq!(store.get(&BatchId::from("B-1")).unwrap().batch_size, 99);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_new_rejects_taken_id() {
        let store = InMemoryBatchStore::new();
        assert!(store.insert_new(batch("B-1", MAKER, 1)).is_ok());
        let rejected = store.insert_new(batch("B-1", OTHER, 2)).unwrap_err();
        assert_eq!(rejected.manufacturer.as_str(), OTHER);
        // First entry untouched.
        assert_eq!(
            store.get(&BatchId::from("B-1")).unwrap().manufacturer.as_str(),
            MAKER
        );
    }

    #[test]
    fn test_list_by_party_matches_maker_or_holder() {
        let store = InMemoryBatchStore::new();
        store.put(batch("B-2", MAKER, 2));
        store.put(batch("B-1", MAKER, 1));
        store.put(batch("B-3", OTHER, 3));

        let maker = PartyAddress::parse(MAKER).unwrap();
        let ids: Vec<_> = store
            .list_by_party(&maker)
            .into_iter()
            .map(|b| b.batch_id)
            .collect();
        assert_eq!(ids, vec![BatchId::from("B-1"), BatchId::from("B-2")]);
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryBatchStore::new();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }
}
