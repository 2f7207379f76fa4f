//! Per-batch serialization of transitions.

use parking_lot::Mutex;
use sc_shared_types::BatchId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async mutex per batch id, created on first use.
#[derive(Default)]
pub(crate) struct BatchLocks {
    locks: Mutex<HashMap<BatchId, Arc<AsyncMutex<()>>>>,
}

impl BatchLocks {
    /// Wait until no other transition on `batch_id` is in flight.
    pub(crate) async fn acquire(&self, batch_id: &BatchId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock();
            locks
                .entry(batch_id.clone())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    #[cfg(test)]
    pub(crate) fn tracked(&self) -> usize {
        self.locks.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_batch_is_serialized() {
        let locks = Arc::new(BatchLocks::default());
        let id = BatchId::from("B-1");
        let guard = locks.acquire(&id).await;

        let waiter = {
            let locks = locks.clone();
            let id = id.clone();
            tokio::spawn(async move {
                let _g = locks.acquire(&id).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());
        drop(guard);
        waiter.await.unwrap();
    }

    #[tokio::test]
    async fn test_distinct_batches_do_not_block() {
        let locks = BatchLocks::default();
        let _a = locks.acquire(&BatchId::from("B-1")).await;
        let _b = locks.acquire(&BatchId::from("B-2")).await;
        assert_eq!(locks.tracked(), 2);
    }
}
