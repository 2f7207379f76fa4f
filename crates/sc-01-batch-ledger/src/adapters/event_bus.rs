//! # Ledger Event Bus
//!
//! `tokio::sync::broadcast` fan-out of `LedgerEvent`s. Events published while
//! nobody is subscribed are dropped.

use crate::events::LedgerEvent;
use crate::ports::outbound::LedgerEventPublisher;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::debug;

/// Default broadcast buffer size.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// In-process broadcast bus for ledger events.
pub struct BroadcastEventBus {
    sender: broadcast::Sender<LedgerEvent>,
    events_published: AtomicU64,
    capacity: usize,
}

impl BroadcastEventBus {
    /// Create a bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a bus with the given capacity.
    ///
    /// A broadcast channel needs at least one slot, so zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            events_published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Receive every event published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.sender.subscribe()
    }

    /// Active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for BroadcastEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerEventPublisher for BroadcastEventBus {
    async fn publish(&self, event: LedgerEvent) -> usize {
        let topic = event.topic();
        let batch_id = event.record().batch_id.clone();

        self.events_published.fetch_add(1, Ordering::Relaxed);

        match self.sender.send(event) {
            Ok(receivers) => {
                debug!(topic, %batch_id, receivers, "[sc-01] event published");
                receivers
            }
            Err(_) => {
                debug!(topic, %batch_id, "[sc-01] event dropped (no receivers)");
                0
            }
        }
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}
