//! Counters for ledger operations
//!
//! ## Usage
//!
//! ```ignore
//! let metrics = LedgerMetrics::new();
//! metrics.record_action(HistoryAction::Created);
//! assert_eq!(metrics.snapshot().batches_created, 1);
//! ```

use crate::domain::HistoryAction;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for ledger transitions.
#[derive(Default)]
pub struct LedgerMetrics {
    /// Batches registered
    pub batches_created: AtomicU64,
    /// Custody transfers
    pub transfers: AtomicU64,
    /// Receipt confirmations
    pub confirmations: AtomicU64,
    /// Transitions rejected by validation, lookup or session checks
    pub failed_transitions: AtomicU64,
}

impl LedgerMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful transition of any kind
    pub fn record_action(&self, action: HistoryAction) {
        let counter = match action {
            HistoryAction::Created => &self.batches_created,
            HistoryAction::Transferred => &self.transfers,
            HistoryAction::Confirmed => &self.confirmations,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected transition
    pub fn record_failure(&self) {
        self.failed_transitions.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> LedgerMetricsSnapshot {
        LedgerMetricsSnapshot {
            batches_created: self.batches_created.load(Ordering::Relaxed),
            transfers: self.transfers.load(Ordering::Relaxed),
            confirmations: self.confirmations.load(Ordering::Relaxed),
            failed_transitions: self.failed_transitions.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerMetricsSnapshot {
    /// Batches registered
    pub batches_created: u64,
    /// Custody transfers
    pub transfers: u64,
    /// Receipt confirmations
    pub confirmations: u64,
    /// Rejected transitions
    pub failed_transitions: u64,
}

impl LedgerMetricsSnapshot {
    /// Successful transitions of all kinds.
    pub fn total_transitions(&self) -> u64 {
        self.batches_created + self.transfers + self.confirmations
    }
}
