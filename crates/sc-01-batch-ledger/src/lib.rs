//! # SC-01 Batch Ledger
//!
//! In-memory custody ledger for product batches.
//!
//! **Subsystem ID:** 01  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Track a batch from the manufacturer to the retailer:
//! - `create_batch` registers a batch with one `CREATED` history event
//! - `transfer_batch` hands custody to the next party (`IN_TRANSIT`)
//! - `confirm_receipt` closes the chain (`DELIVERED`)
//! - `get_batch` / `get_history` serve provenance lookups, falling back to a
//!   canned demo batch for ids containing `DEMO`
//!
//! ## Invariants
//!
//! | Invariant | Description |
//! |-----------|-------------|
//! | Genesis | History is non-empty and starts with exactly one `CREATED` |
//! | Custody | `current_handler` equals the handler of the last event |
//! | Monotonic | `CREATED -> IN_TRANSIT -> DELIVERED`, never backwards |
//! | Append-only | Each transition appends exactly one event |
//! | Unique ids | Batch ids are never reused |
//!
//! ## Module Structure
//!
//! ```text
//! sc-01-batch-ledger/
//! ├── domain/     # Batch, HistoryEvent, status machine, errors, config
//! ├── ports/      # LedgerApi, QueryApi, BatchStore, TimeSource, IdGenerator
//! ├── adapters/   # InMemoryBatchStore, RandomIdGenerator, BroadcastEventBus
//! └── service/    # LedgerService orchestrating the above
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{BroadcastEventBus, InMemoryBatchStore, RandomIdGenerator};
pub use domain::{
    batch_is_consistent, demo_batch, demo_history, Batch, BatchHistory, BatchStatus,
    CreateBatchResult, HistoryAction, HistoryEvent, HistoryRecord, LedgerConfig,
    LedgerConfigBuilder, LedgerError, NewBatch, PartySummary, Session, TxReceipt,
    ValidationError, DEMO_DISTRIBUTOR, DEMO_MANUFACTURER, DEMO_RETAILER,
};
pub use events::{LedgerEvent, TransitionRecord};
pub use metrics::{LedgerMetrics, LedgerMetricsSnapshot};
pub use ports::{
    BatchStore, IdGenerator, LedgerApi, LedgerEventPublisher, ManualTimeSource, NoOpEventPublisher,
    QueryApi, SystemTimeSource, TimeSource,
};
pub use service::LedgerService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem tag used in structured logs.
pub const SUBSYSTEM: &str = "sc-01-batch-ledger";
