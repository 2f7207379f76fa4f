//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound port traits for an in-process ledger.

mod event_bus;
mod id_generator;
mod memory_store;

pub use event_bus::{BroadcastEventBus, DEFAULT_CHANNEL_CAPACITY};
pub use id_generator::RandomIdGenerator;
pub use memory_store::InMemoryBatchStore;
