//! # Domain Module
//!
//! Core domain types for the batch ledger.

pub mod config;
pub mod demo;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use config::{LedgerConfig, LedgerConfigBuilder};
pub use demo::{demo_batch, demo_history, DEMO_DISTRIBUTOR, DEMO_MANUFACTURER, DEMO_RETAILER};
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use value_objects::*;
