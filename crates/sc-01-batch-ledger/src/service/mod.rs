//! Service Layer
//!
//! Application service that orchestrates the domain and coordinates the
//! outbound ports.

mod batch_locks;
pub mod ledger_service;

pub use ledger_service::LedgerService;
