//! Cross-crate integration tests.
//!
//! Fixtures shared by the test modules live here.

mod analytics;
mod events;
mod role_flows;

use sc_01_batch_ledger::{
    InMemoryBatchStore, LedgerConfig, LedgerService, ManualTimeSource, RandomIdGenerator,
};
use sc_02_integrity::{IntegrityConfig, IntegrityService, RngScoreSource};
use std::sync::Arc;

/// 2026-02-05T12:00:00Z
pub const T0: u64 = 1_770_292_800_000;

pub const MANUFACTURER: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0";
pub const DISTRIBUTOR: &str = "0x1234567890123456789012345678901234567890";
pub const RETAILER: &str = "0x8626f6940E2eb28930eFb4CeF49B2d1F2C9C1199";

/// Ledger and evaluator sharing one hand-driven clock.
pub struct Harness {
    pub clock: Arc<ManualTimeSource>,
    pub ledger: LedgerService<InMemoryBatchStore>,
    pub integrity: IntegrityService,
}

impl Harness {
    pub fn new(seed: u64) -> Self {
        let clock = Arc::new(ManualTimeSource::new(T0));
        let ledger = LedgerService::in_memory(LedgerConfig::default())
            .expect("default config is valid")
            .with_clock(clock.clone())
            .with_id_generator(Arc::new(RandomIdGenerator::seeded(seed)));
        let integrity = IntegrityService::new(IntegrityConfig::default())
            .expect("default config is valid")
            .with_clock(clock.clone())
            .with_score_source(Arc::new(RngScoreSource::seeded(seed)));
        Self {
            clock,
            ledger,
            integrity,
        }
    }
}
