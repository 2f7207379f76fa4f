//! Random Identifier Adapter
//!
//! Batch ids look like `BATCH-2026-0427-512384`: calendar year, four random
//! digits, then the last six digits of the millisecond clock.

use crate::ports::outbound::IdGenerator;
use chrono::{DateTime, Datelike, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use sc_shared_types::{BatchId, Timestamp, TxHash};

/// Random bytes in a simulated transaction reference.
const TX_HASH_BYTES: usize = 8;

/// `IdGenerator` backed by a seedable RNG.
pub struct RandomIdGenerator {
    rng: Mutex<StdRng>,
}

impl RandomIdGenerator {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

fn year_of(now: Timestamp) -> i32 {
    DateTime::<Utc>::from_timestamp_millis(now as i64)
        .map(|dt| dt.year())
        .unwrap_or(1970)
}

impl IdGenerator for RandomIdGenerator {
    fn batch_id(&self, now: Timestamp) -> BatchId {
        let random: u32 = self.rng.lock().gen_range(0..10_000);
        BatchId::new(format!(
            "BATCH-{}-{:04}-{:06}",
            year_of(now),
            random,
            now % 1_000_000
        ))
    }

    fn tx_hash(&self) -> TxHash {
        let mut bytes = [0u8; TX_HASH_BYTES];
        self.rng.lock().fill_bytes(&mut bytes);
        TxHash::from_bytes(&bytes)
    }
}
