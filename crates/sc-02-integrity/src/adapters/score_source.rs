//! Score sources backed by `rand`.

use crate::ports::outbound::ScoreSource;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::ops::Range;

/// Uniform scores from any `RngCore`.
pub struct RngScoreSource<R: RngCore + Send = StdRng> {
    rng: Mutex<R>,
}

impl<R: RngCore + Send> RngScoreSource<R> {
    /// Wrap an RNG.
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl RngScoreSource<StdRng> {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic scores for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore + Send> ScoreSource for RngScoreSource<R> {
    fn draw(&self, range: Range<u8>) -> u8 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.lock().gen_range(range)
    }
}

/// Always the same score, clamped into the requested range.
#[derive(Clone, Copy, Debug)]
pub struct FixedScoreSource(pub u8);

impl ScoreSource for FixedScoreSource {
    fn draw(&self, range: Range<u8>) -> u8 {
        if range.is_empty() {
            return range.start;
        }
        self.0.clamp(range.start, range.end - 1)
    }
}
