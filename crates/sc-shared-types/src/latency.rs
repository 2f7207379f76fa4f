//! # Simulated Latency
//!
//! The ledger stands in for a remote contract and API. Every operation class
//! can be paced with an artificial delay; the delay carries no semantics.

use std::time::Duration;

/// Artificial delay per operation class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LatencyProfile {
    /// Establishing a ledger session.
    pub connect: Duration,
    /// Create, transfer and confirm.
    pub transaction: Duration,
    /// Batch lookups.
    pub read: Duration,
    /// History lookups.
    pub history: Duration,
    /// Integrity evaluation.
    pub integrity: Duration,
    /// Anomaly reports.
    pub report: Duration,
}

impl LatencyProfile {
    /// No delays. Used by tests and scripted runs.
    pub fn none() -> Self {
        Self::default()
    }

    /// Pacing of the demo dashboards.
    pub fn demo() -> Self {
        Self {
            connect: Duration::from_millis(1000),
            transaction: Duration::from_millis(2000),
            read: Duration::from_millis(500),
            history: Duration::from_millis(800),
            integrity: Duration::from_millis(1000),
            report: Duration::from_millis(500),
        }
    }

    /// True when every delay is zero.
    pub fn is_none(&self) -> bool {
        *self == Self::none()
    }
}

/// Sleep for `delay`, skipping the timer entirely when it is zero.
pub async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
