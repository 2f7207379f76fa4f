//! # Outbound Ports
//!
//! Score randomness and anomaly storage.

use crate::domain::AnomalyRecord;
use sc_shared_types::BatchId;
use std::ops::Range;

/// Source of placeholder scores.
///
/// Production: `RngScoreSource` (adapters/score_source.rs)
pub trait ScoreSource: Send + Sync {
    /// Draw a score uniformly from `range`.
    fn draw(&self, range: Range<u8>) -> u8;
}

/// Append-only storage of anomaly reports.
///
/// Production: `InMemoryAnomalyLog` (adapters/anomaly_log.rs)
pub trait AnomalyLog: Send + Sync {
    /// Keep a report.
    fn append(&self, record: AnomalyRecord);

    /// Reports filed against `batch_id`, oldest first.
    fn for_batch(&self, batch_id: &BatchId) -> Vec<AnomalyRecord>;

    /// Number of reports kept.
    fn len(&self) -> usize;

    /// True if nothing was reported.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
