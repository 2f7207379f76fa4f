//! # Analytics Snapshot
//!
//! Aggregate view over a set of batches and their integrity verdicts.

use super::report::{IntegrityReport, IntegrityStatus};
use sc_01_batch_ledger::Batch;
use sc_shared_types::{Timestamp, DAY_MS};
use serde::{Deserialize, Serialize};

/// Days covered by `recent_activity`, today first.
pub const ACTIVITY_DAYS: u64 = 3;

/// History events recorded during one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    /// End of the day window.
    pub date: Timestamp,
    /// Events in `(date - 1 day, date]`.
    pub count: usize,
}

/// Aggregate figures for a dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    /// Batches considered.
    pub total_batches: usize,
    /// Of those, not yet delivered.
    pub active_batches: usize,
    /// Mean score, one decimal.
    pub average_integrity_score: f64,
    /// Percentage of verdicts that are not `SAFE`, one decimal.
    pub anomaly_rate: f64,
    /// Events per day, most recent day first.
    pub recent_activity: Vec<ActivityPoint>,
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Count history events per day over the last `ACTIVITY_DAYS` days.
pub fn recent_activity(batches: &[Batch], now: Timestamp) -> Vec<ActivityPoint> {
    (0..ACTIVITY_DAYS)
        .map(|day| {
            let end = now.saturating_sub(day * DAY_MS);
            let start = end.saturating_sub(DAY_MS);
            let count = batches
                .iter()
                .flat_map(|b| b.history.iter())
                .filter(|e| e.timestamp > start && e.timestamp <= end)
                .count();
            ActivityPoint { date: end, count }
        })
        .collect()
}

/// Combine batches with their verdicts.
pub fn summarize(batches: &[Batch], reports: &[IntegrityReport], now: Timestamp) -> AnalyticsSnapshot {
    let (average_integrity_score, anomaly_rate) = if reports.is_empty() {
        (0.0, 0.0)
    } else {
        let n = reports.len() as f64;
        let total: f64 = reports.iter().map(|r| f64::from(r.score)).sum();
        let flagged = reports
            .iter()
            .filter(|r| r.status != IntegrityStatus::Safe)
            .count() as f64;
        (one_decimal(total / n), one_decimal(flagged * 100.0 / n))
    };

    AnalyticsSnapshot {
        total_batches: batches.len(),
        active_batches: batches.iter().filter(|b| b.status.is_active()).count(),
        average_integrity_score,
        anomaly_rate,
        recent_activity: recent_activity(batches, now),
    }
}
