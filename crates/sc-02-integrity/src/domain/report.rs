//! # Integrity Report
//!
//! Display-only trust verdict for a batch. The score is a placeholder drawn
//! at random; it is not derived from any sensor data.

use sc_shared_types::{BatchId, Timestamp, DAY_MS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Score reported for demo batches.
pub const DEMO_SCORE: u8 = 95;

/// Scores are drawn uniformly from this range.
pub const SCORE_RANGE: Range<u8> = 70..100;

/// Message of the synthetic temperature alert.
pub const TEMPERATURE_ALERT_MESSAGE: &str = "Temperature exceeded threshold for 2 hours";

/// How far back the synthetic alert is dated.
pub const TEMPERATURE_ALERT_AGE_MS: u64 = 3 * DAY_MS;

/// Verdict derived from the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntegrityStatus {
    /// Score at or above the safe threshold.
    Safe,
    /// Score at or above the warning threshold.
    Warning,
    /// Anything lower.
    Tampered,
}

impl IntegrityStatus {
    /// Wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Warning => "WARNING",
            Self::Tampered => "TAMPERED",
        }
    }
}

impl fmt::Display for IntegrityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an alert is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    /// Cold-chain temperature excursion.
    Temperature,
}

/// Alert severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Needs review.
    Medium,
}

/// Alert attached to a verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert category.
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Severity.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// When the condition was observed.
    pub timestamp: Timestamp,
}

impl Alert {
    /// The synthetic alert attached to every `WARNING` verdict.
    pub fn temperature_excursion(now: Timestamp) -> Self {
        Self {
            alert_type: AlertType::Temperature,
            severity: Severity::Medium,
            message: TEMPERATURE_ALERT_MESSAGE.to_string(),
            timestamp: now.saturating_sub(TEMPERATURE_ALERT_AGE_MS),
        }
    }
}

/// Boolean checks shown next to the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityChecks {
    pub temperature_in_range: bool,
    pub humidity_in_range: bool,
    pub timeline_consistent: bool,
    pub location_valid: bool,
    pub no_unauthorized_access: bool,
}

impl IntegrityChecks {
    /// Every check passing.
    pub fn all_passing() -> Self {
        Self::for_status(IntegrityStatus::Safe)
    }

    /// Temperature and access checks fail only for `TAMPERED`.
    pub fn for_status(status: IntegrityStatus) -> Self {
        let intact = status != IntegrityStatus::Tampered;
        Self {
            temperature_in_range: intact,
            humidity_in_range: true,
            timeline_consistent: true,
            location_valid: true,
            no_unauthorized_access: intact,
        }
    }

    /// True if every check passes.
    pub fn all(&self) -> bool {
        self.temperature_in_range
            && self.humidity_in_range
            && self.timeline_consistent
            && self.location_valid
            && self.no_unauthorized_access
    }
}

/// Integrity verdict for one batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    pub batch_id: BatchId,
    /// 0..=100
    pub score: u8,
    pub status: IntegrityStatus,
    pub alerts: Vec<Alert>,
    pub checks: IntegrityChecks,
}

impl IntegrityReport {
    /// Fixed verdict for demo batches.
    pub fn demo(batch_id: BatchId) -> Self {
        Self {
            batch_id,
            score: DEMO_SCORE,
            status: IntegrityStatus::Safe,
            alerts: Vec::new(),
            checks: IntegrityChecks::all_passing(),
        }
    }

    /// Verdict for a classified score. `WARNING` carries exactly one
    /// temperature alert.
    pub fn from_verdict(
        batch_id: BatchId,
        score: u8,
        status: IntegrityStatus,
        now: Timestamp,
    ) -> Self {
        let alerts = match status {
            IntegrityStatus::Warning => vec![Alert::temperature_excursion(now)],
            _ => Vec::new(),
        };
        Self {
            batch_id,
            score,
            status,
            alerts,
            checks: IntegrityChecks::for_status(status),
        }
    }
}
