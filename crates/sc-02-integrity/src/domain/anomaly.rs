//! Anomaly reports filed against a batch.

use sc_shared_types::{BatchId, Timestamp};
use serde::{Deserialize, Serialize};

/// Acknowledgement returned for every accepted report.
pub const ANOMALY_ACK: &str = "Anomaly reported successfully";

/// Acknowledgement of a filed report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyReport {
    /// `RPT-{millis}-{sequence}`
    pub report_id: String,
    /// Always true; rejected reports are returned as errors.
    pub success: bool,
    /// Human-readable acknowledgement.
    pub message: String,
}

/// A report as kept in the anomaly log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyRecord {
    pub report_id: String,
    pub batch_id: BatchId,
    /// Free-text category chosen by the reporter.
    pub anomaly_type: String,
    pub description: String,
    pub reported_at: Timestamp,
}

impl AnomalyRecord {
    /// Acknowledgement handed back to the reporter.
    pub fn acknowledgement(&self) -> AnomalyReport {
        AnomalyReport {
            report_id: self.report_id.clone(),
            success: true,
            message: ANOMALY_ACK.to_string(),
        }
    }
}
