//! # Inbound Ports
//!
//! What the integrity evaluator offers to the verify and analytics views.

use crate::domain::{AnalyticsSnapshot, AnomalyRecord, AnomalyReport, IntegrityError, IntegrityReport};
use async_trait::async_trait;
use sc_01_batch_ledger::Batch;
use sc_shared_types::BatchId;

/// Integrity API - inbound port.
#[async_trait]
pub trait IntegrityApi: Send + Sync {
    /// Verdict for a batch. Demo ids always score 95 / `SAFE`; other ids
    /// draw a fresh score on every call.
    async fn evaluate(&self, batch_id: &BatchId) -> IntegrityReport;

    /// File an anomaly report.
    ///
    /// # Errors
    /// - `Validation`: blank batch id or description
    async fn report_anomaly(
        &self,
        batch_id: &BatchId,
        anomaly_type: &str,
        description: &str,
    ) -> Result<AnomalyReport, IntegrityError>;

    /// Reports filed against a batch, oldest first.
    fn anomalies_for(&self, batch_id: &BatchId) -> Vec<AnomalyRecord>;

    /// Aggregate figures over `batches`.
    async fn analytics(&self, batches: &[Batch]) -> AnalyticsSnapshot;
}
