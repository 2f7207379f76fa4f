//! Integrity Service
//!
//! Implements `IntegrityApi` over a score source, an anomaly log and a clock.

use crate::adapters::{InMemoryAnomalyLog, RngScoreSource};
use crate::domain::{
    summarize, AnalyticsSnapshot, AnomalyRecord, AnomalyReport, IntegrityConfig, IntegrityError,
    IntegrityReport, SCORE_RANGE,
};
use crate::ports::inbound::IntegrityApi;
use crate::ports::outbound::{AnomalyLog, ScoreSource};
use async_trait::async_trait;
use sc_01_batch_ledger::{Batch, SystemTimeSource, TimeSource};
use sc_shared_types::latency::simulate;
use sc_shared_types::{BatchId, Timestamp};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Integrity evaluator service.
pub struct IntegrityService {
    scores: Arc<dyn ScoreSource>,
    anomalies: Arc<dyn AnomalyLog>,
    clock: Arc<dyn TimeSource>,
    config: IntegrityConfig,
    report_seq: AtomicU64,
}

impl IntegrityService {
    /// Create a service with entropy-seeded scores, an in-memory anomaly log
    /// and the system clock.
    ///
    /// # Errors
    /// - `InvalidConfig`: `config.validate()` failed
    pub fn new(config: IntegrityConfig) -> Result<Self, IntegrityError> {
        config.validate()?;
        Ok(Self {
            scores: Arc::new(RngScoreSource::from_entropy()),
            anomalies: Arc::new(InMemoryAnomalyLog::new()),
            clock: Arc::new(SystemTimeSource),
            config,
            report_seq: AtomicU64::new(0),
        })
    }

    /// Replace the score source.
    pub fn with_score_source(mut self, scores: Arc<dyn ScoreSource>) -> Self {
        self.scores = scores;
        self
    }

    /// Replace the anomaly log.
    pub fn with_anomaly_log(mut self, anomalies: Arc<dyn AnomalyLog>) -> Self {
        self.anomalies = anomalies;
        self
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &IntegrityConfig {
        &self.config
    }

    fn score(&self, batch_id: &BatchId, now: Timestamp) -> IntegrityReport {
        if batch_id.is_demo() {
            return IntegrityReport::demo(batch_id.clone());
        }
        let score = self.scores.draw(SCORE_RANGE);
        let status = self.config.classify(score);
        IntegrityReport::from_verdict(batch_id.clone(), score, status, now)
    }

    fn require(field: &str, value: &str) -> Result<(), IntegrityError> {
        if value.trim().is_empty() {
            Err(IntegrityError::Validation(format!("{field} must not be empty")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl IntegrityApi for IntegrityService {
    async fn evaluate(&self, batch_id: &BatchId) -> IntegrityReport {
        simulate(self.config.latency.integrity).await;

        let report = self.score(batch_id, self.clock.now());
        debug!(
            %batch_id,
            score = report.score,
            status = %report.status,
            "[sc-02] integrity evaluated"
        );
        report
    }

    async fn report_anomaly(
        &self,
        batch_id: &BatchId,
        anomaly_type: &str,
        description: &str,
    ) -> Result<AnomalyReport, IntegrityError> {
        let checked = Self::require("batch id", batch_id.as_str())
            .and_then(|_| Self::require("description", description));
        if let Err(err) = checked {
            warn!(%batch_id, error = %err, "[sc-02] anomaly report rejected");
            return Err(err);
        }

        simulate(self.config.latency.report).await;

        let now = self.clock.now();
        let seq = self.report_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let record = AnomalyRecord {
            report_id: format!("RPT-{now}-{seq}"),
            batch_id: batch_id.clone(),
            anomaly_type: anomaly_type.trim().to_string(),
            description: description.trim().to_string(),
            reported_at: now,
        };
        let ack = record.acknowledgement();

        info!(
            %batch_id,
            report_id = %record.report_id,
            anomaly_type = %record.anomaly_type,
            "[sc-02] anomaly reported"
        );
        self.anomalies.append(record);
        Ok(ack)
    }

    fn anomalies_for(&self, batch_id: &BatchId) -> Vec<AnomalyRecord> {
        self.anomalies.for_batch(batch_id)
    }

    async fn analytics(&self, batches: &[Batch]) -> AnalyticsSnapshot {
        simulate(self.config.latency.integrity).await;

        let now = self.clock.now();
        let reports: Vec<_> = batches
            .iter()
            .map(|b| self.score(&b.batch_id, now))
            .collect();
        let snapshot = summarize(batches, &reports, now);
        debug!(
            total = snapshot.total_batches,
            active = snapshot.active_batches,
            anomaly_rate = snapshot.anomaly_rate,
            "[sc-02] analytics computed"
        );
        snapshot
    }
}
