//! In-memory anomaly log.

use crate::domain::AnomalyRecord;
use crate::ports::outbound::AnomalyLog;
use parking_lot::RwLock;
use sc_shared_types::BatchId;

/// Volatile, process-lifetime anomaly log.
#[derive(Default)]
pub struct InMemoryAnomalyLog {
    records: RwLock<Vec<AnomalyRecord>>,
}

impl InMemoryAnomalyLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnomalyLog for InMemoryAnomalyLog {
    fn append(&self, record: AnomalyRecord) {
        self.records.write().push(record);
    }

    fn for_batch(&self, batch_id: &BatchId) -> Vec<AnomalyRecord> {
        self.records
            .read()
            .iter()
            .filter(|r| r.batch_id == *batch_id)
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.records.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, batch: &str) -> AnomalyRecord {
        AnomalyRecord {
            report_id: id.into(),
            batch_id: BatchId::from(batch),
            anomaly_type: "TEMPERATURE".into(),
            description: "warm".into(),
            reported_at: 1,
        }
    }

    #[test]
    fn test_filters_by_batch_in_order() {
        let log = InMemoryAnomalyLog::new();
        log.append(record("RPT-1", "A"));
        log.append(record("RPT-2", "B"));
        log.append(record("RPT-3", "A"));

        let ids: Vec<_> = log
            .for_batch(&BatchId::from("A"))
            .into_iter()
            .map(|r| r.report_id)
            .collect();
        assert_eq!(ids, vec!["RPT-1", "RPT-3"]);
        assert_eq!(log.len(), 3);
    }
}
