//! # Analytics
//!
//! Ledger contents scored by the integrity evaluator.

#[cfg(test)]
mod tests {
    use super::super::{Harness, DISTRIBUTOR, MANUFACTURER, RETAILER, T0};
    use sc_01_batch_ledger::{BatchStore, LedgerApi, QueryApi};
    use sc_02_integrity::{IntegrityApi, IntegrityStatus};
    use sc_shared_types::DAY_MS;

    #[tokio::test]
    async fn test_dashboard_snapshot() {
        let h = Harness::new(21);
        h.ledger.connect(MANUFACTURER).await.unwrap();

        let mut ids = Vec::new();
        for n in 0..4 {
            let created = h
                .ledger
                .create_batch(&format!("Lot {n}"), 10 + n, "Lima", MANUFACTURER)
                .await
                .unwrap();
            ids.push(created.batch.batch_id);
        }
        h.clock.advance(DAY_MS / 2);
        h.ledger.transfer_batch(&ids[0], DISTRIBUTOR, "Panama").await.unwrap();
        h.ledger.confirm_receipt(&ids[1], "Quito", RETAILER).await.unwrap();

        // The manufacturer stays involved after handing custody on.
        assert_eq!(h.ledger.list_by_party(MANUFACTURER).await.unwrap().len(), 4);
        assert_eq!(h.ledger.list_by_party(DISTRIBUTOR).await.unwrap().len(), 1);

        let everything = h.ledger.store().all();
        let snapshot = h.integrity.analytics(&everything).await;
        assert_eq!(snapshot.total_batches, 4);
        assert_eq!(snapshot.active_batches, 3);
        assert!((70.0..100.0).contains(&snapshot.average_integrity_score));
        assert!((0.0..=100.0).contains(&snapshot.anomaly_rate));
        // 4 creations + 2 hops, all within the last day.
        assert_eq!(snapshot.recent_activity[0].count, 6);
        assert_eq!(snapshot.recent_activity[1].count, 0);
        assert_eq!(snapshot.recent_activity[0].date, T0 + DAY_MS / 2);

        let summary = h.ledger.summary_for(MANUFACTURER).await.unwrap();
        assert_eq!(summary.total_batches, 4);
        assert_eq!(summary.active_batches, 3);
    }

    #[tokio::test]
    async fn test_anomaly_reports_attach_to_batch() {
        let h = Harness::new(22);
        h.ledger.connect(MANUFACTURER).await.unwrap();
        let id = h
            .ledger
            .create_batch("Vaccines", 1_000, "Basel", MANUFACTURER)
            .await
            .unwrap()
            .batch
            .batch_id;

        let ack = h
            .integrity
            .report_anomaly(&id, "TEMPERATURE", "Reefer alarm at 14:00")
            .await
            .unwrap();
        assert!(ack.success);
        assert!(ack.report_id.starts_with(&format!("RPT-{T0}-")));

        let kept = h.integrity.anomalies_for(&id);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].batch_id, id);
    }

    #[tokio::test]
    async fn test_verdict_distribution() {
        let h = Harness::new(23);
        let id = sc_shared_types::BatchId::from("BATCH-2026-0001-000001");
        let mut safe = 0;
        let mut warning = 0;
        for _ in 0..300 {
            match h.integrity.evaluate(&id).await.status {
                IntegrityStatus::Safe => safe += 1,
                IntegrityStatus::Warning => warning += 1,
                IntegrityStatus::Tampered => panic!("scores start at 70"),
            }
        }
        // Uniform over [70, 100): roughly one third SAFE.
        assert!(safe > 50 && safe < 150, "safe = {safe}");
        assert!(warning > 150, "warning = {warning}");
    }
}
