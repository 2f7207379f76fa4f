//! # Role Flows
//!
//! Each dashboard role acts on the same ledger in turn, then a consumer scans
//! the batch's verify link.

#[cfg(test)]
mod tests {
    use super::super::{Harness, DISTRIBUTOR, MANUFACTURER, RETAILER, T0};
    use sc_01_batch_ledger::{
        batch_is_consistent, BatchStatus, BatchStore, HistoryAction, LedgerApi, LedgerError, QueryApi,
        ValidationError,
    };
    use sc_02_integrity::{IntegrityApi, IntegrityStatus};
    use sc_shared_types::{BatchId, DAY_MS};

    #[tokio::test]
    async fn test_full_custody_chain() {
        let h = Harness::new(1);

        h.ledger.connect(MANUFACTURER).await.unwrap();
        let created = h
            .ledger
            .create_batch("Cold Brew Concentrate", 120, "Medellin, Colombia", MANUFACTURER)
            .await
            .unwrap();
        let id = created.batch.batch_id.clone();
        assert!(id.as_str().starts_with("BATCH-2026-"));

        h.clock.advance(2 * DAY_MS);
        h.ledger.connect(DISTRIBUTOR).await.unwrap();
        h.ledger
            .transfer_batch(&id, DISTRIBUTOR, "Miami, FL")
            .await
            .unwrap();

        h.clock.advance(3 * DAY_MS);
        h.ledger.connect(RETAILER).await.unwrap();
        h.ledger
            .confirm_receipt(&id, "New York, NY", RETAILER)
            .await
            .unwrap();

        // Consumer scans the QR code.
        let link = h.ledger.deep_link(&id);
        let scanned = h.ledger.resolve_link(&link);
        assert_eq!(scanned, id);

        let batch = h.ledger.get_batch(&scanned).await.unwrap();
        assert_eq!(batch.status, BatchStatus::Delivered);
        assert_eq!(batch.manufacturer.as_str(), MANUFACTURER);
        assert_eq!(batch.current_handler.as_str(), RETAILER);
        assert!(batch_is_consistent(&batch));

        let history = h.ledger.get_history(&scanned).await;
        assert_eq!(
            history.actions(),
            vec![
                HistoryAction::Created,
                HistoryAction::Transferred,
                HistoryAction::Confirmed
            ]
        );
        let times: Vec<_> = history.events.iter().map(|e| e.timestamp).collect();
        assert_eq!(times, vec![T0, T0 + 2 * DAY_MS, T0 + 5 * DAY_MS]);

        let report = h.integrity.evaluate(&scanned).await;
        assert!((70..100).contains(&report.score));
        assert_ne!(report.status, IntegrityStatus::Tampered);
    }

    #[tokio::test]
    async fn test_history_only_grows() {
        let h = Harness::new(2);
        h.ledger.connect(MANUFACTURER).await.unwrap();
        let id = h
            .ledger
            .create_batch("Tea", 5, "Assam", MANUFACTURER)
            .await
            .unwrap()
            .batch
            .batch_id;

        let mut previous = h.ledger.get_batch(&id).await.unwrap().history;
        for (hop, handler) in [DISTRIBUTOR, RETAILER, DISTRIBUTOR].iter().enumerate() {
            h.clock.advance(1_000);
            h.ledger
                .transfer_batch(&id, handler, &format!("Hop {hop}"))
                .await
                .unwrap();
            let current = h.ledger.get_batch(&id).await.unwrap().history;
            assert_eq!(current.len(), previous.len() + 1);
            assert_eq!(current[..previous.len()], previous[..]);
            previous = current;
        }

        // Rejected calls leave history untouched.
        assert!(h.ledger.transfer_batch(&id, "0x42", "Nowhere").await.is_err());
        assert_eq!(h.ledger.get_batch(&id).await.unwrap().history, previous);
    }

    #[tokio::test]
    async fn test_delivered_batch_cannot_move() {
        let h = Harness::new(3);
        h.ledger.connect(RETAILER).await.unwrap();
        let id = h
            .ledger
            .create_batch("Cocoa", 10, "Accra", MANUFACTURER)
            .await
            .unwrap()
            .batch
            .batch_id;
        h.ledger.confirm_receipt(&id, "Shop", RETAILER).await.unwrap();

        let err = h
            .ledger
            .transfer_batch(&id, DISTRIBUTOR, "Back")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::Validation(ValidationError::AlreadyDelivered(id.clone()))
        );
    }

    #[tokio::test]
    async fn test_demo_ids_resolve_without_store_entry() {
        let h = Harness::new(4);
        let id = BatchId::from("SHELF-TAG-DEMO");

        let batch = h.ledger.get_batch(&id).await.unwrap();
        assert_eq!(batch.status, BatchStatus::Delivered);
        assert_eq!(batch.history.len(), 3);

        let report = h.integrity.evaluate(&id).await;
        assert_eq!(report.score, 95);
        assert_eq!(report.status, IntegrityStatus::Safe);

        // Demo lookups are not transitions: the ledger still holds nothing.
        assert!(h.ledger.store().is_empty());
        assert!(matches!(
            h.ledger.confirm_receipt(&id, "x", RETAILER).await,
            Err(LedgerError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn test_demo_ids_are_read_only_with_session() {
        let h = Harness::new(6);
        h.ledger.connect(DISTRIBUTOR).await.unwrap();
        let id = BatchId::from("SHELF-TAG-DEMO");

        assert_eq!(
            h.ledger.transfer_batch(&id, DISTRIBUTOR, "Miami, FL").await,
            Err(LedgerError::NotFound(id.clone()))
        );
        assert_eq!(
            h.ledger.confirm_receipt(&id, "New York, NY", RETAILER).await,
            Err(LedgerError::NotFound(id.clone()))
        );

        assert!(h.ledger.store().is_empty());
        assert_eq!(h.ledger.metrics().failed_transitions, 2);
        // The canned batch is unchanged by the rejected calls.
        assert_eq!(h.ledger.get_history(&id).await.events.len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_id_asymmetry() {
        let h = Harness::new(5);
        let id = BatchId::from("BATCH-2026-1234-567890");
        assert!(matches!(
            h.ledger.get_batch(&id).await,
            Err(LedgerError::NotFound(_))
        ));
        assert!(h.ledger.get_history(&id).await.events.is_empty());
    }
}
