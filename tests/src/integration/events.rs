//! # Ledger Events
//!
//! Transitions observed through the broadcast bus, the way a live dashboard
//! would follow them.

#[cfg(test)]
mod tests {
    use super::super::{DISTRIBUTOR, MANUFACTURER, RETAILER, T0};
    use sc_01_batch_ledger::{
        BroadcastEventBus, HistoryAction, LedgerApi, LedgerConfig, LedgerEvent,
        LedgerEventPublisher, LedgerService, ManualTimeSource, RandomIdGenerator,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_subscriber_follows_batch() {
        let bus = Arc::new(BroadcastEventBus::new());
        let mut rx = bus.subscribe();
        let ledger = LedgerService::in_memory(LedgerConfig::default())
            .unwrap()
            .with_clock(Arc::new(ManualTimeSource::new(T0)))
            .with_id_generator(Arc::new(RandomIdGenerator::seeded(9)))
            .with_event_publisher(bus.clone());

        ledger.connect(MANUFACTURER).await.unwrap();
        let id = ledger
            .create_batch("Saffron", 2, "Herat", MANUFACTURER)
            .await
            .unwrap()
            .batch
            .batch_id;
        let transfer = ledger
            .transfer_batch(&id, DISTRIBUTOR, "Dubai")
            .await
            .unwrap();
        ledger.confirm_receipt(&id, "London", RETAILER).await.unwrap();

        let mut seen = Vec::new();
        for _ in 0..3 {
            let event = timeout(Duration::from_secs(1), rx.recv())
                .await
                .expect("event within timeout")
                .unwrap();
            seen.push(event);
        }

        assert!(seen.iter().all(|e| e.record().batch_id == id));
        assert_eq!(
            seen.iter().map(LedgerEvent::action).collect::<Vec<_>>(),
            vec![
                HistoryAction::Created,
                HistoryAction::Transferred,
                HistoryAction::Confirmed
            ]
        );
        assert_eq!(seen[1].record().tx_hash, transfer.tx_hash);
        assert_eq!(seen[1].record().handler.as_str(), DISTRIBUTOR);
        assert_ne!(seen[0].record().correlation_id, seen[1].record().correlation_id);
        assert_eq!(bus.events_published(), 3);
    }

    #[tokio::test]
    async fn test_rejected_transitions_publish_nothing() {
        let bus = Arc::new(BroadcastEventBus::new());
        let mut rx = bus.subscribe();
        let ledger = LedgerService::in_memory(LedgerConfig::default())
            .unwrap()
            .with_event_publisher(bus.clone());

        assert!(ledger.create_batch("X", 1, "Y", MANUFACTURER).await.is_err());
        ledger.connect(MANUFACTURER).await.unwrap();
        assert!(ledger.create_batch("X", 0, "Y", MANUFACTURER).await.is_err());

        assert_eq!(bus.events_published(), 0);
        assert!(rx.try_recv().is_err());
        assert_eq!(ledger.metrics().failed_transitions, 2);
    }

    #[tokio::test]
    async fn test_events_serialize_with_type_tag() {
        let bus = Arc::new(BroadcastEventBus::new());
        let mut rx = bus.subscribe();
        let ledger = LedgerService::in_memory(LedgerConfig::default())
            .unwrap()
            .with_event_publisher(bus.clone());
        ledger.connect(MANUFACTURER).await.unwrap();
        ledger
            .create_batch("Honey", 40, "Otago", MANUFACTURER)
            .await
            .unwrap();

        let json = serde_json::to_value(rx.recv().await.unwrap()).unwrap();
        assert_eq!(json["type"], "BatchCreated");
        assert_eq!(json["payload"]["location"], "Otago");
    }
}
