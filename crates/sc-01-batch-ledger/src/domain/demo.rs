//! # Demo Batch
//!
//! Canned batch served for lookups of ids containing `DEMO` that are not in
//! the store: a coffee shipment from Medellin to New York, already delivered.

use super::entities::{Batch, BatchHistory, HistoryEvent, HistoryRecord};
use super::value_objects::{BatchStatus, HistoryAction};
use sc_shared_types::{BatchId, PartyAddress, Timestamp, DAY_MS, DEMO_BATCH_ID, DEMO_PRODUCT_NAME};

/// Manufacturer of the demo batch.
pub const DEMO_MANUFACTURER: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0";
/// Distributor of the demo batch.
pub const DEMO_DISTRIBUTOR: &str = "0x1234567890123456789012345678901234567890";
/// Retailer of the demo batch.
pub const DEMO_RETAILER: &str = "0x8626f6940E2eb28930eFb4CeF49B2d1F2C9C1199";

/// (handler, location, days ago, action, temperature °C, humidity %)
const DEMO_HOPS: [(&str, &str, u64, HistoryAction, f32, f32); 3] = [
    (DEMO_MANUFACTURER, "Medellin, Colombia", 7, HistoryAction::Created, 22.0, 65.0),
    (DEMO_DISTRIBUTOR, "Miami, FL", 5, HistoryAction::Transferred, 24.0, 70.0),
    (DEMO_RETAILER, "New York, NY", 2, HistoryAction::Confirmed, 23.0, 68.0),
];

fn demo_party(address: &str) -> PartyAddress {
    PartyAddress::new_unchecked(address)
}

fn demo_events(now: Timestamp) -> Vec<HistoryEvent> {
    DEMO_HOPS
        .iter()
        .map(|(handler, location, days_ago, action, _, _)| HistoryEvent {
            handler: demo_party(handler),
            location: (*location).to_string(),
            timestamp: now.saturating_sub(days_ago * DAY_MS),
            action: *action,
        })
        .collect()
}

/// Canned demo batch, timed relative to `now`.
pub fn demo_batch(now: Timestamp) -> Batch {
    Batch {
        batch_id: BatchId::from(DEMO_BATCH_ID),
        product_name: DEMO_PRODUCT_NAME.to_string(),
        batch_size: 500,
        location: "Colombia".to_string(),
        manufacturer: demo_party(DEMO_MANUFACTURER),
        current_handler: demo_party(DEMO_RETAILER),
        status: BatchStatus::Delivered,
        created_at: now.saturating_sub(7 * DAY_MS),
        history: demo_events(now),
    }
}

/// Canned demo timeline with sensor readings, echoing the requested id.
pub fn demo_history(batch_id: BatchId, now: Timestamp) -> BatchHistory {
    let events = demo_events(now)
        .iter()
        .zip(DEMO_HOPS.iter())
        .enumerate()
        .map(|(i, (event, (_, _, _, _, temperature, humidity)))| HistoryRecord {
            temperature: Some(*temperature),
            humidity: Some(*humidity),
            ..HistoryRecord::from_event(i, event)
        })
        .collect();

    BatchHistory { batch_id, events }
}
