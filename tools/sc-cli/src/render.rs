//! Plain-text rendering for terminal output.

use crate::flows::{DemoOutcome, Verification};
use chrono::{DateTime, Utc};
use sc_01_batch_ledger::{HistoryRecord, TxReceipt};
use sc_shared_types::Timestamp;
use std::fmt::Write;

fn when(ts: Timestamp) -> String {
    DateTime::<Utc>::from_timestamp_millis(ts as i64)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}

fn reading(record: &HistoryRecord) -> String {
    match (record.temperature, record.humidity) {
        (Some(t), Some(h)) => format!("  {t:.0}°C / {h:.0}%"),
        (Some(t), None) => format!("  {t:.0}°C"),
        (None, Some(h)) => format!("  {h:.0}%"),
        (None, None) => String::new(),
    }
}

/// One line per receipt.
pub fn receipt(step: &str, receipt: &TxReceipt) -> String {
    format!(
        "{step:<10} {} {} tx {}",
        receipt.action,
        receipt.batch_id,
        receipt.tx_hash
    )
}

/// Batch card, timeline and integrity verdict.
pub fn verification(view: &Verification) -> String {
    let batch = &view.batch;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Batch     {}", batch.batch_id);
    let _ = writeln!(out, "Product   {} ({} units)", batch.product_name, batch.batch_size);
    let _ = writeln!(out, "Origin    {}", batch.location);
    let _ = writeln!(out, "Status    {}", batch.status);
    let _ = writeln!(out, "Maker     {}", batch.manufacturer.short());
    let _ = writeln!(out, "Holder    {}", batch.current_handler.short());
    let _ = writeln!(out, "Link      {}", view.link);
    let _ = writeln!(out);

    let _ = writeln!(out, "Timeline");
    if view.history.events.is_empty() {
        let _ = writeln!(out, "  (no events)");
    }
    for record in &view.history.events {
        let _ = writeln!(
            out,
            "  {}. {:<11} {}  {}  {}{}",
            record.id,
            record.action.as_str(),
            when(record.timestamp),
            record.handler.short(),
            record.location,
            reading(record)
        );
    }
    let _ = writeln!(out);

    let report = &view.integrity;
    let _ = writeln!(out, "Integrity {} / 100  {}", report.score, report.status);
    for alert in &report.alerts {
        let _ = writeln!(
            out,
            "  ! {:?} {:?}: {} ({})",
            alert.alert_type,
            alert.severity,
            alert.message,
            when(alert.timestamp)
        );
    }
    out
}

/// Receipts of the scripted run followed by the consumer view.
pub fn demo(outcome: &DemoOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", receipt("Create", &outcome.created.receipt));
    let _ = writeln!(out, "{}", receipt("Transfer", &outcome.transfer));
    let _ = writeln!(out, "{}", receipt("Confirm", &outcome.confirmation));
    let _ = writeln!(out);
    out.push_str(&verification(&outcome.verification));
    out
}
