//! # Domain Invariants
//!
//! Business rules every stored batch satisfies.

use super::entities::{Batch, HistoryEvent};
use super::value_objects::HistoryAction;

/// Invariant: History opens with exactly one `CREATED` event.
pub fn invariant_genesis_event(batch: &Batch) -> bool {
    matches!(batch.history.first(), Some(e) if e.action == HistoryAction::Created)
        && batch
            .history
            .iter()
            .filter(|e| e.action == HistoryAction::Created)
            .count()
            == 1
}

/// Invariant: The party in custody is the handler of the latest event.
pub fn invariant_custody_matches_history(batch: &Batch) -> bool {
    batch
        .last_event()
        .is_some_and(|e| e.handler == batch.current_handler)
}

/// Invariant: Status agrees with the latest recorded action.
pub fn invariant_status_matches_history(batch: &Batch) -> bool {
    batch
        .last_event()
        .is_some_and(|e| e.action.resulting_status() == batch.status)
}

/// Invariant: Each recorded action moves status forward or keeps it.
pub fn invariant_monotonic_status(batch: &Batch) -> bool {
    batch.history.windows(2).all(|pair| {
        pair[0]
            .action
            .resulting_status()
            .can_transition_to(pair[1].action.resulting_status())
    })
}

/// Invariant: `after` extends `before` by exactly one event without
/// touching the existing prefix.
pub fn invariant_append_only(before: &[HistoryEvent], after: &[HistoryEvent]) -> bool {
    after.len() == before.len() + 1 && after[..before.len()] == *before
}

/// All per-batch invariants.
pub fn batch_is_consistent(batch: &Batch) -> bool {
    invariant_genesis_event(batch)
        && invariant_custody_matches_history(batch)
        && invariant_status_matches_history(batch)
        && invariant_monotonic_status(batch)
}
