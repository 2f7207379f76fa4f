//! Adapters for the integrity ports.

mod anomaly_log;
mod score_source;

pub use anomaly_log::InMemoryAnomalyLog;
pub use score_source::{FixedScoreSource, RngScoreSource};
