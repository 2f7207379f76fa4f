//! Domain layer for integrity evaluation.

pub mod analytics;
pub mod anomaly;
pub mod config;
pub mod errors;
pub mod report;

pub use analytics::{recent_activity, summarize, ActivityPoint, AnalyticsSnapshot, ACTIVITY_DAYS};
pub use anomaly::{AnomalyRecord, AnomalyReport, ANOMALY_ACK};
pub use config::{classify, IntegrityConfig};
pub use errors::IntegrityError;
pub use report::*;
