//! # SC-02 Integrity Evaluator
//!
//! Display-only trust verdicts for batches, anomaly reports and dashboard
//! analytics.
//!
//! **Subsystem ID:** 02  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Verdicts
//!
//! | Score | Status | Alerts |
//! |-------|--------|--------|
//! | `>= 90` | `SAFE` | none |
//! | `>= 70` | `WARNING` | one temperature alert |
//! | `< 70` | `TAMPERED` | none; temperature and access checks fail |
//!
//! Ids containing `DEMO` always score 95. Other ids draw a score uniformly
//! from `[70, 100)` on every call; nothing is cached. The score is a
//! placeholder and carries no tamper-detection meaning.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{FixedScoreSource, InMemoryAnomalyLog, RngScoreSource};
pub use domain::{
    classify, ActivityPoint, Alert, AlertType, AnalyticsSnapshot, AnomalyRecord, AnomalyReport,
    IntegrityChecks, IntegrityConfig, IntegrityError, IntegrityReport, IntegrityStatus, Severity,
};
pub use ports::{AnomalyLog, IntegrityApi, ScoreSource};
pub use service::IntegrityService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem tag used in structured logs.
pub const SUBSYSTEM: &str = "sc-02-integrity";
