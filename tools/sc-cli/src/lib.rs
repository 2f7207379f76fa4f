//! SC-CLI: Supply-chain tracker command-line driver
//!
//! Plays the manufacturer, distributor, retailer and consumer flows against
//! one in-process ledger and integrity evaluator.

pub mod flows;
pub mod render;

pub use flows::{CliError, DemoOutcome, DemoScript, Tracker, Verification};

/// Subsystem tag used in structured logs.
pub const SUBSYSTEM: &str = "sc-cli";
