//! Ports for the integrity evaluator.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
