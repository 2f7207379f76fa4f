//! # Shared Types Crate
//!
//! Primitive types used across the supply-chain tracker crates.
//!
//! ## Design Principles
//!
//! - **Validated at the edge**: a `PartyAddress` can only be constructed from a
//!   well-formed `0x` + 40 hex digit string.
//! - **Opaque identifiers**: `BatchId` and `TxHash` are newtypes so they cannot be
//!   swapped for one another or for free-text fields.
//! - **Only wire format**: the verify deep link `{base}/verify/{batch_id}` is the
//!   one textual format other surfaces exchange with the ledger.

pub mod deep_link;
pub mod entities;
pub mod errors;
pub mod latency;

pub use deep_link::{generate_deep_link, parse_batch_id_from_link, VERIFY_PATH};
pub use entities::*;
pub use errors::*;
pub use latency::LatencyProfile;

/// Identifier of the canned demonstration batch.
pub const DEMO_BATCH_ID: &str = "BATCH-2026-001-DEMO";

/// Product carried by the canned demonstration batch.
pub const DEMO_PRODUCT_NAME: &str = "Premium Coffee Beans";

/// Marker substring that routes lookups to the canned demonstration data.
pub const DEMO_MARKER: &str = "DEMO";

/// Default public base URL embedded in verify deep links.
pub const DEFAULT_APP_URL: &str = "https://yourapp.vercel.app";
