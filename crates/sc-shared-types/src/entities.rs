//! # Shared Entities
//!
//! Identifier and party types exchanged between the ledger and its consumers.

use crate::errors::AddressError;
use crate::DEMO_MARKER;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// One day in milliseconds.
pub const DAY_MS: Timestamp = 24 * 60 * 60 * 1000;

/// Number of hex digits in a party address (20 bytes).
const ADDRESS_HEX_LEN: usize = 40;

/// Unique identifier of a tracked batch.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(String);

impl BatchId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Demo ids resolve to the canned batch when they are not stored.
    pub fn is_demo(&self) -> bool {
        self.0.contains(DEMO_MARKER)
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BatchId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BatchId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Simulated transaction reference returned by state-changing operations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(String);

impl TxHash {
    /// Render raw bytes as a `0x`-prefixed lowercase hex reference.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    /// Borrow the reference text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address of a party (wallet) taking part in the custody chain.
///
/// Valid iff it is `0x` followed by exactly 40 hex digits. Input casing
/// is kept, so checksummed addresses render unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartyAddress(String);

impl PartyAddress {
    /// Parse and validate an address.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        if Self::is_valid(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(AddressError::Malformed(input.to_string()))
        }
    }

    /// Wrap a known-good address, such as a compile-time constant.
    ///
    /// Shape is only checked in debug builds.
    pub fn new_unchecked(input: &str) -> Self {
        debug_assert!(Self::is_valid(input), "malformed address {input:?}");
        Self(input.to_string())
    }

    /// Check the `0x` + 40 hex digit shape without allocating.
    pub fn is_valid(input: &str) -> bool {
        match input.strip_prefix("0x") {
            Some(digits) => digits.len() == ADDRESS_HEX_LEN && hex::decode(digits).is_ok(),
            None => false,
        }
    }

    /// Borrow the address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for display, e.g. `0x742d...0bEb`.
    pub fn short(&self) -> String {
        let len = self.0.len();
        format!("{}...{}", &self.0[..6], &self.0[len - 4..])
    }
}

impl fmt::Display for PartyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PartyAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PartyAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PartyAddress> for String {
    fn from(value: PartyAddress) -> Self {
        value.0
    }
}

/// Participant roles served by the dashboards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Creates batches.
    Manufacturer,
    /// Moves batches between handlers.
    Distributor,
    /// Confirms receipt at the end of the chain.
    Retailer,
    /// Verifies provenance.
    Consumer,
}

impl Role {
    /// All roles in custody order.
    pub const ALL: [Role; 4] = [
        Role::Manufacturer,
        Role::Distributor,
        Role::Retailer,
        Role::Consumer,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Manufacturer => "Manufacturer",
            Role::Distributor => "Distributor",
            Role::Retailer => "Retailer",
            Role::Consumer => "Consumer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANUFACTURER: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb0";

    #[test]
    fn test_address_accepts_mixed_case() {
        let addr = PartyAddress::parse(MANUFACTURER).unwrap();
        assert_eq!(addr.as_str(), MANUFACTURER);
    }

    #[test]
    fn test_address_rejects_missing_prefix() {
        let err = PartyAddress::parse("742d35Cc6634C0532925a3b844Bc9e7595f0bEb0").unwrap_err();
        assert!(matches!(err, AddressError::Malformed(_)));
    }

    #[test]
    fn test_address_rejects_wrong_length() {
        assert!(!PartyAddress::is_valid("0x1234"));
        assert!(!PartyAddress::is_valid(
            "0x12345678901234567890123456789012345678901"
        ));
    }

    #[test]
    fn test_address_rejects_non_hex() {
        assert!(!PartyAddress::is_valid(
            "0xZZ34567890123456789012345678901234567890"
        ));
    }

    #[test]
    fn test_address_short_form() {
        let addr = PartyAddress::parse(MANUFACTURER).unwrap();
        assert_eq!(addr.short(), "0x742d...bEb0");
    }

    #[test]
    fn test_address_serde_validates() {
        let ok: Result<PartyAddress, _> = serde_json::from_str(&format!("\"{MANUFACTURER}\""));
        assert!(ok.is_ok());
        let bad: Result<PartyAddress, _> = serde_json::from_str("\"0xnope\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_batch_id_demo_marker() {
        assert!(BatchId::from("BATCH-2026-001-DEMO").is_demo());
        assert!(BatchId::from("X-DEMO").is_demo());
        assert!(!BatchId::from("BATCH-2026-0042-123456").is_demo());
        // Marker is case-sensitive.
        assert!(!BatchId::from("batch-demo").is_demo());
    }

    #[test]
    fn test_tx_hash_from_bytes() {
        let hash = TxHash::from_bytes(&[0xab, 0x01]);
        assert_eq!(hash.as_str(), "0xab01");
    }

    #[test]
    fn test_role_serializes_screaming_case() {
        let json = serde_json::to_string(&Role::Manufacturer).unwrap();
        assert_eq!(json, "\"MANUFACTURER\"");
        assert_eq!(Role::Retailer.label(), "Retailer");
    }
}
