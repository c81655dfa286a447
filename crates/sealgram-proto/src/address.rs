//! Canonical 20-byte address format with Keccak-256 checksum
//!
//! The storage ledger addresses identities and sealed keys by 160-bit
//! identifiers. Their canonical text form is `0x` followed by 40 hex digits
//! whose letter case encodes a Keccak-256 checksum. Parsing accepts
//! all-lowercase, all-uppercase, or checksummed input; a mixed-case string
//! with a wrong checksum is rejected as a transcription error.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::errors::{ProtocolError, Result};

/// Canonical 20-byte identifier used for identities and one-time key seeds.
///
/// # Invariants
///
/// - Always exactly 20 bytes; constructible only from validated input
/// - `Display` renders the checksummed form, so every address this crate
///   emits round-trips through [`Address::from_str`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; Address::LEN]);

impl Address {
    /// Address length in bytes (160 bits)
    pub const LEN: usize = 20;

    /// Hex marker prefixing the canonical text form
    pub const HEX_MARKER: &'static str = "0x";

    /// Construct an address from raw bytes.
    ///
    /// Any 20-byte value is a structurally valid address; no validity beyond
    /// length is assumed.
    #[must_use]
    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Raw big-endian address bytes.
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Consume the address, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> [u8; Self::LEN] {
        self.0
    }

    /// Parse the canonical `0x`-prefixed text form.
    ///
    /// # Errors
    ///
    /// - `InvalidAddress`: missing `0x` marker, wrong length, non-hex
    ///   digits, or a mixed-case string whose checksum does not verify
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.strip_prefix(Self::HEX_MARKER).ok_or_else(|| {
            ProtocolError::InvalidAddress { reason: "missing 0x marker".to_string() }
        })?;

        if digits.len() != Self::LEN * 2 {
            return Err(ProtocolError::InvalidAddress {
                reason: format!("expected {} hex digits, got {}", Self::LEN * 2, digits.len()),
            });
        }

        let mut bytes = [0u8; Self::LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| {
            ProtocolError::InvalidAddress { reason: "non-hex digit in address".to_string() }
        })?;

        let address = Self(bytes);

        // Uniform case carries no checksum; mixed case must match exactly.
        let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper {
            let expected = address.checksum_digits();
            if digits != expected {
                return Err(ProtocolError::InvalidAddress {
                    reason: "checksum mismatch".to_string(),
                });
            }
        }

        Ok(address)
    }

    /// The 40 checksummed hex digits (without the `0x` marker).
    ///
    /// A digit is uppercased when the corresponding nibble of
    /// `Keccak-256(lowercase hex digits)` is >= 8.
    fn checksum_digits(&self) -> String {
        let lower = hex::encode(self.0);
        let digest = Keccak256::digest(lower.as_bytes());

        lower
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let nibble = if i % 2 == 0 { digest[i / 2] >> 4 } else { digest[i / 2] & 0x0F };
                if nibble >= 8 { c.to_ascii_uppercase() } else { c }
            })
            .collect()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::HEX_MARKER, self.checksum_digits())
    }
}

impl FromStr for Address {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Canonical checksum test vectors from the ledger addressing format.
    const CHECKSUMMED: [&str; 4] = [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn display_produces_checksummed_form() {
        for expected in CHECKSUMMED {
            let address = Address::parse(&expected.to_lowercase()).unwrap();
            assert_eq!(address.to_string(), expected);
        }
    }

    #[test]
    fn parse_accepts_all_lowercase() {
        for vector in CHECKSUMMED {
            let address = Address::parse(&vector.to_lowercase()).unwrap();
            assert_eq!(address.to_string(), vector);
        }
    }

    #[test]
    fn parse_accepts_all_uppercase() {
        for vector in CHECKSUMMED {
            let upper = format!("0x{}", vector[2..].to_uppercase());
            let address = Address::parse(&upper).unwrap();
            assert_eq!(address.to_string(), vector);
        }
    }

    #[test]
    fn parse_accepts_valid_checksum() {
        for vector in CHECKSUMMED {
            assert!(Address::parse(vector).is_ok());
        }
    }

    #[test]
    fn parse_rejects_corrupted_checksum() {
        // Flip the case of one checksummed letter
        let corrupted = "0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        let result = Address::parse(corrupted);
        assert!(matches!(result, Err(ProtocolError::InvalidAddress { .. })));
    }

    #[test]
    fn parse_rejects_missing_marker() {
        let result = Address::parse("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert!(matches!(result, Err(ProtocolError::InvalidAddress { .. })));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(Address::parse("0x1234").is_err());
        assert!(Address::parse("0x").is_err());
        let too_long = format!("0x{}", "ab".repeat(21));
        assert!(Address::parse(&too_long).is_err());
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        let bad = format!("0x{}", "zz".repeat(20));
        let result = Address::parse(&bad);
        assert!(matches!(result, Err(ProtocolError::InvalidAddress { .. })));
    }

    #[test]
    fn round_trips_through_bytes() {
        let bytes = [0x5Au8; 20];
        let address = Address::from_bytes(bytes);
        assert_eq!(address.into_bytes(), bytes);

        let reparsed = Address::parse(&address.to_string()).unwrap();
        assert_eq!(reparsed, address);
    }

    #[test]
    fn zero_address_renders_and_parses() {
        let zero = Address::from_bytes([0u8; 20]);
        let text = zero.to_string();
        assert_eq!(text, format!("0x{}", "0".repeat(40)));
        assert_eq!(Address::parse(&text).unwrap(), zero);
    }
}
