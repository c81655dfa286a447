//! One-time key seed material

use crate::error::CryptoError;

/// Disposable 20-byte key seed, one per message.
///
/// The seed doubles as an opaque, address-shaped handle for the sealing
/// service; beyond its length, no structural validity is assumed or
/// enforced. It is either generated fresh at send time or reconstructed at
/// read time from an unsealing result.
///
/// # Security
///
/// The seed is secret-equivalent until unsealed for the recipient: anyone
/// holding it can derive the message key. It intentionally does not
/// implement `Debug` or `Display`, so it cannot leak into logs; render it
/// through the canonical address format at the protocol boundary instead.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeySeed([u8; KeySeed::LEN]);

impl KeySeed {
    /// Seed length in bytes (matches the 160-bit ledger identifier space)
    pub const LEN: usize = 20;

    /// Generate a fresh seed from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// - `EntropyUnavailable`: the platform RNG could not be reached. Fatal,
    ///   never retried.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut bytes = [0u8; Self::LEN];
        getrandom::fill(&mut bytes)
            .map_err(|err| CryptoError::EntropyUnavailable { reason: err.to_string() })?;
        Ok(Self(bytes))
    }

    /// Reconstruct a seed from raw bytes (e.g. a normalized unsealing
    /// result, or fixed bytes in tests).
    ///
    /// # Errors
    ///
    /// - `InvalidSeedLength`: input is not exactly 20 bytes. Programmer
    ///   error, never retried.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        <[u8; Self::LEN]>::try_from(bytes).map(Self).map_err(|_| {
            CryptoError::InvalidSeedLength { expected: Self::LEN, actual: bytes.len() }
        })
    }

    /// Raw big-endian seed bytes (the canonical derivation input).
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Consume the seed, returning its bytes.
    pub fn into_bytes(self) -> [u8; Self::LEN] {
        self.0
    }
}
