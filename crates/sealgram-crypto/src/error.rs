//! Error types for cryptographic operations

use thiserror::Error;

/// Errors from key generation, derivation, and AEAD operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The platform RNG could not be reached
    #[error("entropy source unavailable: {reason}")]
    EntropyUnavailable {
        /// Description of the underlying RNG failure
        reason: String,
    },

    /// Key seed material has the wrong length
    #[error("invalid key seed length: expected {expected} bytes, got {actual}")]
    InvalidSeedLength {
        /// Required seed length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// AEAD nonce has the wrong length
    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength {
        /// Required nonce length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Decryption failed (authentication tag mismatch)
    ///
    /// Raised for tampered ciphertext, a wrong key, or a wrong nonce. GCM is
    /// atomic: either the whole ciphertext authenticates or nothing is
    /// produced.
    #[error("authentication failed: ciphertext rejected")]
    AuthenticationFailed,
}

impl CryptoError {
    /// Returns true if this error is an API misuse that must never be
    /// retried.
    ///
    /// Length violations indicate a caller bug, not a recoverable protocol
    /// condition. `EntropyUnavailable` is platform misconfiguration and
    /// `AuthenticationFailed` is an integrity violation; neither is retried
    /// internally, but they originate outside this crate's callers.
    pub fn is_programmer_error(&self) -> bool {
        matches!(self, Self::InvalidSeedLength { .. } | Self::InvalidNonceLength { .. })
    }
}
