//! Sealing service abstraction
//!
//! Trait-based abstraction over the external threshold decryption service
//! that protects one-time keys. The core never sees how sealing works; it
//! hands over a key address at send time and gets back an opaque handle,
//! and at read time exchanges that handle plus an access proof for the
//! recovered key value.

mod sim;

use sealgram_proto::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::sim::{RecoveredKeyFormat, SimSealer};

/// Opaque sealed form of a one-time key, stored alongside the message.
///
/// Produced and consumed only by the sealing service; this core stores and
/// forwards it without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SealedKey(Vec<u8>);

impl SealedKey {
    /// Wrap raw handle bytes from the sealing service.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw handle bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A recipient's authorization evidence for unsealing.
///
/// This core consumes proofs, it never constructs their signatures; the
/// identity layer produces a statement the sealing service accepts (e.g. a
/// signed decryption request).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessProof {
    /// Identity claiming access
    pub recipient: Address,
    /// Opaque signature over the service's challenge, verified by the
    /// service, not by this core
    pub signature: Vec<u8>,
}

impl AccessProof {
    /// Assemble a proof from an identity and its signature bytes.
    #[must_use]
    pub fn new(recipient: Address, signature: Vec<u8>) -> Self {
        Self { recipient, signature }
    }
}

/// Errors from sealing service operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SealerError {
    /// The proof does not authorize the requesting identity
    #[error("access denied for {recipient}")]
    AccessDenied {
        /// Identity that requested the unseal
        recipient: Address,
    },

    /// The sealed handle is not recognized by the service
    #[error("unknown sealed key handle")]
    UnknownHandle,

    /// The service failed to recover the key
    #[error("unseal failed: {reason}")]
    UnsealFailed {
        /// Description of the service-side failure
        reason: String,
    },
}

/// Seals one-time keys under recipient-controlled access.
///
/// Must be `Clone + Send + Sync` and synchronous, like [`crate::Ledger`].
///
/// # Invariants
///
/// - `unseal(seal(k, r), proof)` succeeds only when `proof` authorizes `r`,
///   and then yields a string form of `k` — canonical hex or unsigned
///   decimal, at the service's discretion (callers normalize)
pub trait Sealer: Clone + Send + Sync + 'static {
    /// Seal a one-time key address for a recipient.
    fn seal(&self, key_address: &Address, recipient: &Address) -> Result<SealedKey, SealerError>;

    /// Recover the key value sealed in `handle`.
    ///
    /// The returned string may be a `0x`-prefixed address or a decimal
    /// rendering of the same 160-bit value; feed it through
    /// [`sealgram_proto::normalize_key_handle`].
    fn unseal(&self, handle: &SealedKey, proof: &AccessProof) -> Result<String, SealerError>;
}
