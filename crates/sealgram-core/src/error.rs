//! Error type for the send/receive flows

use thiserror::Error;

use crate::{ledger::LedgerError, sealer::SealerError};

/// Errors from [`crate::Courier`] operations.
///
/// Each stage of a flow fails with its own distinguishing kind, preserved
/// here so callers can tell "wrong key / corrupted ciphertext"
/// ([`sealgram_crypto::CryptoError::AuthenticationFailed`]) from "malformed
/// envelope" and from collaborator failures. Nothing is retried internally;
/// retry policy (e.g. re-requesting an unseal) belongs to the caller.
#[derive(Debug, Error)]
pub enum CourierError {
    /// Key generation, derivation, or AEAD failure
    #[error("crypto error: {0}")]
    Crypto(#[from] sealgram_crypto::CryptoError),

    /// Envelope or key-handle failure
    #[error("protocol error: {0}")]
    Protocol(#[from] sealgram_proto::ProtocolError),

    /// Storage ledger failure
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Sealing service failure
    #[error("sealer error: {0}")]
    Sealer(#[from] SealerError),

    /// Decrypted payload is not valid UTF-8 text
    #[error("plaintext is not valid UTF-8")]
    PlaintextNotUtf8(#[from] std::string::FromUtf8Error),
}
