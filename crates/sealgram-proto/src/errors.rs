//! Error types for the Sealgram wire format

use thiserror::Error;

/// Convenience alias for wire-format results
pub type Result<T> = core::result::Result<T, ProtocolError>;

/// Errors from envelope framing and address handling
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Envelope carries a version tag this implementation does not know
    ///
    /// Forward-compatibility gate: unknown versions are rejected verbatim,
    /// never partially decoded or guessed at.
    #[error("unsupported payload version: {0:?}")]
    UnsupportedVersion(String),

    /// Envelope is structurally corrupt
    #[error("malformed envelope: {reason}")]
    MalformedEnvelope {
        /// What failed structurally
        reason: String,
    },

    /// Address string does not parse as a canonical 20-byte identifier
    #[error("invalid address: {reason}")]
    InvalidAddress {
        /// What failed to parse or verify
        reason: String,
    },

    /// Recovered key value from the unsealing collaborator is unusable
    #[error("invalid key handle: {reason}")]
    InvalidKeyHandle {
        /// What failed to parse or fit in 160 bits
        reason: String,
    },
}
