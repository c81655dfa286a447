//! Sealgram Wire Format
//!
//! The versioned payload envelope and the canonical 20-byte address format
//! shared by identities and one-time key seeds.
//!
//! The envelope is the only artifact this protocol persists: a
//! self-describing string tying ciphertext to the key-derivation scheme that
//! produced it. Version tags form an open, append-only registry; an
//! implementation must reject any tag it does not explicitly implement and
//! never fall back to a default codec.
//!
//! ```text
//! payload := version ":" base64(nonce) ":" base64(ciphertext)
//! version := "v1"
//! nonce   := 12 raw bytes
//! ```
//!
//! Addresses are 20-byte identifiers rendered as `0x`-prefixed hex with a
//! Keccak-256 mixed-case checksum, the addressing format of the storage
//! ledger. The key-handle normalizer converts whatever string form the
//! unsealing service returns (checksummed hex or unsigned decimal) back into
//! a canonical address, isolating that external format inconsistency in one
//! place.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod address;
mod envelope;
pub mod errors;
mod key_handle;

pub use address::Address;
pub use envelope::{ENVELOPE_NONCE_SIZE, Envelope, Version};
pub use errors::{ProtocolError, Result};
pub use key_handle::normalize_key_handle;
