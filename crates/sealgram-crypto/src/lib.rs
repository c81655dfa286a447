//! Sealgram Cryptographic Primitives
//!
//! Cryptographic building blocks for Sealgram's hybrid encryption. Pure
//! functions with deterministic outputs. Randomness is drawn from the OS
//! entropy source, with caller-provided variants for deterministic testing.
//!
//! # Key Lifecycle
//!
//! Each message is protected by a disposable key seed. The seed is 20 random
//! bytes shaped like a ledger address so the sealing service can treat it as
//! an opaque handle. The cipher key is derived from the seed by a fixed
//! one-way hash; sender and recipient derive it independently, so the
//! derivation is frozen for the `v1` wire format.
//!
//! ```text
//! Key Seed (20 random bytes, one per message)
//!        │
//!        ▼
//! SHA-256 → Derived Key (256-bit, transient)
//!        │
//!        ▼
//! AES-256-GCM → Nonce + Ciphertext
//! ```
//!
//! The derived key exists only for the duration of one encrypt or decrypt
//! call and is zeroized when dropped. The seed itself is never persisted by
//! this crate; protecting it at rest is the sealing collaborator's job.
//!
//! # Security
//!
//! Single-Use Keys:
//! - One seed encrypts exactly one message, so nonce reuse under a given
//!   derived key cannot occur by construction
//! - Encrypting the same plaintext twice yields unrelated ciphertexts
//!
//! Authenticity:
//! - AES-256-GCM provides tamper-proof encryption
//! - Failed authentication tag -> reject message, no partial plaintext
//!
//! Determinism:
//! - `derive_message_key` is a pure function of the seed bytes; the hash and
//!   the raw 20-byte big-endian seed encoding must never change without a
//!   payload version bump

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod derivation;
mod encryption;
mod error;
mod seed;

pub use derivation::{DerivedKey, derive_message_key};
pub use encryption::{NONCE_SIZE, TAG_SIZE, decrypt, encrypt, encrypt_with_nonce};
pub use error::CryptoError;
pub use seed::KeySeed;
