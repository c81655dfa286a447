//! Key derivation from seed material using SHA-256

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::seed::KeySeed;

/// A 256-bit symmetric key derived from a [`KeySeed`].
///
/// Exists only transiently in memory for the duration of one encrypt or
/// decrypt operation; never persisted. Zeroized on drop.
#[derive(Clone)]
pub struct DerivedKey {
    /// The 32-byte symmetric key for AES-256-GCM
    key: [u8; 32],
}

impl DerivedKey {
    /// 32-byte symmetric key for AES-256-GCM AEAD.
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }
}

// Implement Drop to zeroize key material
impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Derive the message key from a key seed.
///
/// `DerivedKey = SHA-256(seed bytes)`, over the raw 20-byte big-endian seed
/// encoding. Sender and recipient derive the key independently, so this
/// function is frozen for the `v1` wire format: the hash and the seed byte
/// encoding must never change without a payload version bump.
///
/// # Security
///
/// - Deterministic: same seed always produces the same key, across processes
///   and implementations
/// - One-way: the seed cannot be recovered from the derived key
pub fn derive_message_key(seed: &KeySeed) -> DerivedKey {
    let digest = Sha256::digest(seed.as_bytes());

    let mut key = [0u8; 32];
    key.copy_from_slice(&digest);

    DerivedKey { key }
}
