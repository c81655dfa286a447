//! Message encryption using AES-256-GCM
//!
//! Nonces are drawn from the OS entropy source; `encrypt_with_nonce` takes a
//! caller-provided nonce for deterministic testing. Each key seed protects
//! exactly one message, so nonce reuse under a derived key cannot occur as
//! long as every message gets its own seed.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};

use crate::{derivation::DerivedKey, error::CryptoError};

/// AES-GCM nonce size (12 bytes)
pub const NONCE_SIZE: usize = 12;

/// GCM authentication tag size (16 bytes)
pub const TAG_SIZE: usize = 16;

/// Encrypt a message using AES-256-GCM with a fresh random nonce.
///
/// Returns the generated nonce and the ciphertext. The ciphertext includes
/// the 16-byte authentication tag; no associated data is used.
///
/// # Errors
///
/// - `EntropyUnavailable`: the platform RNG could not supply nonce bytes
pub fn encrypt(
    plaintext: &[u8],
    key: &DerivedKey,
) -> Result<([u8; NONCE_SIZE], Vec<u8>), CryptoError> {
    let mut nonce = [0u8; NONCE_SIZE];
    getrandom::fill(&mut nonce)
        .map_err(|err| CryptoError::EntropyUnavailable { reason: err.to_string() })?;

    let ciphertext = encrypt_with_nonce(plaintext, key, nonce);
    Ok((nonce, ciphertext))
}

/// Encrypt a message using AES-256-GCM with a caller-provided nonce.
///
/// # Security
///
/// The caller MUST NOT reuse a nonce with the same derived key. Production
/// code goes through [`encrypt`], which draws a fresh nonce per call; this
/// variant exists for deterministic testing.
pub fn encrypt_with_nonce(
    plaintext: &[u8],
    key: &DerivedKey,
    nonce: [u8; NONCE_SIZE],
) -> Vec<u8> {
    let cipher = Aes256Gcm::new(key.key().into());

    let Ok(ciphertext) = cipher.encrypt(Nonce::from_slice(&nonce), plaintext) else {
        unreachable!("AES-256-GCM encryption cannot fail with valid inputs");
    };

    ciphertext
}

/// Decrypt a message using AES-256-GCM.
///
/// Returns the decrypted plaintext.
///
/// # Errors
///
/// - `InvalidNonceLength`: nonce is not exactly 12 bytes (programmer error,
///   never a recoverable protocol condition)
/// - `AuthenticationFailed`: authentication tag did not verify (tampering,
///   wrong key, or wrong nonce) — distinct from envelope decoding errors so
///   callers can tell "wrong key / corrupted" from "malformed envelope"
pub fn decrypt(
    nonce: &[u8],
    ciphertext: &[u8],
    key: &DerivedKey,
) -> Result<Vec<u8>, CryptoError> {
    let nonce: [u8; NONCE_SIZE] = nonce.try_into().map_err(|_| {
        CryptoError::InvalidNonceLength { expected: NONCE_SIZE, actual: nonce.len() }
    })?;

    let cipher = Aes256Gcm::new(key.key().into());

    cipher
        .decrypt(Nonce::from_slice(&nonce), ciphertext)
        .map_err(|_| CryptoError::AuthenticationFailed)
}
