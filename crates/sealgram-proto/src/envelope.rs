//! Versioned payload envelope
//!
//! The envelope ties a ciphertext to the key-derivation scheme that produced
//! it: `"<version>:<base64(nonce)>:<base64(ciphertext)>"`. The colon is the
//! sole field separator; the standard base64 alphabet never contains it.
//!
//! # Invariants
//!
//! - The version tag is gated before any field is decoded. An unknown tag is
//!   rejected outright; later versions may change the field structure, so
//!   nothing after the tag is interpreted.
//! - Round-trip: `Envelope::decode(&e.encode())` reproduces `e` exactly.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::errors::{ProtocolError, Result};

/// AEAD nonce size fixed by the `v1` envelope format (12 bytes)
pub const ENVELOPE_NONCE_SIZE: usize = 12;

/// Field separator in the envelope text form
const SEPARATOR: char = ':';

/// Payload format versions.
///
/// An open, append-only registry: tags are never reassigned and unknown tags
/// are rejected, never mapped onto a default codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// SHA-256 key derivation + AES-256-GCM, 12-byte nonce, base64 fields
    V1,
}

impl Version {
    /// Wire tag for this version.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }

    /// Look up a wire tag. `None` if unrecognized.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "v1" => Some(Self::V1),
            _ => None,
        }
    }
}

/// A framed message payload: version, nonce, and ciphertext.
///
/// Immutable once created; the only persisted artifact of the protocol core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Format version the ciphertext was produced under
    pub version: Version,
    /// The 12-byte AEAD nonce
    pub nonce: [u8; ENVELOPE_NONCE_SIZE],
    /// The ciphertext including the authentication tag
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Frame a nonce and ciphertext under the current (`v1`) format.
    #[must_use]
    pub fn v1(nonce: [u8; ENVELOPE_NONCE_SIZE], ciphertext: Vec<u8>) -> Self {
        Self { version: Version::V1, nonce, ciphertext }
    }

    /// Encode into the transportable text form.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.version.as_tag(),
            BASE64.encode(self.nonce),
            BASE64.encode(&self.ciphertext),
        )
    }

    /// Decode and validate the text form.
    ///
    /// # Errors
    ///
    /// - `UnsupportedVersion`: the version tag is not in the registry.
    ///   Checked first — unknown versions are never partially decoded.
    /// - `MalformedEnvelope`: field count is not exactly three, a required
    ///   field is empty, a base64 field fails to decode, or the nonce field
    ///   does not decode to exactly 12 bytes.
    pub fn decode(payload: &str) -> Result<Self> {
        let fields: Vec<&str> = payload.split(SEPARATOR).collect();

        // Version gates before structure: a later version may change the
        // field layout, so nothing past the tag is interpreted for it.
        let tag = fields.first().copied().unwrap_or_default();
        let version = Version::from_tag(tag)
            .ok_or_else(|| ProtocolError::UnsupportedVersion(tag.to_string()))?;

        if fields.len() != 3 {
            return Err(ProtocolError::MalformedEnvelope {
                reason: format!("expected 3 fields, got {}", fields.len()),
            });
        }

        let (nonce_field, ciphertext_field) = (fields[1], fields[2]);
        if nonce_field.is_empty() || ciphertext_field.is_empty() {
            return Err(ProtocolError::MalformedEnvelope {
                reason: "empty nonce or ciphertext field".to_string(),
            });
        }

        let nonce_bytes = BASE64.decode(nonce_field).map_err(|_| {
            ProtocolError::MalformedEnvelope { reason: "nonce is not valid base64".to_string() }
        })?;
        let nonce: [u8; ENVELOPE_NONCE_SIZE] = nonce_bytes.as_slice().try_into().map_err(|_| {
            ProtocolError::MalformedEnvelope {
                reason: format!(
                    "nonce must be {ENVELOPE_NONCE_SIZE} bytes, got {}",
                    nonce_bytes.len()
                ),
            }
        })?;

        let ciphertext = BASE64.decode(ciphertext_field).map_err(|_| {
            ProtocolError::MalformedEnvelope {
                reason: "ciphertext is not valid base64".to_string(),
            }
        })?;

        Ok(Self { version, nonce, ciphertext })
    }
}
