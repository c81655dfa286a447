//! Simulated sealing service for testing and the CLI demo

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use sealgram_proto::Address;

use super::{AccessProof, SealedKey, Sealer, SealerError};

/// String form the simulated service uses for recovered keys.
///
/// The real threshold service is inconsistent about this: depending on the
/// decryption path, the same 160-bit value comes back as a hex address or as
/// a decimal integer string. The simulator makes that inconsistency a
/// configuration knob so both normalizer paths get exercised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveredKeyFormat {
    /// Lowercase `0x`-prefixed hex (un-checksummed, as raw services return)
    #[default]
    Hex,
    /// Unsigned decimal rendering of the big-endian value
    Decimal,
}

/// In-memory sealing service for testing and simulation
///
/// Sealing stores the key/recipient pair under a fresh opaque handle;
/// unsealing checks that the proof's identity matches the sealed recipient.
/// Signature bytes are NOT verified — the real service authenticates proofs,
/// the simulator only models its access decision. State is behind
/// `Arc<Mutex<>>` so clones share the service, with `lock().expect()`
/// poisoning behavior acceptable for test code.
#[derive(Clone)]
pub struct SimSealer {
    inner: Arc<Mutex<SimSealerInner>>,
    format: RecoveredKeyFormat,
}

struct SimSealerInner {
    /// Sealed entries by handle bytes: (key address, authorized recipient)
    entries: HashMap<Vec<u8>, (Address, Address)>,

    /// Next handle value
    next_handle: u64,
}

impl SimSealer {
    /// Create a simulator that returns recovered keys in the given format.
    pub fn new(format: RecoveredKeyFormat) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SimSealerInner {
                entries: HashMap::new(),
                next_handle: 0,
            })),
            format,
        }
    }

    /// Number of sealed entries held by the simulator.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    pub fn sealed_count(&self) -> usize {
        self.inner.lock().expect("Mutex poisoned").entries.len()
    }
}

impl Default for SimSealer {
    fn default() -> Self {
        Self::new(RecoveredKeyFormat::default())
    }
}

impl Sealer for SimSealer {
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn seal(&self, key_address: &Address, recipient: &Address) -> Result<SealedKey, SealerError> {
        let mut inner = self.inner.lock().expect("Mutex poisoned");

        let handle = inner.next_handle.to_be_bytes().to_vec();
        inner.next_handle += 1;

        inner.entries.insert(handle.clone(), (*key_address, *recipient));

        Ok(SealedKey::from_bytes(handle))
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn unseal(&self, handle: &SealedKey, proof: &AccessProof) -> Result<String, SealerError> {
        let inner = self.inner.lock().expect("Mutex poisoned");

        let (key_address, recipient) =
            inner.entries.get(handle.as_bytes()).ok_or(SealerError::UnknownHandle)?;

        if proof.recipient != *recipient {
            return Err(SealerError::AccessDenied { recipient: proof.recipient });
        }

        Ok(match self.format {
            RecoveredKeyFormat::Hex => format!("0x{}", hex::encode(key_address.as_bytes())),
            RecoveredKeyFormat::Decimal => to_decimal_string(key_address.as_bytes()),
        })
    }
}

/// Render 20 big-endian bytes as an unsigned decimal string.
///
/// Schoolbook long division by 10, emitting one digit per round.
fn to_decimal_string(bytes: &[u8; 20]) -> String {
    let mut value = *bytes;
    let mut digits: Vec<u8> = Vec::new();

    loop {
        let mut remainder: u16 = 0;
        let mut all_zero = true;

        for place in &mut value {
            let acc = (remainder << 8) | u16::from(*place);
            *place = (acc / 10) as u8;
            remainder = acc % 10;
            if *place != 0 {
                all_zero = false;
            }
        }

        digits.push(b'0' + remainder as u8);

        if all_zero {
            break;
        }
    }

    digits.iter().rev().map(|d| char::from(*d)).collect()
}
