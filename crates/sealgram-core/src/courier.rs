//! Send and receive flows
//!
//! The `Courier` drives a message through the full pipeline: disposable key
//! generation, derivation, authenticated encryption, framing, sealing, and
//! storage on the way out; the inverse on the way in. It holds no state of
//! its own beyond handles to the two collaborators — every call derives its
//! own key from its own seed, so concurrent flows are independent.

use sealgram_crypto::{KeySeed, decrypt, derive_message_key, encrypt};
use sealgram_proto::{Address, Envelope, normalize_key_handle};

use crate::{
    error::CourierError,
    ledger::Ledger,
    message::{MessageId, MessageRecord},
    sealer::{AccessProof, Sealer},
};

/// A message opened by its recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedMessage {
    /// The recovered one-time key, in canonical address form
    pub key_address: Address,
    /// The decrypted message text
    pub plaintext: String,
    /// The stored record the message was opened from
    pub record: MessageRecord,
}

/// Drives messages through encryption, sealing, and storage.
#[derive(Clone)]
pub struct Courier<L: Ledger, S: Sealer> {
    ledger: L,
    sealer: S,
}

impl<L: Ledger, S: Sealer> Courier<L, S> {
    /// Create a courier over the given collaborators.
    pub fn new(ledger: L, sealer: S) -> Self {
        Self { ledger, sealer }
    }

    /// Encrypt `plaintext` under a fresh one-time key and store it for
    /// `recipient`.
    ///
    /// The key seed never leaves this call unprotected: the ledger stores
    /// only its sealed form, and the seed itself is dropped on return.
    ///
    /// # Errors
    ///
    /// Entropy, sealing, or ledger failures propagate with their
    /// distinguishing kind.
    pub fn send(
        &self,
        sender: Address,
        recipient: Address,
        plaintext: &str,
    ) -> Result<MessageId, CourierError> {
        let seed = KeySeed::generate()?;
        let key = derive_message_key(&seed);

        let (nonce, ciphertext) = encrypt(plaintext.as_bytes(), &key)?;
        let payload = Envelope::v1(nonce, ciphertext).encode();

        let key_address = Address::from_bytes(seed.into_bytes());
        let sealed_key = self.sealer.seal(&key_address, &recipient)?;

        let id = self.ledger.append(sender, recipient, &payload, &sealed_key)?;

        tracing::debug!(id, sender = %sender, recipient = %recipient, "message sealed and appended");

        Ok(id)
    }

    /// Open the message stored under `id` using the recipient's access
    /// proof.
    ///
    /// # Errors
    ///
    /// - `Ledger(NotFound)`: no such message
    /// - `Sealer(AccessDenied)`: the proof does not authorize the sealed
    ///   recipient
    /// - `Protocol(..)`: the recovered key or stored payload is malformed
    /// - `Crypto(AuthenticationFailed)`: the ciphertext does not
    ///   authenticate under the recovered key — no partial plaintext is
    ///   ever produced
    pub fn read(
        &self,
        id: MessageId,
        proof: &AccessProof,
    ) -> Result<OpenedMessage, CourierError> {
        let record = self.ledger.get(id)?;

        let raw = self.sealer.unseal(&record.sealed_key, proof)?;
        let key_address = normalize_key_handle(&raw)?;

        let seed = KeySeed::from_bytes(key_address.as_bytes())?;
        let key = derive_message_key(&seed);

        let envelope = Envelope::decode(&record.payload)?;
        let plaintext_bytes = decrypt(&envelope.nonce, &envelope.ciphertext, &key)?;
        let plaintext = String::from_utf8(plaintext_bytes)?;

        tracing::debug!(id, recipient = %record.recipient, "message opened");

        Ok(OpenedMessage { key_address, plaintext, record })
    }

    /// Materialize `recipient`'s inbox: ids and records in append order.
    ///
    /// Records come back still sealed; opening each is a separate
    /// [`read`](Self::read) with the recipient's proof.
    pub fn inbox(
        &self,
        recipient: Address,
    ) -> Result<Vec<(MessageId, MessageRecord)>, CourierError> {
        let ids = self.ledger.inbox_of(recipient)?;

        let mut messages = Vec::with_capacity(ids.len());
        for id in ids {
            messages.push((id, self.ledger.get(id)?));
        }

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ledger::MemoryLedger,
        sealer::{RecoveredKeyFormat, SimSealer},
    };

    fn addr(fill: u8) -> Address {
        Address::from_bytes([fill; 20])
    }

    fn test_courier(format: RecoveredKeyFormat) -> Courier<MemoryLedger, SimSealer> {
        Courier::new(MemoryLedger::new(), SimSealer::new(format))
    }

    #[test]
    fn send_appends_a_v1_payload() {
        let courier = test_courier(RecoveredKeyFormat::Hex);

        let id = courier.send(addr(1), addr(2), "hi").unwrap();
        let (_, record) = courier.inbox(addr(2)).unwrap().remove(0);

        assert_eq!(id, 0);
        assert!(record.payload.starts_with("v1:"));
        assert_eq!(record.sender, addr(1));
    }

    #[test]
    fn recipient_opens_what_sender_sent() {
        let courier = test_courier(RecoveredKeyFormat::Hex);
        let recipient = addr(2);

        let id = courier.send(addr(1), recipient, "hello across the ledger").unwrap();

        let proof = AccessProof::new(recipient, vec![1; 64]);
        let opened = courier.read(id, &proof).unwrap();

        assert_eq!(opened.plaintext, "hello across the ledger");
        assert_eq!(opened.record.recipient, recipient);
    }

    #[test]
    fn wrong_identity_cannot_open() {
        let courier = test_courier(RecoveredKeyFormat::Hex);

        let id = courier.send(addr(1), addr(2), "for 0x02 only").unwrap();

        let proof = AccessProof::new(addr(3), vec![1; 64]);
        let result = courier.read(id, &proof);

        assert!(matches!(
            result,
            Err(CourierError::Sealer(crate::SealerError::AccessDenied { .. }))
        ));
    }

    #[test]
    fn each_send_uses_a_fresh_key() {
        let courier = test_courier(RecoveredKeyFormat::Hex);
        let recipient = addr(2);
        let proof = AccessProof::new(recipient, vec![1; 64]);

        let id1 = courier.send(addr(1), recipient, "same text").unwrap();
        let id2 = courier.send(addr(1), recipient, "same text").unwrap();

        let opened1 = courier.read(id1, &proof).unwrap();
        let opened2 = courier.read(id2, &proof).unwrap();

        assert_ne!(opened1.key_address, opened2.key_address);
        assert_ne!(opened1.record.payload, opened2.record.payload);
    }

    #[test]
    fn inbox_lists_messages_in_append_order() {
        let courier = test_courier(RecoveredKeyFormat::Hex);

        courier.send(addr(1), addr(2), "first").unwrap();
        courier.send(addr(3), addr(2), "second").unwrap();
        courier.send(addr(1), addr(4), "elsewhere").unwrap();

        let inbox = courier.inbox(addr(2)).unwrap();
        assert_eq!(inbox.len(), 2);
        assert_eq!(inbox[0].0, 0);
        assert_eq!(inbox[1].0, 1);
    }

    #[test]
    fn read_of_unknown_id_is_not_found() {
        let courier = test_courier(RecoveredKeyFormat::Hex);
        let proof = AccessProof::new(addr(2), vec![1; 64]);

        let result = courier.read(7, &proof);
        assert!(matches!(
            result,
            Err(CourierError::Ledger(crate::LedgerError::NotFound { id: 7 }))
        ));
    }
}
