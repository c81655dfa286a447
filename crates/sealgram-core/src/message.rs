//! Stored message records

use sealgram_proto::Address;
use serde::{Deserialize, Serialize};

use crate::sealer::SealedKey;

/// Identifier of a stored message, assigned by the ledger in append order.
pub type MessageId = u64;

/// One stored message: public metadata, the encrypted payload, and the
/// sealed one-time key.
///
/// Sender, recipient, and timestamp are assumed public (the ledger exposes
/// them); confidentiality covers only the payload, and access to the key
/// that opens it is enforced by the sealing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Identity that appended the message
    pub sender: Address,
    /// Identity whose inbox indexes the message
    pub recipient: Address,
    /// Encoded payload envelope (`"v1:..."`)
    pub payload: String,
    /// The one-time key, sealed for the recipient; opaque to this core
    pub sealed_key: SealedKey,
    /// Unix timestamp (seconds) assigned by the ledger at append time
    pub timestamp: u64,
}
