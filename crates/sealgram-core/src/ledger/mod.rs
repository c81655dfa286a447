//! Storage ledger abstraction
//!
//! Trait-based abstraction over the external chain that stores message
//! records. The trait is synchronous (no async) to maintain a clean
//! synchronous API design; transport concerns live with the implementation.

mod memory;

use sealgram_proto::Address;
use thiserror::Error;

pub use self::memory::MemoryLedger;
use crate::{
    message::{MessageId, MessageRecord},
    sealer::SealedKey,
};

/// Errors from ledger operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// No record exists for the requested id
    #[error("message not found: {id}")]
    NotFound {
        /// The id that was requested
        id: MessageId,
    },

    /// The backing store could not be reached
    #[error("ledger unavailable: {reason}")]
    Unavailable {
        /// Description of the underlying failure
        reason: String,
    },
}

/// Append-only message storage with a per-recipient inbox index.
///
/// Must be `Clone` (shared across flows), `Send + Sync` (thread-safe), and
/// synchronous. Implementations typically share internal state via `Arc`, so
/// clones access the same underlying ledger.
///
/// # Invariants
///
/// - Ids increase by one per append, starting at 0
/// - A record, once appended, is never mutated or removed
/// - `inbox_of` lists exactly the ids whose record names that recipient, in
///   append order
pub trait Ledger: Clone + Send + Sync + 'static {
    /// Append a message record, assigning the next id and a timestamp.
    fn append(
        &self,
        sender: Address,
        recipient: Address,
        payload: &str,
        sealed_key: &SealedKey,
    ) -> Result<MessageId, LedgerError>;

    /// Load a record by id.
    fn get(&self, id: MessageId) -> Result<MessageRecord, LedgerError>;

    /// Ids of all messages addressed to `recipient`, in append order.
    ///
    /// Empty for recipients who have never received a message.
    fn inbox_of(&self, recipient: Address) -> Result<Vec<MessageId>, LedgerError>;

    /// Total number of records appended.
    fn message_count(&self) -> Result<u64, LedgerError>;
}
