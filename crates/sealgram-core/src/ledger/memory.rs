use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{SystemTime, UNIX_EPOCH},
};

use sealgram_proto::Address;

use super::{Ledger, LedgerError};
use crate::{
    message::{MessageId, MessageRecord},
    sealer::SealedKey,
};

/// In-memory ledger implementation for testing and simulation
///
/// Records live in a Vec indexed by message id; the inbox index is a
/// `HashMap` from recipient to id list. All state is wrapped in
/// `Arc<Mutex<>>` to allow Clone and concurrent access. Thread-safe through
/// Mutex, but uses `lock().expect()` which will panic if the mutex is
/// poisoned - acceptable for test code.
#[derive(Clone)]
pub struct MemoryLedger {
    inner: Arc<Mutex<MemoryLedgerInner>>,
}

struct MemoryLedgerInner {
    /// Records in append order; the index is the message id
    records: Vec<MessageRecord>,

    /// Per-recipient inbox index, ids in append order
    inboxes: HashMap<Address, Vec<MessageId>>,
}

impl MemoryLedger {
    /// Create a new empty `MemoryLedger`
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryLedgerInner {
                records: Vec::new(),
                inboxes: HashMap::new(),
            })),
        }
    }

    /// Number of distinct recipients with a non-empty inbox.
    ///
    /// Useful for debugging and testing.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned (a thread panicked while
    /// holding the lock). This is acceptable for test/simulation code.
    #[allow(clippy::expect_used)]
    pub fn recipient_count(&self) -> usize {
        self.inner.lock().expect("Mutex poisoned").inboxes.len()
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Unix timestamp in seconds, saturating to 0 for pre-epoch clocks.
fn unix_now_secs() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
}

impl Ledger for MemoryLedger {
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn append(
        &self,
        sender: Address,
        recipient: Address,
        payload: &str,
        sealed_key: &SealedKey,
    ) -> Result<MessageId, LedgerError> {
        let mut inner = self.inner.lock().expect("Mutex poisoned");

        let id = inner.records.len() as MessageId;

        inner.records.push(MessageRecord {
            sender,
            recipient,
            payload: payload.to_string(),
            sealed_key: sealed_key.clone(),
            timestamp: unix_now_secs(),
        });
        inner.inboxes.entry(recipient).or_default().push(id);

        debug_assert_eq!(inner.records.len() as u64 - 1, id);

        Ok(id)
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn get(&self, id: MessageId) -> Result<MessageRecord, LedgerError> {
        let inner = self.inner.lock().expect("Mutex poisoned");

        inner.records.get(id as usize).cloned().ok_or(LedgerError::NotFound { id })
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn inbox_of(&self, recipient: Address) -> Result<Vec<MessageId>, LedgerError> {
        let inner = self.inner.lock().expect("Mutex poisoned");

        Ok(inner.inboxes.get(&recipient).cloned().unwrap_or_default())
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn message_count(&self) -> Result<u64, LedgerError> {
        Ok(self.inner.lock().expect("Mutex poisoned").records.len() as u64)
    }
}
