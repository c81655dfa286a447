//! Sealgram Core
//!
//! Message records, collaborator interfaces, and the send/receive flows
//! that tie the cryptographic core to its external collaborators.
//!
//! # Architecture
//!
//! The protocol core ([`sealgram_crypto`], [`sealgram_proto`]) is pure; this
//! crate adds the two collaborator seams and the [`Courier`] that drives a
//! message through them:
//!
//! ```text
//! send:    KeySeed ─▶ DerivedKey ─▶ AES-GCM ─▶ Envelope ─┐
//!                │                                       ▼
//!                └───────▶ Sealer::seal ─────▶ Ledger::append
//!
//! receive: Ledger::get ─▶ Sealer::unseal ─▶ normalize ─▶ DerivedKey
//!                                                           │
//!                              plaintext ◀─ AES-GCM ◀─ Envelope::decode
//! ```
//!
//! The [`Ledger`] and [`Sealer`] traits mirror what the external chain and
//! threshold decryption service provide. [`MemoryLedger`] and [`SimSealer`]
//! are in-process reference implementations for tests, simulation, and the
//! CLI demo; they are not durable.
//!
//! # Concurrency
//!
//! Traits are synchronous and implementations are `Clone + Send + Sync`;
//! clones share state internally. Courier calls share no mutable state with
//! each other — every message derives its own key from its own seed, so
//! concurrent sends and reads are independent.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod courier;
mod error;
mod ledger;
mod message;
mod sealer;

pub use courier::{Courier, OpenedMessage};
pub use error::CourierError;
pub use ledger::{Ledger, LedgerError, MemoryLedger};
pub use message::{MessageId, MessageRecord};
pub use sealer::{AccessProof, RecoveredKeyFormat, SealedKey, Sealer, SealerError, SimSealer};
