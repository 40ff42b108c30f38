//! Ledger lookups for transaction verification.
//!
//! Verification never reaches for a global ledger. Callers pass a
//! [`LedgerView`] explicitly, usually a point-in-time [`LedgerState`] snapshot
//! taken from a [`MemoryLedger`] that keeps growing elsewhere.

pub mod error;
pub mod memory;
pub mod view;

pub use error::LedgerError;
pub use memory::{LedgerState, MemoryLedger};
pub use view::{LedgerEntry, LedgerView, SpendRecord};
