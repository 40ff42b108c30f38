//! Nullable collaborators for deterministic testing.
//!
//! Verification consumes two external capabilities besides the ledger: the
//! claim-amount oracle and the witness verifier. This crate provides
//! replacements that:
//! - Return configured answers
//! - Record how often they were asked
//! - Are `Sync`, so they work under batch verification
//!
//! The ledger needs no nullable: `accrue_ledger::MemoryLedger` is already
//! in-memory and deterministic.

pub mod oracle;
pub mod witness;

pub use oracle::NullOracle;
pub use witness::NullWitnessVerifier;
