//! Cryptographic primitives for the accrue ledger.
//!
//! - **Ed25519** for witness signatures
//! - **Blake2b-256** for transaction hashes
//! - **Blake2b-160** for authority identities

pub mod hash;
pub mod keys;
pub mod sign;

pub use hash::{authority_hash, blake2b_160, blake2b_256, hash_transaction};
pub use keys::keypair_from_seed;
pub use sign::{sign_message, verify_signature};
