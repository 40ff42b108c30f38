//! Fundamental types for the accrue ledger.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! transaction hashes, authority identities, asset ids, fixed-point amounts, the
//! binary codec primitives and chain parameters.

pub mod amount;
pub mod asset;
pub mod authority;
pub mod codec;
pub mod error;
pub mod hash;
pub mod keys;
pub mod params;

mod hex_serde;

pub use amount::Fixed8;
pub use asset::AssetId;
pub use authority::AuthorityHash;
pub use codec::{BinaryReader, BinaryWriter, CodecError, Decode, Encode};
pub use error::TypesError;
pub use hash::TxHash;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use params::{ChainParams, GenerationSegment};
