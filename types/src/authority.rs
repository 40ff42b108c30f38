//! Authority identities.
//!
//! An [`AuthorityHash`] is the 20-byte digest of a spending-authorization policy
//! (a witness verification payload). Outputs are owned by an authority, and
//! witnesses must satisfy every authority a transaction requires.

use crate::hex_serde;
use crate::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 20-byte authority (owner) identity.
///
/// Ordering is ascending byte-wise over the stored bytes; every validator
/// relies on this order when matching witnesses against required authorities.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AuthorityHash([u8; 20]);

impl AuthorityHash {
    pub const LEN: usize = 20;

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Debug for AuthorityHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthorityHash({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for AuthorityHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex_serde::encode(&self.0, false))
    }
}

impl FromStr for AuthorityHash {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_serde::decode_array(s, false).map(Self)
    }
}

impl Serialize for AuthorityHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AuthorityHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
