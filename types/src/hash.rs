//! Transaction hash type.
//!
//! Hashes are stored in the byte order they are produced and serialized in.
//! Their textual form follows the reversed-byte display convention, so the
//! string `"00..01"` denotes a hash whose *first* stored byte is `0x01`.

use crate::hex_serde;
use crate::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 32-byte transaction hash.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TxHash([u8; 32]);

impl TxHash {
    pub const ZERO: Self = Self([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Hex text in display order (bytes reversed).
    pub fn to_reversed_hex(&self) -> String {
        hex_serde::encode(&self.0, true)
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({})", &self.to_reversed_hex()[..8])
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_reversed_hex())
    }
}

impl FromStr for TxHash {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_serde::decode_array(s, true).map(Self)
    }
}

impl Serialize for TxHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_reversed_hex())
    }
}

impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reverses_bytes() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        let hash = TxHash::new(bytes);
        let text = hash.to_string();
        assert!(text.ends_with("ab"));
        assert!(text.starts_with("00"));
    }

    #[test]
    fn parse_inverts_display() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x01;
        bytes[31] = 0xfe;
        let hash = TxHash::new(bytes);
        let parsed: TxHash = hash.to_string().parse().unwrap();
        assert_eq!(parsed, hash);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = "abcd".parse::<TxHash>().unwrap_err();
        assert_eq!(
            err,
            TypesError::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }

    #[test]
    fn ordering_is_bytewise_over_stored_bytes() {
        let mut low = [0u8; 32];
        let mut high = [0u8; 32];
        low[31] = 0xff;
        high[0] = 0x01;
        assert!(TxHash::new(low) < TxHash::new(high));
    }
}
