//! Hex string helpers shared by the fixed-size byte types.

use crate::TypesError;

/// Decode `N` bytes from hex, optionally reversing them (display order).
pub(crate) fn decode_array<const N: usize>(s: &str, reversed: bool) -> Result<[u8; N], TypesError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|e| TypesError::InvalidHex(e.to_string()))?;
    let mut out: [u8; N] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| TypesError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        })?;
    if reversed {
        out.reverse();
    }
    Ok(out)
}

/// Encode bytes as lowercase hex, optionally in reversed (display) order.
pub(crate) fn encode(bytes: &[u8], reversed: bool) -> String {
    if reversed {
        let mut rev = bytes.to_vec();
        rev.reverse();
        hex::encode(rev)
    } else {
        hex::encode(bytes)
    }
}
