//! Binary codec primitives.
//!
//! All integers are little-endian. Variable-length integers use the compact
//! form: values below `0xFD` take one byte, otherwise a marker byte
//! (`0xFD`, `0xFE`, `0xFF`) is followed by a `u16`, `u32` or `u64`.
//! Only the minimal encoding of a value is accepted when decoding, so every
//! value has exactly one byte representation.

use crate::{AssetId, AuthorityHash, Fixed8, TxHash};
use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

/// Upper bound on decoded array lengths.
pub const MAX_ARRAY_LEN: u64 = 0x10000;

/// Upper bound on decoded byte-string lengths.
pub const MAX_VAR_BYTES: u64 = 0x10000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("non-canonical variable-length integer")]
    NonCanonicalVarInt,

    #[error("length {len} exceeds limit {max}")]
    LengthExceeded { len: u64, max: u64 },

    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}

/// A value with a fixed binary encoding.
pub trait Encode {
    fn encode(&self, writer: &mut BinaryWriter);

    fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        self.encode(&mut writer);
        writer.into_bytes()
    }
}

/// A value that can be read back from its binary encoding.
pub trait Decode: Sized {
    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self, CodecError>;
}

/// Append-only byte sink.
#[derive(Default)]
pub struct BinaryWriter {
    buf: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        let mut b = [0u8; 2];
        LittleEndian::write_u16(&mut b, value);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_u32(&mut self, value: u32) {
        let mut b = [0u8; 4];
        LittleEndian::write_u32(&mut b, value);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_u64(&mut self, value: u64) {
        let mut b = [0u8; 8];
        LittleEndian::write_u64(&mut b, value);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_i64(&mut self, value: i64) {
        let mut b = [0u8; 8];
        LittleEndian::write_i64(&mut b, value);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_var_int(&mut self, value: u64) {
        if value < 0xFD {
            self.write_u8(value as u8);
        } else if value <= 0xFFFF {
            self.write_u8(0xFD);
            self.write_u16(value as u16);
        } else if value <= 0xFFFF_FFFF {
            self.write_u8(0xFE);
            self.write_u32(value as u32);
        } else {
            self.write_u8(0xFF);
            self.write_u64(value);
        }
    }

    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_var_int(bytes.len() as u64);
        self.write_raw(bytes);
    }

    /// Length-prefixed array, elements written in order.
    pub fn write_array<T: Encode>(&mut self, items: &[T]) {
        self.write_var_int(items.len() as u64);
        for item in items {
            item.encode(self);
        }
    }
}

/// Cursor over a borrowed byte slice.
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Fail unless every byte has been consumed.
    pub fn finish(&self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < n {
            return Err(CodecError::UnexpectedEof {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    pub fn read_i64(&mut self) -> Result<i64, CodecError> {
        Ok(LittleEndian::read_i64(self.take(8)?))
    }

    pub fn read_array_fixed<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Read a compact integer no larger than `max`.
    pub fn read_var_int(&mut self, max: u64) -> Result<u64, CodecError> {
        let value = match self.read_u8()? {
            0xFD => {
                let v = u64::from(self.read_u16()?);
                if v < 0xFD {
                    return Err(CodecError::NonCanonicalVarInt);
                }
                v
            }
            0xFE => {
                let v = u64::from(self.read_u32()?);
                if v <= 0xFFFF {
                    return Err(CodecError::NonCanonicalVarInt);
                }
                v
            }
            0xFF => {
                let v = self.read_u64()?;
                if v <= 0xFFFF_FFFF {
                    return Err(CodecError::NonCanonicalVarInt);
                }
                v
            }
            b => u64::from(b),
        };
        if value > max {
            return Err(CodecError::LengthExceeded { len: value, max });
        }
        Ok(value)
    }

    pub fn read_var_bytes(&mut self, max: u64) -> Result<Vec<u8>, CodecError> {
        let len = self.read_var_int(max)? as usize;
        Ok(self.take(len)?.to_vec())
    }

    /// Length-prefixed array of at most `max` elements, in encoded order.
    pub fn read_array<T: Decode>(&mut self, max: u64) -> Result<Vec<T>, CodecError> {
        let len = self.read_var_int(max)? as usize;
        // Reserve no more than the remaining input could hold.
        let mut items = Vec::with_capacity(len.min(self.remaining()));
        for _ in 0..len {
            items.push(T::decode(self)?);
        }
        Ok(items)
    }
}

impl Encode for TxHash {
    fn encode(&self, writer: &mut BinaryWriter) {
        writer.write_raw(self.as_bytes());
    }
}

impl Decode for TxHash {
    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self, CodecError> {
        reader.read_array_fixed().map(TxHash::new)
    }
}

impl Encode for AssetId {
    fn encode(&self, writer: &mut BinaryWriter) {
        writer.write_raw(self.as_bytes());
    }
}

impl Decode for AssetId {
    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self, CodecError> {
        reader.read_array_fixed().map(AssetId::new)
    }
}

impl Encode for AuthorityHash {
    fn encode(&self, writer: &mut BinaryWriter) {
        writer.write_raw(self.as_bytes());
    }
}

impl Decode for AuthorityHash {
    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self, CodecError> {
        reader.read_array_fixed().map(AuthorityHash::new)
    }
}

impl Encode for Fixed8 {
    fn encode(&self, writer: &mut BinaryWriter) {
        writer.write_i64(self.raw());
    }
}

impl Decode for Fixed8 {
    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self, CodecError> {
        reader.read_i64().map(Fixed8::from_raw)
    }
}
