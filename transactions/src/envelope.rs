//! The envelope every transaction kind shares: attributes, inputs, outputs, witnesses.

use crate::error::FormatError;
use crate::witness::Witness;
use accrue_types::codec::{MAX_ARRAY_LEN, MAX_VAR_BYTES};
use accrue_types::{
    AssetId, AuthorityHash, BinaryReader, BinaryWriter, CodecError, Decode, Encode, Fixed8, TxHash,
};
use std::cmp::Ordering;
use std::fmt;

/// Maximum attributes a transaction may carry.
pub const MAX_ATTRIBUTES: usize = 16;

/// Supported envelope version.
pub const CURRENT_VERSION: u8 = 0;

/// A reference to one output of a previously committed transaction.
///
/// Ordering is byte-wise over the 34-byte encoding, so the index compares
/// in little-endian byte order rather than numerically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoinReference {
    /// Hash of the transaction that produced the output.
    pub source: TxHash,
    /// Position of the output within `source`.
    pub index: u16,
}

/// A claim names a governance output whose accrued dividend is being minted.
pub type ClaimReference = CoinReference;

impl CoinReference {
    /// Encoded width: 32-byte source hash plus 2-byte index.
    pub const ENCODED_LEN: usize = 34;

    pub fn new(source: TxHash, index: u16) -> Self {
        Self { source, index }
    }
}

impl Ord for CoinReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.index.to_le_bytes().cmp(&other.index.to_le_bytes()))
    }
}

impl PartialOrd for CoinReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CoinReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.index)
    }
}

impl Encode for CoinReference {
    fn encode(&self, writer: &mut BinaryWriter) {
        self.source.encode(writer);
        writer.write_u16(self.index);
    }
}

impl Decode for CoinReference {
    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            source: TxHash::decode(reader)?,
            index: reader.read_u16()?,
        })
    }
}

/// A produced output: `value` of `asset`, spendable by `owner`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionOutput {
    pub asset: AssetId,
    pub value: Fixed8,
    pub owner: AuthorityHash,
}

impl Encode for TransactionOutput {
    fn encode(&self, writer: &mut BinaryWriter) {
        self.asset.encode(writer);
        self.value.encode(writer);
        self.owner.encode(writer);
    }
}

impl Decode for TransactionOutput {
    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            asset: AssetId::decode(reader)?,
            value: Fixed8::decode(reader)?,
            owner: AuthorityHash::decode(reader)?,
        })
    }
}

/// What an attribute's data means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeUsage {
    /// An extra authority that must witness the transaction.
    Script,
    Description,
    Remark,
}

impl AttributeUsage {
    pub fn tag(self) -> u8 {
        match self {
            Self::Script => 0x20,
            Self::Description => 0x90,
            Self::Remark => 0xf0,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x20 => Some(Self::Script),
            0x90 => Some(Self::Description),
            0xf0 => Some(Self::Remark),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Script => "Script",
            Self::Description => "Description",
            Self::Remark => "Remark",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub usage: AttributeUsage,
    pub data: Vec<u8>,
}

impl Attribute {
    /// The authority a `Script` attribute demands, if its data is a 20-byte identity.
    pub fn required_authority(&self) -> Option<AuthorityHash> {
        match self.usage {
            AttributeUsage::Script => {
                let bytes: [u8; 20] = self.data.as_slice().try_into().ok()?;
                Some(AuthorityHash::new(bytes))
            }
            _ => None,
        }
    }

    fn encode(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.usage.tag());
        writer.write_var_bytes(&self.data);
    }

    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self, FormatError> {
        let tag = reader.read_u8()?;
        let usage = AttributeUsage::from_tag(tag).ok_or(FormatError::UnknownAttributeUsage(tag))?;
        let data = reader.read_var_bytes(MAX_VAR_BYTES)?;
        Ok(Self { usage, data })
    }
}

/// Fields shared by every transaction kind.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Envelope {
    pub version: u8,
    pub attributes: Vec<Attribute>,
    pub inputs: Vec<CoinReference>,
    pub outputs: Vec<TransactionOutput>,
    pub witnesses: Vec<Witness>,
}

impl Envelope {
    /// Envelope with the given outputs and nothing else.
    pub fn with_outputs(outputs: Vec<TransactionOutput>) -> Self {
        Self {
            outputs,
            ..Self::default()
        }
    }

    /// Write everything except the witnesses.
    pub(crate) fn encode_unsigned(&self, writer: &mut BinaryWriter) {
        writer.write_var_int(self.attributes.len() as u64);
        for attribute in &self.attributes {
            attribute.encode(writer);
        }
        writer.write_array(&self.inputs);
        writer.write_array(&self.outputs);
    }

    pub(crate) fn encode_witnesses(&self, writer: &mut BinaryWriter) {
        writer.write_array(&self.witnesses);
    }

    /// Read the unsigned fields; `version` is supplied by the caller.
    pub(crate) fn decode_unsigned(
        version: u8,
        reader: &mut BinaryReader<'_>,
    ) -> Result<Self, FormatError> {
        let count = reader.read_var_int(MAX_ATTRIBUTES as u64)? as usize;
        let mut attributes = Vec::with_capacity(count);
        for _ in 0..count {
            attributes.push(Attribute::decode(reader)?);
        }
        let inputs = reader.read_array(MAX_ARRAY_LEN)?;
        let outputs = reader.read_array(MAX_ARRAY_LEN)?;
        Ok(Self {
            version,
            attributes,
            inputs,
            outputs,
            witnesses: Vec::new(),
        })
    }

    pub(crate) fn decode_witnesses(&mut self, reader: &mut BinaryReader<'_>) -> Result<(), FormatError> {
        self.witnesses = reader.read_array(MAX_ARRAY_LEN)?;
        Ok(())
    }
}
