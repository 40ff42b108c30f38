//! accrue transaction kinds and their wire format.
//!
//! Transaction kinds:
//! - **Contract**: ordinary transfer; consumes inputs, produces outputs, mints nothing
//! - **Claim**: mints the dividend asset accrued by referenced governance outputs
//!
//! Every kind shares an [`Envelope`] (attributes, inputs, outputs, witnesses).
//! Wire layout, all integers little-endian:
//!
//! ```text
//! kind: u8 | version: u8 | exclusive data | attributes | inputs | outputs | witnesses
//! ```
//!
//! The transaction hash covers everything before the witnesses.

pub mod claim;
pub mod contract;
pub mod envelope;
pub mod error;
pub mod json;
pub mod validation;
pub mod witness;

pub use claim::{check_claims, ClaimTx};
pub use contract::ContractTx;
pub use envelope::{
    Attribute, AttributeUsage, ClaimReference, CoinReference, Envelope, TransactionOutput,
    CURRENT_VERSION, MAX_ATTRIBUTES,
};
pub use error::{FormatError, TransactionError};
pub use validation::validate_structure;
pub use witness::{standard_authority, SignatureWitnessVerifier, Witness, WitnessVerifier};

use accrue_types::{BinaryReader, BinaryWriter, Encode, TxHash};

/// Transaction kind discriminant, written as the first byte on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Contract,
    Claim,
}

impl TransactionKind {
    pub fn tag(self) -> u8 {
        match self {
            Self::Contract => 0x80,
            Self::Claim => 0x02,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x80 => Some(Self::Contract),
            0x02 => Some(Self::Claim),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Contract => "ContractTransaction",
            Self::Claim => "ClaimTransaction",
        }
    }
}

/// The unified transaction enum wrapping every accrue transaction kind.
///
/// Immutable once constructed; [`Transaction::with_witnesses`] builds a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transaction {
    Contract(ContractTx),
    Claim(ClaimTx),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Contract(_) => TransactionKind::Contract,
            Self::Claim(_) => TransactionKind::Claim,
        }
    }

    pub fn envelope(&self) -> &Envelope {
        match self {
            Self::Contract(tx) => &tx.envelope,
            Self::Claim(tx) => &tx.envelope,
        }
    }

    /// The claims of a claim transaction, `None` for other kinds.
    pub fn claims(&self) -> Option<&[ClaimReference]> {
        match self {
            Self::Claim(tx) => Some(&tx.claims),
            Self::Contract(_) => None,
        }
    }

    /// Replace the witnesses, leaving the hash unchanged.
    pub fn with_witnesses(mut self, witnesses: Vec<Witness>) -> Self {
        match &mut self {
            Self::Contract(tx) => tx.envelope.witnesses = witnesses,
            Self::Claim(tx) => tx.envelope.witnesses = witnesses,
        }
        self
    }

    /// Encoding of every field except the witnesses.
    pub fn unsigned_bytes(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        self.encode_unsigned(&mut writer);
        writer.into_bytes()
    }

    /// Blake2b-256 over [`Transaction::unsigned_bytes`]. Recomputed on each call.
    pub fn hash(&self) -> TxHash {
        accrue_crypto::hash_transaction(&self.unsigned_bytes())
    }

    fn encode_unsigned(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.kind().tag());
        writer.write_u8(self.envelope().version);
        match self {
            Self::Contract(_) => {}
            Self::Claim(tx) => tx.encode_exclusive(writer),
        }
        self.envelope().encode_unsigned(writer);
    }

    /// Decode one complete transaction; trailing bytes are an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        let mut reader = BinaryReader::new(bytes);
        let tx = Self::decode_from(&mut reader)?;
        reader.finish()?;
        Ok(tx)
    }

    /// Decode one transaction from the reader's current position.
    pub fn decode_from(reader: &mut BinaryReader<'_>) -> Result<Self, FormatError> {
        let tag = reader.read_u8()?;
        let kind = TransactionKind::from_tag(tag).ok_or(FormatError::UnknownKind(tag))?;
        let version = reader.read_u8()?;
        if version != CURRENT_VERSION {
            return Err(FormatError::UnsupportedVersion(version));
        }
        let claims = match kind {
            TransactionKind::Contract => None,
            TransactionKind::Claim => Some(ClaimTx::decode_exclusive(reader)?),
        };
        let mut envelope = Envelope::decode_unsigned(version, reader)?;
        envelope.decode_witnesses(reader)?;
        Ok(match claims {
            None => Self::Contract(ContractTx::new(envelope)),
            Some(claims) => Self::Claim(ClaimTx::new(claims, envelope)),
        })
    }
}

impl Encode for Transaction {
    fn encode(&self, writer: &mut BinaryWriter) {
        self.encode_unsigned(writer);
        self.envelope().encode_witnesses(writer);
    }
}
