use crate::envelope::CoinReference;
use accrue_types::CodecError;
use thiserror::Error;

/// Malformed wire bytes. A transaction that fails to decode is rejected
/// before any verification runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("unknown transaction kind tag 0x{0:02x}")]
    UnknownKind(u8),

    #[error("unsupported transaction version {0}")]
    UnsupportedVersion(u8),

    #[error("unknown attribute usage 0x{0:02x}")]
    UnknownAttributeUsage(u8),

    #[error("claim transaction carries no claims")]
    EmptyClaims,

    #[error("claim {0} appears more than once")]
    DuplicateClaim(CoinReference),
}

/// Stateless structural problems, detectable without a ledger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("unsupported transaction version {0}")]
    UnsupportedVersion(u8),

    #[error("{count} attributes exceed the limit of {max}")]
    TooManyAttributes { count: usize, max: usize },

    #[error("input {0} is spent more than once")]
    DuplicateInput(CoinReference),

    #[error("output {index} has non-positive value")]
    NonPositiveOutput { index: usize },

    #[error("claim transaction carries no claims")]
    EmptyClaims,

    #[error("claim {0} appears more than once")]
    DuplicateClaim(CoinReference),
}
