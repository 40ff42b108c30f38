use accrue_dividend::ClaimError;
use accrue_ledger::LedgerError;
use accrue_transactions::{CoinReference, TransactionError};
use accrue_types::{AssetId, AuthorityHash, Fixed8, TxHash};
use thiserror::Error;

/// Why a transaction was rejected.
///
/// Consensus only sees accept/reject; the reason is for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerificationFailure {
    #[error("malformed transaction: {0}")]
    Structure(#[from] TransactionError),

    #[error("ledger inconsistency: transaction {0} is not in the ledger")]
    LedgerInconsistency(TxHash),

    #[error("reference {0} points past the outputs of its source")]
    OutputIndexOutOfRange(CoinReference),

    #[error("input {0} is already spent")]
    DoubleSpend(CoinReference),

    #[error("{kind} may not mint asset {asset}")]
    UnexpectedMint { kind: &'static str, asset: AssetId },

    #[error("claim transaction does not mint the dividend asset")]
    DividendNotMinted,

    #[error("expected {expected} witnesses, found {actual}")]
    WitnessCountMismatch { expected: usize, actual: usize },

    #[error("witness {index} does not speak for authority {expected}")]
    WitnessMismatch {
        index: usize,
        expected: AuthorityHash,
    },

    #[error("witness {index} failed verification")]
    InvalidWitness { index: usize },

    #[error("claim amount unavailable: {0}")]
    Claim(#[from] ClaimError),

    #[error("claim mints {claimed}, but {computed} has accrued")]
    AmountMismatch { computed: Fixed8, claimed: Fixed8 },

    #[error("arithmetic overflow")]
    Overflow,

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
