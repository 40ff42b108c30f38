use accrue_transactions::CoinReference;
use accrue_types::TxHash;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("block height {height} does not follow tip {tip:?}")]
    HeightOutOfOrder { height: u32, tip: Option<u32> },

    #[error("transaction {0} is already committed")]
    DuplicateTransaction(TxHash),

    #[error("output {0} is already spent")]
    Conflict(CoinReference),

    #[error("output {0} has already been claimed")]
    AlreadyClaimed(CoinReference),

    #[error("output {0} does not exist")]
    MissingOutput(CoinReference),

    #[error("ledger lock poisoned")]
    Poisoned,
}
