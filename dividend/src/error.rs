//! Dividend-specific errors.

use accrue_ledger::LedgerError;
use accrue_transactions::ClaimReference;
use accrue_types::AssetId;
use thiserror::Error;

/// Why the oracle refused to price a claim set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error("invalid claim set: {0}")]
    InvalidClaimSet(String),

    #[error("output {0} has already been claimed")]
    AlreadyClaimed(ClaimReference),

    #[error("output {reference} holds asset {asset}, not the governance asset")]
    UnsupportedAssetKind {
        reference: ClaimReference,
        asset: AssetId,
    },

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("arithmetic overflow in claim computation")]
    Overflow,
}

/// Chain parameters that cannot drive accrual.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("generation schedule is empty")]
    EmptySchedule,

    #[error("generation segment {index} does not start after its predecessor")]
    UnorderedSchedule { index: usize },

    #[error("generation segment {index} has a negative rate")]
    NegativeRate { index: usize },

    #[error("governance supply must be positive")]
    NonPositiveSupply,

    #[error("governance and dividend assets must differ")]
    SameAssets,
}
