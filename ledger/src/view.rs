//! The read capability verification is given.

use crate::LedgerError;
use accrue_transactions::{CoinReference, Transaction};
use accrue_types::TxHash;
use std::sync::Arc;

/// A committed transaction and the height of the block that holds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerEntry {
    pub transaction: Arc<Transaction>,
    pub height: u32,
}

/// Which committed transaction consumed an output, and at what height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpendRecord {
    pub spender: TxHash,
    pub height: u32,
}

/// Read-only ledger lookups.
///
/// Implementations must give read consistency: a lookup observes a fully
/// committed transaction or reports `None`, never a partial write. `Err` is
/// reserved for backend failures and is treated by callers as a rejection.
pub trait LedgerView {
    /// Look up a committed transaction by hash.
    fn transaction(&self, hash: &TxHash) -> Result<Option<LedgerEntry>, LedgerError>;

    /// The spend of `reference`, if any committed transaction consumed it.
    fn spent_by(&self, reference: &CoinReference) -> Result<Option<SpendRecord>, LedgerError>;

    /// Whether a committed claim transaction already claimed `reference`.
    fn is_claimed(&self, reference: &CoinReference) -> Result<bool, LedgerError>;

    /// Height of the most recent block, `None` for an empty ledger.
    fn tip_height(&self) -> Result<Option<u32>, LedgerError>;
}

impl<L: LedgerView + ?Sized> LedgerView for &L {
    fn transaction(&self, hash: &TxHash) -> Result<Option<LedgerEntry>, LedgerError> {
        (**self).transaction(hash)
    }

    fn spent_by(&self, reference: &CoinReference) -> Result<Option<SpendRecord>, LedgerError> {
        (**self).spent_by(reference)
    }

    fn is_claimed(&self, reference: &CoinReference) -> Result<bool, LedgerError> {
        (**self).is_claimed(reference)
    }

    fn tip_height(&self) -> Result<Option<u32>, LedgerError> {
        (**self).tip_height()
    }
}

impl<L: LedgerView + ?Sized> LedgerView for Arc<L> {
    fn transaction(&self, hash: &TxHash) -> Result<Option<LedgerEntry>, LedgerError> {
        (**self).transaction(hash)
    }

    fn spent_by(&self, reference: &CoinReference) -> Result<Option<SpendRecord>, LedgerError> {
        (**self).spent_by(reference)
    }

    fn is_claimed(&self, reference: &CoinReference) -> Result<bool, LedgerError> {
        (**self).is_claimed(reference)
    }

    fn tip_height(&self) -> Result<Option<u32>, LedgerError> {
        (**self).tip_height()
    }
}
