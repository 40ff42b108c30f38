//! Append-only in-memory ledger with copy-on-write snapshots.
//!
//! Each commit applies an entire block under one write lock, so a reader sees
//! either all of a block or none of it. [`MemoryLedger::snapshot`] hands out an
//! immutable [`LedgerState`]; later commits copy the state instead of mutating
//! a snapshot that is still in use.

use crate::view::{LedgerEntry, LedgerView, SpendRecord};
use crate::LedgerError;
use accrue_transactions::{CoinReference, Transaction};
use accrue_types::TxHash;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

/// An immutable view of every committed block up to `tip`.
#[derive(Clone, Debug, Default)]
pub struct LedgerState {
    transactions: HashMap<TxHash, LedgerEntry>,
    spent: HashMap<CoinReference, SpendRecord>,
    claimed: HashSet<CoinReference>,
    tip: Option<u32>,
}

impl LedgerState {
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Check that `block` can be appended at `height` without touching `self`.
    fn check_block(
        &self,
        height: u32,
        block: &[(TxHash, Transaction)],
    ) -> Result<(), LedgerError> {
        if let Some(tip) = self.tip {
            if height <= tip {
                return Err(LedgerError::HeightOutOfOrder {
                    height,
                    tip: self.tip,
                });
            }
        }

        let mut pending: HashMap<TxHash, &Transaction> = HashMap::new();
        let mut spending: HashSet<CoinReference> = HashSet::new();
        let mut claiming: HashSet<CoinReference> = HashSet::new();

        for (hash, tx) in block {
            if self.transactions.contains_key(hash) || pending.contains_key(hash) {
                return Err(LedgerError::DuplicateTransaction(*hash));
            }

            for input in &tx.envelope().inputs {
                let exists = match self.transactions.get(&input.source) {
                    Some(entry) => entry.transaction.envelope().outputs.len() > input.index as usize,
                    None => pending
                        .get(&input.source)
                        .is_some_and(|p| p.envelope().outputs.len() > input.index as usize),
                };
                if !exists {
                    return Err(LedgerError::MissingOutput(*input));
                }
                if self.spent.contains_key(input) || !spending.insert(*input) {
                    return Err(LedgerError::Conflict(*input));
                }
            }

            for claim in tx.claims().unwrap_or_default() {
                if self.claimed.contains(claim) || !claiming.insert(*claim) {
                    return Err(LedgerError::AlreadyClaimed(*claim));
                }
            }

            pending.insert(*hash, tx);
        }

        Ok(())
    }

    fn apply_block(&mut self, height: u32, block: Vec<(TxHash, Transaction)>) {
        for (hash, tx) in block {
            for input in &tx.envelope().inputs {
                self.spent.insert(
                    *input,
                    SpendRecord {
                        spender: hash,
                        height,
                    },
                );
            }
            if let Some(claims) = tx.claims() {
                self.claimed.extend(claims.iter().copied());
            }
            self.transactions.insert(
                hash,
                LedgerEntry {
                    transaction: Arc::new(tx),
                    height,
                },
            );
        }
        self.tip = Some(height);
    }
}

impl LedgerView for LedgerState {
    fn transaction(&self, hash: &TxHash) -> Result<Option<LedgerEntry>, LedgerError> {
        Ok(self.transactions.get(hash).cloned())
    }

    fn spent_by(&self, reference: &CoinReference) -> Result<Option<SpendRecord>, LedgerError> {
        Ok(self.spent.get(reference).copied())
    }

    fn is_claimed(&self, reference: &CoinReference) -> Result<bool, LedgerError> {
        Ok(self.claimed.contains(reference))
    }

    fn tip_height(&self) -> Result<Option<u32>, LedgerError> {
        Ok(self.tip)
    }
}

/// A thread-safe, append-only ledger.
///
/// Commits do not validate transactions; they only keep the ledger
/// self-consistent (no double spends, no double claims, increasing heights).
///
/// Each `LedgerView` lookup reads whatever state is current at that call, so a
/// verifier that must see one point in time should hold a [`snapshot`].
///
/// [`snapshot`]: MemoryLedger::snapshot
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: RwLock<Arc<LedgerState>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state. Unaffected by later commits.
    pub fn snapshot(&self) -> Result<Arc<LedgerState>, LedgerError> {
        let guard = self.state.read().map_err(|_| LedgerError::Poisoned)?;
        Ok(Arc::clone(&*guard))
    }

    /// Append a block. On error the ledger is left unchanged.
    pub fn commit_block(
        &self,
        height: u32,
        transactions: Vec<Transaction>,
    ) -> Result<(), LedgerError> {
        let block: Vec<(TxHash, Transaction)> =
            transactions.into_iter().map(|tx| (tx.hash(), tx)).collect();

        let mut guard = self.state.write().map_err(|_| LedgerError::Poisoned)?;
        guard.check_block(height, &block)?;
        let count = block.len();
        Arc::make_mut(&mut *guard).apply_block(height, block);
        tracing::debug!(height, transactions = count, "committed block");
        Ok(())
    }
}

impl LedgerView for MemoryLedger {
    fn transaction(&self, hash: &TxHash) -> Result<Option<LedgerEntry>, LedgerError> {
        self.snapshot()?.transaction(hash)
    }

    fn spent_by(&self, reference: &CoinReference) -> Result<Option<SpendRecord>, LedgerError> {
        self.snapshot()?.spent_by(reference)
    }

    fn is_claimed(&self, reference: &CoinReference) -> Result<bool, LedgerError> {
        self.snapshot()?.is_claimed(reference)
    }

    fn tip_height(&self) -> Result<Option<u32>, LedgerError> {
        self.snapshot()?.tip_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrue_transactions::{ClaimTx, ContractTx, Envelope, TransactionOutput};
    use accrue_types::{AssetId, AuthorityHash, Fixed8};

    fn funding(tag: u8) -> Transaction {
        Transaction::Contract(ContractTx::new(Envelope::with_outputs(vec![
            TransactionOutput {
                asset: AssetId::new([1u8; 32]),
                value: Fixed8::from_raw(100 + tag as i64),
                owner: AuthorityHash::new([tag; 20]),
            },
        ])))
    }

    fn spend(reference: CoinReference) -> Transaction {
        let mut envelope = Envelope::default();
        envelope.inputs = vec![reference];
        Transaction::Contract(ContractTx::new(envelope))
    }

    #[test]
    fn committed_transaction_is_visible_with_height() {
        let ledger = MemoryLedger::new();
        let tx = funding(1);
        let hash = tx.hash();
        ledger.commit_block(5, vec![tx]).unwrap();

        let entry = ledger.transaction(&hash).unwrap().unwrap();
        assert_eq!(entry.height, 5);
        assert_eq!(ledger.tip_height().unwrap(), Some(5));
    }

    #[test]
    fn unknown_transaction_is_none() {
        let ledger = MemoryLedger::new();
        assert!(ledger.transaction(&TxHash::new([9u8; 32])).unwrap().is_none());
        assert_eq!(ledger.tip_height().unwrap(), None);
    }

    #[test]
    fn heights_must_increase() {
        let ledger = MemoryLedger::new();
        ledger.commit_block(3, vec![funding(1)]).unwrap();
        assert_eq!(
            ledger.commit_block(3, vec![funding(2)]),
            Err(LedgerError::HeightOutOfOrder {
                height: 3,
                tip: Some(3)
            })
        );
    }

    #[test]
    fn spend_is_recorded() {
        let ledger = MemoryLedger::new();
        let source = funding(1);
        let reference = CoinReference::new(source.hash(), 0);
        ledger.commit_block(0, vec![source]).unwrap();
        let spender = spend(reference);
        let spender_hash = spender.hash();
        ledger.commit_block(4, vec![spender]).unwrap();

        assert_eq!(
            ledger.spent_by(&reference).unwrap(),
            Some(SpendRecord {
                spender: spender_hash,
                height: 4
            })
        );
    }

    #[test]
    fn double_spend_leaves_ledger_unchanged() {
        let ledger = MemoryLedger::new();
        let source = funding(1);
        let reference = CoinReference::new(source.hash(), 0);
        ledger.commit_block(0, vec![source]).unwrap();

        let first = spend(reference);
        let mut second_envelope = Envelope::default();
        second_envelope.inputs = vec![reference];
        second_envelope.attributes = vec![accrue_transactions::Attribute {
            usage: accrue_transactions::AttributeUsage::Remark,
            data: vec![1],
        }];
        let second = Transaction::Contract(ContractTx::new(second_envelope));
        let first_hash = first.hash();

        assert_eq!(
            ledger.commit_block(1, vec![first, second]),
            Err(LedgerError::Conflict(reference))
        );
        assert!(ledger.transaction(&first_hash).unwrap().is_none());
        assert_eq!(ledger.tip_height().unwrap(), Some(0));
    }

    #[test]
    fn missing_output_rejected() {
        let ledger = MemoryLedger::new();
        let source = funding(1);
        let reference = CoinReference::new(source.hash(), 1);
        ledger.commit_block(0, vec![source]).unwrap();
        assert_eq!(
            ledger.commit_block(1, vec![spend(reference)]),
            Err(LedgerError::MissingOutput(reference))
        );
    }

    #[test]
    fn spend_within_same_block() {
        let ledger = MemoryLedger::new();
        let source = funding(1);
        let reference = CoinReference::new(source.hash(), 0);
        ledger.commit_block(0, vec![source, spend(reference)]).unwrap();
        assert!(ledger.spent_by(&reference).unwrap().is_some());
    }

    #[test]
    fn claims_are_recorded_once() {
        let ledger = MemoryLedger::new();
        let source = funding(1);
        let reference = CoinReference::new(source.hash(), 0);
        ledger.commit_block(0, vec![source]).unwrap();

        let claim = Transaction::Claim(ClaimTx::new(vec![reference], Envelope::default()));
        ledger.commit_block(1, vec![claim]).unwrap();
        assert!(ledger.is_claimed(&reference).unwrap());

        let again = Transaction::Claim(ClaimTx::new(
            vec![reference],
            Envelope::with_outputs(vec![TransactionOutput {
                asset: AssetId::new([2u8; 32]),
                value: Fixed8::ONE,
                owner: AuthorityHash::new([0u8; 20]),
            }]),
        ));
        assert_eq!(
            ledger.commit_block(2, vec![again]),
            Err(LedgerError::AlreadyClaimed(reference))
        );
    }

    #[test]
    fn snapshot_does_not_see_later_commits() {
        let ledger = MemoryLedger::new();
        ledger.commit_block(0, vec![funding(1)]).unwrap();
        let snapshot = ledger.snapshot().unwrap();

        let later = funding(2);
        let later_hash = later.hash();
        ledger.commit_block(1, vec![later]).unwrap();

        assert!(snapshot.transaction(&later_hash).unwrap().is_none());
        assert_eq!(snapshot.tip_height().unwrap(), Some(0));
        assert!(ledger.transaction(&later_hash).unwrap().is_some());
    }

    #[test]
    fn concurrent_readers_see_whole_blocks() {
        let ledger = Arc::new(MemoryLedger::new());
        let blocks: Vec<Vec<Transaction>> = (0..20u8)
            .map(|h| vec![funding(h.wrapping_mul(2)), funding(h.wrapping_mul(2) + 1)])
            .collect();
        let expected: Vec<_> = blocks
            .iter()
            .map(|b| b.iter().map(|tx| tx.hash()).collect::<Vec<_>>())
            .collect();

        let reader = {
            let ledger = Arc::clone(&ledger);
            let expected = expected.clone();
            std::thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = ledger.snapshot().unwrap();
                    for hashes in &expected {
                        let seen = hashes
                            .iter()
                            .filter(|h| snapshot.transaction(h).unwrap().is_some())
                            .count();
                        assert!(seen == 0 || seen == hashes.len());
                    }
                }
            })
        };

        for (height, block) in blocks.into_iter().enumerate() {
            ledger.commit_block(height as u32, block).unwrap();
        }
        reader.join().unwrap();
        assert_eq!(ledger.snapshot().unwrap().transaction_count(), 40);
    }
}
