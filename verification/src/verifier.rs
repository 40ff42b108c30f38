//! Kind dispatch and batch verification.

use crate::authority::required_authority_set;
use crate::base::verify_base;
use crate::claim::verify_claim;
use crate::VerificationFailure;
use accrue_dividend::ClaimAmountOracle;
use accrue_ledger::LedgerView;
use accrue_transactions::{check_claims, Transaction, WitnessVerifier};
use accrue_types::{AssetId, AuthorityHash, ChainParams};
use rayon::prelude::*;

/// Verifies transactions against one ledger view.
///
/// The verifier holds no mutable state: the same transaction against the
/// same view always gives the same answer. For a point-in-time result while
/// blocks are being committed, build it over a ledger snapshot and give the
/// oracle the same snapshot.
pub struct TransactionVerifier<L, O, W> {
    ledger: L,
    oracle: O,
    witnesses: W,
    dividend_asset: AssetId,
}

impl<L, O, W> TransactionVerifier<L, O, W>
where
    L: LedgerView,
    O: ClaimAmountOracle,
    W: WitnessVerifier,
{
    pub fn new(ledger: L, oracle: O, witnesses: W, params: &ChainParams) -> Self {
        Self {
            ledger,
            oracle,
            witnesses,
            dividend_asset: params.dividend_asset,
        }
    }

    /// Consensus answer: accept or reject.
    pub fn verify(&self, tx: &Transaction) -> bool {
        self.check(tx).is_ok()
    }

    /// Like [`verify`](Self::verify), keeping the rejection reason.
    pub fn check(&self, tx: &Transaction) -> Result<(), VerificationFailure> {
        let result = self.evaluate(tx);
        match &result {
            Ok(()) => tracing::trace!(tx = %tx.hash(), kind = tx.kind().name(), "accepted"),
            Err(reason @ VerificationFailure::LedgerInconsistency(_)) => {
                tracing::warn!(tx = %tx.hash(), kind = tx.kind().name(), %reason, "rejected")
            }
            Err(reason) => {
                tracing::debug!(tx = %tx.hash(), kind = tx.kind().name(), %reason, "rejected")
            }
        }
        result
    }

    pub fn required_authority_set(
        &self,
        tx: &Transaction,
    ) -> Result<Vec<AuthorityHash>, VerificationFailure> {
        required_authority_set(tx, &self.ledger)
    }

    fn evaluate(&self, tx: &Transaction) -> Result<(), VerificationFailure> {
        // A claim set built in memory never passed the decoder's checks.
        if let Transaction::Claim(claim) = tx {
            check_claims(&claim.claims)?;
        }

        let net = verify_base(tx, &self.ledger, &self.witnesses, self.dividend_asset)?;

        match tx {
            Transaction::Contract(_) => Ok(()),
            Transaction::Claim(claim) => {
                verify_claim(&claim.claims, &net, self.dividend_asset, &self.oracle)
            }
        }
    }
}

impl<L, O, W> TransactionVerifier<L, O, W>
where
    L: LedgerView + Sync,
    O: ClaimAmountOracle + Sync,
    W: WitnessVerifier + Sync,
{
    /// Verify independent transactions in parallel. Results keep input order.
    ///
    /// Each transaction is checked against the view alone, not against the
    /// others in the batch.
    pub fn verify_batch(&self, txs: &[Transaction]) -> Vec<bool> {
        txs.par_iter().map(|tx| self.verify(tx)).collect()
    }
}
