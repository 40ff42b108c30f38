//! The claim-amount contract consumed by claim verification.

use crate::ClaimError;
use accrue_transactions::ClaimReference;
use accrue_types::Fixed8;

/// Prices a set of claims against ledger history.
///
/// Implementations are deterministic functions of `(claims, ledger)` and return
/// a non-negative amount. They own every semantic check on the claimed outputs:
/// the caller forwards claims unfiltered, so an output of the wrong asset must
/// come back as [`ClaimError::UnsupportedAssetKind`] rather than be skipped.
pub trait ClaimAmountOracle {
    fn compute_claim_amount(&self, claims: &[ClaimReference]) -> Result<Fixed8, ClaimError>;
}

impl<O: ClaimAmountOracle + ?Sized> ClaimAmountOracle for &O {
    fn compute_claim_amount(&self, claims: &[ClaimReference]) -> Result<Fixed8, ClaimError> {
        (**self).compute_claim_amount(claims)
    }
}
