//! Claim-specific checks run after base verification.

use crate::balance::NetAssetResult;
use crate::VerificationFailure;
use accrue_dividend::ClaimAmountOracle;
use accrue_transactions::ClaimReference;
use accrue_types::AssetId;

/// Accept iff the claim mints exactly the dividend the oracle computes for
/// `claims`.
///
/// `net` is the transaction's net asset results. The dividend entry must be
/// strictly negative; a claim that mints nothing is rejected without asking
/// the oracle.
pub fn verify_claim<O>(
    claims: &[ClaimReference],
    net: &[NetAssetResult],
    dividend_asset: AssetId,
    oracle: &O,
) -> Result<(), VerificationFailure>
where
    O: ClaimAmountOracle + ?Sized,
{
    let minted = net
        .iter()
        .find(|r| r.asset == dividend_asset)
        .map(|r| r.amount)
        .filter(|amount| amount.is_negative())
        .ok_or(VerificationFailure::DividendNotMinted)?;

    let computed = oracle.compute_claim_amount(claims)?;
    let claimed = minted.checked_neg().ok_or(VerificationFailure::Overflow)?;
    if computed != claimed {
        return Err(VerificationFailure::AmountMismatch { computed, claimed });
    }
    Ok(())
}
