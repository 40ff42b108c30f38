//! Ledger-backed claim-amount computation.

use crate::error::{ClaimError, ParamsError};
use crate::oracle::ClaimAmountOracle;
use crate::schedule::GenerationSchedule;
use accrue_ledger::LedgerView;
use accrue_transactions::{check_claims, ClaimReference};
use accrue_types::{AssetId, ChainParams, Fixed8, TxHash};
use std::collections::BTreeMap;

/// Computes the dividend a claim set may mint, from ledger history.
///
/// A claimed output accrues from the height of the block that created it to
/// the height of the block that spent it. Unspent outputs accrue up to the
/// next block (`tip + 1`). Each output can be claimed once.
pub struct DividendCalculator<L> {
    ledger: L,
    governance_asset: AssetId,
    governance_supply: Fixed8,
    schedule: GenerationSchedule,
}

impl<L: LedgerView> DividendCalculator<L> {
    pub fn new(ledger: L, params: &ChainParams) -> Result<Self, ParamsError> {
        if !params.governance_supply.is_positive() {
            return Err(ParamsError::NonPositiveSupply);
        }
        if params.governance_asset == params.dividend_asset {
            return Err(ParamsError::SameAssets);
        }
        Ok(Self {
            ledger,
            governance_asset: params.governance_asset,
            governance_supply: params.governance_supply,
            schedule: GenerationSchedule::new(params.generation.clone())?,
        })
    }

    pub fn schedule(&self) -> &GenerationSchedule {
        &self.schedule
    }

    /// `value × accrued` for every claim, grouped so each source is looked up once.
    fn weighted_accrual(&self, claims: &[ClaimReference]) -> Result<u128, ClaimError> {
        let mut groups: BTreeMap<TxHash, Vec<&ClaimReference>> = BTreeMap::new();
        for claim in claims {
            groups.entry(claim.source).or_default().push(claim);
        }

        let next_height = match self.ledger.tip_height()? {
            Some(tip) => tip.checked_add(1).ok_or(ClaimError::Overflow)?,
            None => 0,
        };

        let mut total: u128 = 0;
        for (source, group) in groups {
            let entry = self.ledger.transaction(&source)?.ok_or_else(|| {
                ClaimError::InvalidClaimSet(format!("source transaction {source} not found"))
            })?;
            let outputs = &entry.transaction.envelope().outputs;

            for claim in group {
                let output = outputs.get(claim.index as usize).ok_or_else(|| {
                    ClaimError::InvalidClaimSet(format!("{claim} has no such output"))
                })?;
                if output.asset != self.governance_asset {
                    return Err(ClaimError::UnsupportedAssetKind {
                        reference: *claim,
                        asset: output.asset,
                    });
                }
                if self.ledger.is_claimed(claim)? {
                    return Err(ClaimError::AlreadyClaimed(*claim));
                }
                let value = u128::try_from(output.value.raw()).map_err(|_| {
                    ClaimError::InvalidClaimSet(format!("{claim} has a negative value"))
                })?;

                let end = match self.ledger.spent_by(claim)? {
                    Some(spend) => spend.height,
                    None => next_height,
                };
                let accrued = self
                    .schedule
                    .accrued_checked(entry.height, end)
                    .ok_or(ClaimError::Overflow)?;

                let weighted = value.checked_mul(accrued).ok_or(ClaimError::Overflow)?;
                total = total.checked_add(weighted).ok_or(ClaimError::Overflow)?;
            }
        }
        Ok(total)
    }
}

impl<L: LedgerView> ClaimAmountOracle for DividendCalculator<L> {
    fn compute_claim_amount(&self, claims: &[ClaimReference]) -> Result<Fixed8, ClaimError> {
        check_claims(claims).map_err(|e| ClaimError::InvalidClaimSet(e.to_string()))?;

        let weighted = self.weighted_accrual(claims)?;
        // Positive by construction in `new`.
        let supply = self.governance_supply.raw() as u128;
        let raw = i64::try_from(weighted / supply).map_err(|_| ClaimError::Overflow)?;

        tracing::trace!(claims = claims.len(), amount = %Fixed8::from_raw(raw), "priced claim set");
        Ok(Fixed8::from_raw(raw))
    }
}
