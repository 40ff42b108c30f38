//! Per-asset balance of a transaction.

use crate::resolve::resolve_outputs;
use crate::VerificationFailure;
use accrue_ledger::LedgerView;
use accrue_transactions::Transaction;
use accrue_types::{AssetId, Fixed8};
use std::collections::BTreeMap;

/// Σ inputs − Σ outputs for one asset. Negative means the transaction mints it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetAssetResult {
    pub asset: AssetId,
    pub amount: Fixed8,
}

/// Net result for every asset the transaction's inputs or outputs touch,
/// ordered by asset id. Assets that balance exactly appear with zero.
pub fn net_asset_results<L: LedgerView>(
    tx: &Transaction,
    ledger: &L,
) -> Result<Vec<NetAssetResult>, VerificationFailure> {
    let envelope = tx.envelope();
    let mut totals: BTreeMap<AssetId, Fixed8> = BTreeMap::new();

    for (_, spent) in resolve_outputs(ledger, &envelope.inputs)? {
        let total = totals.entry(spent.asset).or_insert(Fixed8::ZERO);
        *total = total
            .checked_add(spent.value)
            .ok_or(VerificationFailure::Overflow)?;
    }
    for output in &envelope.outputs {
        let total = totals.entry(output.asset).or_insert(Fixed8::ZERO);
        *total = total
            .checked_sub(output.value)
            .ok_or(VerificationFailure::Overflow)?;
    }

    Ok(totals
        .into_iter()
        .map(|(asset, amount)| NetAssetResult { asset, amount })
        .collect())
}
