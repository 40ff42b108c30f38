use crate::VerificationFailure;
use accrue_ledger::LedgerView;
use accrue_transactions::{CoinReference, TransactionOutput};
use accrue_types::TxHash;
use std::collections::BTreeMap;

/// Resolve every reference to the output it names, fetching each source
/// transaction once. Results come back grouped by source.
pub(crate) fn resolve_outputs<L: LedgerView>(
    ledger: &L,
    references: &[CoinReference],
) -> Result<Vec<(CoinReference, TransactionOutput)>, VerificationFailure> {
    let mut groups: BTreeMap<TxHash, Vec<CoinReference>> = BTreeMap::new();
    for reference in references {
        groups.entry(reference.source).or_default().push(*reference);
    }

    let mut resolved = Vec::with_capacity(references.len());
    for (source, group) in groups {
        let entry = ledger
            .transaction(&source)?
            .ok_or(VerificationFailure::LedgerInconsistency(source))?;
        let outputs = &entry.transaction.envelope().outputs;
        for reference in group {
            let output = outputs
                .get(reference.index as usize)
                .ok_or(VerificationFailure::OutputIndexOutOfRange(reference))?;
            resolved.push((reference, output.clone()));
        }
    }
    Ok(resolved)
}
