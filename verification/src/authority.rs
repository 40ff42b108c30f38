//! The set of authorities whose witnesses a transaction must carry.

use crate::resolve::resolve_outputs;
use crate::VerificationFailure;
use accrue_ledger::LedgerView;
use accrue_transactions::Transaction;
use accrue_types::AuthorityHash;
use std::collections::BTreeSet;

/// Every authority that must witness `tx`, ascending and duplicate-free.
///
/// The base set is the owners of spent inputs plus any `Script` attribute
/// authorities. A claim transaction adds the owners of the outputs it claims:
/// claiming a dividend needs the same consent as spending the holding.
///
/// Fails with [`VerificationFailure::LedgerInconsistency`] when a referenced
/// source transaction is not in the ledger. The result does not depend on the
/// order of inputs or claims.
pub fn required_authority_set<L: LedgerView>(
    tx: &Transaction,
    ledger: &L,
) -> Result<Vec<AuthorityHash>, VerificationFailure> {
    let envelope = tx.envelope();
    let mut authorities: BTreeSet<AuthorityHash> = envelope
        .attributes
        .iter()
        .filter_map(|attribute| attribute.required_authority())
        .collect();

    for (_, spent) in resolve_outputs(ledger, &envelope.inputs)? {
        authorities.insert(spent.owner);
    }
    if let Some(claims) = tx.claims() {
        for (_, claimed) in resolve_outputs(ledger, claims)? {
            authorities.insert(claimed.owner);
        }
    }

    Ok(authorities.into_iter().collect())
}
