//! Checks shared by every transaction kind.

use crate::authority::required_authority_set;
use crate::balance::{net_asset_results, NetAssetResult};
use crate::resolve::resolve_outputs;
use crate::VerificationFailure;
use accrue_ledger::LedgerView;
use accrue_transactions::validation::validate_structure;
use accrue_transactions::{Transaction, WitnessVerifier};
use accrue_types::AssetId;

/// Run the base checks and return the transaction's net asset results.
///
/// In order: stateless structure, every input resolves and is unspent, only a
/// claim may mint and only `dividend_asset`, and witness `i` speaks for
/// required authority `i` and passes `witnesses`.
pub fn verify_base<L, W>(
    tx: &Transaction,
    ledger: &L,
    witnesses: &W,
    dividend_asset: AssetId,
) -> Result<Vec<NetAssetResult>, VerificationFailure>
where
    L: LedgerView,
    W: WitnessVerifier + ?Sized,
{
    validate_structure(tx)?;

    let envelope = tx.envelope();
    for (input, _) in resolve_outputs(ledger, &envelope.inputs)? {
        if ledger.spent_by(&input)?.is_some() {
            return Err(VerificationFailure::DoubleSpend(input));
        }
    }

    let net = net_asset_results(tx, ledger)?;
    for result in net.iter().filter(|r| r.amount.is_negative()) {
        let may_mint = matches!(tx, Transaction::Claim(_)) && result.asset == dividend_asset;
        if !may_mint {
            return Err(VerificationFailure::UnexpectedMint {
                kind: tx.kind().name(),
                asset: result.asset,
            });
        }
    }

    let authorities = required_authority_set(tx, ledger)?;
    if envelope.witnesses.len() != authorities.len() {
        return Err(VerificationFailure::WitnessCountMismatch {
            expected: authorities.len(),
            actual: envelope.witnesses.len(),
        });
    }
    let hash = tx.hash();
    for (index, (witness, expected)) in envelope.witnesses.iter().zip(&authorities).enumerate() {
        if witness.authority() != *expected {
            return Err(VerificationFailure::WitnessMismatch {
                index,
                expected: *expected,
            });
        }
        if !witnesses.verify(&hash, witness) {
            return Err(VerificationFailure::InvalidWitness { index });
        }
    }

    Ok(net)
}
