//! Stateless transaction validation.

use crate::claim::check_claims;
use crate::envelope::{CURRENT_VERSION, MAX_ATTRIBUTES};
use crate::error::TransactionError;
use crate::Transaction;
use std::collections::HashSet;

/// Validate a transaction's structure without consulting the ledger.
///
/// Stateful checks (input resolution, double spends, witnesses, amounts) are
/// done by `accrue-verification`.
pub fn validate_structure(tx: &Transaction) -> Result<(), TransactionError> {
    let envelope = tx.envelope();

    if envelope.version != CURRENT_VERSION {
        return Err(TransactionError::UnsupportedVersion(envelope.version));
    }

    if envelope.attributes.len() > MAX_ATTRIBUTES {
        return Err(TransactionError::TooManyAttributes {
            count: envelope.attributes.len(),
            max: MAX_ATTRIBUTES,
        });
    }

    let mut seen = HashSet::with_capacity(envelope.inputs.len());
    for input in &envelope.inputs {
        if !seen.insert(input) {
            return Err(TransactionError::DuplicateInput(*input));
        }
    }

    for (index, output) in envelope.outputs.iter().enumerate() {
        if !output.value.is_positive() {
            return Err(TransactionError::NonPositiveOutput { index });
        }
    }

    match tx {
        Transaction::Contract(_) => {}
        Transaction::Claim(claim_tx) => check_claims(&claim_tx.claims)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimTx;
    use crate::contract::ContractTx;
    use crate::envelope::{Attribute, AttributeUsage, CoinReference, Envelope, TransactionOutput};
    use accrue_types::{AssetId, AuthorityHash, Fixed8, TxHash};

    fn dummy_output(value: i64) -> TransactionOutput {
        TransactionOutput {
            asset: AssetId::new([2u8; 32]),
            value: Fixed8::from_raw(value),
            owner: AuthorityHash::new([5u8; 20]),
        }
    }

    fn dummy_reference(byte: u8) -> CoinReference {
        CoinReference::new(TxHash::new([byte; 32]), 0)
    }

    #[test]
    fn test_valid_claim_passes() {
        let tx = Transaction::Claim(ClaimTx::new(
            vec![dummy_reference(1)],
            Envelope::with_outputs(vec![dummy_output(100)]),
        ));
        assert!(validate_structure(&tx).is_ok());
    }

    #[test]
    fn test_unsupported_version() {
        let mut envelope = Envelope::default();
        envelope.version = 3;
        let tx = Transaction::Contract(ContractTx::new(envelope));
        assert_eq!(
            validate_structure(&tx),
            Err(TransactionError::UnsupportedVersion(3))
        );
    }

    #[test]
    fn test_too_many_attributes() {
        let mut envelope = Envelope::default();
        envelope.attributes = vec![
            Attribute {
                usage: AttributeUsage::Remark,
                data: vec![],
            };
            MAX_ATTRIBUTES + 1
        ];
        let tx = Transaction::Contract(ContractTx::new(envelope));
        assert!(matches!(
            validate_structure(&tx),
            Err(TransactionError::TooManyAttributes { .. })
        ));
    }

    #[test]
    fn test_duplicate_input() {
        let mut envelope = Envelope::default();
        envelope.inputs = vec![dummy_reference(1), dummy_reference(1)];
        let tx = Transaction::Contract(ContractTx::new(envelope));
        assert_eq!(
            validate_structure(&tx),
            Err(TransactionError::DuplicateInput(dummy_reference(1)))
        );
    }

    #[test]
    fn test_zero_output_rejected() {
        let tx = Transaction::Contract(ContractTx::new(Envelope::with_outputs(vec![
            dummy_output(10),
            dummy_output(0),
        ])));
        assert_eq!(
            validate_structure(&tx),
            Err(TransactionError::NonPositiveOutput { index: 1 })
        );
    }

    #[test]
    fn test_constructed_duplicate_claims_rejected() {
        let tx = Transaction::Claim(ClaimTx::new(
            vec![dummy_reference(1), dummy_reference(1)],
            Envelope::default(),
        ));
        assert_eq!(
            validate_structure(&tx),
            Err(TransactionError::DuplicateClaim(dummy_reference(1)))
        );
    }

    #[test]
    fn test_constructed_empty_claims_rejected() {
        let tx = Transaction::Claim(ClaimTx::new(vec![], Envelope::default()));
        assert_eq!(validate_structure(&tx), Err(TransactionError::EmptyClaims));
    }
}
