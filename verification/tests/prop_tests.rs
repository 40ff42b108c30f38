use accrue_ledger::MemoryLedger;
use accrue_transactions::{ClaimTx, CoinReference, ContractTx, Envelope, Transaction, TransactionOutput};
use accrue_types::{AssetId, AuthorityHash, Fixed8};
use accrue_verification::required_authority_set;
use proptest::prelude::*;

/// Sources as lists of owner bytes, plus a shuffled order over all their outputs.
fn arb_sources() -> impl Strategy<Value = (Vec<Vec<u8>>, Vec<usize>)> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 1..5), 1..6).prop_flat_map(|owners| {
        let total = owners.iter().map(Vec::len).sum::<usize>();
        (Just(owners), Just((0..total).collect::<Vec<_>>()).prop_shuffle())
    })
}

fn build(owners: &[Vec<u8>]) -> (MemoryLedger, Vec<CoinReference>) {
    let ledger = MemoryLedger::new();
    let mut references = Vec::new();
    let mut block = Vec::new();
    for (i, source_owners) in owners.iter().enumerate() {
        let outputs = source_owners
            .iter()
            .map(|&o| TransactionOutput {
                asset: AssetId::new([1u8; 32]),
                value: Fixed8::from_raw(i as i64 + 1),
                owner: AuthorityHash::new([o; 20]),
            })
            .collect::<Vec<_>>();
        let tx = Transaction::Contract(ContractTx::new(Envelope::with_outputs(outputs)));
        let hash = tx.hash();
        references.extend((0..source_owners.len() as u16).map(|index| CoinReference::new(hash, index)));
        block.push(tx);
    }
    ledger.commit_block(0, block).unwrap();
    (ledger, references)
}

fn claiming(references: Vec<CoinReference>) -> Transaction {
    Transaction::Claim(ClaimTx::new(references, Envelope::default()))
}

proptest! {
    #[test]
    fn authority_set_ignores_claim_order((owners, order) in arb_sources()) {
        let (ledger, references) = build(&owners);
        let shuffled = order.iter().map(|&i| references[i]).collect::<Vec<_>>();

        let a = required_authority_set(&claiming(references), &ledger).unwrap();
        let b = required_authority_set(&claiming(shuffled), &ledger).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn authority_set_is_strictly_ascending_and_complete((owners, _order) in arb_sources()) {
        let (ledger, references) = build(&owners);
        let set = required_authority_set(&claiming(references), &ledger).unwrap();

        prop_assert!(set.windows(2).all(|w| w[0] < w[1]));
        for owner in owners.iter().flatten() {
            prop_assert!(set.contains(&AuthorityHash::new([*owner; 20])));
        }
        prop_assert!(set.len() <= owners.iter().map(Vec::len).sum::<usize>());
    }
}
