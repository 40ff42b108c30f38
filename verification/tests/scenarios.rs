use accrue_crypto::keypair_from_seed;
use accrue_dividend::DividendCalculator;
use accrue_ledger::{LedgerState, MemoryLedger};
use accrue_nullables::{NullOracle, NullWitnessVerifier};
use accrue_transactions::{
    standard_authority, ClaimTx, CoinReference, ContractTx, Envelope, SignatureWitnessVerifier,
    Transaction, TransactionOutput, Witness,
};
use accrue_types::{
    AssetId, AuthorityHash, ChainParams, Fixed8, GenerationSegment, KeyPair, TxHash,
};
use accrue_verification::{required_authority_set, TransactionVerifier, VerificationFailure};
use std::sync::Arc;

fn params() -> ChainParams {
    ChainParams {
        governance_asset: AssetId::new([0x01; 32]),
        dividend_asset: AssetId::new([0x02; 32]),
        governance_supply: Fixed8::from_units(1000).unwrap(),
        generation: vec![GenerationSegment {
            start_height: 0,
            per_block: Fixed8::from_units(10).unwrap(),
        }],
    }
}

struct Fixture {
    ledger: MemoryLedger,
    holder: KeyPair,
    holding: CoinReference,
}

/// `holder` owns 100 governance units created at height 0; the tip is 4, so
/// the holding has accrued 5 blocks × 10 × 100/1000 = 5 dividend units.
fn fixture() -> Fixture {
    let ledger = MemoryLedger::new();
    let holder = keypair_from_seed(&[0x11; 32]);
    let source = Transaction::Contract(ContractTx::new(Envelope::with_outputs(vec![
        TransactionOutput {
            asset: params().governance_asset,
            value: Fixed8::from_units(100).unwrap(),
            owner: standard_authority(&holder.public),
        },
    ])));
    let holding = CoinReference::new(source.hash(), 0);
    ledger.commit_block(0, vec![source]).unwrap();
    ledger
        .commit_block(4, vec![Transaction::Contract(ContractTx::default())])
        .unwrap();
    Fixture {
        ledger,
        holder,
        holding,
    }
}

fn claim(claims: Vec<CoinReference>, minted_raw: i64, signer: &KeyPair) -> Transaction {
    let envelope = Envelope::with_outputs(vec![TransactionOutput {
        asset: params().dividend_asset,
        value: Fixed8::from_raw(minted_raw),
        owner: standard_authority(&signer.public),
    }]);
    let tx = Transaction::Claim(ClaimTx::new(claims, envelope));
    let witness = Witness::sign(&tx.hash(), signer);
    tx.with_witnesses(vec![witness])
}

fn calculator_verifier(
    snapshot: Arc<LedgerState>,
) -> TransactionVerifier<
    Arc<LedgerState>,
    DividendCalculator<Arc<LedgerState>>,
    SignatureWitnessVerifier,
> {
    let oracle = DividendCalculator::new(Arc::clone(&snapshot), &params()).unwrap();
    TransactionVerifier::new(snapshot, oracle, SignatureWitnessVerifier, &params())
}

#[test]
fn exact_claim_is_accepted() {
    let f = fixture();
    let tx = claim(vec![f.holding], 500_000_000, &f.holder);
    let verifier = TransactionVerifier::new(
        f.ledger.snapshot().unwrap(),
        NullOracle::returning(Fixed8::from_raw(500_000_000)),
        NullWitnessVerifier::accept_all(),
        &params(),
    );

    assert!(verifier.verify(&tx));
    assert!(required_authority_set(&tx, &f.ledger.snapshot().unwrap())
        .unwrap()
        .contains(&standard_authority(&f.holder.public)));
}

#[test]
fn claim_short_by_one_raw_unit_is_rejected() {
    let f = fixture();
    let tx = claim(vec![f.holding], 499_999_999, &f.holder);
    let verifier = TransactionVerifier::new(
        f.ledger.snapshot().unwrap(),
        NullOracle::returning(Fixed8::from_raw(500_000_000)),
        NullWitnessVerifier::accept_all(),
        &params(),
    );

    assert!(!verifier.verify(&tx));
    assert!(matches!(
        verifier.check(&tx),
        Err(VerificationFailure::AmountMismatch { .. })
    ));
}

#[test]
fn unknown_claim_source_is_inconsistency() {
    let f = fixture();
    let missing = TxHash::new([0xEE; 32]);
    let tx = claim(vec![CoinReference::new(missing, 0)], 1, &f.holder);
    let oracle = NullOracle::returning(Fixed8::EPSILON);
    let verifier = TransactionVerifier::new(
        f.ledger.snapshot().unwrap(),
        &oracle,
        NullWitnessVerifier::accept_all(),
        &params(),
    );

    assert_eq!(
        required_authority_set(&tx, &f.ledger.snapshot().unwrap()),
        Err(VerificationFailure::LedgerInconsistency(missing))
    );
    assert!(!verifier.verify(&tx));
    assert_eq!(oracle.calls(), 0);
}

#[test]
fn duplicate_claims_are_rejected_before_oracle() {
    let f = fixture();
    let tx = claim(vec![f.holding, f.holding], 500_000_000, &f.holder);
    let oracle = NullOracle::returning(Fixed8::from_raw(500_000_000));
    let verifier = TransactionVerifier::new(
        f.ledger.snapshot().unwrap(),
        &oracle,
        NullWitnessVerifier::accept_all(),
        &params(),
    );

    assert!(!verifier.verify(&tx));
    assert_eq!(oracle.calls(), 0);
}

#[test]
fn oracle_receives_exactly_the_claims() {
    let f = fixture();
    let tx = claim(vec![f.holding], 500_000_000, &f.holder);
    let oracle = NullOracle::returning(Fixed8::from_raw(500_000_000));
    let verifier = TransactionVerifier::new(
        f.ledger.snapshot().unwrap(),
        &oracle,
        NullWitnessVerifier::accept_all(),
        &params(),
    );

    assert!(verifier.verify(&tx));
    assert_eq!(oracle.last_claims(), Some(vec![f.holding]));
}

#[test]
fn signed_claim_priced_from_ledger_history() {
    let f = fixture();
    let verifier = calculator_verifier(f.ledger.snapshot().unwrap());

    assert!(verifier.verify(&claim(vec![f.holding], 500_000_000, &f.holder)));
    assert!(!verifier.verify(&claim(vec![f.holding], 500_000_001, &f.holder)));
}

#[test]
fn claim_signed_by_someone_else_is_rejected() {
    let f = fixture();
    let thief = keypair_from_seed(&[0x22; 32]);
    let verifier = calculator_verifier(f.ledger.snapshot().unwrap());

    assert!(matches!(
        verifier.check(&claim(vec![f.holding], 500_000_000, &thief)),
        Err(VerificationFailure::WitnessMismatch { index: 0, .. })
    ));
}

#[test]
fn committed_claim_cannot_be_claimed_again() {
    let f = fixture();
    let first = claim(vec![f.holding], 500_000_000, &f.holder);
    let before = f.ledger.snapshot().unwrap();
    f.ledger.commit_block(5, vec![first.clone()]).unwrap();

    // An older snapshot still sees an unclaimed holding.
    assert!(calculator_verifier(before).verify(&first));

    let after = calculator_verifier(f.ledger.snapshot().unwrap());
    assert!(matches!(
        after.check(&claim(vec![f.holding], 600_000_000, &f.holder)),
        Err(VerificationFailure::Claim(_))
    ));
}

#[test]
fn claiming_a_dividend_output_is_unsupported() {
    let f = fixture();
    let first = claim(vec![f.holding], 500_000_000, &f.holder);
    let dividend_output = CoinReference::new(first.hash(), 0);
    f.ledger.commit_block(5, vec![first]).unwrap();

    let verifier = calculator_verifier(f.ledger.snapshot().unwrap());
    assert!(matches!(
        verifier.check(&claim(vec![dividend_output], 1, &f.holder)),
        Err(VerificationFailure::Claim(
            accrue_dividend::ClaimError::UnsupportedAssetKind { .. }
        ))
    ));
}

#[test]
fn claim_may_not_mint_governance_asset() {
    let f = fixture();
    let envelope = Envelope::with_outputs(vec![
        TransactionOutput {
            asset: params().dividend_asset,
            value: Fixed8::from_units(5).unwrap(),
            owner: standard_authority(&f.holder.public),
        },
        TransactionOutput {
            asset: params().governance_asset,
            value: Fixed8::ONE,
            owner: AuthorityHash::new([0x33; 20]),
        },
    ]);
    let tx = Transaction::Claim(ClaimTx::new(vec![f.holding], envelope));
    let tx = tx.clone().with_witnesses(vec![Witness::sign(&tx.hash(), &f.holder)]);

    let verifier = calculator_verifier(f.ledger.snapshot().unwrap());
    assert!(matches!(
        verifier.check(&tx),
        Err(VerificationFailure::UnexpectedMint { .. })
    ));
}

/// A dividend output owned by `holder`, committed at height 5.
fn dividend_holding(f: &Fixture, units: i64) -> CoinReference {
    let source = Transaction::Contract(ContractTx::new(Envelope::with_outputs(vec![
        TransactionOutput {
            asset: params().dividend_asset,
            value: Fixed8::from_units(units).unwrap(),
            owner: standard_authority(&f.holder.public),
        },
    ])));
    let reference = CoinReference::new(source.hash(), 0);
    f.ledger.commit_block(5, vec![source]).unwrap();
    reference
}

/// A claim over the governance holding that also spends `input`, paying out
/// `paid_units` of the dividend asset.
fn claim_spending(f: &Fixture, input: CoinReference, paid_units: i64) -> Transaction {
    let mut envelope = Envelope::with_outputs(vec![TransactionOutput {
        asset: params().dividend_asset,
        value: Fixed8::from_units(paid_units).unwrap(),
        owner: standard_authority(&f.holder.public),
    }]);
    envelope.inputs = vec![input];
    let tx = Transaction::Claim(ClaimTx::new(vec![f.holding], envelope));
    let witness = Witness::sign(&tx.hash(), &f.holder);
    tx.with_witnesses(vec![witness])
}

#[test]
fn claim_with_zero_dividend_net_is_rejected_before_oracle() {
    let f = fixture();
    let input = dividend_holding(&f, 5);
    let tx = claim_spending(&f, input, 5);
    let oracle = NullOracle::returning(Fixed8::ZERO);
    let verifier = TransactionVerifier::new(
        f.ledger.snapshot().unwrap(),
        &oracle,
        SignatureWitnessVerifier,
        &params(),
    );

    assert_eq!(verifier.check(&tx), Err(VerificationFailure::DividendNotMinted));
    assert_eq!(oracle.calls(), 0);
}

#[test]
fn claim_with_positive_dividend_net_is_rejected_before_oracle() {
    let f = fixture();
    let input = dividend_holding(&f, 5);
    let tx = claim_spending(&f, input, 3);
    let oracle = NullOracle::returning(Fixed8::from_units(2).unwrap());
    let verifier = TransactionVerifier::new(
        f.ledger.snapshot().unwrap(),
        &oracle,
        SignatureWitnessVerifier,
        &params(),
    );

    assert_eq!(verifier.check(&tx), Err(VerificationFailure::DividendNotMinted));
    assert_eq!(oracle.calls(), 0);
}

#[test]
fn batch_matches_individual_results() {
    let f = fixture();
    let verifier = calculator_verifier(f.ledger.snapshot().unwrap());
    let txs = vec![
        claim(vec![f.holding], 500_000_000, &f.holder),
        claim(vec![f.holding], 400_000_000, &f.holder),
        claim(vec![f.holding, f.holding], 500_000_000, &f.holder),
        claim(vec![f.holding], 0, &f.holder),
    ];
    let individual: Vec<bool> = txs.iter().map(|tx| verifier.verify(tx)).collect();
    assert_eq!(verifier.verify_batch(&txs), individual);
    assert_eq!(individual, vec![true, false, false, false]);
}
