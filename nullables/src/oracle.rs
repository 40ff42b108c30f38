//! Nullable claim-amount oracle.

use accrue_dividend::{ClaimAmountOracle, ClaimError};
use accrue_transactions::ClaimReference;
use accrue_types::Fixed8;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// An oracle that gives the same answer for every claim set.
pub struct NullOracle {
    answer: Result<Fixed8, ClaimError>,
    calls: AtomicUsize,
    last_claims: Mutex<Option<Vec<ClaimReference>>>,
}

impl NullOracle {
    pub fn returning(amount: Fixed8) -> Self {
        Self::with_answer(Ok(amount))
    }

    pub fn failing(error: ClaimError) -> Self {
        Self::with_answer(Err(error))
    }

    fn with_answer(answer: Result<Fixed8, ClaimError>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
            last_claims: Mutex::new(None),
        }
    }

    /// How many times the oracle has been asked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The claim set of the most recent call.
    pub fn last_claims(&self) -> Option<Vec<ClaimReference>> {
        self.last_claims
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl ClaimAmountOracle for NullOracle {
    fn compute_claim_amount(&self, claims: &[ClaimReference]) -> Result<Fixed8, ClaimError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_claims.lock() {
            *last = Some(claims.to_vec());
        }
        self.answer.clone()
    }
}
