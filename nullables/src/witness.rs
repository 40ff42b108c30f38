//! Nullable witness verifier.

use accrue_transactions::{Witness, WitnessVerifier};
use accrue_types::TxHash;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Accepts or rejects every witness, without looking at it.
///
/// The positional identity check in verification still applies, so witnesses
/// must carry the right verification payload even when `accept_all`.
pub struct NullWitnessVerifier {
    accept: bool,
    calls: AtomicUsize,
}

impl NullWitnessVerifier {
    pub fn accept_all() -> Self {
        Self {
            accept: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn reject_all() -> Self {
        Self {
            accept: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WitnessVerifier for NullWitnessVerifier {
    fn verify(&self, _hash: &TxHash, _witness: &Witness) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.accept
    }
}
