#![no_main]

use accrue_types::Encode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding must never panic, and anything that decodes is canonical:
    // re-encoding gives back the exact input.
    if let Ok(tx) = accrue_transactions::Transaction::from_bytes(data) {
        assert_eq!(tx.to_bytes(), data);
        let _ = tx.to_json();
    }
});
