//! Contract transaction: an ordinary transfer that mints nothing.

use crate::envelope::Envelope;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ContractTx {
    pub envelope: Envelope,
}

impl ContractTx {
    pub fn new(envelope: Envelope) -> Self {
        Self { envelope }
    }
}
