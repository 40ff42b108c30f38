//! Display-oriented JSON projection.
//!
//! One-directional: nothing reads this form back, and it is never used for
//! validation. Hashes use the reversed-byte display convention.

use crate::envelope::CoinReference;
use crate::Transaction;
use serde_json::{json, Value};

impl CoinReference {
    pub fn to_json(&self) -> Value {
        json!({
            "txid": self.source.to_string(),
            "vout": self.index,
        })
    }
}

impl Transaction {
    pub fn to_json(&self) -> Value {
        let envelope = self.envelope();
        let attributes: Vec<Value> = envelope
            .attributes
            .iter()
            .map(|a| json!({ "usage": a.usage.name(), "data": hex::encode(&a.data) }))
            .collect();
        let inputs: Vec<Value> = envelope.inputs.iter().map(CoinReference::to_json).collect();
        let outputs: Vec<Value> = envelope
            .outputs
            .iter()
            .enumerate()
            .map(|(n, o)| {
                json!({
                    "n": n,
                    "asset": o.asset.to_string(),
                    "value": o.value.to_string(),
                    "owner": o.owner.to_string(),
                })
            })
            .collect();
        let scripts: Vec<Value> = envelope
            .witnesses
            .iter()
            .map(|w| {
                json!({
                    "invocation": hex::encode(&w.invocation),
                    "verification": hex::encode(&w.verification),
                })
            })
            .collect();

        let mut object = json!({
            "txid": self.hash().to_string(),
            "type": self.kind().name(),
            "version": envelope.version,
            "attributes": attributes,
            "vin": inputs,
            "vout": outputs,
            "scripts": scripts,
        });

        if let (Some(claims), Value::Object(map)) = (self.claims(), &mut object) {
            map.insert(
                "claims".into(),
                Value::Array(claims.iter().map(CoinReference::to_json).collect()),
            );
        }

        object
    }
}
