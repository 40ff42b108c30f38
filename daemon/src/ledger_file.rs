//! JSON ledger fixtures for the command-line tool.
//!
//! ```json
//! { "blocks": [ { "height": 0, "transactions": ["80000000..."] } ] }
//! ```

use accrue_ledger::MemoryLedger;
use accrue_transactions::Transaction;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct LedgerFile {
    #[serde(default)]
    pub blocks: Vec<BlockFile>,
}

#[derive(Debug, Deserialize)]
pub struct BlockFile {
    pub height: u32,
    #[serde(default)]
    pub transactions: Vec<String>,
}

/// Decode a hex-encoded transaction.
pub fn decode_hex(text: &str) -> anyhow::Result<Transaction> {
    let bytes = hex::decode(text.trim()).context("transaction is not valid hex")?;
    Ok(Transaction::from_bytes(&bytes)?)
}

impl LedgerFile {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read ledger file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid ledger file {}", path.display()))
    }

    /// Commit every block, in file order, to a fresh ledger.
    pub fn into_ledger(self) -> anyhow::Result<MemoryLedger> {
        let ledger = MemoryLedger::new();
        for block in self.blocks {
            let transactions = block
                .transactions
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    decode_hex(text)
                        .with_context(|| format!("block {} transaction {i}", block.height))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            let count = transactions.len();
            ledger
                .commit_block(block.height, transactions)
                .with_context(|| format!("cannot commit block {}", block.height))?;
            tracing::debug!(height = block.height, transactions = count, "loaded block");
        }
        Ok(ledger)
    }
}
