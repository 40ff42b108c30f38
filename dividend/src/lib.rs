//! Dividend accrual for governance holdings.
//!
//! Each block generates a scheduled amount of the dividend asset, shared pro
//! rata over the whole governance supply. A governance output created at height
//! `h0` and spent at `h1` has accrued
//! `value × Σ_{h0 ≤ h < h1} per_block(h) / governance_supply`, which a claim
//! transaction may mint exactly once.
//!
//! This crate handles:
//! - The height-segmented generation schedule
//! - The [`ClaimAmountOracle`] contract claim verification consumes
//! - [`DividendCalculator`], the ledger-backed oracle

pub mod calculator;
pub mod error;
pub mod oracle;
pub mod schedule;

pub use calculator::DividendCalculator;
pub use error::{ClaimError, ParamsError};
pub use oracle::ClaimAmountOracle;
pub use schedule::GenerationSchedule;
