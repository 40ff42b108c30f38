//! Chain parameters consumed by claim verification and dividend accrual.

use crate::{AssetId, Fixed8};
use serde::{Deserialize, Serialize};

/// Blocks per generation step in the default schedule.
pub const DEFAULT_GENERATION_INTERVAL: u32 = 2_000_000;

/// One step of the dividend generation schedule.
///
/// From `start_height` (inclusive) until the next segment's start, every block
/// generates `per_block` dividend units, shared across the whole governance supply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSegment {
    pub start_height: u32,
    pub per_block: Fixed8,
}

/// Ledger-wide parameters for the two coupled assets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParams {
    /// Fixed-supply governance asset; holding it accrues dividends.
    pub governance_asset: AssetId,

    /// Dividend asset minted by claim transactions.
    pub dividend_asset: AssetId,

    /// Total governance supply. Accrual is shared pro rata over this amount.
    pub governance_supply: Fixed8,

    /// Generation schedule, ordered by strictly increasing `start_height`.
    pub generation: Vec<GenerationSegment>,
}

impl Default for ChainParams {
    fn default() -> Self {
        // 8, 7, ..., 1 units per block for one interval each, then 1 unit per
        // block for 14 more intervals, then generation stops.
        let mut generation: Vec<GenerationSegment> = (1..=8)
            .rev()
            .enumerate()
            .map(|(i, units)| GenerationSegment {
                start_height: i as u32 * DEFAULT_GENERATION_INTERVAL,
                per_block: Fixed8::from_raw(units * crate::amount::FIXED8_UNIT),
            })
            .collect();
        generation.push(GenerationSegment {
            start_height: 22 * DEFAULT_GENERATION_INTERVAL,
            per_block: Fixed8::ZERO,
        });

        Self {
            governance_asset: AssetId::new([0x01; 32]),
            dividend_asset: AssetId::new([0x02; 32]),
            governance_supply: Fixed8::from_raw(100_000_000 * crate::amount::FIXED8_UNIT),
            generation,
        }
    }
}
