//! Height-segmented dividend generation schedule.

use crate::ParamsError;
use accrue_types::{Fixed8, GenerationSegment};

/// The global generation schedule.
///
/// Segment `i` applies from its `start_height` up to (excluding) the next
/// segment's start; the last segment never ends. Heights before the first
/// segment generate nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSchedule {
    segments: Vec<GenerationSegment>,
}

impl GenerationSchedule {
    pub fn new(segments: Vec<GenerationSegment>) -> Result<Self, ParamsError> {
        if segments.is_empty() {
            return Err(ParamsError::EmptySchedule);
        }
        for (index, segment) in segments.iter().enumerate() {
            if segment.per_block.is_negative() {
                return Err(ParamsError::NegativeRate { index });
            }
            if index > 0 && segment.start_height <= segments[index - 1].start_height {
                return Err(ParamsError::UnorderedSchedule { index });
            }
        }
        Ok(Self { segments })
    }

    /// A single open-ended segment from height zero.
    pub fn constant(per_block: Fixed8) -> Result<Self, ParamsError> {
        Self::new(vec![GenerationSegment {
            start_height: 0,
            per_block,
        }])
    }

    pub fn segments(&self) -> &[GenerationSegment] {
        &self.segments
    }

    /// Amount generated by the block at `height`.
    pub fn per_block_at(&self, height: u32) -> Fixed8 {
        self.segments
            .iter()
            .rev()
            .find(|s| s.start_height <= height)
            .map(|s| s.per_block)
            .unwrap_or(Fixed8::ZERO)
    }

    /// Total raw units generated by blocks in `[start, end)`.
    ///
    /// O(k) in the number of segments. `None` on overflow.
    pub fn accrued_checked(&self, start: u32, end: u32) -> Option<u128> {
        let mut total: u128 = 0;
        for (i, segment) in self.segments.iter().enumerate() {
            let seg_end = self
                .segments
                .get(i + 1)
                .map(|next| next.start_height)
                .unwrap_or(u32::MAX);
            let from = segment.start_height.max(start);
            let to = seg_end.min(end);
            if from >= to {
                continue;
            }
            let blocks = u128::from(to - from);
            let rate = u128::try_from(segment.per_block.raw()).ok()?;
            total = total.checked_add(rate.checked_mul(blocks)?)?;
        }
        Some(total)
    }
}
