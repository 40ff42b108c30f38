#![no_main]

use accrue_dividend::GenerationSchedule;
use accrue_types::{Fixed8, GenerationSegment};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    segments: Vec<(u32, i64)>,
    start: u32,
    end: u32,
}

fuzz_target!(|input: Input| {
    let segments = input
        .segments
        .into_iter()
        .map(|(start_height, raw)| GenerationSegment {
            start_height,
            per_block: Fixed8::from_raw(raw),
        })
        .collect();
    // Invalid schedules are rejected; valid ones never panic when summed.
    if let Ok(schedule) = GenerationSchedule::new(segments) {
        let _ = schedule.accrued_checked(input.start, input.end);
        let _ = schedule.per_block_at(input.end);
    }
});
