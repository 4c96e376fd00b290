//! Random sample days for demos and manual testing.

use rand::Rng;

use crate::event::{EventId, TimeRange};

/// Number of events generated when no count is given.
pub const DEFAULT_SAMPLE_COUNT: usize = 10;

/// Length of the sampled day in minutes (9 AM to 9 PM).
pub const SAMPLE_DAY_MINUTES: i64 = 720;

/// Latest sampled start, leaving room for a short event before the day ends.
const LATEST_START: i64 = 700;

/// Generate `count` events with ids `0..count`.
///
/// Starts are uniform in `[0, 700)` and each end falls uniformly between the start
/// and the end of the day. Ends are truncated to whole minutes, so an event can
/// come out empty (`start == end`); the layout engine reports those.
pub fn generate_events<R: Rng>(count: usize, rng: &mut R) -> Vec<(EventId, TimeRange)> {
    (0..count)
        .map(|index| {
            let start = rng.random_range(0..LATEST_START);
            let stretch: f64 = rng.random();
            let end = start + (stretch * (SAMPLE_DAY_MINUTES - start) as f64).floor() as i64;
            (EventId::Int(index as i64), TimeRange::new(start, end))
        })
        .collect()
}
