//! Compute free gaps from a sorted list of busy intervals.
//!
//! Single sweep over busy intervals sorted by start. Intervals are not merged
//! first; instead the sweep tracks the latest end seen so far, so a long
//! interval that swallows later, shorter ones keeps the day busy until it ends.

use crate::time_range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// Exclusive end of the day.
const DAY_END: i32 = END_OF_DAY + 1;

/// Find every maximal free interval of at least `min_duration` minutes.
///
/// `busy` must be sorted ascending by start minute. Returns an empty list when
/// `attendee_count` is zero: with nobody to schedule there is nothing to
/// report here, and the caller decides what an unconstrained day means.
///
/// The gap after the last busy interval runs through [`END_OF_DAY`]
/// inclusive. Gaps are clipped to the day and returned in ascending order.
pub fn find_gaps(busy: &[TimeRange], min_duration: i32, attendee_count: usize) -> Vec<TimeRange> {
    let mut gaps = Vec::new();

    if attendee_count == 0 {
        return gaps;
    }

    debug_assert!(
        busy.windows(2).all(|w| w[0].start() <= w[1].start()),
        "busy intervals must be sorted by start"
    );

    // Latest end of any busy interval processed so far.
    let mut latest_end = START_OF_DAY;

    for i in 0..=busy.len() {
        let (start, end) = if i == busy.len() {
            (latest_end, DAY_END)
        } else if i == 0 {
            (START_OF_DAY, busy[0].start())
        } else {
            (busy[i - 1].end(), busy[i].start())
        };

        // An earlier interval may still be running past busy[i - 1].end.
        let start = start.max(latest_end).max(START_OF_DAY);
        let end = end.min(DAY_END);

        if is_valid_gap(start, end, min_duration, latest_end) {
            gaps.push(TimeRange::new_unchecked(start, end));
        }

        if let Some(interval) = busy.get(i) {
            latest_end = latest_end.max(interval.end());
        }
    }

    gaps
}

fn is_valid_gap(start: i32, end: i32, min_duration: i32, latest_end: i32) -> bool {
    start < end && end - start >= min_duration && start >= latest_end
}
