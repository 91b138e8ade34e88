//! Narrow the event set down to the events that constrain a meeting.
//!
//! An event only blocks time for the meeting if everyone attending it is
//! someone the meeting cares about. Events with an outsider in them are noise
//! and are dropped.

use std::collections::BTreeSet;

use crate::event::Event;
use crate::time_range::TimeRange;

/// Keep events whose attendees are all in `required` or `optional`.
///
/// An event with no attendees has no outsider, so it is kept.
pub fn relevant_events<'a>(
    events: &'a [Event],
    required: &BTreeSet<String>,
    optional: &BTreeSet<String>,
) -> Vec<&'a Event> {
    let relevant: Vec<&Event> = events
        .iter()
        .filter(|event| {
            event
                .attendees()
                .iter()
                .all(|person| required.contains(person) || optional.contains(person))
        })
        .collect();

    tracing::trace!(
        total = events.len(),
        relevant = relevant.len(),
        "filtered events to meeting attendees"
    );
    relevant
}

/// From already-relevant events, drop every event with an optional attendee.
///
/// What remains is the busy time of required attendees alone.
pub fn required_only_events<'a>(
    relevant: &[&'a Event],
    optional: &BTreeSet<String>,
) -> Vec<&'a Event> {
    relevant
        .iter()
        .copied()
        .filter(|event| !event.attendees().iter().any(|person| optional.contains(person)))
        .collect()
}

/// Extract the event times and sort them ascending by start minute.
pub fn busy_intervals(events: &[&Event]) -> Vec<TimeRange> {
    let mut busy: Vec<TimeRange> = events.iter().map(|event| event.when()).collect();
    busy.sort_by(TimeRange::order_by_start);
    busy
}
