//! Property-based tests for meeting-time search using proptest.
//!
//! These check invariants that hold for *any* calendar and request, not just
//! the hand-picked cases in `scheduler_tests.rs`.

use proptest::prelude::*;
use meeting_finder::{find_gaps, find_meeting_times, Event, MeetingRequest, TimeRange, END_OF_DAY};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const PEOPLE: [&str; 5] = ["A", "B", "C", "D", "E"];

/// A valid range inside the day (or running slightly past either edge).
fn arb_range() -> impl Strategy<Value = TimeRange> {
    (-60i32..=1500, 1i32..=300)
        .prop_map(|(start, len)| TimeRange::from_start_duration(start, len).unwrap())
}

fn arb_people() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(PEOPLE.to_vec(), 0..=3)
        .prop_map(|names| names.into_iter().map(String::from).collect())
}

fn arb_event() -> impl Strategy<Value = Event> {
    (arb_range(), arb_people()).prop_map(|(when, attendees)| Event::new("event", when, attendees))
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 0..12)
}

fn arb_request() -> impl Strategy<Value = MeetingRequest> {
    (arb_people(), arb_people(), 0i32..=1500).prop_map(|(required, optional, duration)| {
        MeetingRequest::new(required, duration)
            .unwrap()
            .with_optional_attendees(optional)
    })
}

fn sorted(mut ranges: Vec<TimeRange>) -> Vec<TimeRange> {
    ranges.sort_by(TimeRange::order_by_start);
    ranges
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn results_stay_inside_the_day(events in arb_events(), request in arb_request()) {
        for t in find_meeting_times(&events, &request) {
            prop_assert!(t.start() < t.end());
            prop_assert!(t.start() >= 0);
            prop_assert!(t.end() - 1 <= END_OF_DAY, "{} runs past the day", t);
        }
    }

    #[test]
    fn results_are_sorted_and_disjoint(events in arb_events(), request in arb_request()) {
        let times = find_meeting_times(&events, &request);
        for pair in times.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start(), "{} overlaps {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn results_are_long_enough(events in arb_events(), request in arb_request()) {
        for t in find_meeting_times(&events, &request) {
            prop_assert!(t.duration() >= request.duration());
        }
    }

    #[test]
    fn query_is_idempotent(events in arb_events(), request in arb_request()) {
        prop_assert_eq!(
            find_meeting_times(&events, &request),
            find_meeting_times(&events, &request)
        );
    }

    #[test]
    fn impossible_durations_yield_nothing(events in arb_events(), required in arb_people(), extra in 1i32..500) {
        prop_assume!(!required.is_empty());
        let zero = MeetingRequest::new(required.clone(), 0).unwrap();
        let too_long = MeetingRequest::new(required, TimeRange::WHOLE_DAY.duration() + extra).unwrap();
        prop_assert!(find_meeting_times(&events, &zero).is_empty());
        prop_assert!(find_meeting_times(&events, &too_long).is_empty());
    }

    #[test]
    fn nobody_invited_gets_whole_day(events in arb_events(), duration in 0i32..3000) {
        let request = MeetingRequest::new(Vec::<String>::new(), duration).unwrap();
        prop_assert_eq!(find_meeting_times(&events, &request), vec![TimeRange::WHOLE_DAY]);
    }

    #[test]
    fn gaps_never_overlap_busy_time(busy in prop::collection::vec(arb_range(), 0..12), min in 1i32..120) {
        let busy = sorted(busy);
        for gap in find_gaps(&busy, min, 1) {
            for b in &busy {
                prop_assert!(!gap.overlaps(b), "gap {} overlaps busy {}", gap, b);
            }
        }
    }

    #[test]
    fn removing_busy_time_only_grows_gaps(
        busy in prop::collection::vec(arb_range(), 1..12),
        index in any::<prop::sample::Index>(),
        min in 1i32..120,
    ) {
        let busy = sorted(busy);
        let before = find_gaps(&busy, min, 1);

        let mut fewer = busy.clone();
        fewer.remove(index.index(busy.len()));
        let after = find_gaps(&fewer, min, 1);

        for gap in &before {
            prop_assert!(
                after.iter().any(|g| g.contains(gap)),
                "gap {} lost after removing busy time", gap
            );
        }
    }

    #[test]
    fn minute_free_iff_no_busy_interval_covers_it(busy in prop::collection::vec(arb_range(), 0..8), minute in 0i32..=END_OF_DAY) {
        let busy = sorted(busy);
        let gaps = find_gaps(&busy, 1, 1);
        let free = gaps.iter().any(|g| g.contains_minute(minute));
        let covered = busy.iter().any(|b| b.contains_minute(minute));
        prop_assert_eq!(free, !covered);
    }
}
