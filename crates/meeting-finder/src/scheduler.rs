//! Decide which meeting times to offer for a request.
//!
//! Two candidate gap lists are computed: one that respects everybody's
//! calendar, and one that ignores optional attendees. Any slot that works for
//! everyone beats any number of slots that leave someone out, so the
//! required-only view is used only when the everyone view is empty.

use serde::Serialize;

use crate::event::Event;
use crate::filter::{busy_intervals, relevant_events, required_only_events};
use crate::gaps::find_gaps;
use crate::request::MeetingRequest;
use crate::time_range::TimeRange;

/// Which set of calendars produced a [`Schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendeeView {
    /// The request names nobody, so the whole day is free.
    Unconstrained,
    /// The duration is zero or longer than a day; nothing can fit.
    Impossible,
    /// Times work for required and optional attendees alike.
    Everyone,
    /// No time worked for everyone; optional attendees were ignored.
    RequiredOnly,
}

/// Meeting times together with the view they were computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub times: Vec<TimeRange>,
    pub view: AttendeeView,
}

/// Find every time of day the requested meeting could be held.
///
/// Returns non-overlapping ranges sorted by start. See [`schedule`] for the
/// rules applied.
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    schedule(events, request).times
}

/// Compute meeting times and report which attendee view was used.
///
/// - No required and no optional attendees: `[WHOLE_DAY]`.
/// - Duration of zero or longer than a day: no times.
/// - Otherwise the gaps that fit everyone, or, when there are none, the gaps
///   that fit the required attendees.
pub fn schedule(events: &[Event], request: &MeetingRequest) -> Schedule {
    let required = request.required_attendees();
    let optional = request.optional_attendees();
    let duration = request.duration();

    if required.is_empty() && optional.is_empty() {
        return Schedule {
            times: vec![TimeRange::WHOLE_DAY],
            view: AttendeeView::Unconstrained,
        };
    }

    if duration == 0 || duration > TimeRange::WHOLE_DAY.duration() {
        tracing::debug!(duration, "meeting duration cannot fit in a day");
        return Schedule {
            times: Vec::new(),
            view: AttendeeView::Impossible,
        };
    }

    let relevant = relevant_events(events, required, optional);
    let required_only = required_only_events(&relevant, optional);

    let everyone = find_gaps(
        &busy_intervals(&relevant),
        duration,
        required.len() + optional.len(),
    );

    if !everyone.is_empty() {
        tracing::debug!(slots = everyone.len(), "found times for all attendees");
        return Schedule {
            times: everyone,
            view: AttendeeView::Everyone,
        };
    }

    let times = find_gaps(&busy_intervals(&required_only), duration, required.len());
    tracing::debug!(
        slots = times.len(),
        optional = optional.len(),
        "no time fits everyone, falling back to required attendees"
    );
    Schedule {
        times,
        view: AttendeeView::RequiredOnly,
    }
}
