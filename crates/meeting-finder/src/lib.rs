//! # meeting-finder
//!
//! Find the times of day a meeting could be held, given everyone's existing
//! commitments.
//!
//! The day is an abstract range of whole minutes, `0..=1439`. Events block
//! time for their attendees; a [`MeetingRequest`] names required and optional
//! attendees and a duration. The result is every free interval long enough for
//! the meeting, preferring times that suit optional attendees too.
//!
//! ```rust
//! use meeting_finder::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new("Standup", TimeRange::new(60, 120).unwrap(), ["A"])];
//! let request = MeetingRequest::new(["A"], 30).unwrap();
//!
//! let times = find_meeting_times(&events, &request);
//! assert_eq!(
//!     times,
//!     vec![TimeRange::new(0, 60).unwrap(), TimeRange::until_end_of_day(120).unwrap()]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] - half-open minute ranges and day constants
//! - [`event`] - existing calendar commitments
//! - [`request`] - the meeting to schedule
//! - [`filter`] - drop events that do not constrain the meeting
//! - [`gaps`] - free intervals between sorted busy intervals
//! - [`scheduler`] - pick between the everyone and required-only views
//! - [`error`] - error types

pub mod error;
pub mod event;
pub mod filter;
pub mod gaps;
pub mod request;
pub mod scheduler;
pub mod time_range;

pub use error::MeetingError;
pub use event::Event;
pub use gaps::find_gaps;
pub use request::MeetingRequest;
pub use scheduler::{find_meeting_times, schedule, AttendeeView, Schedule};
pub use time_range::{TimeRange, END_OF_DAY, START_OF_DAY};
