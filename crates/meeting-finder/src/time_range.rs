//! Half-open ranges of whole minutes within a single day.
//!
//! A [`TimeRange`] is `[start, end)`: it covers every minute `m` with
//! `start <= m < end`. The day itself runs from [`START_OF_DAY`] to
//! [`END_OF_DAY`], where `END_OF_DAY` is the last valid minute (an inclusive
//! point), so [`TimeRange::WHOLE_DAY`] is `[0, 1440)`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// First minute of the day.
pub const START_OF_DAY: i32 = 0;

/// Last valid minute of the day (inclusive).
pub const END_OF_DAY: i32 = 24 * 60 - 1;

/// An immutable half-open interval of minutes, ordered by `(start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "TimeRangeRepr", try_from = "TimeRangeRepr")]
pub struct TimeRange {
    start: i32,
    end: i32,
}

impl TimeRange {
    /// The entire day, `[START_OF_DAY, END_OF_DAY]` inclusive.
    pub const WHOLE_DAY: TimeRange = TimeRange::new_unchecked(START_OF_DAY, END_OF_DAY + 1);

    /// Create the half-open range `[start, end)`.
    ///
    /// Fails with [`MeetingError::InvalidInput`] unless `start < end`.
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start >= end {
            return Err(MeetingError::InvalidInput(format!(
                "time range start ({}) must be before end ({})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Create a range that starts at `start` and lasts `duration` minutes.
    pub fn from_start_duration(start: i32, duration: i32) -> Result<Self> {
        let end = start.checked_add(duration).ok_or_else(|| {
            MeetingError::InvalidInput(format!(
                "duration {} from start {} overflows",
                duration, start
            ))
        })?;
        Self::new(start, end)
    }

    /// Create a range from `start` to `end`.
    ///
    /// When `inclusive` is set, minute `end` itself is part of the range, so the
    /// stored exclusive end is `end + 1`.
    pub fn from_start_end(start: i32, end: i32, inclusive: bool) -> Result<Self> {
        if inclusive {
            let end = end.checked_add(1).ok_or_else(|| {
                MeetingError::InvalidInput(format!("inclusive end {} overflows", end))
            })?;
            Self::new(start, end)
        } else {
            Self::new(start, end)
        }
    }

    /// Create the range from `start` through the last minute of the day.
    pub fn until_end_of_day(start: i32) -> Result<Self> {
        Self::from_start_end(start, END_OF_DAY, true)
    }

    /// Callers must already have checked `start < end`.
    pub(crate) const fn new_unchecked(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    /// Exclusive end minute.
    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// Whether the single minute `minute` falls inside this range.
    pub fn contains_minute(&self, minute: i32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two ranges share at least one minute.
    ///
    /// Ranges that merely touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Compare by start minute only.
    pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start)
    }

    /// Compare by end minute only.
    pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Wire form: `{start, end, duration}` on output. `duration` is ignored on input
/// and recomputed from the validated bounds.
#[derive(Serialize, Deserialize)]
struct TimeRangeRepr {
    start: i32,
    end: i32,
    #[serde(default, skip_deserializing)]
    duration: i32,
}

impl From<TimeRange> for TimeRangeRepr {
    fn from(range: TimeRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
            duration: range.duration(),
        }
    }
}

impl TryFrom<TimeRangeRepr> for TimeRange {
    type Error = MeetingError;

    fn try_from(repr: TimeRangeRepr) -> Result<Self> {
        TimeRange::new(repr.start, repr.end)
    }
}
