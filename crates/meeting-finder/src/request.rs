//! The meeting being scheduled.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// A request to find time for a meeting of `duration` minutes.
///
/// Required attendees must all be free. Optional attendees are accommodated
/// when possible and dropped from consideration when not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MeetingRequestInput")]
pub struct MeetingRequest {
    name: String,
    required_attendees: BTreeSet<String>,
    optional_attendees: BTreeSet<String>,
    duration: i32,
}

impl MeetingRequest {
    /// Create a request with the given required attendees.
    ///
    /// Fails with [`MeetingError::InvalidInput`] if `duration` is negative. A
    /// zero or longer-than-a-day duration is accepted here and simply yields no
    /// meeting times.
    pub fn new<I, S>(required_attendees: I, duration: i32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if duration < 0 {
            return Err(MeetingError::InvalidInput(format!(
                "meeting duration must not be negative, got {}",
                duration
            )));
        }
        Ok(Self {
            name: String::new(),
            required_attendees: required_attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_optional_attendees<I, S>(mut self, optional_attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(optional_attendees.into_iter().map(Into::into));
        self
    }

    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional_attendees.insert(attendee.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_attendees(&self) -> &BTreeSet<String> {
        &self.required_attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    /// Requested meeting length in minutes.
    pub fn duration(&self) -> i32 {
        self.duration
    }
}

#[derive(Deserialize)]
struct MeetingRequestInput {
    #[serde(default)]
    name: String,
    #[serde(default, alias = "attendees")]
    required_attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
    duration: i32,
}

impl TryFrom<MeetingRequestInput> for MeetingRequest {
    type Error = MeetingError;

    fn try_from(input: MeetingRequestInput) -> Result<Self> {
        Ok(MeetingRequest::new(input.required_attendees, input.duration)?
            .with_name(input.name)
            .with_optional_attendees(input.optional_attendees))
    }
}
