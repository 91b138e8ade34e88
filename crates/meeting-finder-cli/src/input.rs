//! JSON input format for the `findmeeting` CLI.
//!
//! ```json
//! {
//!   "events": [
//!     {"name": "Standup", "start": "09:00", "end": "09:15", "attendees": ["alice"]},
//!     {"name": "Lunch", "start": 720, "end": 780, "attendees": ["bob"]}
//!   ],
//!   "request": {"attendees": ["alice"], "optional_attendees": ["bob"], "duration": 30}
//! }
//! ```
//!
//! Times are either minutes since the start of the day or `HH:MM` clock
//! strings. `24:00` is accepted as the end of the day.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{NaiveTime, Timelike};
use meeting_finder::{Event, MeetingRequest, TimeRange, END_OF_DAY};
use serde::Deserialize;

const DAY_END: i32 = END_OF_DAY + 1;

#[derive(Deserialize)]
struct InputFile {
    #[serde(default)]
    events: Vec<EventInput>,
    request: MeetingRequest,
}

#[derive(Deserialize)]
struct EventInput {
    #[serde(default)]
    name: Option<String>,
    start: MinuteInput,
    end: MinuteInput,
    #[serde(default)]
    attendees: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MinuteInput {
    Minutes(i32),
    Clock(String),
}

impl MinuteInput {
    fn to_minutes(&self) -> Result<i32> {
        match self {
            MinuteInput::Minutes(m) => Ok(*m),
            MinuteInput::Clock(s) => parse_clock(s),
        }
    }
}

/// Parsed CLI input, ready for the scheduler.
#[derive(Debug)]
pub struct Query {
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

/// Parse the JSON input document into events and a request.
pub fn parse_query(json: &str) -> Result<Query> {
    let input: InputFile = serde_json::from_str(json).context("Invalid input JSON")?;

    let events = input
        .events
        .into_iter()
        .enumerate()
        .map(|(i, e)| -> Result<Event> {
            let name = e.name.unwrap_or_else(|| format!("event {}", i + 1));
            let start = e.start.to_minutes()?;
            let end = e.end.to_minutes()?;
            let when = TimeRange::new(start, end)
                .with_context(|| format!("Invalid time range for '{}'", name))?;
            Ok(Event::new(name, when, e.attendees))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(events = events.len(), "parsed input");
    Ok(Query {
        events,
        request: input.request,
    })
}

/// Parse `HH:MM` into minutes since the start of the day.
pub fn parse_clock(s: &str) -> Result<i32> {
    let s = s.trim();
    if s == "24:00" {
        return Ok(DAY_END);
    }
    let time = NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|e| anyhow!("Invalid clock time '{}': {}", s, e))?;
    Ok((time.num_seconds_from_midnight() / 60) as i32)
}

/// Render minutes since the start of the day as `HH:MM`.
pub fn format_clock(minute: i32) -> Result<String> {
    if minute == DAY_END {
        return Ok("24:00".to_string());
    }
    if !(0..DAY_END).contains(&minute) {
        bail!("Minute {} is outside the day", minute);
    }
    let time = NaiveTime::from_num_seconds_from_midnight_opt(minute as u32 * 60, 0)
        .ok_or_else(|| anyhow!("Minute {} is outside the day", minute))?;
    Ok(time.format("%H:%M").to_string())
}
