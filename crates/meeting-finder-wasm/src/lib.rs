//! WASM bindings for meeting-finder.
//!
//! Exposes meeting-time search and free-gap computation to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-finder-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/meeting_finder_wasm.wasm
//! ```

use meeting_finder::{Event, MeetingRequest, TimeRange};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

/// Parse a JSON array of `{name, when: {start, end}, attendees}` objects.
fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))
}

/// Parse a `{name, attendees, optional_attendees, duration}` object.
fn parse_request_json(json: &str) -> Result<MeetingRequest, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))
}

/// Parse a JSON array of `{start, end}` objects.
fn parse_ranges_json(json: &str) -> Result<Vec<TimeRange>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid ranges JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every time of day the requested meeting could be held.
///
/// Returns a JSON array of `{start, end, duration}` objects in minutes,
/// sorted by start.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let request = parse_request_json(request_json)?;

    to_json(&meeting_finder::find_meeting_times(&events, &request))
}

/// Like `findMeetingTimes`, but also reports which attendee view produced the
/// times: `{times: [...], view: "everyone" | "required_only" | ...}`.
#[wasm_bindgen(js_name = "scheduleMeeting")]
pub fn schedule_meeting(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let request = parse_request_json(request_json)?;

    to_json(&meeting_finder::schedule(&events, &request))
}

/// Find free gaps of at least `min_duration` minutes between busy ranges.
///
/// `busy_json` is a JSON array of `{start, end}` objects in any order.
#[wasm_bindgen(js_name = "findGaps")]
pub fn find_gaps(busy_json: &str, min_duration: i32) -> Result<String, JsValue> {
    let mut busy = parse_ranges_json(busy_json)?;
    busy.sort_by(TimeRange::order_by_start);

    to_json(&meeting_finder::find_gaps(&busy, min_duration, 1))
}
