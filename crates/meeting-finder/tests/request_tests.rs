//! Tests for `Event` and `MeetingRequest` construction and serde input.

use meeting_finder::{Event, MeetingError, MeetingRequest, TimeRange};

#[test]
fn request_rejects_negative_duration() {
    let err = MeetingRequest::new(["A"], -1).unwrap_err();
    assert!(matches!(err, MeetingError::InvalidInput(_)));
}

#[test]
fn request_accepts_zero_and_over_long_durations() {
    // These are answered with "no times", not rejected.
    assert!(MeetingRequest::new(["A"], 0).is_ok());
    assert!(MeetingRequest::new(["A"], 24 * 60 + 1).is_ok());
}

#[test]
fn optional_attendees_accumulate() {
    let mut request = MeetingRequest::new(["A"], 30)
        .unwrap()
        .with_name("sync")
        .with_optional_attendees(["B"]);
    request.add_optional_attendee("C");
    request.add_optional_attendee("B");

    assert_eq!(request.name(), "sync");
    assert_eq!(request.required_attendees().len(), 1);
    let optional: Vec<&str> = request.optional_attendees().iter().map(|s| s.as_str()).collect();
    assert_eq!(optional, vec!["B", "C"]);
}

#[test]
fn request_deserializes_with_attendees_alias() {
    let request: MeetingRequest = serde_json::from_str(
        r#"{"name":"sync","attendees":["A","B"],"optional_attendees":["C"],"duration":30}"#,
    )
    .unwrap();

    assert_eq!(request.required_attendees().len(), 2);
    assert!(request.optional_attendees().contains("C"));
    assert_eq!(request.duration(), 30);
}

#[test]
fn request_deserialize_defaults_missing_groups() {
    let request: MeetingRequest = serde_json::from_str(r#"{"duration":45}"#).unwrap();

    assert!(request.required_attendees().is_empty());
    assert!(request.optional_attendees().is_empty());
    assert_eq!(request.name(), "");
}

#[test]
fn request_deserialize_rejects_negative_duration() {
    let result = serde_json::from_str::<MeetingRequest>(r#"{"attendees":["A"],"duration":-30}"#);
    assert!(result.is_err());
}

#[test]
fn event_deserializes_with_validated_range() {
    let event: Event = serde_json::from_str(
        r#"{"name":"standup","when":{"start":540,"end":555},"attendees":["A","B"]}"#,
    )
    .unwrap();

    assert_eq!(event.name(), "standup");
    assert_eq!(event.when(), TimeRange::new(540, 555).unwrap());
    assert!(event.attendees().contains("B"));

    let bad = serde_json::from_str::<Event>(
        r#"{"name":"broken","when":{"start":555,"end":540},"attendees":[]}"#,
    );
    assert!(bad.is_err());
}
