//! Calendar resources: events and the create-event request.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Recipient;

/// Graph pairs every event boundary with an explicit time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeTimeZone {
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    pub time_zone: String,
}

impl DateTimeTimeZone {
    /// UTC boundary, the only zone the fixtures use.
    #[must_use]
    pub fn utc(date_time: OffsetDateTime) -> Self {
        Self { date_time, time_zone: "UTC".to_owned() }
    }
}

/// Event location wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub display_name: String,
}

/// A required or optional meeting attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    #[serde(rename = "type")]
    pub kind: String,
    pub email_address: super::EmailAddress,
}

/// An event as returned by `/me/events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub subject: String,
    pub body_preview: String,
    pub start: DateTimeTimeZone,
    pub end: DateTimeTimeZone,
    pub location: Location,
    pub organizer: Recipient,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<Attendee>,
    pub is_online_meeting: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_meeting_provider: Option<String>,
}

/// Request body for the mock create-event operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub subject: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}
