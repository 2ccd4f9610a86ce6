//! Event types.
//!
//! `Event` is what the store hands out, `EventFields` is what it accepts,
//! and `EventInput` is the unchecked request body that gets validated into
//! `EventFields` before any store call.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EventError, EventResult};

/// Opaque store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        EventId(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        EventId(id.to_string())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The six content fields of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFields {
    pub title: String,
    pub description: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    /// Free-form, e.g. "10:00". Never parsed.
    pub time: String,
    pub location: String,
    pub organizer: String,
}

/// A stored event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(flatten)]
    pub fields: EventFields,
}

impl Event {
    pub fn new(id: EventId, fields: EventFields) -> Self {
        Event { id, fields }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.fields.title)
    }
}

/// Request body for create and update.
///
/// Every field is optional so that a missing field is reported as a
/// validation error rather than a decoding failure. Unknown keys (including
/// a client-supplied `id`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
}

impl EventInput {
    /// Check that every field is present and non-blank and that `date` parses.
    ///
    /// Reports all offending fields at once, in declaration order.
    pub fn validate(self) -> EventResult<EventFields> {
        let mut invalid = Vec::new();

        let title = require(&mut invalid, "title", self.title);
        let description = require(&mut invalid, "description", self.description);
        let raw_date = require(&mut invalid, "date", self.date);
        let date = parse_event_date(&raw_date);
        if date.is_none() && !raw_date.is_empty() {
            invalid.push("date");
        }
        let time = require(&mut invalid, "time", self.time);
        let location = require(&mut invalid, "location", self.location);
        let organizer = require(&mut invalid, "organizer", self.organizer);

        match date {
            Some(date) if invalid.is_empty() => Ok(EventFields {
                title,
                description,
                date,
                time,
                location,
                organizer,
            }),
            _ => Err(EventError::Validation(invalid)),
        }
    }
}

fn require(invalid: &mut Vec<&'static str>, name: &'static str, value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            invalid.push(name);
            String::new()
        }
    }
}

impl From<EventFields> for EventInput {
    fn from(fields: EventFields) -> Self {
        EventInput {
            title: Some(fields.title),
            description: Some(fields.description),
            date: Some(fields.date.format(iso_date::FORMAT).to_string()),
            time: Some(fields.time),
            location: Some(fields.location),
            organizer: Some(fields.organizer),
        }
    }
}

/// Parse a calendar date from a plain ISO date or a full ISO-8601 timestamp.
///
/// Timestamps keep their UTC calendar date, so `2025-06-01T00:00:00.000Z`
/// yields 2025-06-01.
pub fn parse_event_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, iso_date::FORMAT) {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|dt| dt.date())
}

/// Serde adapter: writes `YYYY-MM-DD`, reads anything `parse_event_date` accepts.
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_event_date(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
    }
}
