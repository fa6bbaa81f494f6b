// ABOUTME: Calendar event model with wall-clock start parsing
// ABOUTME: Accepts RFC 3339, naive date-times, and bare dates; offsets are discarded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::ids::{EventId, PlanId, TenantId};

const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const WALL_CLOCK_OUTPUT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a start timestamp into the wall-clock time it was written in
///
/// An RFC 3339 offset is dropped without converting to UTC: `20:00-05:00`
/// stays `20:00` on its own calendar day.
#[must_use]
pub fn parse_wall_clock(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

mod wall_clock {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(super::WALL_CLOCK_OUTPUT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_wall_clock(&raw)
            .ok_or_else(|| de::Error::custom(format!("unrecognized event start '{raw}'")))
    }
}

/// Calendar-placed item with a concrete start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event id
    pub id: EventId,
    /// Owning church
    pub tenant_id: TenantId,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Wall-clock start
    #[serde(with = "wall_clock")]
    pub starts_at: NaiveDateTime,
    /// Venue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Service plan the event schedules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<PlanId>,
}

impl Event {
    /// Creates an event at the given wall-clock start
    #[must_use]
    pub fn new(
        id: impl Into<EventId>,
        tenant_id: impl Into<TenantId>,
        title: impl Into<String>,
        starts_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            tenant_id: tenant_id.into(),
            title: title.into(),
            starts_at,
            location: None,
            plan_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_discarded_not_converted() {
        let parsed = parse_wall_clock("2024-03-10T20:00:00-05:00").unwrap();
        assert_eq!(parsed.to_string(), "2024-03-10 20:00:00");
    }

    #[test]
    fn test_minute_precision_and_bare_date() {
        assert_eq!(
            parse_wall_clock("2024-03-10T08:00").unwrap().to_string(),
            "2024-03-10 08:00:00"
        );
        assert_eq!(
            parse_wall_clock("2024-03-10").unwrap().to_string(),
            "2024-03-10 00:00:00"
        );
        assert!(parse_wall_clock("next sunday").is_none());
    }

    #[test]
    fn test_event_deserializes_from_document() {
        let event: Event = serde_json::from_str(
            r#"{"id":"e1","tenantId":"grace","title":"Prayer","startsAt":"2024-03-10T08:00"}"#,
        )
        .unwrap();
        assert_eq!(event.starts_at.date().to_string(), "2024-03-10");
        assert!(event.location.is_none());
    }
}
