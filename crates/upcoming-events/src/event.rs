//! Input and output records of the upcoming-events query.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::instant::format_day_month_year;

/// An event as observed on the social network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub label: String,
    /// ISO-8601 start, UTC (e.g., `"2019-01-03T18:00Z"`).
    pub start_date_time: String,
}

impl RawEvent {
    pub fn new(label: impl Into<String>, start_date_time: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start_date_time: start_date_time.into(),
        }
    }
}

/// Human-friendly day of an upcoming event.
///
/// Renders as `"today"`, `"tomorrow"`, or `"DD.MM.YYYY"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum When {
    Today,
    Tomorrow,
    On(NaiveDate),
}

impl fmt::Display for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            When::Today => f.write_str("today"),
            When::Tomorrow => f.write_str("tomorrow"),
            When::On(date) => f.write_str(&format_day_month_year(*date)),
        }
    }
}

impl Serialize for When {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One line of the upcoming-events digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingEvent {
    /// The event label, unchanged.
    pub what: String,
    pub when: When,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_event_uses_camel_case_wire_names() {
        let json = r#"{"label":"Rockets Club reunion","startDateTime":"2019-01-31T23:59Z"}"#;
        let event: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, RawEvent::new("Rockets Club reunion", "2019-01-31T23:59Z"));
    }

    #[test]
    fn test_when_display() {
        assert_eq!(When::Today.to_string(), "today");
        assert_eq!(When::Tomorrow.to_string(), "tomorrow");
        let date = NaiveDate::from_ymd_opt(2019, 1, 3).unwrap();
        assert_eq!(When::On(date).to_string(), "03.01.2019");
    }

    #[test]
    fn test_upcoming_event_serializes_when_as_string() {
        let event = UpcomingEvent {
            what: "Grapes & Happiness".to_string(),
            when: When::On(NaiveDate::from_ymd_opt(2019, 1, 31).unwrap()),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "what": "Grapes & Happiness", "when": "31.01.2019" })
        );
    }
}
