//! Instants with an exact and a day-level projection.
//!
//! Every timestamp the finder looks at (the "now" anchor and each event
//! start) is turned into an [`EventInstant`] once. Comparisons that care about
//! the moment use [`EventInstant::exact_millis`]; comparisons that care about
//! the day use [`EventInstant::calendar_date`], which is always the **UTC**
//! calendar date. The timezone of the executing machine never leaks in.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{QueryError, Result};

/// Date-time layouts accepted after a trailing `Z` has been stripped, and for
/// inputs that carry no offset at all (interpreted as UTC).
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Minute-precision layouts with a numeric offset. Second precision with an
/// offset is covered by RFC 3339.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// A point in time with its two projections, computed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventInstant {
    /// Milliseconds since the Unix epoch (UTC).
    pub exact_millis: i64,
    /// The UTC calendar date containing the instant.
    pub calendar_date: NaiveDate,
}

impl EventInstant {
    /// Build both projections from a UTC datetime.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            exact_millis: dt.timestamp_millis(),
            calendar_date: dt.date_naive(),
        }
    }

    /// Build an instant from milliseconds since the epoch.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidArgument`] when `millis` lies outside the
    /// range chrono can represent.
    pub fn from_millis(millis: i64) -> Result<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Self::from_datetime)
            .ok_or_else(|| {
                QueryError::InvalidArgument(format!(
                    "{} millis from epoch is out of range",
                    millis
                ))
            })
    }

    /// Parse an ISO-8601 event timestamp.
    ///
    /// Accepts minute, second or sub-second precision followed by `Z`, a
    /// numeric offset, or nothing (taken as UTC), and bare `YYYY-MM-DD` dates
    /// (midnight UTC). The error is a human-readable reason; callers attach
    /// the event it belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use upcoming_events::EventInstant;
    ///
    /// let instant = EventInstant::parse("2018-12-31T21:00Z").unwrap();
    /// assert_eq!(instant.exact_millis, 1_546_290_000_000);
    /// assert_eq!(instant.calendar_date.to_string(), "2018-12-31");
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        parse_utc(s.trim())
            .map(Self::from_datetime)
            .ok_or_else(|| "expected an ISO-8601 date or date-time".to_string())
    }
}

/// Format a date as `DD.MM.YYYY` with zero-padded day and month.
pub fn format_day_month_year(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

fn parse_utc(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = s.strip_suffix(['Z', 'z']).and_then(parse_naive) {
        return Some(naive.and_utc());
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    if let Some(naive) = parse_naive(s) {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
