//! The look-ahead window and per-event day classification.
//!
//! Boundaries are day-granular (UTC) except the lower bound of "today",
//! which also requires the event to start no earlier than `now`:
//!
//! - today: `date == today && start >= now`
//! - tomorrow: `date == today + 1`, regardless of `future_days`
//! - later: `today + 1 < date <= today + future_days` (end inclusive)

use chrono::{Days, NaiveDate};

use crate::error::{QueryError, Result};
use crate::event::When;
use crate::instant::EventInstant;

/// Day boundaries derived from a fixed `now` and a look-ahead in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingWindow {
    now: EventInstant,
    today: NaiveDate,
    tomorrow: NaiveDate,
    end: NaiveDate,
}

impl UpcomingWindow {
    /// Derive the window for `now` looking `future_days` calendar days ahead.
    ///
    /// A window end past the last date chrono can represent saturates there.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidArgument`] if `future_days` is negative.
    pub fn new(now: EventInstant, future_days: i64) -> Result<Self> {
        let days = u64::try_from(future_days).map_err(|_| {
            QueryError::InvalidArgument(format!(
                "futureDays must be non-negative, got {}",
                future_days
            ))
        })?;

        let today = now.calendar_date;
        let tomorrow = today.succ_opt().unwrap_or(NaiveDate::MAX);
        let end = today
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);

        Ok(Self {
            now,
            today,
            tomorrow,
            end,
        })
    }

    pub fn now(&self) -> EventInstant {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn tomorrow(&self) -> NaiveDate {
        self.tomorrow
    }

    /// Last calendar date (inclusive) of the "later" category.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Label an event start, or `None` if it falls outside the window.
    pub fn classify(&self, start: &EventInstant) -> Option<When> {
        let date = start.calendar_date;

        if date == self.today {
            (start.exact_millis >= self.now.exact_millis).then_some(When::Today)
        } else if date == self.tomorrow {
            Some(When::Tomorrow)
        } else if date > self.tomorrow && date <= self.end {
            Some(When::On(date))
        } else {
            None
        }
    }
}
