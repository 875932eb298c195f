//! Filter and order raw events into the upcoming-events digest.
//!
//! Pure: the caller supplies "now", so the same inputs always give the same
//! digest.

use tracing::{debug, instrument, trace};

use crate::error::{QueryError, Result};
use crate::event::{RawEvent, UpcomingEvent, When};
use crate::instant::EventInstant;
use crate::window::UpcomingWindow;

/// Find the events starting between `now` and `future_days` calendar days
/// ahead, labeled "today", "tomorrow", or `DD.MM.YYYY`.
///
/// # Ordering
///
/// Events are ordered by day first. Within one day (one `when` label) they
/// are ordered by label, case-insensitively; events with equal labels keep
/// their chronological order.
///
/// # Errors
///
/// - [`QueryError::InvalidArgument`] if `future_days` is negative or
///   `now_millis` is out of range.
/// - [`QueryError::MalformedEvent`] for the first event (in input order)
///   whose `startDateTime` cannot be parsed. No partial result is returned.
///
/// # Examples
///
/// ```
/// use upcoming_events::{find_upcoming_events, RawEvent};
///
/// let events = vec![
///     RawEvent::new("Rockets Club reunion", "2019-01-31T23:59Z"),
///     RawEvent::new("New Year celebration", "2018-12-31T21:00Z"),
/// ];
/// // 2018-12-31T20:00Z
/// let digest = find_upcoming_events(&events, 1_546_286_400_000, 31).unwrap();
///
/// assert_eq!(digest[0].when.to_string(), "today");
/// assert_eq!(digest[1].when.to_string(), "31.01.2019");
/// ```
#[instrument(skip(events), fields(event_count = events.len()))]
pub fn find_upcoming_events(
    events: &[RawEvent],
    now_millis: i64,
    future_days: i64,
) -> Result<Vec<UpcomingEvent>> {
    let now = EventInstant::from_millis(now_millis)?;
    let window = UpcomingWindow::new(now, future_days)?;
    debug!(
        today = %window.today(),
        end = %window.end(),
        "classifying events"
    );

    let mut retained: Vec<(EventInstant, &RawEvent, When)> = Vec::with_capacity(events.len());
    for event in events {
        let start = EventInstant::parse(&event.start_date_time).map_err(|reason| {
            QueryError::MalformedEvent {
                label: event.label.clone(),
                start_date_time: event.start_date_time.clone(),
                reason,
            }
        })?;

        match window.classify(&start) {
            Some(when) => {
                trace!(label = %event.label, %when, "retained");
                retained.push((start, event, when));
            }
            None => trace!(label = %event.label, start = %event.start_date_time, "excluded"),
        }
    }

    // One `when` label per calendar date, so the date doubles as the group
    // rank. Exact start breaks ties between equal labels.
    retained.sort_by_cached_key(|(start, event, _)| {
        (
            start.calendar_date,
            event.label.to_lowercase(),
            start.exact_millis,
        )
    });

    debug!(
        retained = retained.len(),
        excluded = events.len() - retained.len(),
        "digest ready"
    );

    Ok(retained
        .into_iter()
        .map(|(_, event, when)| UpcomingEvent {
            what: event.label.clone(),
            when,
        })
        .collect())
}
