//! Upcoming-events query over injected collaborators.
//!
//! [`SocialNetworkQueries`] pairs an [`EventSource`] with a [`TimeProvider`].
//! Each query reads the clock exactly once, awaits the source once, then runs
//! the pure [`find_upcoming_events`](crate::finder::find_upcoming_events).
//! Errors from the source are passed through as they are; nothing is retried.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument};

use crate::error::{QueryError, Result};
use crate::event::{RawEvent, UpcomingEvent};
use crate::finder::find_upcoming_events;

/// Supplies the events observed on the social network.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch every observed event. Failures should be reported as
    /// [`QueryError::UpstreamFetch`] (see [`QueryError::upstream`]).
    async fn fetch_observed_events(&self) -> Result<Vec<RawEvent>>;
}

/// Supplies the current instant.
pub trait TimeProvider: Send + Sync {
    fn now_as_millis_from_epoch(&self) -> i64;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeProvider for SystemClock {
    fn now_as_millis_from_epoch(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl TimeProvider for FixedClock {
    fn now_as_millis_from_epoch(&self) -> i64 {
        self.0
    }
}

/// A fixed, already-fetched list of events.
#[async_trait]
impl EventSource for Vec<RawEvent> {
    async fn fetch_observed_events(&self) -> Result<Vec<RawEvent>> {
        Ok(self.clone())
    }
}

/// Queries over the events of a social network.
#[derive(Debug, Clone)]
pub struct SocialNetworkQueries<S, T> {
    source: S,
    clock: T,
}

impl<S, T> SocialNetworkQueries<S, T>
where
    S: EventSource,
    T: TimeProvider,
{
    pub fn new(source: S, clock: T) -> Self {
        Self { source, clock }
    }

    /// List events starting from now up to `future_days` calendar days ahead.
    ///
    /// `future_days` is checked before anything is fetched. See
    /// [`find_upcoming_events`] for labeling, ordering and the remaining
    /// error cases.
    #[instrument(skip(self))]
    pub async fn find_upcoming_events(&self, future_days: i64) -> Result<Vec<UpcomingEvent>> {
        if future_days < 0 {
            return Err(QueryError::InvalidArgument(format!(
                "futureDays must be non-negative, got {}",
                future_days
            )));
        }

        let now_millis = self.clock.now_as_millis_from_epoch();
        let events = self.source.fetch_observed_events().await?;
        debug!(now_millis, fetched = events.len(), "fetched observed events");

        find_upcoming_events(&events, now_millis, future_days)
    }
}
