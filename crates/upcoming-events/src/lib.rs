//! # upcoming-events
//!
//! Deterministic upcoming-events digest for social-network events.
//!
//! Given a "now" instant and a look-ahead in days, decides which events are
//! upcoming, labels them `"today"`, `"tomorrow"` or `DD.MM.YYYY`, and orders
//! them by day and then alphabetically within a day. Day boundaries are UTC.
//!
//! ## Modules
//!
//! - [`instant`] — Timestamp parsing into exact and calendar-date projections
//! - [`event`] — Raw input events and digest entries
//! - [`window`] — Look-ahead window and per-event day classification
//! - [`finder`] — The pure filter-label-sort pass
//! - [`queries`] — Query facade over injected event source and clock
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod finder;
pub mod instant;
pub mod queries;
pub mod window;

pub use error::{QueryError, Result};
pub use event::{RawEvent, UpcomingEvent, When};
pub use finder::find_upcoming_events;
pub use instant::{format_day_month_year, EventInstant};
pub use queries::{EventSource, FixedClock, SocialNetworkQueries, SystemClock, TimeProvider};
pub use window::UpcomingWindow;
