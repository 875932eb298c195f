//! Error types for upcoming-events operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Malformed event '{label}': invalid startDateTime '{start_date_time}': {reason}")]
    MalformedEvent {
        label: String,
        start_date_time: String,
        reason: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Upstream fetch failed: {0}")]
    UpstreamFetch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl QueryError {
    /// Wrap an event-source failure. Meant for [`EventSource`](crate::EventSource)
    /// implementations; the query layer itself only forwards it.
    pub fn upstream<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        QueryError::UpstreamFetch(err.into())
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
