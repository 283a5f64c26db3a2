//! Error types for time conversions.

use thiserror::Error;

/// Errors from calendar conversion or zoned-time parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A Julian Day that cannot be represented as a `chrono` instant.
    #[error("julian day {0} is outside the representable range")]
    OutOfRange(f64),
    /// An IANA zone name that chrono-tz does not know.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),
    /// A local time that does not parse or does not exist in its zone.
    #[error("invalid local time '{0}'")]
    InvalidLocalTime(String),
    /// Interval end precedes its start.
    #[error("interval end precedes start")]
    InvertedInterval,
}
