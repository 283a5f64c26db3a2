//! Instants that remember their time zone, and half-open intervals of them.
//!
//! The wire form keeps the zone identity rather than an offset:
//! `{"t":"2024-01-01T00:00","z":"Europe/London"}`. Local time is written at
//! minute resolution.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// An instant paired with the IANA zone it should be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ZonedWire", into = "ZonedWire")]
pub struct ZonedInstant {
    inner: DateTime<Tz>,
}

#[derive(Serialize, Deserialize)]
struct ZonedWire {
    t: String,
    z: String,
}

impl ZonedInstant {
    /// A UTC instant displayed in UTC.
    pub fn utc(t: DateTime<Utc>) -> Self {
        Self::in_zone(t, Tz::UTC)
    }

    /// A UTC instant displayed in `zone`.
    pub fn in_zone(t: DateTime<Utc>, zone: Tz) -> Self {
        Self {
            inner: t.with_timezone(&zone),
        }
    }

    /// Parse a local wall-clock time (`YYYY-MM-DDTHH:MM`) in a named zone.
    ///
    /// Ambiguous local times (DST fall-back) resolve to the earlier instant.
    pub fn parse_local(local: &str, zone: &str) -> Result<Self, TimeError> {
        let tz = Tz::from_str(zone).map_err(|_| TimeError::UnknownZone(zone.to_string()))?;
        let naive = NaiveDateTime::parse_from_str(local, WIRE_FORMAT)
            .map_err(|_| TimeError::InvalidLocalTime(local.to_string()))?;
        let inner = tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| TimeError::InvalidLocalTime(local.to_string()))?;
        Ok(Self { inner })
    }

    /// The instant in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.inner.with_timezone(&Utc)
    }

    /// The display zone.
    pub fn zone(&self) -> Tz {
        self.inner.timezone()
    }
}

impl From<ZonedInstant> for ZonedWire {
    fn from(z: ZonedInstant) -> Self {
        Self {
            t: z.inner.format(WIRE_FORMAT).to_string(),
            z: z.inner.timezone().name().to_string(),
        }
    }
}

impl TryFrom<ZonedWire> for ZonedInstant {
    type Error = TimeError;

    fn try_from(w: ZonedWire) -> Result<Self, Self::Error> {
        Self::parse_local(&w.t, &w.z)
    }
}

impl fmt::Display for ZonedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.inner.format("%Y-%m-%d %H:%M:%S"),
            self.inner.timezone().name()
        )
    }
}

/// A half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: ZonedInstant,
    pub end: ZonedInstant,
}

impl Interval {
    /// Build a UTC interval; `end` must not precede `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeError> {
        Self::in_zone(start, end, Tz::UTC)
    }

    /// Build an interval displayed in `zone`.
    pub fn in_zone(start: DateTime<Utc>, end: DateTime<Utc>, zone: Tz) -> Result<Self, TimeError> {
        if end < start {
            return Err(TimeError::InvertedInterval);
        }
        Ok(Self {
            start: ZonedInstant::in_zone(start, zone),
            end: ZonedInstant::in_zone(end, zone),
        })
    }

    pub fn start_utc(&self) -> DateTime<Utc> {
        self.start.to_utc()
    }

    pub fn end_utc(&self) -> DateTime<Utc> {
        self.end.to_utc()
    }

    /// `start <= t < end`.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start_utc() <= t && t < self.end_utc()
    }

    pub fn duration(&self) -> TimeDelta {
        self.end_utc() - self.start_utc()
    }

    /// Same interval, displayed in another zone.
    pub fn with_zone(&self, zone: Tz) -> Self {
        Self {
            start: ZonedInstant::in_zone(self.start_utc(), zone),
            end: ZonedInstant::in_zone(self.end_utc(), zone),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
