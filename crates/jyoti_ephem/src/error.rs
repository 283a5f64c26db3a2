//! Error types for ephemeris queries.

use jyoti_core::PointId;
use jyoti_time::TimeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The point is not produced by `position` (Ketu, the ascendant).
    #[error("point {0} is not computed by the ephemeris")]
    UnsupportedPoint(PointId),
    #[error("invalid ephemeris config: {0}")]
    InvalidConfig(&'static str),
    /// Latitude at or beyond a pole, or a non-finite coordinate.
    #[error("invalid location: lon {lon}, lat {lat}")]
    InvalidLocation { lon: f64, lat: f64 },
    #[error("non-finite julian day {0}")]
    InvalidEpoch(f64),
    #[error(transparent)]
    Time(#[from] TimeError),
}
