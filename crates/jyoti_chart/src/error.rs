//! Error types for chart construction and queries.

use jyoti_core::{CoreError, PointId};
use jyoti_ephem::EphemerisError;
use jyoti_time::TimeError;
use jyoti_vedic::VedicError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error("ephemeris: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Time(#[from] TimeError),
    /// A query named a point the chart was not built with.
    #[error("point {0} is not in the chart")]
    MissingPoint(PointId),
    /// The sanity chart came back inconsistent.
    #[error("sanity check failed: {0}")]
    Sanity(String),
}
