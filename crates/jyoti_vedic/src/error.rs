//! Error types for the divisional and dasha math.

use jyoti_core::{CoreError, PointId};
use thiserror::Error;

use crate::chart_type::ChartType;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    #[error(transparent)]
    Core(#[from] CoreError),
    /// The chart type has no divisional rule (e.g. tropical).
    #[error("chart type {0} is not a divisional chart")]
    NotDivisional(ChartType),
    #[error("unknown chart type: {0}")]
    UnknownChartType(String),
    /// Only the nine Vimshottari lords can rule a dasha.
    #[error("{0} is not a dasha lord")]
    NotADashaLord(PointId),
    #[error("invalid year length {0} days")]
    InvalidYearLength(f64),
}
