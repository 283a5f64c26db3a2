//! Error types for searches, dasha trees and transits.

use jyoti_chart::ChartError;
use jyoti_core::{CoreError, PointId};
use jyoti_ephem::EphemerisError;
use jyoti_time::TimeError;
use jyoti_vedic::VedicError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// The coarse scan never left the window.
    #[error("no crossing found within {days} days")]
    NoBracket { days: f64 },
    /// Bisection ran out of iterations or time resolution.
    #[error("bisection did not converge between JD {lo} and JD {hi}")]
    NoConvergence { lo: f64, hi: f64 },
    /// The reference instant is not inside the window being measured.
    #[error("reference instant is outside the window (gap {gap_deg}°)")]
    OutsideWindow { gap_deg: f64 },
    /// Birth is not inside the Moon's nakshatra window, or the remaining
    /// fraction fell outside [0, 1].
    #[error("invalid dasha anchor: remaining fraction {fraction}")]
    InvalidAnchor { fraction: f64 },
    #[error("no antardasha contains the birth instant")]
    AntardashaNotFound,
    /// The point has no characteristic scan step.
    #[error("no search step for {0}")]
    NoStep(PointId),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Time(#[from] TimeError),
}
