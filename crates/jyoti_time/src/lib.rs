//! Time handling for the chart engine.
//!
//! This crate provides:
//! - Julian Day <-> Gregorian calendar and `chrono` conversions
//! - ΔT (TT − UT) estimates for the analytic ephemeris
//! - Greenwich and local sidereal time
//! - `ZonedInstant` and `Interval`, the timezone-carrying wire types

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod zoned;

pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_from_utc, jd_to_calendar, jd_to_centuries,
    utc_from_jd,
};
pub use sidereal::{earth_rotation_angle_deg, gmst_deg, local_sidereal_time_deg};
pub use zoned::{Interval, ZonedInstant};
