//! Time-to-position correction: when exactly was a point at a longitude?

use jyoti_core::{PointId, directional_difference, normalize_360};
use jyoti_ephem::Ephemeris;
use tracing::debug;

use crate::edge::{EdgeConfig, refine_edge};
use crate::error::SearchError;

/// Find the Julian Day in `[jd_guess − range_days, jd_guess + range_days]`
/// at which `point` sits at `target_lon`.
///
/// The point must be on opposite sides of the target at the two ends of
/// the range and cross it once in between.
pub fn correct_time_to_longitude(
    eph: &dyn Ephemeris,
    point: PointId,
    jd_guess: f64,
    target_lon: f64,
    range_days: f64,
    sidereal: bool,
) -> Result<f64, SearchError> {
    correct_time_with(
        eph,
        point,
        jd_guess,
        target_lon,
        range_days,
        sidereal,
        &EdgeConfig::nakshatra(),
    )
}

/// [`correct_time_to_longitude`] with explicit search tuning.
pub fn correct_time_with(
    eph: &dyn Ephemeris,
    point: PointId,
    jd_guess: f64,
    target_lon: f64,
    range_days: f64,
    sidereal: bool,
    config: &EdgeConfig,
) -> Result<f64, SearchError> {
    if !range_days.is_finite() || range_days <= 0.0 {
        return Err(SearchError::InvalidConfig("range_days must be positive"));
    }
    let target = normalize_360(target_lon);
    let gap = |jd: f64| -> Result<f64, SearchError> {
        Ok(directional_difference(eph.longitude(point, jd, sidereal)?, target))
    };
    let jd = refine_edge(gap, jd_guess - range_days, jd_guess + range_days, config)?;
    debug!(%point, target, jd_guess, jd, "corrected time");
    Ok(jd)
}
