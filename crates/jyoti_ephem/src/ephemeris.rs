//! The ephemeris adapter contract.

use jyoti_core::PointId;

use crate::error::EphemerisError;
use crate::state::{HouseCusps, PointState};

/// Source of point positions and house cusps.
///
/// Times are UT Julian Days. `sidereal` selects the sidereal zodiac of the
/// implementation's ayanamsha; otherwise longitudes are tropical.
///
/// Implementations must be usable from several threads at once; the chart
/// builder and searches only ever take `&self`.
pub trait Ephemeris: Send + Sync {
    /// Position and speed of a body or the ascending node.
    ///
    /// The ascendant and Ketu are not bodies and yield
    /// [`EphemerisError::UnsupportedPoint`].
    fn position(
        &self,
        point: PointId,
        jd_ut: f64,
        sidereal: bool,
    ) -> Result<PointState, EphemerisError>;

    /// Ascendant, MC and whole-sign cusps for an east-positive longitude and
    /// a latitude, both in degrees.
    fn houses(
        &self,
        jd_ut: f64,
        lon: f64,
        lat: f64,
        sidereal: bool,
    ) -> Result<HouseCusps, EphemerisError>;

    /// Ayanamsha in degrees.
    fn ayanamsha(&self, jd_ut: f64) -> f64;

    /// Longitude only.
    fn longitude(&self, point: PointId, jd_ut: f64, sidereal: bool) -> Result<f64, EphemerisError> {
        self.position(point, jd_ut, sidereal).map(|s| s.longitude)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn position(
        &self,
        point: PointId,
        jd_ut: f64,
        sidereal: bool,
    ) -> Result<PointState, EphemerisError> {
        (**self).position(point, jd_ut, sidereal)
    }

    fn houses(
        &self,
        jd_ut: f64,
        lon: f64,
        lat: f64,
        sidereal: bool,
    ) -> Result<HouseCusps, EphemerisError> {
        (**self).houses(jd_ut, lon, lat, sidereal)
    }

    fn ayanamsha(&self, jd_ut: f64) -> f64 {
        (**self).ayanamsha(jd_ut)
    }
}
