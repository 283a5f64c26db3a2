//! Default [`Ephemeris`] built from closed-form theories.
//!
//! | Point          | Theory                                   |
//! |----------------|------------------------------------------|
//! | Sun            | Meeus ch. 25                             |
//! | Moon           | Meeus ch. 47                             |
//! | Mercury..Pluto | JPL approximate Keplerian elements       |
//! | Rahu           | Meeus mean node, optional true-node terms |
//!
//! Every theory yields mean-equinox-of-date longitudes. Nutation in longitude
//! is added on top when the config asks for apparent positions.

use jyoti_core::{PointId, directional_difference, normalize_360};
use jyoti_time::{jd_to_centuries, jd_ut_to_tt, local_sidereal_time_deg};
use tracing::{debug, trace};

use crate::config::EphemerisConfig;
use crate::ephemeris::Ephemeris;
use crate::error::EphemerisError;
use crate::lagna::{ascendant_deg, midheaven_deg};
use crate::moon::moon_position;
use crate::nodes::rahu_deg;
use crate::nutation::Nutation;
use crate::planets::planet_position;
use crate::state::{EclipticPosition, HouseCusps, PointState};
use crate::sun::sun_position;

/// Centred-difference half step for the Moon, in days.
const MOON_HALF_STEP_DAYS: f64 = 1.0 / 24.0;

#[derive(Debug, Clone, Default)]
pub struct AnalyticEphemeris {
    config: EphemerisConfig,
}

impl AnalyticEphemeris {
    pub fn new(config: EphemerisConfig) -> Result<Self, EphemerisError> {
        config.validate().map_err(EphemerisError::InvalidConfig)?;
        debug!(
            ayanamsha = %config.ayanamsha,
            node_mode = ?config.node_mode,
            apply_nutation = config.apply_nutation,
            "analytic ephemeris ready"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    /// Julian centuries of TT for a UT Julian Day.
    fn centuries(jd_ut: f64) -> Result<f64, EphemerisError> {
        if !jd_ut.is_finite() {
            return Err(EphemerisError::InvalidEpoch(jd_ut));
        }
        Ok(jd_to_centuries(jd_ut_to_tt(jd_ut)))
    }

    /// Tropical coordinates of `point`, apparent or mean per the config.
    fn tropical(&self, point: PointId, jd_ut: f64) -> Result<EclipticPosition, EphemerisError> {
        let t = Self::centuries(jd_ut)?;
        let mut pos = match point {
            PointId::Sun => sun_position(t),
            PointId::Moon => moon_position(t),
            PointId::Rahu => EclipticPosition {
                longitude: rahu_deg(t, self.config.node_mode),
                latitude: 0.0,
                distance: 0.0,
            },
            PointId::Asc | PointId::Ketu => return Err(EphemerisError::UnsupportedPoint(point)),
            _ => planet_position(point, t).ok_or(EphemerisError::UnsupportedPoint(point))?,
        };
        if self.config.apply_nutation {
            pos.longitude = normalize_360(pos.longitude + Nutation::at(t).dpsi_deg);
        }
        Ok(pos)
    }

    fn longitude_in_zodiac(
        &self,
        point: PointId,
        jd_ut: f64,
        sidereal: bool,
    ) -> Result<EclipticPosition, EphemerisError> {
        let mut pos = self.tropical(point, jd_ut)?;
        if sidereal {
            pos.longitude = normalize_360(pos.longitude - self.ayanamsha(jd_ut));
        }
        Ok(pos)
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn position(
        &self,
        point: PointId,
        jd_ut: f64,
        sidereal: bool,
    ) -> Result<PointState, EphemerisError> {
        let here = self.longitude_in_zodiac(point, jd_ut, sidereal)?;
        let h = if point == PointId::Moon {
            MOON_HALF_STEP_DAYS
        } else {
            self.config.speed_half_step_days
        };
        let before = self.longitude_in_zodiac(point, jd_ut - h, sidereal)?;
        let after = self.longitude_in_zodiac(point, jd_ut + h, sidereal)?;
        let speed = directional_difference(after.longitude, before.longitude) / (2.0 * h);

        Ok(PointState {
            longitude: here.longitude,
            latitude: here.latitude,
            distance: here.distance,
            speed,
        })
    }

    fn houses(
        &self,
        jd_ut: f64,
        lon: f64,
        lat: f64,
        sidereal: bool,
    ) -> Result<HouseCusps, EphemerisError> {
        if !lon.is_finite() || !lat.is_finite() || lat.abs() >= 90.0 {
            return Err(EphemerisError::InvalidLocation { lon, lat });
        }
        let t = Self::centuries(jd_ut)?;
        let nutation = Nutation::at(t);
        let (obliquity, eq_equinoxes) = if self.config.apply_nutation {
            (nutation.true_obliquity_deg(), nutation.equation_of_equinoxes_deg())
        } else {
            (nutation.mean_obliquity_deg, 0.0)
        };

        let lst = local_sidereal_time_deg(jd_ut, lon, eq_equinoxes);
        let asc = ascendant_deg(lst, obliquity, lat);
        let mc = midheaven_deg(lst, obliquity);
        trace!(jd_ut, lst, asc, mc, "house frame");

        let cusps = HouseCusps::whole_sign(asc, mc);
        Ok(if sidereal {
            cusps.shifted(self.ayanamsha(jd_ut))
        } else {
            cusps
        })
    }

    fn ayanamsha(&self, jd_ut: f64) -> f64 {
        let t = jd_to_centuries(jd_ut_to_tt(jd_ut));
        let dpsi = Nutation::at(t).dpsi_deg;
        self.config.ayanamsha.at(t, dpsi)
    }
}
