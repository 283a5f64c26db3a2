//! Values returned by an [`Ephemeris`](crate::Ephemeris).

use jyoti_core::{Sign, normalize_360};
use serde::{Deserialize, Serialize};

/// Geocentric ecliptic coordinates produced by one of the theories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Degrees in [0, 360).
    pub longitude: f64,
    /// Degrees in [-90, 90].
    pub latitude: f64,
    /// AU. Zero for the lunar nodes, which are not bodies.
    pub distance: f64,
}

/// Position and longitude speed of a point at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointState {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    /// Longitude speed in degrees per day; negative while retrograde.
    pub speed: f64,
}

impl PointState {
    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

/// Ascendant, midheaven and whole-sign house cusps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub ascendant: f64,
    pub mc: f64,
    /// Cusp of house `i + 1`: the start of the ascendant's sign, then every 30°.
    pub cusps: [f64; 12],
}

impl HouseCusps {
    /// Whole-sign cusps for an ascendant and midheaven.
    pub fn whole_sign(ascendant: f64, mc: f64) -> Self {
        let first = Sign::from_longitude(ascendant).start_longitude();
        let cusps = std::array::from_fn(|i| normalize_360(first + 30.0 * i as f64));
        Self {
            ascendant: normalize_360(ascendant),
            mc: normalize_360(mc),
            cusps,
        }
    }

    /// Shift every longitude back by `offset` degrees (tropical to sidereal).
    ///
    /// Cusps are recomputed from the shifted ascendant, since the sign it
    /// falls in may change.
    pub fn shifted(&self, offset: f64) -> Self {
        Self::whole_sign(self.ascendant - offset, self.mc - offset)
    }
}
