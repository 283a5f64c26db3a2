//! Nutation in longitude and obliquity, and the obliquity of the ecliptic.
//!
//! Four-term short series from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 22. Accurate to about 0.5″ in Δψ and 0.1″ in Δε, which is well
//! inside the arc-minute resolution charts are reported at.
//!
//! Mean obliquity: IAU 1980 cubic in Julian centuries of TT.

/// Nutation angles and obliquity at one epoch, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ.
    pub dpsi_deg: f64,
    /// Nutation in obliquity Δε.
    pub deps_deg: f64,
    /// Mean obliquity ε₀.
    pub mean_obliquity_deg: f64,
}

impl Nutation {
    /// Evaluate at `t` Julian centuries of TT since J2000.0.
    pub fn at(t: f64) -> Self {
        let omega = (125.04452 - 1934.136261 * t).to_radians();
        let l_sun = (280.4665 + 36000.7698 * t).to_radians();
        let l_moon = (218.3165 + 481267.8813 * t).to_radians();

        let dpsi_arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin()
            - 0.23 * (2.0 * l_moon).sin()
            + 0.21 * (2.0 * omega).sin();
        let deps_arcsec = 9.20 * omega.cos()
            + 0.57 * (2.0 * l_sun).cos()
            + 0.10 * (2.0 * l_moon).cos()
            - 0.09 * (2.0 * omega).cos();

        Self {
            dpsi_deg: dpsi_arcsec / 3600.0,
            deps_deg: deps_arcsec / 3600.0,
            mean_obliquity_deg: mean_obliquity_deg(t),
        }
    }

    /// True obliquity ε = ε₀ + Δε.
    pub fn true_obliquity_deg(&self) -> f64 {
        self.mean_obliquity_deg + self.deps_deg
    }

    /// Equation of the equinoxes Δψ·cos ε, the apparent minus mean sidereal time.
    pub fn equation_of_equinoxes_deg(&self) -> f64 {
        self.dpsi_deg * self.true_obliquity_deg().to_radians().cos()
    }
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// IAU 2006 general precession in ecliptic longitude, degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn general_precession_deg(t: f64) -> f64 {
    (5028.796195 * t + 1.1054348 * t * t + 0.00007964 * t * t * t) / 3600.0
}
