//! Earth Rotation Angle and sidereal time, in degrees.
//!
//! UT is used in place of UT1; the difference (< 0.9 s) is far below the
//! precision a whole-sign chart needs.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use crate::julian::J2000_JD;

/// Earth Rotation Angle at a UT Julian Day, in [0, 360).
///
/// θ = 360° × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD − 2451545.0
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    // Split the integer day out first so the large product keeps precision.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du + du.fract();
    (turns.rem_euclid(1.0)) * 360.0
}

/// Greenwich Mean Sidereal Time at a UT Julian Day, in [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / 36_525.0;
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t * t
        - 0.00000044 * t.powi(3)
        - 0.000029956 * t.powi(4)
        - 0.0000000368 * t.powi(5);
    (earth_rotation_angle_deg(jd_ut) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local sidereal time for an east-positive longitude, in [0, 360).
///
/// `equation_of_equinoxes_deg` is Δψ·cos ε; pass `0.0` for mean sidereal time.
pub fn local_sidereal_time_deg(
    jd_ut: f64,
    longitude_east_deg: f64,
    equation_of_equinoxes_deg: f64,
) -> f64 {
    (gmst_deg(jd_ut) + equation_of_equinoxes_deg + longitude_east_deg).rem_euclid(360.0)
}
