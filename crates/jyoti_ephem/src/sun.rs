//! Geocentric Sun from Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25.
//!
//! Low-precision theory, good to about 0.01°. The returned longitude is
//! referred to the mean equinox of date and includes annual aberration;
//! nutation is added by the caller.

use jyoti_core::normalize_360;

use crate::state::EclipticPosition;

/// Constant of aberration applied to the Sun's longitude, degrees.
const ABERRATION_DEG: f64 = 0.00569;

/// Sun at `t` Julian centuries of TT since J2000.0.
pub fn sun_position(t: f64) -> EclipticPosition {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    let mr = m.to_radians();

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * mr.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mr).sin()
        + 0.000289 * (3.0 * mr).sin();

    let true_lon = l0 + c;
    let v = (m + c).to_radians();
    let distance = 1.000001018 * (1.0 - e * e) / (1.0 + e * v.cos());

    EclipticPosition {
        longitude: normalize_360(true_lon - ABERRATION_DEG),
        latitude: 0.0,
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13.0 TD: apparent λ = 199.90895°, R = 0.99766 AU.
        // Mean-of-date value here lacks the -0.00478 sin Ω nutation term.
        let t = -0.072_183_436;
        let s = sun_position(t);
        let omega = (125.04 - 1934.136 * t).to_radians();
        let apparent = s.longitude - 0.00478 * omega.sin();
        assert!((apparent - 199.908_95).abs() < 0.001, "lon = {apparent}");
        assert!((s.distance - 0.99766).abs() < 1e-4, "R = {}", s.distance);
    }

    #[test]
    fn equinox_near_march_20() {
        // 2024-03-20 03:06 UTC, JD 2460389.629; T from TT.
        let t = (2_460_389.629 + 69.0 / 86_400.0 - 2_451_545.0) / 36_525.0;
        let lon = sun_position(t).longitude;
        let off = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(off.abs() < 0.02, "lon = {lon}");
    }
}
