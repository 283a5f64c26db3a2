//! Ascendant (lagna) and midheaven from local sidereal time.
//!
//! With θ the local sidereal time, ε the obliquity and φ the geographic
//! latitude:
//!
//! - Ascendant: `atan2(cos θ, −(sin θ cos ε + tan φ sin ε))`
//! - MC: `atan2(sin θ, cos θ cos ε)`
//!
//! Both are tropical ecliptic longitudes in [0, 360).

use jyoti_core::normalize_360;

/// Ascendant longitude in degrees.
pub fn ascendant_deg(lst_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let y = theta.cos();
    let x = -(theta.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_360(y.atan2(x).to_degrees())
}

/// Midheaven longitude in degrees.
pub fn midheaven_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(theta.sin().atan2(theta.cos() * eps.cos()).to_degrees())
}
