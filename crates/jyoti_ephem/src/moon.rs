//! Geocentric Moon from Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47.
//!
//! Longitude and distance use the full 60-term Table 47.A; latitude uses the
//! 13 largest terms of Table 47.B. Longitude is good to about 10″, latitude to
//! about 1′. Values are referred to the mean equinox of date.

use jyoti_core::normalize_360;

use crate::state::EclipticPosition;

/// Kilometres per astronomical unit.
const KM_PER_AU: f64 = 149_597_870.7;

/// Mean lunar and solar arguments in degrees, plus the eccentricity factor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LunarArguments {
    /// Moon's mean longitude L′.
    pub lp: f64,
    /// Mean elongation D.
    pub d: f64,
    /// Sun's mean anomaly M.
    pub m: f64,
    /// Moon's mean anomaly M′.
    pub mp: f64,
    /// Argument of latitude F.
    pub f: f64,
    /// Eccentricity of Earth's orbit factor E.
    pub e: f64,
}

impl LunarArguments {
    pub(crate) fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            lp: 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
                - t4 / 65194000.0,
            d: 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
                - t4 / 113065000.0,
            m: 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0,
            mp: 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
                - t4 / 14712000.0,
            f: 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
                + t4 / 863310000.0,
            e: 1.0 - 0.002516 * t - 0.0000074 * t2,
        }
    }

    /// `sin` argument `dD + mM + m′M′ + fF`, in radians.
    fn angle(&self, d: i8, m: i8, mp: i8, f: i8) -> f64 {
        (d as f64 * self.d + m as f64 * self.m + mp as f64 * self.mp + f as f64 * self.f)
            .to_radians()
    }

    /// Amplitude factor for terms containing the Sun's anomaly.
    fn e_factor(&self, m: i8) -> f64 {
        match m.unsigned_abs() {
            0 => 1.0,
            1 => self.e,
            _ => self.e * self.e,
        }
    }
}

/// Table 47.A: multiples of D, M, M′, F; Σl (1e-6 deg); Σr (1e-3 km).
#[rustfmt::skip]
static LONGITUDE_DISTANCE: [(i8, i8, i8, i8, i32, i32); 60] = [
    (0, 0, 1, 0, 6288774, -20905355),
    (2, 0, -1, 0, 1274027, -3699111),
    (2, 0, 0, 0, 658314, -2955968),
    (0, 0, 2, 0, 213618, -569925),
    (0, 1, 0, 0, -185116, 48888),
    (0, 0, 0, 2, -114332, -3149),
    (2, 0, -2, 0, 58793, 246158),
    (2, -1, -1, 0, 57066, -152138),
    (2, 0, 1, 0, 53322, -170733),
    (2, -1, 0, 0, 45758, -204586),
    (0, 1, -1, 0, -40923, -129620),
    (1, 0, 0, 0, -34720, 108743),
    (0, 1, 1, 0, -30383, 104755),
    (2, 0, 0, -2, 15327, 10321),
    (0, 0, 1, 2, -12528, 0),
    (0, 0, 1, -2, 10980, 79661),
    (4, 0, -1, 0, 10675, -34782),
    (0, 0, 3, 0, 10034, -23210),
    (4, 0, -2, 0, 8548, -21636),
    (2, 1, -1, 0, -7888, 24208),
    (2, 1, 0, 0, -6766, 30824),
    (1, 0, -1, 0, -5163, -8379),
    (1, 1, 0, 0, 4987, -16675),
    (2, -1, 1, 0, 4036, -12831),
    (2, 0, 2, 0, 3994, -10445),
    (4, 0, 0, 0, 3861, -11650),
    (2, 0, -3, 0, 3665, 14403),
    (0, 1, -2, 0, -2689, -7003),
    (2, 0, -1, 2, -2602, 0),
    (2, -1, -2, 0, 2390, 10056),
    (1, 0, 1, 0, -2348, 6322),
    (2, -2, 0, 0, 2236, -9884),
    (0, 1, 2, 0, -2120, 5751),
    (0, 2, 0, 0, -2069, 0),
    (2, -2, -1, 0, 2048, -4950),
    (2, 0, 1, -2, -1773, 4130),
    (2, 0, 0, 2, -1595, 0),
    (4, -1, -1, 0, 1215, -3958),
    (0, 0, 2, 2, -1110, 0),
    (3, 0, -1, 0, -892, 3258),
    (2, 1, 1, 0, -810, 2616),
    (4, -1, -2, 0, 759, -1897),
    (0, 2, -1, 0, -713, -2117),
    (2, 2, -1, 0, -700, 2354),
    (2, 1, -2, 0, 691, 0),
    (2, -1, 0, -2, 596, 0),
    (4, 0, 1, 0, 549, -1423),
    (0, 0, 4, 0, 537, -1117),
    (4, -1, 0, 0, 520, -1571),
    (1, 0, -2, 0, -487, -1739),
    (2, 1, 0, -2, -399, 0),
    (0, 0, 2, -2, -381, -4421),
    (1, 1, 1, 0, 351, 0),
    (3, 0, -2, 0, -340, 0),
    (4, 0, -3, 0, 330, 0),
    (2, -1, 2, 0, 327, 0),
    (0, 2, 1, 0, -323, 1165),
    (1, 1, -1, 0, 299, 0),
    (2, 0, 3, 0, 294, 0),
    (2, 0, -1, -2, 0, 8752),
];

/// Leading terms of Table 47.B: multiples of D, M, M′, F; Σb (1e-6 deg).
#[rustfmt::skip]
static LATITUDE: [(i8, i8, i8, i8, i32); 13] = [
    (0, 0, 0, 1, 5128122),
    (0, 0, 1, 1, 280602),
    (0, 0, 1, -1, 277693),
    (2, 0, 0, -1, 173237),
    (2, 0, -1, 1, 55413),
    (2, 0, -1, -1, 46271),
    (2, 0, 0, 1, 32573),
    (0, 0, 2, 1, 17198),
    (2, 0, 1, -1, 9266),
    (0, 0, 2, -1, 8822),
    (2, -1, 0, -1, 8216),
    (2, 0, -2, -1, 4324),
    (2, 0, 1, 1, 4200),
];

/// Moon at `t` Julian centuries of TT since J2000.0.
pub fn moon_position(t: f64) -> EclipticPosition {
    let a = LunarArguments::at(t);
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();
    let lp = a.lp.to_radians();
    let mp = a.mp.to_radians();
    let f = a.f.to_radians();

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(d, m, mpc, fc, l, r) in &LONGITUDE_DISTANCE {
        let arg = a.angle(d, m, mpc, fc);
        let ef = a.e_factor(m);
        sum_l += l as f64 * ef * arg.sin();
        sum_r += r as f64 * ef * arg.cos();
    }
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();

    let mut sum_b = 0.0;
    for &(d, m, mpc, fc, b) in &LATITUDE {
        sum_b += b as f64 * a.e_factor(m) * a.angle(d, m, mpc, fc).sin();
    }
    sum_b += -2235.0 * lp.sin() + 382.0 * a3.sin() + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    let distance_km = 385_000.56 + sum_r / 1000.0;
    EclipticPosition {
        longitude: normalize_360(a.lp + sum_l / 1e6),
        latitude: sum_b / 1e6,
        distance: distance_km / KM_PER_AU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD. Geometric λ = 133.162655°, β = -3.229126°,
        // Δ = 368409.7 km.
        let t = -0.077_221_081_451;
        let p = moon_position(t);
        assert!((p.longitude - 133.162_655).abs() < 1e-4, "lon = {}", p.longitude);
        assert!((p.latitude - (-3.229_126)).abs() < 0.02, "lat = {}", p.latitude);
        let km = p.distance * KM_PER_AU;
        assert!((km - 368_409.7).abs() < 1.0, "dist = {km}");
    }

    #[test]
    fn moon_moves_about_13_degrees_a_day() {
        let day = 1.0 / 36_525.0;
        for i in 0..30 {
            let t = 0.24 + i as f64 * day;
            let a = moon_position(t).longitude;
            let b = moon_position(t + day).longitude;
            let rate = (b - a).rem_euclid(360.0);
            assert!((11.5..15.5).contains(&rate), "rate {rate} at step {i}");
        }
    }

    #[test]
    fn latitude_stays_within_inclination() {
        for i in 0..200 {
            let b = moon_position(i as f64 * 0.001).latitude;
            assert!(b.abs() < 5.4, "lat {b}");
        }
    }
}
