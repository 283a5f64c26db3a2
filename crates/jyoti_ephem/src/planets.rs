//! Geocentric planets from JPL approximate Keplerian elements.
//!
//! Elements and rates are Standish's fit to DE405 for 1800–2050 (Table 1 of
//! "Keplerian Elements for Approximate Positions of the Major Planets"),
//! referred to the J2000 ecliptic and equinox. Heliocentric positions are
//! differenced against the Earth-Moon barycentre, corrected for light time,
//! then carried to the mean equinox of date with the general precession.
//!
//! Error is a few arc-minutes for the outer planets and well under one for
//! the inner ones.

use std::f64::consts::TAU;

use jyoti_core::{PointId, normalize_360};

use crate::nutation::general_precession_deg;
use crate::state::EclipticPosition;

/// Light travel time per AU, in days.
const LIGHT_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// `(a, e, I, L, ϖ, Ω)` at J2000 and their rates per Julian century.
/// Units: AU and degrees.
#[derive(Debug, Clone, Copy)]
struct Elements {
    base: [f64; 6],
    rate: [f64; 6],
}

#[rustfmt::skip]
const MERCURY: Elements = Elements {
    base: [0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593],
    rate: [0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
};
#[rustfmt::skip]
const VENUS: Elements = Elements {
    base: [0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255],
    rate: [0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
};
#[rustfmt::skip]
const EARTH_MOON: Elements = Elements {
    base: [1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0],
    rate: [0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0],
};
#[rustfmt::skip]
const MARS: Elements = Elements {
    base: [1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891],
    rate: [0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
};
#[rustfmt::skip]
const JUPITER: Elements = Elements {
    base: [5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909],
    rate: [-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106],
};
#[rustfmt::skip]
const SATURN: Elements = Elements {
    base: [9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448],
    rate: [-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794],
};
#[rustfmt::skip]
const URANUS: Elements = Elements {
    base: [19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503],
    rate: [-0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589],
};
#[rustfmt::skip]
const NEPTUNE: Elements = Elements {
    base: [30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574],
    rate: [0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664],
};
#[rustfmt::skip]
const PLUTO: Elements = Elements {
    base: [39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684],
    rate: [-0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482],
};

fn elements_for(point: PointId) -> Option<&'static Elements> {
    match point {
        PointId::Mercury => Some(&MERCURY),
        PointId::Venus => Some(&VENUS),
        PointId::Mars => Some(&MARS),
        PointId::Jupiter => Some(&JUPITER),
        PointId::Saturn => Some(&SATURN),
        PointId::Uranus => Some(&URANUS),
        PointId::Neptune => Some(&NEPTUNE),
        PointId::Pluto => Some(&PLUTO),
        _ => None,
    }
}

/// Whether `point` is covered by the Keplerian theory.
pub fn is_keplerian(point: PointId) -> bool {
    elements_for(point).is_some()
}

/// Solve Kepler's equation `M = E − e sin E` by Newton iteration. Radians.
fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (mean_anomaly - (ecc - e * ecc.sin())) / (1.0 - e * ecc.cos());
        ecc += delta;
        if delta.abs() < 1e-14 {
            break;
        }
    }
    ecc
}

/// Heliocentric J2000 ecliptic rectangular coordinates (AU).
fn heliocentric(el: &Elements, t: f64) -> [f64; 3] {
    let [a, e, incl, l, peri, node] = std::array::from_fn(|i| el.base[i] + el.rate[i] * t);

    // Mean anomaly reduced to (-180, 180].
    let m = (l - peri + 180.0).rem_euclid(360.0) - 180.0;
    let omega = (peri - node).to_radians();
    let node = node.to_radians();
    let incl = incl.to_radians();

    let ecc = eccentric_anomaly(m.to_radians(), e);
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();
    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Geocentric position of a planet at `t` Julian centuries of TT since
/// J2000.0, referred to the mean equinox of date. `None` for points outside
/// the theory.
pub fn planet_position(point: PointId, t: f64) -> Option<EclipticPosition> {
    let el = elements_for(point)?;
    let earth = heliocentric(&EARTH_MOON, t);

    let mut delta = [0.0; 3];
    let mut distance = 0.0;
    let mut light_time = 0.0;
    for _ in 0..3 {
        let p = heliocentric(el, t - light_time / 36_525.0);
        delta = [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]];
        distance = (delta[0] * delta[0] + delta[1] * delta[1] + delta[2] * delta[2]).sqrt();
        light_time = LIGHT_DAYS_PER_AU * distance;
    }

    let lon_j2000 = delta[1].atan2(delta[0]).rem_euclid(TAU).to_degrees();
    let latitude = delta[2].atan2(delta[0].hypot(delta[1])).to_degrees();
    Some(EclipticPosition {
        longitude: normalize_360(lon_j2000 + general_precession_deg(t)),
        latitude,
        distance,
    })
}
