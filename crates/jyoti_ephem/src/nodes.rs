//! Moon's ascending node (Rahu), mean and true.
//!
//! Mean node: Meeus, *Astronomical Algorithms* (2nd ed.), Eq. 47.7.
//! True node: mean node plus the five largest periodic terms of the
//! osculating node, good to about 0.05°.
//!
//! Ketu is not computed here; it is always Rahu + 180°.

use jyoti_core::normalize_360;
use serde::{Deserialize, Serialize};

use crate::moon::LunarArguments;

/// Mean or true node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    Mean,
    /// Mean plus periodic corrections.
    #[default]
    True,
}

/// Mean ascending node longitude, degrees in [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    normalize_360(
        125.0445479 - 1934.1362891 * t + 0.0020754 * t2 + t2 * t / 467441.0
            - t2 * t2 / 60616000.0,
    )
}

/// Periodic terms: multiples of D, M, M′, F and amplitude in degrees.
#[rustfmt::skip]
static TRUE_NODE_TERMS: [(i8, i8, i8, i8, f64); 5] = [
    // D   M   M'   F   amplitude
    ( 2,  0,  0, -2, -1.4979),
    ( 0,  1,  0,  0, -0.1500),
    ( 2,  0,  0,  0, -0.1226),
    ( 0,  0,  0,  2,  0.1176),
    ( 0,  0,  2, -2, -0.0801),
];

fn true_node_correction_deg(t: f64) -> f64 {
    let a = LunarArguments::at(t);
    TRUE_NODE_TERMS
        .iter()
        .map(|&(d, m, mp, f, amp)| {
            let arg = d as f64 * a.d + m as f64 * a.m + mp as f64 * a.mp + f as f64 * a.f;
            amp * arg.to_radians().sin()
        })
        .sum()
}

/// True ascending node longitude, degrees in [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + true_node_correction_deg(t))
}

/// Rahu longitude in the requested mode.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    }
}
