//! Edge-finding search: coarse bracket scan, then bisection.
//!
//! Every search here tracks a signed "gap" function of the Julian Day that
//! is non-negative while the tracked quantity is inside its window (an orb,
//! a sign, a nakshatra) and negative outside it. An edge is a zero of the
//! gap. Working with the sign of the gap rather than the raw angle means
//! retrograde motion and conjunctions need no special handling: whichever
//! way the body moves, leaving the window flips the sign.
//!
//! [`find_edge`] stops at the first crossing. [`find_outer_edge`] keeps
//! scanning through shallow excursions and returns the last crossing
//! before the gap drops past a slack margin.

use jyoti_core::directional_difference;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::SearchError;

const ONE_HOUR_DAYS: f64 = 1.0 / 24.0;
const ONE_MINUTE_DAYS: f64 = 1.0 / 1440.0;
const ONE_SECOND_DAYS: f64 = 1.0 / 86_400.0;

/// Enough 90-day steps to outlast the longest outer-planet aspect.
const MAX_SCAN_STEPS: u32 = 1000;

/// Which way in time to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    pub const fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Tuning for one edge search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// Coarse scan step in days.
    pub step_days: f64,
    /// The converged edge must be within this many degrees of zero.
    pub tolerance_deg: f64,
    /// Bisect until the bracket is narrower than this.
    pub min_bracket_days: f64,
    /// Coarse steps before the scan gives up.
    pub max_steps: u32,
    pub max_iterations: u32,
}

impl EdgeConfig {
    /// Orb edges: 0.5° tolerance, one-hour resolution.
    pub fn aspect(step_days: f64) -> Self {
        Self {
            step_days,
            tolerance_deg: 0.5,
            min_bracket_days: ONE_HOUR_DAYS,
            max_steps: MAX_SCAN_STEPS,
            max_iterations: 60,
        }
    }

    /// Sign boundaries: 0.1° tolerance, one-minute resolution.
    pub fn ingress(step_days: f64) -> Self {
        Self {
            step_days,
            tolerance_deg: 0.1,
            min_bracket_days: ONE_MINUTE_DAYS,
            max_steps: MAX_SCAN_STEPS,
            max_iterations: 60,
        }
    }

    /// Moon against nakshatra boundaries, to the second.
    pub fn nakshatra() -> Self {
        Self {
            step_days: 0.25,
            tolerance_deg: 1e-4,
            min_bracket_days: ONE_SECOND_DAYS,
            max_steps: 8,
            max_iterations: 60,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err("step_days must be positive");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if !self.min_bracket_days.is_finite() || self.min_bracket_days <= 0.0 {
            return Err("min_bracket_days must be positive");
        }
        if self.max_steps == 0 {
            return Err("max_steps must be > 0");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}

/// Gap of `lon` inside the arc from `lo` to `hi` (measured forward).
///
/// Positive strictly inside, zero on either boundary, negative outside.
/// Only changes sign at the two boundaries.
pub fn arc_gap(lon: f64, lo: f64, hi: f64) -> f64 {
    directional_difference(lon, lo).min(directional_difference(hi, lon))
}

fn inside(gap: f64) -> bool {
    gap >= 0.0
}

/// Bisect a bracket whose ends lie on opposite sides of the window edge.
///
/// Halves the bracket down to `min_bracket_days` and returns its centre. A
/// centre whose gap still misses `tolerance_deg` means the gap jumps rather
/// than crosses, which is [`SearchError::NoConvergence`].
pub fn refine_edge<F>(mut gap: F, lo: f64, hi: f64, config: &EdgeConfig) -> Result<f64, SearchError>
where
    F: FnMut(f64) -> Result<f64, SearchError>,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    let (mut lo, mut hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let mut g_lo = gap(lo)?;
    let g_hi = gap(hi)?;
    if inside(g_lo) == inside(g_hi) {
        return Err(SearchError::NoBracket { days: hi - lo });
    }

    for i in 0..config.max_iterations {
        if hi - lo <= config.min_bracket_days {
            let centre = 0.5 * (lo + hi);
            let g_centre = gap(centre)?;
            trace!(iteration = i, centre, g_centre, "converged");
            if g_centre.abs() <= config.tolerance_deg {
                return Ok(centre);
            }
            return Err(SearchError::NoConvergence { lo, hi });
        }
        let mid = 0.5 * (lo + hi);
        let g_mid = gap(mid)?;
        trace!(iteration = i, lo, hi, g_mid, "bisect");
        if inside(g_mid) == inside(g_lo) {
            lo = mid;
            g_lo = g_mid;
        } else {
            hi = mid;
        }
    }
    Err(SearchError::NoConvergence { lo, hi })
}

/// Scan from `jd_start` until the gap changes side, then bisect.
///
/// The edge found is the first crossing in `direction`, to within one
/// coarse step.
pub fn find_edge<F>(
    mut gap: F,
    jd_start: f64,
    direction: SearchDirection,
    config: &EdgeConfig,
) -> Result<f64, SearchError>
where
    F: FnMut(f64) -> Result<f64, SearchError>,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    let step = direction.sign() * config.step_days;
    let start_inside = inside(gap(jd_start)?);

    let mut t_prev = jd_start;
    for _ in 0..config.max_steps {
        let t = t_prev + step;
        if inside(gap(t)?) != start_inside {
            trace!(from = t_prev, to = t, "bracket");
            return refine_edge(gap, t_prev, t, config);
        }
        t_prev = t;
    }
    Err(SearchError::NoBracket {
        days: f64::from(config.max_steps) * config.step_days,
    })
}

/// Scan from `jd_start`, which must be inside the window, for the last
/// exit before the gap falls below `-slack_deg`, then bisect that exit.
///
/// Samples that leave the window by no more than `slack_deg` do not end the
/// scan, so a retrograde loop that dips out of an orb and back in is one
/// window rather than two.
pub fn find_outer_edge<F>(
    mut gap: F,
    jd_start: f64,
    direction: SearchDirection,
    slack_deg: f64,
    config: &EdgeConfig,
) -> Result<f64, SearchError>
where
    F: FnMut(f64) -> Result<f64, SearchError>,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !slack_deg.is_finite() || slack_deg < 0.0 {
        return Err(SearchError::InvalidConfig("slack_deg must be non-negative"));
    }
    let here = gap(jd_start)?;
    if !inside(here) {
        return Err(SearchError::OutsideWindow { gap_deg: here });
    }

    let step = direction.sign() * config.step_days;
    let mut last_inside = jd_start;
    let mut after_inside = jd_start + step;
    let mut t = jd_start;
    for _ in 0..config.max_steps {
        let next = t + step;
        let g = gap(next)?;
        if inside(g) {
            last_inside = next;
            after_inside = next + step;
        } else if g < -slack_deg {
            trace!(from = last_inside, to = after_inside, "outer bracket");
            return refine_edge(gap, last_inside, after_inside, config);
        }
        t = next;
    }
    Err(SearchError::NoBracket {
        days: f64::from(config.max_steps) * config.step_days,
    })
}
