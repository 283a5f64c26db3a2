//! Configuration for the analytic ephemeris.

use serde::{Deserialize, Serialize};

use crate::ayanamsha::AyanamshaSystem;
use crate::nodes::NodeMode;

/// Settings applied to every query of an [`AnalyticEphemeris`](crate::AnalyticEphemeris).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EphemerisConfig {
    pub ayanamsha: AyanamshaSystem,
    pub node_mode: NodeMode,
    /// Report apparent longitudes (true equinox of date). When false,
    /// longitudes and sidereal time refer to the mean equinox.
    pub apply_nutation: bool,
    /// Half-width of the centred difference used for speeds, in days.
    /// The Moon always uses one hour.
    pub speed_half_step_days: f64,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::Lahiri,
            node_mode: NodeMode::True,
            apply_nutation: true,
            speed_half_step_days: 0.5,
        }
    }
}

impl EphemerisConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.speed_half_step_days.is_finite() || self.speed_half_step_days <= 0.0 {
            return Err("speed_half_step_days must be positive");
        }
        if self.speed_half_step_days > 5.0 {
            return Err("speed_half_step_days must not exceed 5 days");
        }
        Ok(())
    }
}
