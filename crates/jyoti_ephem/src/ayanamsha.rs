//! Ayanamsha: the offset of a sidereal zodiac from the tropical one.
//!
//! Each system is a reference value at J2000.0 carried forward with the
//! IAU 2006 general precession. Sidereal longitude = tropical − ayanamsha.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::nutation::general_precession_deg;

/// Supported sidereal reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AyanamshaSystem {
    /// Chitrapaksha: Spica at 0° Libra sidereal.
    #[default]
    Lahiri,
    /// Lahiri anchored to the true equinox, nutation included.
    TrueLahiri,
    /// Krishnamurti Paddhati.
    Krishnamurti,
    /// B.V. Raman.
    Raman,
    /// Fagan-Bradley, the Western sidereal standard.
    FaganBradley,
    /// Sri Yukteshwar.
    Yukteshwar,
}

pub const ALL_AYANAMSHAS: [AyanamshaSystem; 6] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::TrueLahiri,
    AyanamshaSystem::Krishnamurti,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::Yukteshwar,
];

impl AyanamshaSystem {
    /// Ayanamsha at J2000.0, degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri | Self::TrueLahiri => 23.853,
            Self::Krishnamurti => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
            Self::Yukteshwar => 22.376,
        }
    }

    pub const fn uses_true_equinox(self) -> bool {
        matches!(self, Self::TrueLahiri)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::TrueLahiri => "true-lahiri",
            Self::Krishnamurti => "krishnamurti",
            Self::Raman => "raman",
            Self::FaganBradley => "fagan-bradley",
            Self::Yukteshwar => "yukteshwar",
        }
    }

    /// Ayanamsha in degrees at `t` Julian centuries of TT.
    ///
    /// `dpsi_deg` (nutation in longitude) is only added for true-equinox
    /// systems.
    pub fn at(self, t: f64, dpsi_deg: f64) -> f64 {
        let mean = self.reference_j2000_deg() + general_precession_deg(t);
        if self.uses_true_equinox() {
            mean + dpsi_deg
        } else {
            mean
        }
    }
}

impl fmt::Display for AyanamshaSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AyanamshaSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        ALL_AYANAMSHAS
            .iter()
            .copied()
            .find(|a| a.name() == key)
            .ok_or_else(|| format!("unknown ayanamsha: {s}"))
    }
}
