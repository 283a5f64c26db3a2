//! New and full moons, detected as a wide-orb Sun/Moon conjunction or
//! opposition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::zodiacal::ZodiacalPosition;

/// Roughly one day either side of the exact lunation.
pub const LUNATION_ORB_DEG: f64 = 13.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lunation {
    NewMoon,
    FullMoon,
}

impl Lunation {
    pub const fn nominal_degree(self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::FullMoon => 180.0,
        }
    }

    /// Lunation phase for a Moon/Sun pair, if either is within orb.
    pub fn between(moon: &ZodiacalPosition, sun: &ZodiacalPosition) -> Option<Self> {
        Self::from_separation(moon.diff_abs(sun))
    }

    /// Classify a short-way separation in [0, 180].
    pub fn from_separation(separation: f64) -> Option<Self> {
        [Self::NewMoon, Self::FullMoon].into_iter().find(|l| {
            let nominal = l.nominal_degree();
            nominal - LUNATION_ORB_DEG <= separation && separation <= nominal + LUNATION_ORB_DEG
        })
    }
}

impl fmt::Display for Lunation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewMoon => f.write_str("New Moon"),
            Self::FullMoon => f.write_str("Full Moon"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lon: f64) -> ZodiacalPosition {
        ZodiacalPosition::from_longitude(lon)
    }

    #[test]
    fn new_moon_within_orb() {
        assert_eq!(Lunation::between(&at(100.0), &at(90.0)), Some(Lunation::NewMoon));
        assert_eq!(Lunation::between(&at(355.0), &at(5.0)), Some(Lunation::NewMoon));
    }

    #[test]
    fn full_moon_within_orb() {
        assert_eq!(Lunation::between(&at(280.0), &at(90.0)), Some(Lunation::FullMoon));
        assert_eq!(Lunation::from_separation(167.0), Some(Lunation::FullMoon));
    }

    #[test]
    fn quarter_moon_is_none() {
        assert_eq!(Lunation::between(&at(180.0), &at(90.0)), None);
        assert_eq!(Lunation::from_separation(13.5), None);
    }

    #[test]
    fn serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&Lunation::FullMoon).unwrap(), "\"full-moon\"");
        assert_eq!(serde_json::to_string(&Lunation::NewMoon).unwrap(), "\"new-moon\"");
    }
}
