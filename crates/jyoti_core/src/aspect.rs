//! Angular relationships between two positions.
//!
//! Classification walks the aspect windows ordered by their lower edge
//! (`nominal − orb`) and takes the first window containing the separation.
//! No window matching is a valid "no aspect" result, returned as `None`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angle::absolute_difference;
use crate::point::PointId;
use crate::zodiacal::ZodiacalPosition;

/// One of the five Ptolemaic aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

/// Aspect types sorted by the lower edge of their orb window.
const BY_WINDOW_START: [AspectType; 5] = [
    AspectType::Conjunction,
    AspectType::Sextile,
    AspectType::Square,
    AspectType::Trine,
    AspectType::Opposition,
];

impl AspectType {
    /// Exact separation in degrees.
    pub const fn nominal_degree(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    /// Half-width of the acceptance window in degrees.
    pub const fn orb(self) -> f64 {
        match self {
            Self::Sextile => 3.0,
            _ => 5.0,
        }
    }

    /// Conjunction, opposition and square.
    pub const fn is_hard(self) -> bool {
        matches!(self, Self::Conjunction | Self::Opposition | Self::Square)
    }

    /// Trine and sextile.
    pub const fn is_soft(self) -> bool {
        matches!(self, Self::Trine | Self::Sextile)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Opposition => "Opposition",
            Self::Trine => "Trine",
            Self::Square => "Square",
            Self::Sextile => "Sextile",
        }
    }

    /// Whether a separation in [0, 180] lies inside this type's window.
    pub fn accepts(self, separation: f64) -> bool {
        let nominal = self.nominal_degree();
        let orb = self.orb();
        nominal - orb <= separation && separation <= nominal + orb
    }

    /// Classify a separation in [0, 180].
    pub fn classify(separation: f64) -> Option<Self> {
        BY_WINDOW_START.into_iter().find(|t| t.accepts(separation))
    }

    pub const fn all() -> &'static [AspectType; 5] {
        &BY_WINDOW_START
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect between two chart points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub p1: PointId,
    pub p2: PointId,
    /// Short-way separation in [0, 180].
    pub degree: f64,
    #[serde(rename = "type")]
    pub kind: AspectType,
}

impl Aspect {
    /// Aspect between two placed points, or `None` when no orb window
    /// contains their separation.
    pub fn between(
        p1: PointId,
        pos1: &ZodiacalPosition,
        p2: PointId,
        pos2: &ZodiacalPosition,
    ) -> Option<Self> {
        Self::from_longitudes(p1, pos1.abs_degrees(), p2, pos2.abs_degrees())
    }

    /// Same as [`Aspect::between`] on raw longitudes.
    pub fn from_longitudes(p1: PointId, lon1: f64, p2: PointId, lon2: f64) -> Option<Self> {
        let degree = absolute_difference(lon1, lon2);
        AspectType::classify(degree).map(|kind| Self {
            p1,
            p2,
            degree,
            kind,
        })
    }

    pub const fn orb(&self) -> f64 {
        self.kind.orb()
    }

    /// Signed distance from the nominal angle; positive when wider than exact.
    pub fn deviation(&self) -> f64 {
        self.degree - self.kind.nominal_degree()
    }

    pub fn involves(&self, p: PointId) -> bool {
        self.p1 == p || self.p2 == p
    }

    /// Same pair and type, in either order.
    pub fn same_relation(&self, other: &Self) -> bool {
        self.kind == other.kind
            && ((self.p1 == other.p1 && self.p2 == other.p2)
                || (self.p1 == other.p2 && self.p2 == other.p1))
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ({:.2}°)", self.p1, self.kind, self.p2, self.degree)
    }
}
