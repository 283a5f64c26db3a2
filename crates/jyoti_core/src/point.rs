//! Chart point identities and the standard point sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A point that can be placed in a chart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PointId {
    Asc,
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Rahu,
    Ketu,
}

/// Every point id, ascendant first.
pub const ALL_POINTS: [PointId; 13] = [
    PointId::Asc,
    PointId::Sun,
    PointId::Moon,
    PointId::Mercury,
    PointId::Venus,
    PointId::Mars,
    PointId::Jupiter,
    PointId::Saturn,
    PointId::Uranus,
    PointId::Neptune,
    PointId::Pluto,
    PointId::Rahu,
    PointId::Ketu,
];

/// The seven visible planets.
pub const TRADITIONAL: &[PointId] = &[
    PointId::Sun,
    PointId::Moon,
    PointId::Mercury,
    PointId::Venus,
    PointId::Mars,
    PointId::Jupiter,
    PointId::Saturn,
];

/// Traditional planets plus the three outer planets.
pub const MODERN: &[PointId] = &[
    PointId::Sun,
    PointId::Moon,
    PointId::Mercury,
    PointId::Venus,
    PointId::Mars,
    PointId::Jupiter,
    PointId::Saturn,
    PointId::Uranus,
    PointId::Neptune,
    PointId::Pluto,
];

/// Traditional planets plus the lunar nodes.
pub const VEDIC: &[PointId] = &[
    PointId::Sun,
    PointId::Moon,
    PointId::Mercury,
    PointId::Venus,
    PointId::Mars,
    PointId::Jupiter,
    PointId::Saturn,
    PointId::Rahu,
    PointId::Ketu,
];

impl PointId {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::Rahu => "rahu",
            Self::Ketu => "ketu",
        }
    }

    /// Lunar nodes are always retrograde in mean motion and are derived
    /// rather than observed.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Sun through Saturn.
    pub const fn is_classical(self) -> bool {
        matches!(
            self,
            Self::Sun
                | Self::Moon
                | Self::Mercury
                | Self::Venus
                | Self::Mars
                | Self::Jupiter
                | Self::Saturn
        )
    }

    pub const fn all() -> &'static [PointId; 13] {
        &ALL_POINTS
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PointId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        match key.to_ascii_lowercase().as_str() {
            "ascendant" | "lagna" => return Ok(Self::Asc),
            "northnode" | "north_node" => return Ok(Self::Rahu),
            "southnode" | "south_node" => return Ok(Self::Ketu),
            _ => {}
        }
        ALL_POINTS
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| CoreError::UnknownPoint(s.to_string()))
    }
}

/// Parse a comma-separated point list, or one of the named sets
/// `traditional`, `modern`, `vedic`.
pub fn parse_point_list(s: &str) -> Result<Vec<PointId>, CoreError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "traditional" => return Ok(TRADITIONAL.to_vec()),
        "modern" => return Ok(MODERN.to_vec()),
        "vedic" => return Ok(VEDIC.to_vec()),
        _ => {}
    }
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}
