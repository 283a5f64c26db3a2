//! Chart kinds: the tropical wheel and the sidereal divisional charts.

use std::fmt;
use std::str::FromStr;

use jyoti_core::{House, PointId};
use serde::{Deserialize, Serialize};

use crate::error::VedicError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Tropical,
    D1,
    D4,
    D7,
    D9,
    D10,
}

pub const ALL_CHART_TYPES: [ChartType; 6] = [
    ChartType::Tropical,
    ChartType::D1,
    ChartType::D4,
    ChartType::D7,
    ChartType::D9,
    ChartType::D10,
];

impl ChartType {
    /// Number of divisions per sign; 0 for tropical.
    pub const fn divisions(self) -> u8 {
        match self {
            Self::Tropical => 0,
            Self::D1 => 1,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tropical => "tropical",
            Self::D1 => "d1",
            Self::D4 => "d4",
            Self::D7 => "d7",
            Self::D9 => "d9",
            Self::D10 => "d10",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Tropical => "Tropical",
            Self::D1 => "D1 Rashi",
            Self::D4 => "D4 Chaturthamsa - Moving home",
            Self::D7 => "D7 Saptamsa - Children",
            Self::D9 => "D9 Navamsa - Marriage",
            Self::D10 => "D10 Dasamsa - Career",
        }
    }

    /// Sidereal charts, D1 included.
    pub const fn is_varga(self) -> bool {
        !matches!(self, Self::Tropical)
    }

    /// Significator planets read first in this chart.
    pub const fn karakas(self) -> &'static [PointId] {
        match self {
            Self::D4 => &[PointId::Rahu],
            Self::D7 => &[PointId::Jupiter],
            Self::D9 => &[PointId::Venus],
            Self::D10 => &[
                PointId::Sun,
                PointId::Mercury,
                PointId::Jupiter,
                PointId::Saturn,
            ],
            Self::Tropical | Self::D1 => &[],
        }
    }

    pub fn important_houses(self) -> Vec<House> {
        let numbers: &[u8] = match self {
            Self::D4 => &[7, 12],
            Self::D7 => &[5],
            Self::D9 => &[7],
            Self::D10 => &[10],
            Self::Tropical | Self::D1 => &[],
        };
        House::all().filter(|h| numbers.contains(&h.number())).collect()
    }

    pub const fn all() -> &'static [ChartType; 6] {
        &ALL_CHART_TYPES
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartType {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CHART_TYPES
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VedicError::UnknownChartType(s.to_string()))
    }
}
