//! Vimshottari dasha lords and their period tables.
//!
//! The nine lords run in a fixed cycle (Ketu, Venus, Sun, Moon, Mars, Rahu,
//! Jupiter, Saturn, Mercury) totalling 120 years. Each mahadasha is split into
//! nine antardashas that start from the mahadasha lord itself and follow the
//! same cycle.
//!
//! Antardasha lengths are the traditional year/month/day table. A month is a
//! twelfth of a year and a day is 24 hours, so with 365-day years the table
//! reads in units of 8760 h, 730 h and 24 h. Rounded table entries mean a
//! mahadasha's antardashas sum to within two days of the mahadasha length.

use std::fmt;

use chrono::TimeDelta;
use jyoti_core::PointId;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Year length the tables are read with by default.
pub const DEFAULT_YEAR_DAYS: f64 = 365.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaLord {
    Ketu,
    Venus,
    Sun,
    Moon,
    Mars,
    Rahu,
    Jupiter,
    Saturn,
    Mercury,
}

/// The mahadasha cycle, Ketu first.
pub const ALL_DASHA_LORDS: [DashaLord; 9] = [
    DashaLord::Ketu,
    DashaLord::Venus,
    DashaLord::Sun,
    DashaLord::Moon,
    DashaLord::Mars,
    DashaLord::Rahu,
    DashaLord::Jupiter,
    DashaLord::Saturn,
    DashaLord::Mercury,
];

/// `(years, months, days)` of each antardasha, row = mahadasha lord, column =
/// position within that mahadasha (column 0 is the mahadasha lord itself).
const ANTARDASHA_YMD: [[(u8, u8, u8); 9]; 9] = [
    // Ketu
    [
        (0, 4, 27),
        (1, 2, 0),
        (0, 4, 6),
        (0, 7, 0),
        (0, 4, 27),
        (1, 0, 18),
        (0, 11, 6),
        (1, 1, 9),
        (0, 11, 27),
    ],
    // Venus
    [
        (3, 4, 0),
        (1, 0, 0),
        (1, 8, 0),
        (1, 2, 0),
        (3, 0, 0),
        (2, 8, 0),
        (3, 2, 0),
        (2, 10, 0),
        (1, 2, 0),
    ],
    // Sun
    [
        (0, 3, 18),
        (0, 6, 0),
        (0, 4, 6),
        (0, 10, 24),
        (0, 9, 18),
        (0, 11, 12),
        (0, 10, 6),
        (0, 4, 6),
        (1, 0, 0),
    ],
    // Moon
    [
        (0, 10, 0),
        (0, 7, 0),
        (1, 6, 0),
        (1, 4, 0),
        (1, 7, 0),
        (1, 5, 0),
        (0, 7, 0),
        (1, 8, 0),
        (0, 6, 0),
    ],
    // Mars
    [
        (0, 4, 27),
        (1, 0, 18),
        (0, 11, 6),
        (1, 1, 9),
        (0, 11, 27),
        (0, 4, 27),
        (1, 2, 0),
        (0, 4, 6),
        (0, 7, 0),
    ],
    // Rahu
    [
        (2, 8, 12),
        (2, 4, 24),
        (2, 10, 6),
        (2, 6, 18),
        (1, 0, 18),
        (3, 0, 0),
        (0, 10, 24),
        (1, 6, 0),
        (1, 0, 18),
    ],
    // Jupiter
    [
        (2, 1, 18),
        (2, 6, 12),
        (2, 3, 6),
        (0, 11, 6),
        (2, 8, 0),
        (0, 9, 18),
        (1, 4, 0),
        (0, 11, 6),
        (2, 4, 24),
    ],
    // Saturn
    [
        (3, 0, 3),
        (2, 8, 9),
        (1, 1, 9),
        (3, 2, 0),
        (0, 11, 12),
        (1, 7, 0),
        (1, 1, 9),
        (2, 10, 6),
        (2, 6, 12),
    ],
    // Mercury
    [
        (2, 4, 27),
        (0, 11, 27),
        (2, 10, 0),
        (0, 10, 6),
        (1, 5, 0),
        (0, 11, 27),
        (2, 6, 18),
        (2, 3, 6),
        (2, 8, 9),
    ],
];

/// Checks a year length is usable for the tables.
pub fn validate_year_days(year_days: f64) -> Result<(), VedicError> {
    if year_days.is_finite() && (360.0..=366.0).contains(&year_days) {
        Ok(())
    } else {
        Err(VedicError::InvalidYearLength(year_days))
    }
}

/// `years/months/days` to a duration, months being a twelfth of a year.
fn ymd_duration(years: f64, months: f64, days: f64, year_days: f64) -> TimeDelta {
    let hours = years * year_days * 24.0 + months * year_days * 2.0 + days * 24.0;
    TimeDelta::seconds((hours * 3600.0).round() as i64)
}

impl DashaLord {
    /// 0-based position in the mahadasha cycle (Ketu = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ketu => "Ketu",
            Self::Venus => "Venus",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Rahu => "Rahu",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Mercury => "Mercury",
        }
    }

    /// Next lord in the cycle; Mercury wraps to Ketu.
    pub const fn next(self) -> Self {
        ALL_DASHA_LORDS[(self.index() as usize + 1) % 9]
    }

    /// Full mahadasha length in years.
    pub const fn mahadasha_years(self) -> u8 {
        match self {
            Self::Ketu => 7,
            Self::Venus => 20,
            Self::Sun => 6,
            Self::Moon => 10,
            Self::Mars => 7,
            Self::Rahu => 18,
            Self::Jupiter => 16,
            Self::Saturn => 19,
            Self::Mercury => 17,
        }
    }

    pub fn mahadasha_duration(self, year_days: f64) -> TimeDelta {
        ymd_duration(self.mahadasha_years() as f64, 0.0, 0.0, year_days)
    }

    /// The nine antardasha lords of this mahadasha, starting with itself.
    pub fn antardashas(self) -> [DashaLord; 9] {
        let start = self.index() as usize;
        std::array::from_fn(|i| ALL_DASHA_LORDS[(start + i) % 9])
    }

    /// Length of antardasha `sub` within mahadasha `self`.
    pub fn antardasha_duration(self, sub: DashaLord, year_days: f64) -> TimeDelta {
        let column = (sub.index() as usize + 9 - self.index() as usize) % 9;
        let (y, m, d) = ANTARDASHA_YMD[self.index() as usize][column];
        ymd_duration(y as f64, m as f64, d as f64, year_days)
    }

    /// The period following `(self, sub)`: the next sister antardasha, or the
    /// first antardasha of the next mahadasha after the last sister.
    pub fn next_antardasha(self, sub: DashaLord) -> (DashaLord, DashaLord) {
        let last = self.antardashas()[8];
        if sub == last {
            let md = self.next();
            (md, md)
        } else {
            (self, sub.next())
        }
    }

    pub const fn to_point(self) -> PointId {
        match self {
            Self::Ketu => PointId::Ketu,
            Self::Venus => PointId::Venus,
            Self::Sun => PointId::Sun,
            Self::Moon => PointId::Moon,
            Self::Mars => PointId::Mars,
            Self::Rahu => PointId::Rahu,
            Self::Jupiter => PointId::Jupiter,
            Self::Saturn => PointId::Saturn,
            Self::Mercury => PointId::Mercury,
        }
    }

    pub fn from_point(p: PointId) -> Result<Self, VedicError> {
        ALL_DASHA_LORDS
            .iter()
            .copied()
            .find(|l| l.to_point() == p)
            .ok_or(VedicError::NotADashaLord(p))
    }

    pub const fn all() -> &'static [DashaLord; 9] {
        &ALL_DASHA_LORDS
    }
}

/// Sum of all nine mahadashas (120 years).
pub fn full_cycle_duration(year_days: f64) -> TimeDelta {
    ALL_DASHA_LORDS
        .iter()
        .map(|l| l.mahadasha_duration(year_days))
        .fold(TimeDelta::zero(), |acc, d| acc + d)
}

impl fmt::Display for DashaLord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
