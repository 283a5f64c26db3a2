//! The 27 lunar mansions of 13°20′ each, with four padas of 3°20′.

use std::fmt;

use jyoti_core::{ZodiacalPosition, normalize_360};
use serde::{Deserialize, Serialize};

use crate::dasha_lord::{ALL_DASHA_LORDS, DashaLord};

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NakshatraKind {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [NakshatraKind; 27] = [
    NakshatraKind::Ashwini,
    NakshatraKind::Bharani,
    NakshatraKind::Krittika,
    NakshatraKind::Rohini,
    NakshatraKind::Mrigashira,
    NakshatraKind::Ardra,
    NakshatraKind::Punarvasu,
    NakshatraKind::Pushya,
    NakshatraKind::Ashlesha,
    NakshatraKind::Magha,
    NakshatraKind::PurvaPhalguni,
    NakshatraKind::UttaraPhalguni,
    NakshatraKind::Hasta,
    NakshatraKind::Chitra,
    NakshatraKind::Swati,
    NakshatraKind::Vishakha,
    NakshatraKind::Anuradha,
    NakshatraKind::Jyeshtha,
    NakshatraKind::Mula,
    NakshatraKind::PurvaAshadha,
    NakshatraKind::UttaraAshadha,
    NakshatraKind::Shravana,
    NakshatraKind::Dhanishtha,
    NakshatraKind::Shatabhisha,
    NakshatraKind::PurvaBhadrapada,
    NakshatraKind::UttaraBhadrapada,
    NakshatraKind::Revati,
];

impl NakshatraKind {
    /// 0-based index (Ashwini = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Vimshottari ruler: the nine lords repeat three times from Ashwini.
    pub const fn mahadasha_lord(self) -> DashaLord {
        ALL_DASHA_LORDS[self.index() as usize % 9]
    }

    /// Sidereal longitude where this nakshatra begins.
    pub fn min_longitude(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN
    }

    /// Sidereal longitude where this nakshatra ends (the next one begins).
    pub fn max_longitude(self) -> f64 {
        (self.index() as f64 + 1.0) * NAKSHATRA_SPAN
    }

    pub const fn all() -> &'static [NakshatraKind; 27] {
        &ALL_NAKSHATRAS
    }
}

impl fmt::Display for NakshatraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A nakshatra placement: which mansion, and which quarter of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nakshatra {
    #[serde(rename = "type")]
    pub kind: NakshatraKind,
    /// 0-based pada in 0..4.
    pub pada: u8,
}

impl Nakshatra {
    /// Nakshatra and pada of a sidereal longitude.
    pub fn from_longitude(lon: f64) -> Self {
        let lon = normalize_360(lon);
        let idx = ((lon / NAKSHATRA_SPAN) as usize).min(26);
        let within = lon - idx as f64 * NAKSHATRA_SPAN;
        let pada = ((within / PADA_SPAN).floor() as i32).clamp(0, 3) as u8;
        Self {
            kind: ALL_NAKSHATRAS[idx],
            pada,
        }
    }

    pub fn mahadasha_lord(&self) -> DashaLord {
        self.kind.mahadasha_lord()
    }

    pub fn min_longitude(&self) -> f64 {
        self.kind.min_longitude()
    }

    pub fn max_longitude(&self) -> f64 {
        self.kind.max_longitude()
    }

    pub fn min_position(&self) -> ZodiacalPosition {
        ZodiacalPosition::from_longitude(self.min_longitude())
    }

    pub fn max_position(&self) -> ZodiacalPosition {
        ZodiacalPosition::from_longitude(self.max_longitude())
    }

    /// Fraction of the nakshatra still ahead of `lon`, in [0, 1].
    pub fn fraction_remaining(&self, lon: f64) -> f64 {
        let ahead = self.max_longitude() - normalize_360(lon);
        (ahead / NAKSHATRA_SPAN).clamp(0.0, 1.0)
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pada {}", self.kind, self.pada + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        let a = Nakshatra::from_longitude(0.0);
        assert_eq!(a.kind, NakshatraKind::Ashwini);
        assert_eq!(a.pada, 0);
        let r = Nakshatra::from_longitude(359.99);
        assert_eq!(r.kind, NakshatraKind::Revati);
        assert_eq!(r.pada, 3);
    }

    #[test]
    fn magha_starts_leo() {
        let m = Nakshatra::from_longitude(131.8);
        assert_eq!(m.kind, NakshatraKind::Magha);
        assert!((m.min_longitude() - 120.0).abs() < 1e-9);
        assert!((m.max_longitude() - 133.333_333).abs() < 1e-5);
        assert_eq!(m.mahadasha_lord(), DashaLord::Ketu);
    }

    #[test]
    fn lords_cycle_three_times() {
        use NakshatraKind::*;
        assert_eq!(Ashwini.mahadasha_lord(), DashaLord::Ketu);
        assert_eq!(Mula.mahadasha_lord(), DashaLord::Ketu);
        assert_eq!(UttaraPhalguni.mahadasha_lord(), DashaLord::Sun);
        assert_eq!(PurvaAshadha.mahadasha_lord(), DashaLord::Venus);
        assert_eq!(UttaraBhadrapada.mahadasha_lord(), DashaLord::Saturn);
        assert_eq!(Revati.mahadasha_lord(), DashaLord::Mercury);
        assert_eq!(Anuradha.mahadasha_lord(), DashaLord::Saturn);
    }

    #[test]
    fn padas_step_every_3_20() {
        for i in 0..108 {
            let lon = i as f64 * PADA_SPAN + 0.01;
            let n = Nakshatra::from_longitude(lon);
            assert_eq!(n.kind.index() as usize, i / 4, "lon {lon}");
            assert_eq!(n.pada as usize, i % 4, "lon {lon}");
        }
    }

    #[test]
    fn fraction_remaining_bounds() {
        let n = Nakshatra::from_longitude(120.0 + NAKSHATRA_SPAN / 4.0);
        assert!((n.fraction_remaining(120.0 + NAKSHATRA_SPAN / 4.0) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn json_shape() {
        let n = Nakshatra::from_longitude(0.5);
        let v = serde_json::to_value(n).unwrap();
        assert_eq!(v["type"], "ashwini");
        assert_eq!(v["pada"], 0);
    }
}
