//! The twelve tropical/sidereal zodiac signs.
//!
//! Signs are 1-based in every public index (Aries = 1 .. Pisces = 12),
//! matching how whole-sign houses are counted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::angle::{SIGN_SPAN_DEG, normalize_360};
use crate::error::CoreError;
use crate::point::PointId;

/// A zodiac sign, Aries through Pisces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order.
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Sign from a 1-based index. `0` is accepted as an alias for Pisces so
    /// that `x % 12` arithmetic can be fed straight in.
    pub fn from_index(index: i32) -> Result<Self, CoreError> {
        match index {
            0 => Ok(Self::Pisces),
            1..=12 => Ok(ALL_SIGNS[(index - 1) as usize]),
            _ => Err(CoreError::InvalidSignIndex(index)),
        }
    }

    /// Sign `offset` places after `self`, wrapping around the zodiac.
    pub fn offset(self, offset: i32) -> Self {
        let i = (self.index() as i32 - 1 + offset).rem_euclid(12);
        ALL_SIGNS[i as usize]
    }

    /// Sign containing an ecliptic longitude.
    pub fn from_longitude(lon: f64) -> Self {
        let i = (normalize_360(lon) / SIGN_SPAN_DEG).floor() as usize;
        ALL_SIGNS[i.min(11)]
    }

    /// 1-based index (Aries = 1 .. Pisces = 12).
    pub const fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Longitude of the first degree of this sign.
    pub fn start_longitude(self) -> f64 {
        (self.index() - 1) as f64 * SIGN_SPAN_DEG
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn previous(self) -> Self {
        self.offset(-1)
    }

    pub fn opposite(self) -> Self {
        self.offset(6)
    }

    /// Odd signs (Aries, Gemini, ...) are the masculine signs.
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Classical seven-planet ruler.
    pub const fn traditional_ruler(self) -> PointId {
        match self {
            Self::Aries | Self::Scorpio => PointId::Mars,
            Self::Taurus | Self::Libra => PointId::Venus,
            Self::Gemini | Self::Virgo => PointId::Mercury,
            Self::Cancer => PointId::Moon,
            Self::Leo => PointId::Sun,
            Self::Sagittarius | Self::Pisces => PointId::Jupiter,
            Self::Capricorn | Self::Aquarius => PointId::Saturn,
        }
    }

    /// Ruler with the outer planets assigned to Scorpio, Aquarius and Pisces.
    pub const fn modern_ruler(self) -> PointId {
        match self {
            Self::Scorpio => PointId::Pluto,
            Self::Aquarius => PointId::Uranus,
            Self::Pisces => PointId::Neptune,
            other => other.traditional_ruler(),
        }
    }

    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownSign(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, sign) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(sign.index() as usize, i + 1);
            assert_eq!(Sign::from_index(i as i32 + 1).unwrap(), *sign);
        }
    }

    #[test]
    fn zero_index_is_pisces() {
        assert_eq!(Sign::from_index(0).unwrap(), Sign::Pisces);
    }

    #[test]
    fn out_of_range_index_rejected() {
        assert_eq!(Sign::from_index(13), Err(CoreError::InvalidSignIndex(13)));
        assert_eq!(Sign::from_index(-1), Err(CoreError::InvalidSignIndex(-1)));
    }

    #[test]
    fn from_longitude_boundaries() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(29.999), Sign::Aries);
        assert_eq!(Sign::from_longitude(30.0), Sign::Taurus);
        assert_eq!(Sign::from_longitude(359.999), Sign::Pisces);
        assert_eq!(Sign::from_longitude(-0.5), Sign::Pisces);
        assert_eq!(Sign::from_longitude(360.0), Sign::Aries);
    }

    #[test]
    fn next_and_previous_wrap() {
        assert_eq!(Sign::Pisces.next(), Sign::Aries);
        assert_eq!(Sign::Aries.previous(), Sign::Pisces);
        assert_eq!(Sign::Leo.opposite(), Sign::Aquarius);
        assert_eq!(Sign::Taurus.offset(-14), Sign::Pisces);
    }

    #[test]
    fn rulers() {
        assert_eq!(Sign::Scorpio.traditional_ruler(), PointId::Mars);
        assert_eq!(Sign::Scorpio.modern_ruler(), PointId::Pluto);
        assert_eq!(Sign::Aquarius.modern_ruler(), PointId::Uranus);
        assert_eq!(Sign::Pisces.modern_ruler(), PointId::Neptune);
        assert_eq!(Sign::Leo.modern_ruler(), PointId::Sun);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("sagittarius".parse::<Sign>().unwrap(), Sign::Sagittarius);
        assert_eq!(" VIRGO ".parse::<Sign>().unwrap(), Sign::Virgo);
        assert!("ophiuchus".parse::<Sign>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Sign::Capricorn).unwrap();
        assert_eq!(json, "\"capricorn\"");
    }

    #[test]
    fn odd_signs() {
        assert!(Sign::Aries.is_odd());
        assert!(!Sign::Taurus.is_odd());
        assert!(Sign::Aquarius.is_odd());
    }
}
