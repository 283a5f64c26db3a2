//! Whole-sign houses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::sign::Sign;

/// A house number in 1..=12.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct House(u8);

impl House {
    pub const FIRST: House = House(1);

    pub fn new(n: i32) -> Result<Self, CoreError> {
        if (1..=12).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(CoreError::InvalidHouse(n))
        }
    }

    /// House of `target` when `asc` is the rising sign: `((target − asc + 12) mod 12) + 1`.
    pub fn from_signs(target: Sign, asc: Sign) -> Self {
        let diff = (target.index() as i32 - asc.index() as i32 + 12) % 12;
        Self(diff as u8 + 1)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// The house six places away.
    pub const fn opposite(self) -> Self {
        if self.0 > 6 { Self(self.0 - 6) } else { Self(self.0 + 6) }
    }

    /// Sign on this house's cusp for a given rising sign.
    pub fn sign(self, asc: Sign) -> Sign {
        asc.offset(self.0 as i32 - 1)
    }

    /// Kendra houses: 1, 4, 7, 10.
    pub const fn is_angular(self) -> bool {
        matches!(self.0, 1 | 4 | 7 | 10)
    }

    pub fn all() -> impl Iterator<Item = House> {
        (1..=12).map(House)
    }
}

impl TryFrom<u8> for House {
    type Error = CoreError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n as i32)
    }
}

impl From<House> for u8 {
    fn from(h: House) -> u8 {
        h.0
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.0 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        };
        write!(f, "{}{}", self.0, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asc_sign_is_first_house() {
        for &sign in Sign::all() {
            assert_eq!(House::from_signs(sign, sign).number(), 1);
        }
    }

    #[test]
    fn house_counting_wraps() {
        assert_eq!(House::from_signs(Sign::Cancer, Sign::Taurus).number(), 3);
        assert_eq!(House::from_signs(Sign::Aries, Sign::Pisces).number(), 2);
        assert_eq!(House::from_signs(Sign::Pisces, Sign::Aries).number(), 12);
    }

    #[test]
    fn opposite_pairs() {
        for h in House::all() {
            assert_eq!(h.opposite().opposite(), h);
            assert_ne!(h.opposite(), h);
        }
        assert_eq!(House::new(7).unwrap().opposite().number(), 1);
        assert_eq!(House::new(6).unwrap().opposite().number(), 12);
    }

    #[test]
    fn sign_of_house_inverts_from_signs() {
        let asc = Sign::Virgo;
        for h in House::all() {
            assert_eq!(House::from_signs(h.sign(asc), asc), h);
        }
    }

    #[test]
    fn range_checked() {
        assert_eq!(House::new(0), Err(CoreError::InvalidHouse(0)));
        assert_eq!(House::new(13), Err(CoreError::InvalidHouse(13)));
        assert!(serde_json::from_str::<House>("13").is_err());
        assert_eq!(serde_json::from_str::<House>("4").unwrap().number(), 4);
    }

    #[test]
    fn ordinal_display() {
        assert_eq!(House::new(1).unwrap().to_string(), "1st");
        assert_eq!(House::new(12).unwrap().to_string(), "12th");
    }
}
