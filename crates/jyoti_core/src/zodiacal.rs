//! Sign + whole degrees + whole minutes.
//!
//! A `ZodiacalPosition` is the arc-minute resolution form of an ecliptic
//! longitude. It is a plain `Copy` value; every operation returns a new one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angle::{absolute_difference, directional_difference, normalize_360};
use crate::error::CoreError;
use crate::sign::Sign;

/// A longitude expressed as sign, degrees in [0, 30) and minutes in [0, 60).
///
/// Ordering is zodiacal: by sign, then degrees, then minutes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ZodiacalPosition {
    sign: Sign,
    degrees: u32,
    minutes: u32,
}

impl ZodiacalPosition {
    /// Build from explicit parts. `degrees` must be < 30 and `minutes` < 60.
    pub fn new(sign: Sign, degrees: u32, minutes: u32) -> Result<Self, CoreError> {
        if degrees >= 30 || minutes >= 60 {
            return Err(CoreError::InvalidPosition { degrees, minutes });
        }
        Ok(Self {
            sign,
            degrees,
            minutes,
        })
    }

    /// Build from an ecliptic longitude, rounding to the nearest arc-minute.
    ///
    /// A value that rounds up to a full 60′ carries into the degrees, and a
    /// full 30° carries into the next sign.
    pub fn from_longitude(lon: f64) -> Self {
        let lon = normalize_360(lon);
        let sign = Sign::from_longitude(lon);
        let total_minutes = ((lon - sign.start_longitude()) * 60.0).round() as u32;
        let (degrees, minutes) = (total_minutes / 60, total_minutes % 60);
        if degrees >= 30 {
            return Self {
                sign: sign.next(),
                degrees: degrees - 30,
                minutes,
            };
        }
        Self {
            sign,
            degrees,
            minutes,
        }
    }

    pub const fn sign(&self) -> Sign {
        self.sign
    }

    pub const fn degrees(&self) -> u32 {
        self.degrees
    }

    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Longitude in [0, 360): `(sign − 1) × 30 + degrees + minutes / 60`.
    pub fn abs_degrees(&self) -> f64 {
        self.sign.start_longitude() + self.sign_degrees()
    }

    /// Offset within the sign, in [0, 30).
    pub fn sign_degrees(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0
    }

    /// The antipodal position.
    pub fn opposite(&self) -> Self {
        Self::from_longitude(self.abs_degrees() + 180.0)
    }

    /// Short-way separation from `other`, in [0, 180].
    pub fn diff_abs(&self, other: &Self) -> f64 {
        absolute_difference(self.abs_degrees(), other.abs_degrees())
    }

    /// Signed separation `self − other`, in (−180, 180]. Positive when `self`
    /// is ahead of `other`.
    pub fn diff_directional(&self, other: &Self) -> f64 {
        directional_difference(self.abs_degrees(), other.abs_degrees())
    }

    /// The same offset moved into another sign.
    pub fn with_sign(&self, sign: Sign) -> Self {
        Self { sign, ..*self }
    }
}

impl fmt::Display for ZodiacalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}°{:02}′", self.sign, self.degrees, self.minutes)
    }
}

impl From<ZodiacalPosition> for f64 {
    fn from(p: ZodiacalPosition) -> f64 {
        p.abs_degrees()
    }
}
