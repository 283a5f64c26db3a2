//! A point placed in a chart, and its essential dignities.

use std::fmt;

use jyoti_core::{House, PointId, Sign, ZodiacalPosition};
use serde::{Deserialize, Serialize};

/// A chart point: raw longitude, the (possibly divisional) zodiacal
/// position, its whole-sign house and direction of motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstroPoint {
    pub id: PointId,
    /// Ephemeris longitude in the chart's zodiac, before any varga transform.
    pub longitude: f64,
    pub zodiacal_pos: ZodiacalPosition,
    pub house: House,
    pub is_retrograde: bool,
}

fn domiciles(id: PointId) -> &'static [Sign] {
    match id {
        PointId::Sun => &[Sign::Leo],
        PointId::Moon => &[Sign::Cancer],
        PointId::Mercury => &[Sign::Gemini, Sign::Virgo],
        PointId::Venus => &[Sign::Taurus, Sign::Libra],
        PointId::Mars => &[Sign::Aries, Sign::Scorpio],
        PointId::Jupiter => &[Sign::Sagittarius, Sign::Pisces],
        PointId::Saturn => &[Sign::Capricorn, Sign::Aquarius],
        _ => &[],
    }
}

fn exaltation(id: PointId) -> Option<Sign> {
    match id {
        PointId::Sun => Some(Sign::Aries),
        PointId::Moon => Some(Sign::Taurus),
        PointId::Mercury => Some(Sign::Virgo),
        PointId::Venus => Some(Sign::Pisces),
        PointId::Mars => Some(Sign::Capricorn),
        PointId::Jupiter => Some(Sign::Cancer),
        PointId::Saturn => Some(Sign::Libra),
        _ => None,
    }
}

impl AstroPoint {
    pub fn sign(&self) -> Sign {
        self.zodiacal_pos.sign()
    }

    /// In a sign it rules.
    pub fn is_domicile(&self) -> bool {
        domiciles(self.id).contains(&self.sign())
    }

    /// Opposite a sign it rules.
    pub fn is_detriment(&self) -> bool {
        domiciles(self.id).iter().any(|s| s.opposite() == self.sign())
    }

    pub fn is_exalted(&self) -> bool {
        exaltation(self.id) == Some(self.sign())
    }

    /// Opposite its exaltation.
    pub fn is_fall(&self) -> bool {
        exaltation(self.id).map(Sign::opposite) == Some(self.sign())
    }
}

impl fmt::Display for AstroPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({:.6}°) {} house",
            self.id, self.zodiacal_pos, self.longitude, self.house
        )?;
        if self.is_retrograde {
            f.write_str(" R")?;
        }
        Ok(())
    }
}
