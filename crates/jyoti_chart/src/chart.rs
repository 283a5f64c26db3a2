//! The chart snapshot and its read-only queries.

use std::fmt;

use jyoti_core::{Aspect, AspectType, House, Lunation, PointId, Sign, ZodiacalPosition};
use jyoti_time::ZonedInstant;
use jyoti_vedic::ChartType;
use serde::{Deserialize, Serialize};

use crate::astro_point::AstroPoint;
use crate::error::ChartError;

/// Which ruler scheme assigns a lord to each sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rulership {
    /// Sun through Saturn only.
    #[default]
    Traditional,
    /// Uranus, Neptune and Pluto take Aquarius, Pisces and Scorpio.
    Modern,
}

/// Placed points, their aspects and the lunation at one instant.
///
/// The ascendant is always the first point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub time: ZonedInstant,
    pub chart_type: ChartType,
    pub points: Vec<AstroPoint>,
    pub aspects: Vec<Aspect>,
    pub lunation: Option<Lunation>,
}

impl Chart {
    pub fn point(&self, id: PointId) -> Option<&AstroPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Like [`Chart::point`], but a missing point is an error.
    pub fn require(&self, id: PointId) -> Result<&AstroPoint, ChartError> {
        self.point(id).ok_or(ChartError::MissingPoint(id))
    }

    pub fn zodiacal_position(&self, id: PointId) -> Option<ZodiacalPosition> {
        self.point(id).map(|p| p.zodiacal_pos)
    }

    fn ascendant_sign(&self) -> Result<Sign, ChartError> {
        Ok(self.require(PointId::Asc)?.sign())
    }

    /// Signs of houses 1 through 12, starting with the ascendant's sign.
    pub fn signs_in_order(&self) -> Result<[Sign; 12], ChartError> {
        let asc = self.ascendant_sign()?;
        Ok(std::array::from_fn(|i| asc.offset(i as i32)))
    }

    pub fn sign_of_house(&self, house: House) -> Result<Sign, ChartError> {
        Ok(house.sign(self.ascendant_sign()?))
    }

    /// Ruler of the sign on `house`.
    pub fn house_lord(&self, house: House, rulership: Rulership) -> Result<PointId, ChartError> {
        let sign = self.sign_of_house(house)?;
        Ok(match rulership {
            Rulership::Traditional => sign.traditional_ruler(),
            Rulership::Modern => sign.modern_ruler(),
        })
    }

    /// Points placed in `house`, in chart order.
    pub fn points_in_house(&self, house: House) -> impl Iterator<Item = &AstroPoint> {
        self.points.iter().filter(move |p| p.house == house)
    }

    /// Whether `p1` and `p2` form an aspect of `kind`, in either order.
    pub fn has_aspect(&self, p1: PointId, p2: PointId, kind: AspectType) -> bool {
        self.aspects.iter().any(|a| {
            a.kind == kind && ((a.p1 == p1 && a.p2 == p2) || (a.p1 == p2 && a.p2 == p1))
        })
    }

    /// All aspects involving `id`.
    pub fn aspects_of(&self, id: PointId) -> impl Iterator<Item = &Aspect> {
        self.aspects.iter().filter(move |a| a.involves(id))
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chart {} ({})", self.time, self.chart_type.description())?;
        for p in &self.points {
            writeln!(f, "  {p}")?;
        }
        if let Ok(signs) = self.signs_in_order() {
            for (i, s) in signs.iter().enumerate() {
                writeln!(f, "  house {:>2}: {s}", i + 1)?;
            }
        }
        for a in &self.aspects {
            writeln!(f, "  {a}")?;
        }
        if let Some(l) = self.lunation {
            writeln!(f, "  {l}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn point(id: PointId, lon: f64, asc: Sign) -> AstroPoint {
        let zp = ZodiacalPosition::from_longitude(lon);
        AstroPoint {
            id,
            longitude: lon,
            zodiacal_pos: zp,
            house: House::from_signs(zp.sign(), asc),
            is_retrograde: false,
        }
    }

    /// Virgo rising with the Sun in Sagittarius and Moon in Leo.
    fn sample() -> Chart {
        let asc = Sign::Virgo;
        let points = vec![
            point(PointId::Asc, 162.87, asc),
            point(PointId::Sun, 255.83, asc),
            point(PointId::Moon, 131.8, asc),
            point(PointId::Mars, 243.12, asc),
        ];
        let aspects = vec![Aspect::from_longitudes(PointId::Sun, 255.83, PointId::Moon, 131.8).unwrap()];
        Chart {
            time: ZonedInstant::utc(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            chart_type: ChartType::D1,
            points,
            aspects,
            lunation: None,
        }
    }

    #[test]
    fn signs_start_at_ascendant() {
        let c = sample();
        let signs = c.signs_in_order().unwrap();
        assert_eq!(signs[0], Sign::Virgo);
        assert_eq!(signs[4], Sign::Capricorn);
        assert_eq!(signs[11], Sign::Leo);
    }

    #[test]
    fn house_lords() {
        let c = sample();
        let h4 = House::new(4).unwrap();
        assert_eq!(c.sign_of_house(h4).unwrap(), Sign::Sagittarius);
        assert_eq!(c.house_lord(h4, Rulership::Traditional).unwrap(), PointId::Jupiter);
        let h6 = House::new(6).unwrap();
        assert_eq!(c.house_lord(h6, Rulership::Traditional).unwrap(), PointId::Saturn);
        assert_eq!(c.house_lord(h6, Rulership::Modern).unwrap(), PointId::Uranus);
    }

    #[test]
    fn aspect_lookup_is_order_free() {
        let c = sample();
        assert!(c.has_aspect(PointId::Moon, PointId::Sun, AspectType::Trine));
        assert!(c.has_aspect(PointId::Sun, PointId::Moon, AspectType::Trine));
        assert!(!c.has_aspect(PointId::Sun, PointId::Moon, AspectType::Square));
        assert_eq!(c.aspects_of(PointId::Mars).count(), 0);
    }

    #[test]
    fn points_and_houses() {
        let c = sample();
        assert_eq!(c.point(PointId::Sun).unwrap().house.number(), 4);
        assert_eq!(c.points_in_house(House::new(4).unwrap()).count(), 2);
        assert_eq!(c.require(PointId::Saturn), Err(ChartError::MissingPoint(PointId::Saturn)));
        assert_eq!(
            c.zodiacal_position(PointId::Moon),
            Some(ZodiacalPosition::new(Sign::Leo, 11, 48).unwrap())
        );
    }

    #[test]
    fn missing_ascendant_is_an_error() {
        let mut c = sample();
        c.points.remove(0);
        assert!(c.signs_in_order().is_err());
    }

    #[test]
    fn json_field_names() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["chartType"], "d1");
        assert_eq!(v["time"]["z"], "UTC");
        assert!(v["lunation"].is_null());
        assert_eq!(v["aspects"][0]["type"], "trine");
        assert_eq!(v["points"].as_array().map(Vec::len), Some(4));
    }
}
