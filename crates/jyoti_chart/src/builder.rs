//! Chart Snapshot Builder.
//!
//! The ascendant is placed first because every house is counted from its
//! sign. Each requested point is then fetched from the ephemeris, mapped
//! into the divisional chart when the chart type is a varga, and given its
//! whole-sign house. The nodes come as a pair: asking for either places
//! Rahu and then Ketu. Ketu is never asked of the ephemeris: it is Rahu's
//! antipode, in the house opposite Rahu's.
//!
//! Any ephemeris failure fails the whole build.

use chrono::{DateTime, Utc};
use jyoti_core::{Aspect, House, Lunation, PointId, ZodiacalPosition, normalize_360};
use jyoti_ephem::Ephemeris;
use jyoti_time::{ZonedInstant, jd_from_utc};
use jyoti_vedic::{ChartType, to_varga};
use tracing::{debug, instrument};

use crate::astro_point::AstroPoint;
use crate::chart::Chart;
use crate::error::ChartError;

/// Zodiacal position of a raw longitude in the chart's coordinate space.
fn place(lon: f64, chart_type: ChartType) -> Result<ZodiacalPosition, ChartError> {
    let zp = ZodiacalPosition::from_longitude(lon);
    if chart_type.is_varga() {
        Ok(to_varga(&zp, chart_type)?)
    } else {
        Ok(zp)
    }
}

fn ascendant(
    eph: &dyn Ephemeris,
    jd: f64,
    lon: f64,
    lat: f64,
    chart_type: ChartType,
) -> Result<AstroPoint, ChartError> {
    let cusps = eph.houses(jd, lon, lat, chart_type.is_varga())?;
    Ok(AstroPoint {
        id: PointId::Asc,
        longitude: cusps.ascendant,
        zodiacal_pos: place(cusps.ascendant, chart_type)?,
        house: House::FIRST,
        is_retrograde: false,
    })
}

fn body(
    eph: &dyn Ephemeris,
    id: PointId,
    jd: f64,
    chart_type: ChartType,
    asc: &AstroPoint,
) -> Result<AstroPoint, ChartError> {
    let state = eph.position(id, jd, chart_type.is_varga())?;
    let zodiacal_pos = place(state.longitude, chart_type)?;
    Ok(AstroPoint {
        id,
        longitude: state.longitude,
        zodiacal_pos,
        house: House::from_signs(zodiacal_pos.sign(), asc.sign()),
        is_retrograde: state.is_retrograde(),
    })
}

fn ketu_from(rahu: &AstroPoint) -> AstroPoint {
    AstroPoint {
        id: PointId::Ketu,
        longitude: normalize_360(rahu.longitude + 180.0),
        zodiacal_pos: rahu.zodiacal_pos.opposite(),
        house: rahu.house.opposite(),
        is_retrograde: rahu.is_retrograde,
    }
}

/// Aspects of every unordered pair, in point order; pairs outside every
/// orb are dropped.
pub fn aspects_between(points: &[AstroPoint]) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if let Some(asp) = Aspect::between(a.id, &a.zodiacal_pos, b.id, &b.zodiacal_pos) {
                aspects.push(asp);
            }
        }
    }
    aspects
}

/// Build a chart at a UT Julian Day.
///
/// The ascendant is always included and comes first; the remaining points
/// follow in request order with duplicates dropped. The first request for
/// either node places both, Rahu before Ketu.
#[instrument(skip(eph, time, points), fields(chart_type = %chart_type, points = points.len()))]
pub fn build_chart_jd(
    eph: &dyn Ephemeris,
    jd: f64,
    time: ZonedInstant,
    lon: f64,
    lat: f64,
    chart_type: ChartType,
    points: &[PointId],
) -> Result<Chart, ChartError> {
    let asc = ascendant(eph, jd, lon, lat, chart_type)?;
    let mut placed = vec![asc];

    for &id in points {
        if placed.iter().any(|p| p.id == id) {
            continue;
        }
        if id.is_node() {
            let rahu = body(eph, PointId::Rahu, jd, chart_type, &asc)?;
            placed.push(rahu);
            placed.push(ketu_from(&rahu));
        } else {
            placed.push(body(eph, id, jd, chart_type, &asc)?);
        }
    }

    let aspects = aspects_between(&placed);
    let lunation = match (
        placed.iter().find(|p| p.id == PointId::Moon),
        placed.iter().find(|p| p.id == PointId::Sun),
    ) {
        (Some(moon), Some(sun)) => Lunation::between(&moon.zodiacal_pos, &sun.zodiacal_pos),
        _ => None,
    };

    debug!(
        points = placed.len(),
        aspects = aspects.len(),
        lunation = ?lunation,
        "chart built"
    );
    Ok(Chart {
        time,
        chart_type,
        points: placed,
        aspects,
        lunation,
    })
}

/// Build a chart for an instant, at an east-positive longitude and latitude.
pub fn build_chart(
    eph: &dyn Ephemeris,
    time: ZonedInstant,
    lon: f64,
    lat: f64,
    chart_type: ChartType,
    points: &[PointId],
) -> Result<Chart, ChartError> {
    let jd = jd_from_utc(&time.to_utc());
    build_chart_jd(eph, jd, time, lon, lat, chart_type, points)
}

/// [`build_chart`] for a UTC instant displayed in UTC.
pub fn build_chart_utc(
    eph: &dyn Ephemeris,
    t: DateTime<Utc>,
    lon: f64,
    lat: f64,
    chart_type: ChartType,
    points: &[PointId],
) -> Result<Chart, ChartError> {
    build_chart(eph, ZonedInstant::utc(t), lon, lat, chart_type, points)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use jyoti_core::{AspectType, Sign, VEDIC, absolute_difference};
    use jyoti_ephem::{EphemerisError, HouseCusps, PointState};

    use super::*;

    /// Fixed longitudes per point; the ascendant sits at 100° (Cancer).
    struct Fixed;

    impl Ephemeris for Fixed {
        fn position(
            &self,
            point: PointId,
            _jd: f64,
            _sidereal: bool,
        ) -> Result<PointState, EphemerisError> {
            let longitude = match point {
                PointId::Sun => 10.0,
                PointId::Moon => 190.0,
                PointId::Mars => 130.0,
                PointId::Rahu => 355.0,
                PointId::Jupiter => return Err(EphemerisError::InvalidEpoch(0.0)),
                PointId::Asc | PointId::Ketu => return Err(EphemerisError::UnsupportedPoint(point)),
                _ => 45.0,
            };
            Ok(PointState {
                longitude,
                latitude: 0.0,
                distance: 1.0,
                speed: if point == PointId::Rahu { -0.05 } else { 1.0 },
            })
        }

        fn houses(
            &self,
            _jd: f64,
            _lon: f64,
            _lat: f64,
            _sidereal: bool,
        ) -> Result<HouseCusps, EphemerisError> {
            Ok(HouseCusps::whole_sign(100.0, 10.0))
        }

        fn ayanamsha(&self, _jd: f64) -> f64 {
            24.0
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn ascendant_first_and_house_one() {
        let c = build_chart_utc(&Fixed, t0(), 0.0, 0.0, ChartType::Tropical, &[PointId::Sun]).unwrap();
        assert_eq!(c.points[0].id, PointId::Asc);
        assert_eq!(c.points[0].house, House::FIRST);
        assert_eq!(c.points[0].sign(), Sign::Cancer);
        // Aries is the 10th sign from Cancer.
        assert_eq!(c.points[1].house.number(), 10);
    }

    #[test]
    fn ketu_mirrors_rahu() {
        let c = build_chart_utc(&Fixed, t0(), 0.0, 0.0, ChartType::Tropical, &[PointId::Ketu]).unwrap();
        let ids: Vec<_> = c.points.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PointId::Asc, PointId::Rahu, PointId::Ketu]);
        let ketu = c.point(PointId::Ketu).unwrap();
        assert!((ketu.longitude - 175.0).abs() < 1e-9);
        assert_eq!(ketu.sign(), Sign::Virgo);
        // Rahu in Pisces is the 9th house from Cancer; Ketu takes the 3rd.
        assert_eq!(ketu.house.number(), 3);
        assert!(ketu.is_retrograde);
    }

    #[test]
    fn duplicates_and_ascendant_requests_are_ignored() {
        let pts = [PointId::Sun, PointId::Asc, PointId::Sun, PointId::Rahu, PointId::Ketu];
        let c = build_chart_utc(&Fixed, t0(), 0.0, 0.0, ChartType::Tropical, &pts).unwrap();
        let ids: Vec<_> = c.points.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PointId::Asc, PointId::Sun, PointId::Rahu, PointId::Ketu]);
    }

    #[test]
    fn either_node_places_the_pair() {
        let pts = [PointId::Rahu, PointId::Sun];
        let c = build_chart_utc(&Fixed, t0(), 0.0, 0.0, ChartType::Tropical, &pts).unwrap();
        let ids: Vec<_> = c.points.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PointId::Asc, PointId::Rahu, PointId::Ketu, PointId::Sun]);

        let pts = [PointId::Ketu, PointId::Moon, PointId::Rahu];
        let c = build_chart_utc(&Fixed, t0(), 0.0, 0.0, ChartType::Tropical, &pts).unwrap();
        let ids: Vec<_> = c.points.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PointId::Asc, PointId::Rahu, PointId::Ketu, PointId::Moon]);
        let (rahu, ketu) = (c.require(PointId::Rahu).unwrap(), c.require(PointId::Ketu).unwrap());
        assert!((absolute_difference(rahu.longitude, ketu.longitude) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn aspects_are_unordered_pairs() {
        let pts = [PointId::Sun, PointId::Moon, PointId::Mars];
        let c = build_chart_utc(&Fixed, t0(), 0.0, 0.0, ChartType::Tropical, &pts).unwrap();
        // Sun 10 / Moon 190: opposition. Sun 10 / Mars 130: trine. Asc 100 / Moon 190: square.
        assert!(c.has_aspect(PointId::Sun, PointId::Moon, AspectType::Opposition));
        assert!(c.has_aspect(PointId::Mars, PointId::Sun, AspectType::Trine));
        assert!(c.has_aspect(PointId::Asc, PointId::Moon, AspectType::Square));
        let sun_moon = c
            .aspects
            .iter()
            .filter(|a| a.involves(PointId::Sun) && a.involves(PointId::Moon))
            .count();
        assert_eq!(sun_moon, 1);
        assert_eq!(c.lunation, Some(Lunation::FullMoon));
    }

    #[test]
    fn no_lunation_without_both_lights() {
        let c = build_chart_utc(&Fixed, t0(), 0.0, 0.0, ChartType::Tropical, &[PointId::Moon]).unwrap();
        assert_eq!(c.lunation, None);
    }

    #[test]
    fn ephemeris_failure_aborts_build() {
        let err = build_chart_utc(&Fixed, t0(), 0.0, 0.0, ChartType::Tropical, VEDIC).unwrap_err();
        assert!(matches!(err, ChartError::Ephemeris(_)), "{err}");
    }

    #[test]
    fn varga_positions_are_transformed() {
        let c = build_chart_utc(&Fixed, t0(), 0.0, 0.0, ChartType::D9, &[PointId::Sun]).unwrap();
        let sun = c.point(PointId::Sun).unwrap();
        // Aries 10° opens the fourth navamsa of a movable sign: Cancer 0°.
        assert_eq!(sun.zodiacal_pos, ZodiacalPosition::new(Sign::Cancer, 0, 0).unwrap());
        assert_eq!(sun.longitude, 10.0);
    }
}
