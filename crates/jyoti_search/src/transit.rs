//! Transit journeys: how far through an aspect's orb window, or a point's
//! stay in a sign, a reference instant falls.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use jyoti_chart::{AstroPoint, build_chart_utc};
use jyoti_core::{
    Aspect, MODERN, PointId, Sign, absolute_difference, directional_difference, normalize_360,
};
use jyoti_ephem::Ephemeris;
use jyoti_time::{jd_from_utc, utc_from_jd};
use jyoti_vedic::ChartType;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::edge::{EdgeConfig, SearchDirection, find_edge, find_outer_edge};
use crate::error::SearchError;

/// Coarse scan step per point, in days.
pub fn step_days(point: PointId) -> Result<f64, SearchError> {
    Ok(match point {
        PointId::Moon => 7.0,
        PointId::Sun | PointId::Mercury | PointId::Venus | PointId::Mars => 14.0,
        PointId::Jupiter | PointId::Saturn | PointId::Rahu | PointId::Ketu => 30.0,
        PointId::Uranus | PointId::Neptune | PointId::Pluto => 180.0,
        PointId::Asc => return Err(SearchError::NoStep(point)),
    })
}

/// Fastest geocentric motion of a point, in degrees per day, either way.
fn max_speed(point: PointId) -> Result<f64, SearchError> {
    Ok(match point {
        PointId::Moon => 15.4,
        PointId::Sun => 1.02,
        PointId::Mercury => 2.2,
        PointId::Venus => 1.26,
        PointId::Mars => 0.8,
        PointId::Jupiter | PointId::Rahu | PointId::Ketu => 0.25,
        PointId::Saturn => 0.13,
        PointId::Uranus => 0.07,
        PointId::Neptune | PointId::Pluto => 0.04,
        PointId::Asc => return Err(SearchError::NoStep(point)),
    })
}

/// Scan step for an aspect's orb window: the finer of the two points'
/// steps, and never more than the pair can close in one orb.
pub fn aspect_step_days(aspect: &Aspect) -> Result<f64, SearchError> {
    let table = step_days(aspect.p1)?.min(step_days(aspect.p2)?);
    let closing = max_speed(aspect.p1)? + max_speed(aspect.p2)?;
    Ok(table.min(aspect.orb() / closing))
}

/// Tropical longitude of any point but the ascendant; Ketu is Rahu + 180°.
fn tropical_longitude(eph: &dyn Ephemeris, point: PointId, jd: f64) -> Result<f64, SearchError> {
    Ok(match point {
        PointId::Ketu => normalize_360(eph.longitude(PointId::Rahu, jd, false)? + 180.0),
        _ => eph.longitude(point, jd, false)?,
    })
}

/// What the journey measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransitKind {
    /// Time inside the orb window of an aspect.
    Aspect { aspect: Aspect },
    /// Time spent in the current sign.
    Ingress { point: AstroPoint },
}

/// One transit window and where the reference instant sits in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transit {
    #[serde(flatten)]
    pub kind: TransitKind,
    /// The reference instant.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
    /// `(date − start) / (end − start)`; outside [0, 1] only if the date
    /// was not inside the window.
    pub journey: f64,
    /// Whole days from start to end, truncated. [`Transit::duration`] has
    /// the exact length.
    pub days_elapsed: i64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end: DateTime<Utc>,
}

impl Transit {
    fn new(
        kind: TransitKind,
        date: DateTime<Utc>,
        jd: f64,
        jd_start: f64,
        jd_end: f64,
    ) -> Result<Self, SearchError> {
        let journey = (jd - jd_start) / (jd_end - jd_start);
        if !(0.0..=1.0).contains(&journey) {
            warn!(journey, jd, jd_start, jd_end, "reference instant outside its transit window");
        }
        let start = utc_from_jd(jd_start)?;
        let end = utc_from_jd(jd_end)?;
        Ok(Self {
            kind,
            date,
            journey,
            days_elapsed: (end - start).num_days(),
            start,
            end,
        })
    }

    /// Window length at full resolution.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn is_aspect(&self) -> bool {
        matches!(self.kind, TransitKind::Aspect { .. })
    }

    pub fn is_ingress(&self) -> bool {
        matches!(self.kind, TransitKind::Ingress { .. })
    }

    /// Whether `p` takes part in this transit.
    pub fn involves(&self, p: PointId) -> bool {
        match &self.kind {
            TransitKind::Aspect { aspect } => aspect.involves(p),
            TransitKind::Ingress { point } => point.id == p,
        }
    }
}

impl fmt::Display for Transit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TransitKind::Aspect { aspect } => write!(f, "aspect {aspect}")?,
            TransitKind::Ingress { point } => write!(f, "ingress {} in {}", point.id, point.sign())?,
        }
        write!(
            f,
            " on {}: journey {:.2}, {} days ({} .. {})",
            self.date.format("%Y-%m-%d"),
            self.journey,
            self.days_elapsed,
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d"),
        )
    }
}

/// Orb window of `aspect` around `at`.
///
/// Positions are tropical. The window runs from the first entry into the
/// orb to the last exit from it, spanning any excursion that stays within
/// twice the orb, so a retrograde loop through an aspect is one window. The
/// aspect must hold at `at`, otherwise [`SearchError::OutsideWindow`].
#[instrument(skip(eph, aspect), fields(aspect = %aspect))]
pub fn aspect_journey(
    eph: &dyn Ephemeris,
    aspect: &Aspect,
    at: DateTime<Utc>,
) -> Result<Transit, SearchError> {
    let config = EdgeConfig::aspect(aspect_step_days(aspect)?);
    let nominal = aspect.kind.nominal_degree();
    let orb = aspect.orb();
    let gap = |jd: f64| -> Result<f64, SearchError> {
        let sep = absolute_difference(
            tropical_longitude(eph, aspect.p1, jd)?,
            tropical_longitude(eph, aspect.p2, jd)?,
        );
        Ok(orb - (sep - nominal).abs())
    };

    let jd = jd_from_utc(&at);
    let start = find_outer_edge(gap, jd, SearchDirection::Backward, orb, &config)?;
    let end = find_outer_edge(gap, jd, SearchDirection::Forward, orb, &config)?;
    debug!(start, end, step = config.step_days, "aspect window");
    Transit::new(TransitKind::Aspect { aspect: *aspect }, at, jd, start, end)
}

/// Stay of `point` in the tropical sign it occupies at `at`.
///
/// The stay starts when the point last left the sign before it and ends
/// when it first reaches the sign after. Retrograde dips back across
/// either boundary fall inside the stay. The nodes run backwards through
/// the zodiac, so for them "before" and "after" swap.
#[instrument(skip(eph, point), fields(point = %point.id))]
pub fn ingress_journey(
    eph: &dyn Ephemeris,
    point: &AstroPoint,
    at: DateTime<Utc>,
) -> Result<Transit, SearchError> {
    let config = EdgeConfig::ingress(step_days(point.id)?);
    let jd = jd_from_utc(&at);
    let sign = Sign::from_longitude(tropical_longitude(eph, point.id, jd)?);
    let lo = sign.start_longitude();
    let hi = normalize_360(lo + 30.0);
    let (entry, exit, heading) = if point.id.is_node() { (hi, lo, -1.0) } else { (lo, hi, 1.0) };

    // Non-negative once the point is past the entry, and until it reaches
    // the exit, measured along its mean direction of travel.
    let entered = |t: f64| -> Result<f64, SearchError> {
        Ok(heading * directional_difference(tropical_longitude(eph, point.id, t)?, entry))
    };
    let not_left = |t: f64| -> Result<f64, SearchError> {
        Ok(heading * directional_difference(exit, tropical_longitude(eph, point.id, t)?))
    };

    let start = find_edge(entered, jd, SearchDirection::Backward, &config)?;
    let end = find_edge(not_left, jd, SearchDirection::Forward, &config)?;
    debug!(%sign, start, end, "sign window");
    Transit::new(TransitKind::Ingress { point: *point }, at, jd, start, end)
}

/// Every transit running at `at`: one ingress journey per modern planet
/// and one aspect journey per aspect between them, from the tropical chart
/// at 0°N 0°E.
#[instrument(skip(eph))]
pub fn transits_at(eph: &dyn Ephemeris, at: DateTime<Utc>) -> Result<Vec<Transit>, SearchError> {
    let chart = build_chart_utc(eph, at, 0.0, 0.0, ChartType::Tropical, MODERN)?;
    let mut transits = Vec::new();

    for p in chart.points.iter().filter(|p| p.id != PointId::Asc) {
        transits.push(ingress_journey(eph, p, at)?);
    }

    for asp in chart.aspects.iter().filter(|a| !a.involves(PointId::Asc)) {
        let (Some(a), Some(b)) = (chart.point(asp.p1), chart.point(asp.p2)) else {
            continue;
        };
        // Chart aspects are read at arc-minute precision; skip any that
        // only hold after rounding.
        match Aspect::from_longitudes(a.id, a.longitude, b.id, b.longitude) {
            Some(raw) if raw.kind == asp.kind => transits.push(aspect_journey(eph, &raw, at)?),
            _ => warn!(aspect = %asp, "aspect only holds at arc-minute precision; skipped"),
        }
    }

    debug!(count = transits.len(), "transits");
    Ok(transits)
}

#[cfg(test)]
mod tests {
    use jyoti_core::AspectType;

    use super::*;

    #[test]
    fn every_body_has_a_step() {
        for &p in PointId::all().iter().filter(|p| **p != PointId::Asc) {
            assert!(step_days(p).unwrap() > 0.0, "{p}");
        }
        assert_eq!(step_days(PointId::Asc), Err(SearchError::NoStep(PointId::Asc)));
    }

    #[test]
    fn aspect_step_never_outruns_the_orb() {
        let moon_uranus = Aspect::from_longitudes(PointId::Moon, 0.0, PointId::Uranus, 120.0).unwrap();
        let step = aspect_step_days(&moon_uranus).unwrap();
        assert!((step - 5.0 / 15.47).abs() < 1e-9, "step = {step}");

        // Slow pairs still step by weeks.
        let neptune_pluto = Aspect::from_longitudes(PointId::Neptune, 0.0, PointId::Pluto, 60.0).unwrap();
        assert!((aspect_step_days(&neptune_pluto).unwrap() - 37.5).abs() < 1e-9);
        let jupiter_saturn = Aspect::from_longitudes(PointId::Jupiter, 0.0, PointId::Saturn, 90.0).unwrap();
        assert!((aspect_step_days(&jupiter_saturn).unwrap() - 5.0 / 0.38).abs() < 1e-9);

        let asc = Aspect::from_longitudes(PointId::Asc, 0.0, PointId::Sun, 0.0).unwrap();
        assert_eq!(aspect_step_days(&asc), Err(SearchError::NoStep(PointId::Asc)));
    }

    #[test]
    fn json_shape() {
        let t0 = DateTime::from_timestamp(1_704_067_200, 0).unwrap();
        let t = Transit {
            kind: TransitKind::Aspect {
                aspect: Aspect::from_longitudes(PointId::Sun, 10.0, PointId::Mars, 128.0).unwrap(),
            },
            date: t0,
            journey: 0.25,
            days_elapsed: 40,
            start: t0 - TimeDelta::days(10),
            end: t0 + TimeDelta::days(30),
        };
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["type"], "aspect");
        assert_eq!(v["date"], 1_704_067_200);
        assert_eq!(v["daysElapsed"], 40);
        assert_eq!(v["aspect"]["type"], "trine");
        assert_eq!(v["start"], 1_704_067_200 - 864_000);

        let back: Transit = serde_json::from_value(v).unwrap();
        assert_eq!(back.date, t.date);
        assert!(back.is_aspect());
        assert!(back.involves(PointId::Mars));
        assert_eq!(back.duration(), TimeDelta::days(40));
        match back.kind {
            TransitKind::Aspect { aspect } => assert_eq!(aspect.kind, AspectType::Trine),
            TransitKind::Ingress { .. } => panic!("wrong kind"),
        }
    }
}
