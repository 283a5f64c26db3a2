//! Smoke test of an [`Ephemeris`] through the full chart pipeline.

use chrono::{TimeZone, Utc};
use jyoti_core::{House, MODERN, PointId, absolute_difference};
use jyoti_ephem::Ephemeris;
use jyoti_vedic::ChartType;
use tracing::{info, warn};

use crate::builder::build_chart_utc;
use crate::chart::Chart;
use crate::error::ChartError;

const LONDON_LON: f64 = -0.1278;
const LONDON_LAT: f64 = 51.5074;

/// Tropical Sun at 2024-01-01 00:00 UTC, in degrees.
const EXPECTED_SUN: f64 = 280.03;
const SUN_TOLERANCE: f64 = 1.0;

fn fail(msg: String) -> ChartError {
    warn!(%msg, "sanity check failed");
    ChartError::Sanity(msg)
}

/// Build the 2024-01-01 00:00 UTC London tropical chart with the modern
/// point set and check it for internal consistency.
///
/// Returns the chart on success so callers can print it.
pub fn sanity_check(eph: &dyn Ephemeris) -> Result<Chart, ChartError> {
    let t = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| fail("fixed sanity instant is unrepresentable".into()))?;
    let chart = build_chart_utc(eph, t, LONDON_LON, LONDON_LAT, ChartType::Tropical, MODERN)?;

    let expected = MODERN.len() + 1;
    if chart.points.len() != expected {
        return Err(fail(format!(
            "expected {expected} points, got {}",
            chart.points.len()
        )));
    }

    let asc = &chart.points[0];
    if asc.id != PointId::Asc || asc.house != House::FIRST {
        return Err(fail(format!("first point is {asc}, not the ascendant in house 1")));
    }

    for p in &chart.points {
        if !p.longitude.is_finite() || !(0.0..360.0).contains(&p.longitude) {
            return Err(fail(format!("{} longitude {} out of range", p.id, p.longitude)));
        }
        let house = House::from_signs(p.sign(), asc.sign());
        if p.house != house {
            return Err(fail(format!("{} in house {}, expected {house}", p.id, p.house)));
        }
    }

    let sun = chart.require(PointId::Sun)?;
    if absolute_difference(sun.longitude, EXPECTED_SUN) > SUN_TOLERANCE {
        return Err(fail(format!(
            "sun at {:.4}°, expected about {EXPECTED_SUN}°",
            sun.longitude
        )));
    }

    info!(
        points = chart.points.len(),
        aspects = chart.aspects.len(),
        "sanity check passed"
    );
    Ok(chart)
}
