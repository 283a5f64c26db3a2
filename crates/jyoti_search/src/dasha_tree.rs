//! Vimshottari dasha period tree.
//!
//! The Moon's nakshatra at birth fixes the ruling mahadasha; how far the
//! Moon still has to travel through that nakshatra fixes how much of the
//! mahadasha is left. From there the 81 mahadasha/antardasha pairs of the
//! 120-year cycle follow back to back, each starting where the last ended.

use chrono::{DateTime, TimeDelta, Utc};
use jyoti_chart::AstroPoint;
use jyoti_core::{House, PointId, ZodiacalPosition, normalize_360};
use jyoti_ephem::Ephemeris;
use jyoti_time::{Interval, jd_from_utc};
use jyoti_vedic::{DEFAULT_YEAR_DAYS, DashaLord, Nakshatra, validate_year_days};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::edge::{EdgeConfig, arc_gap, refine_edge};
use crate::error::SearchError;

/// Nine mahadashas of nine antardashas each.
pub const DASHA_COUNT: usize = 81;

/// Sidereal month used for the first guess at the nakshatra window.
pub const SIDEREAL_MONTH_DAYS: f64 = 27.326;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashaConfig {
    /// Days per dasha year.
    pub year_days: f64,
    /// Mean lunar period used to estimate the nakshatra entry and exit.
    pub sidereal_month_days: f64,
    /// Half-width of the bracket around each estimate.
    pub bracket_days: f64,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            year_days: DEFAULT_YEAR_DAYS,
            sidereal_month_days: SIDEREAL_MONTH_DAYS,
            bracket_days: 1.0,
        }
    }
}

impl DashaConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if validate_year_days(self.year_days).is_err() {
            return Err("year_days must be within 360..=366");
        }
        if !self.sidereal_month_days.is_finite() || self.sidereal_month_days <= 0.0 {
            return Err("sidereal_month_days must be positive");
        }
        if !self.bracket_days.is_finite() || self.bracket_days <= 0.0 || self.bracket_days > 5.0 {
            return Err("bracket_days must be within (0, 5]");
        }
        Ok(())
    }
}

/// One mahadasha/antardasha period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dasha {
    pub mahadasha: DashaLord,
    pub antardasha: DashaLord,
    pub interval: Interval,
}

/// The 81 consecutive dashas from a birth instant, ordered by start.
#[derive(Debug, Clone)]
pub struct DashaTree {
    birth: DateTime<Utc>,
    nakshatra: Nakshatra,
    fraction_remaining: f64,
    dashas: Vec<Dasha>,
}

/// Antardasha running at birth and how much of it is left, given the
/// fraction of the mahadasha still to run.
fn anchor(
    lord: DashaLord,
    fraction: f64,
    year_days: f64,
) -> Result<(DashaLord, TimeDelta), SearchError> {
    let subs = lord.antardashas();
    if fraction <= 0.0 {
        return Ok((subs[8], TimeDelta::zero()));
    }

    let total = lord.mahadasha_duration(year_days);
    let remaining = TimeDelta::seconds((total.num_seconds() as f64 * fraction).round() as i64);
    let elapsed = total - remaining;

    // Offsets from the mahadasha start; birth sits at `elapsed`.
    let mut start = TimeDelta::zero();
    for sub in subs {
        let end = start + lord.antardasha_duration(sub, year_days);
        if start <= elapsed && elapsed < end {
            return Ok((sub, end - elapsed));
        }
        start = end;
    }
    Err(SearchError::AntardashaNotFound)
}

impl DashaTree {
    /// Build from a birth instant and the natal Moon placed in a sidereal
    /// chart. Only the Moon's longitude is read.
    #[instrument(skip(eph, moon, config), fields(birth = %birth))]
    pub fn build(
        eph: &dyn Ephemeris,
        birth: DateTime<Utc>,
        moon: &AstroPoint,
        config: &DashaConfig,
    ) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        let jd_birth = jd_from_utc(&birth);
        let lon = normalize_360(moon.longitude);
        let nakshatra = Nakshatra::from_longitude(lon);
        let (min, max) = (nakshatra.min_longitude(), nakshatra.max_longitude());

        let days_per_degree = config.sidereal_month_days / 360.0;
        let approx_entry = jd_birth - (lon - min) * days_per_degree;
        let approx_exit = jd_birth + (max - lon) * days_per_degree;

        let gap = |jd: f64| -> Result<f64, SearchError> {
            Ok(arc_gap(eph.longitude(PointId::Moon, jd, true)?, min, max))
        };
        let edge = EdgeConfig::nakshatra();
        let b = config.bracket_days;
        let entry = refine_edge(gap, approx_entry - b, (approx_entry + b).min(jd_birth), &edge)?;
        let exit = refine_edge(gap, (approx_exit - b).max(jd_birth), approx_exit + b, &edge)?;

        let fraction = (exit - jd_birth) / (exit - entry);
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(SearchError::InvalidAnchor { fraction });
        }

        let lord = nakshatra.mahadasha_lord();
        let (sub, remaining) = anchor(lord, fraction, config.year_days)?;
        debug!(
            nakshatra = %nakshatra,
            entry,
            exit,
            fraction,
            mahadasha = %lord,
            antardasha = %sub,
            remaining_days = remaining.num_seconds() as f64 / 86_400.0,
            "dasha anchor"
        );

        let mut dashas = Vec::with_capacity(DASHA_COUNT);
        let (mut md, mut ad) = (lord, sub);
        let mut start = birth;
        let mut len = remaining;
        for _ in 0..DASHA_COUNT {
            let end = start + len;
            dashas.push(Dasha {
                mahadasha: md,
                antardasha: ad,
                interval: Interval::new(start, end)?,
            });
            (md, ad) = md.next_antardasha(ad);
            len = md.antardasha_duration(ad, config.year_days);
            start = end;
        }

        Ok(Self {
            birth,
            nakshatra,
            fraction_remaining: fraction,
            dashas,
        })
    }

    /// Build with the sidereal Moon taken from `eph` at `birth`.
    pub fn for_birth(
        eph: &dyn Ephemeris,
        birth: DateTime<Utc>,
        config: &DashaConfig,
    ) -> Result<Self, SearchError> {
        let state = eph.position(PointId::Moon, jd_from_utc(&birth), true)?;
        let moon = AstroPoint {
            id: PointId::Moon,
            longitude: state.longitude,
            zodiacal_pos: ZodiacalPosition::from_longitude(state.longitude),
            house: House::FIRST,
            is_retrograde: state.is_retrograde(),
        };
        Self::build(eph, birth, &moon, config)
    }

    /// The dasha running at `t`, if `t` falls inside the 120-year span.
    pub fn lookup(&self, t: DateTime<Utc>) -> Option<&Dasha> {
        let idx = self.dashas.partition_point(|d| d.interval.start_utc() <= t);
        let candidate = self.dashas.get(idx.checked_sub(1)?)?;
        candidate.interval.contains(t).then_some(candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dasha> {
        self.dashas.iter()
    }

    pub fn len(&self) -> usize {
        self.dashas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dashas.is_empty()
    }

    pub fn birth(&self) -> DateTime<Utc> {
        self.birth
    }

    /// The Moon's nakshatra at birth.
    pub fn nakshatra(&self) -> Nakshatra {
        self.nakshatra
    }

    /// Share of the natal nakshatra, and so of the first mahadasha, still
    /// ahead at birth.
    pub fn fraction_remaining(&self) -> f64 {
        self.fraction_remaining
    }

    /// End of the last dasha.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.dashas.last().map(|d| d.interval.end_utc())
    }
}

impl<'a> IntoIterator for &'a DashaTree {
    type Item = &'a Dasha;
    type IntoIter = std::slice::Iter<'a, Dasha>;

    fn into_iter(self) -> Self::IntoIter {
        self.dashas.iter()
    }
}
