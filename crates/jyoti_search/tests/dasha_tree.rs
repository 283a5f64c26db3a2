//! Dasha period tree: anchoring, tiling and lookup.
//!
//! Most tests run against a Moon moving uniformly, so the nakshatra window
//! and the remaining fraction are known exactly. The last ones check the
//! analytic ephemeris against a reference birth chart.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use jyoti_chart::AstroPoint;
use jyoti_core::{House, PointId, ZodiacalPosition, normalize_360};
use jyoti_ephem::{AnalyticEphemeris, Ephemeris, EphemerisError, HouseCusps, PointState};
use jyoti_search::{DASHA_COUNT, DashaConfig, DashaTree, SearchError};
use jyoti_time::jd_from_utc;
use jyoti_vedic::{DashaLord, NakshatraKind, full_cycle_duration};

/// Sidereal Moon at 10° (three quarters through Ashwini) at the birth
/// instant, moving one sidereal month per turn.
struct UniformMoon {
    jd0: f64,
}

const MOON_RATE: f64 = 360.0 / 27.321_661;

impl Ephemeris for UniformMoon {
    fn position(&self, _p: PointId, jd: f64, _sidereal: bool) -> Result<PointState, EphemerisError> {
        Ok(PointState {
            longitude: normalize_360(10.0 + MOON_RATE * (jd - self.jd0)),
            latitude: 0.0,
            distance: 384_400.0,
            speed: MOON_RATE,
        })
    }

    fn houses(&self, _jd: f64, _lon: f64, _lat: f64, _s: bool) -> Result<HouseCusps, EphemerisError> {
        Ok(HouseCusps::whole_sign(0.0, 270.0))
    }

    fn ayanamsha(&self, _jd: f64) -> f64 {
        0.0
    }
}

fn birth() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
}

fn uniform() -> UniformMoon {
    UniformMoon { jd0: jd_from_utc(&birth()) }
}

fn tree() -> DashaTree {
    DashaTree::for_birth(&uniform(), birth(), &DashaConfig::default()).unwrap()
}

fn days(d: TimeDelta) -> f64 {
    d.num_seconds() as f64 / 86_400.0
}

#[test]
fn anchors_in_ketu_saturn() {
    let t = tree();
    assert_eq!(t.nakshatra().kind, NakshatraKind::Ashwini);
    assert!((t.fraction_remaining() - 0.25).abs() < 1e-5, "fraction = {}", t.fraction_remaining());

    // 5.25 of Ketu's 7 years are gone: 275.5 days of the Saturn
    // antardasha remain.
    let first = t.iter().next().unwrap();
    assert_eq!((first.mahadasha, first.antardasha), (DashaLord::Ketu, DashaLord::Saturn));
    assert_eq!(first.interval.start_utc(), birth());
    let left = days(first.interval.duration());
    assert!((left - 275.5).abs() < 0.05, "remaining = {left} days");
}

#[test]
fn eighty_one_contiguous_periods() {
    let t = tree();
    assert_eq!(t.len(), DASHA_COUNT);
    let all: Vec<_> = t.iter().collect();
    for pair in all.windows(2) {
        assert_eq!(pair[0].interval.end, pair[1].interval.start, "gap after {:?}", pair[0]);
        assert_eq!(
            pair[0].mahadasha.next_antardasha(pair[0].antardasha),
            (pair[1].mahadasha, pair[1].antardasha)
        );
    }
    // Eight whole mahadashas plus the start of Ketu's second round.
    let mahadasha_starts = all.iter().filter(|d| d.antardasha == d.mahadasha).count();
    assert_eq!(mahadasha_starts, 9);
}

#[test]
fn periods_span_one_cycle_less_the_elapsed_part() {
    let t = tree();
    let cfg = DashaConfig::default();
    let first = t.iter().next().unwrap();
    let elapsed = first.mahadasha.antardasha_duration(first.antardasha, cfg.year_days)
        - first.interval.duration();
    let total = t
        .iter()
        .map(|d| d.interval.duration())
        .fold(TimeDelta::zero(), |acc, d| acc + d);
    // The 81 periods are every (mahadasha, antardasha) pair once.
    let table: TimeDelta = DashaLord::all()
        .iter()
        .flat_map(|md| md.antardashas().map(|ad| md.antardasha_duration(ad, cfg.year_days)))
        .fold(TimeDelta::zero(), |acc, d| acc + d);
    assert_eq!(total + elapsed, table);
    // Tabulated antardashas fall a few days short of 120 nominal years.
    let short = days(full_cycle_duration(cfg.year_days) - table);
    assert!((0.0..=10.5).contains(&short), "short by {short} days");
    assert_eq!(t.end(), Some(birth() + total));
}

#[test]
fn lookup_finds_exactly_one_period() {
    let t = tree();
    let end = t.end().unwrap();
    assert!(t.lookup(birth() - TimeDelta::seconds(1)).is_none());
    assert!(t.lookup(end).is_none());
    assert_eq!(t.lookup(birth()), t.iter().next());
    assert_eq!(t.lookup(end - TimeDelta::seconds(1)), t.iter().last());

    let span = (end - birth()).num_seconds();
    for i in 0..500 {
        let at = birth() + TimeDelta::seconds(span / 500 * i + 12_345);
        let found = t.lookup(at).unwrap();
        let containing = t.iter().filter(|d| d.interval.contains(at)).count();
        assert_eq!(containing, 1, "{at}");
        assert!(found.interval.contains(at), "{at}");
    }
}

#[test]
fn boundaries_are_half_open() {
    let t = tree();
    let second = t.iter().nth(1).unwrap();
    let found = t.lookup(second.interval.start_utc()).unwrap();
    assert_eq!(found, second);
}

#[test]
fn moon_outside_its_claimed_nakshatra() {
    // The ephemeris has the Moon near 10°, but the point claims 100°.
    let moon = AstroPoint {
        id: PointId::Moon,
        longitude: 100.0,
        zodiacal_pos: ZodiacalPosition::from_longitude(100.0),
        house: House::FIRST,
        is_retrograde: false,
    };
    let err = DashaTree::build(&uniform(), birth(), &moon, &DashaConfig::default()).unwrap_err();
    assert!(matches!(err, SearchError::NoBracket { .. }), "{err}");
}

#[test]
fn rejects_bad_config() {
    let cfg = DashaConfig { sidereal_month_days: -1.0, ..DashaConfig::default() };
    let err = DashaTree::for_birth(&uniform(), birth(), &cfg).unwrap_err();
    assert_eq!(err, SearchError::InvalidConfig("sidereal_month_days must be positive"));
}

#[test]
fn json_field_names() {
    let t = tree();
    let v = serde_json::to_value(t.iter().next().unwrap()).unwrap();
    assert_eq!(v["mahadasha"], "ketu");
    assert_eq!(v["antardasha"], "saturn");
    assert_eq!(v["interval"]["start"]["t"], "2000-01-01T00:00");
    assert_eq!(v["interval"]["start"]["z"], "UTC");
}

#[test]
fn new_year_2024_birth() {
    let eph = AnalyticEphemeris::default();
    let birth = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t = DashaTree::for_birth(&eph, birth, &DashaConfig::default()).unwrap();
    assert_eq!(t.nakshatra().kind, NakshatraKind::Magha);

    let at = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let d = t.lookup(at).unwrap();
    assert_eq!((d.mahadasha, d.antardasha), (DashaLord::Ketu, DashaLord::Mercury));

    let at = Utc.with_ymd_and_hms(2024, 10, 22, 0, 0, 0).unwrap();
    let d = t.lookup(at).unwrap();
    assert_eq!((d.mahadasha, d.antardasha), (DashaLord::Venus, DashaLord::Venus));
}

#[test]
fn built_from_a_chart_moon() {
    let eph = AnalyticEphemeris::default();
    let birth = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let chart = jyoti_chart::build_chart_utc(
        &eph,
        birth,
        -0.1278,
        51.5074,
        jyoti_vedic::ChartType::D1,
        &[PointId::Moon],
    )
    .unwrap();
    let moon = chart.require(PointId::Moon).unwrap();
    let from_chart = DashaTree::build(&eph, birth, moon, &DashaConfig::default()).unwrap();
    let direct = DashaTree::for_birth(&eph, birth, &DashaConfig::default()).unwrap();
    assert_eq!(from_chart.iter().next(), direct.iter().next());
}
