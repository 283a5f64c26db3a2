//! Julian Day <-> Gregorian calendar conversions.
//!
//! Algorithms: Meeus, *Astronomical Algorithms* (2nd ed), Chapter 7.
//! Only the Gregorian calendar is supported; dates before 1582-10-15 are
//! treated as proleptic Gregorian.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day of the Unix epoch (1970-01-01 00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Largest millisecond count accepted when building a `DateTime`.
const MAX_MILLIS: f64 = 8.0e15;

/// Gregorian calendar date (with fractional day) to Julian Day.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Day to Gregorian `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// UT Julian Day of a UTC instant, including seconds and sub-seconds.
pub fn jd_from_utc(t: &DateTime<Utc>) -> f64 {
    let seconds = t.second() as f64 + t.nanosecond() as f64 * 1e-9;
    let day_frac = t.day() as f64
        + t.hour() as f64 / 24.0
        + t.minute() as f64 / 1_440.0
        + seconds / SECONDS_PER_DAY;
    calendar_to_jd(t.year(), t.month(), day_frac)
}

/// UTC instant of a UT Julian Day, rounded to the millisecond.
pub fn utc_from_jd(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1_000.0).round();
    if !millis.is_finite() || millis.abs() > MAX_MILLIS {
        return Err(TimeError::OutOfRange(jd));
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or(TimeError::OutOfRange(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 October 4.81 -> JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn january_uses_previous_year_branch() {
        // 1987 January 27.0 -> JD 2446822.5
        let jd = calendar_to_jd(1987, 1, 27.0);
        assert!((jd - 2_446_822.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn calendar_roundtrip() {
        for &jd in &[2_451_545.0, 2_460_310.5, 2_448_786.694_444, 2_415_020.25] {
            let (y, m, d) = jd_to_calendar(jd);
            let back = calendar_to_jd(y, m, d);
            assert!((back - jd).abs() < 1e-8, "jd {jd} -> {y}-{m}-{d} -> {back}");
        }
    }

    #[test]
    fn utc_to_jd_matches_unix_epoch_offset() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let jd = jd_from_utc(&t);
        let from_unix = UNIX_EPOCH_JD + t.timestamp() as f64 / SECONDS_PER_DAY;
        assert!((jd - from_unix).abs() < 1e-9, "{jd} vs {from_unix}");
        assert!((jd - 2_460_310.5).abs() < 1e-9);
    }

    #[test]
    fn jd_to_utc_roundtrip() {
        let t = Utc.with_ymd_and_hms(1992, 6, 13, 4, 40, 0).unwrap();
        let back = utc_from_jd(jd_from_utc(&t)).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn jd_to_utc_rejects_nan() {
        assert!(utc_from_jd(f64::NAN).is_err());
    }

    #[test]
    fn centuries_at_j2000_is_zero() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
    }
}
