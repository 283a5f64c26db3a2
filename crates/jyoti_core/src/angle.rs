//! Degree-domain arithmetic on the 360° circle.

/// Width of one zodiac sign in degrees.
pub const SIGN_SPAN_DEG: f64 = 30.0;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest angular distance between two longitudes, in [0, 180].
///
/// Symmetric: `absolute_difference(a, b) == absolute_difference(b, a)`.
pub fn absolute_difference(a: f64, b: f64) -> f64 {
    let d = (normalize_360(a) - normalize_360(b)).abs();
    if d > 180.0 { 360.0 - d } else { d }
}

/// Signed angular difference `a − b`, in (−180, 180].
///
/// Positive when `a` lies ahead of `b` in zodiacal order (the short way).
pub fn directional_difference(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Offset of a longitude within its own sign, in [0, 30).
pub fn sign_degrees(lon: f64) -> f64 {
    normalize_360(lon) % SIGN_SPAN_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_wraps_full_turn() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-17);
        assert!((0.0..360.0).contains(&r), "r = {r}");
    }

    #[test]
    fn absolute_difference_wraps_short_way() {
        assert!((absolute_difference(359.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((absolute_difference(1.0, 359.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn absolute_difference_bounds() {
        let mut a = 0.0;
        while a < 360.0 {
            let mut b = 0.0;
            while b < 360.0 {
                let d = absolute_difference(a, b);
                assert!((0.0..=180.0).contains(&d), "d({a},{b}) = {d}");
                assert!((d - absolute_difference(b, a)).abs() < 1e-12);
                b += 17.5;
            }
            a += 13.25;
        }
    }

    #[test]
    fn absolute_difference_opposition() {
        assert!((absolute_difference(10.0, 190.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn directional_difference_sign() {
        assert!((directional_difference(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((directional_difference(350.0, 10.0) + 20.0).abs() < 1e-12);
        assert!((directional_difference(90.0, 0.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn directional_difference_half_turn_is_positive() {
        assert!((directional_difference(180.0, 0.0) - 180.0).abs() < 1e-12);
        assert!((directional_difference(0.0, 180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn sign_degrees_offsets() {
        assert!((sign_degrees(0.0) - 0.0).abs() < 1e-12);
        assert!((sign_degrees(45.5) - 15.5).abs() < 1e-12);
        assert!((sign_degrees(359.0) - 29.0).abs() < 1e-12);
        assert!((sign_degrees(-1.0) - 29.0).abs() < 1e-12);
    }
}
