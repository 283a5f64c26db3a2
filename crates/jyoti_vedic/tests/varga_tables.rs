//! Divisional charts checked against hand-worked traditional tables.

use jyoti_core::{Sign, ZodiacalPosition};
use jyoti_vedic::{ChartType, to_varga};

fn zp(sign: Sign, d: u32, m: u32) -> ZodiacalPosition {
    ZodiacalPosition::new(sign, d, m).unwrap()
}

/// Destination sign of every part of `sign` in `chart`, part by part.
fn part_signs(chart: ChartType, sign: Sign) -> Vec<Sign> {
    let n = chart.divisions() as u32;
    (0..n)
        .map(|k| {
            // Middle of part k, in whole minutes.
            let mid_minutes = (k * 1800 + 900) / n;
            let p = zp(sign, mid_minutes / 60, mid_minutes % 60);
            to_varga(&p, chart).unwrap().sign()
        })
        .collect()
}

#[test]
fn d4_kendra_sequence() {
    use Sign::*;
    assert_eq!(part_signs(ChartType::D4, Aries), vec![Aries, Cancer, Libra, Capricorn]);
    assert_eq!(part_signs(ChartType::D4, Taurus), vec![Taurus, Leo, Scorpio, Aquarius]);
    assert_eq!(part_signs(ChartType::D4, Pisces), vec![Pisces, Gemini, Virgo, Sagittarius]);
}

#[test]
fn d7_odd_and_even_signs() {
    use Sign::*;
    assert_eq!(
        part_signs(ChartType::D7, Aries),
        vec![Aries, Taurus, Gemini, Cancer, Leo, Virgo, Libra]
    );
    // Even signs start from the seventh sign.
    assert_eq!(
        part_signs(ChartType::D7, Taurus),
        vec![Scorpio, Sagittarius, Capricorn, Aquarius, Pisces, Aries, Taurus]
    );
}

#[test]
fn d9_navamsa_groups() {
    use Sign::*;
    // Movable signs start from themselves.
    assert_eq!(part_signs(ChartType::D9, Aries)[0], Aries);
    assert_eq!(part_signs(ChartType::D9, Cancer)[0], Cancer);
    // Fixed signs start from the ninth.
    assert_eq!(part_signs(ChartType::D9, Taurus)[0], Capricorn);
    assert_eq!(part_signs(ChartType::D9, Leo)[0], Aries);
    // Dual signs start from the fifth.
    assert_eq!(part_signs(ChartType::D9, Gemini)[0], Libra);
    assert_eq!(part_signs(ChartType::D9, Pisces)[0], Cancer);
    // Aries' last navamsa is Sagittarius, Pisces' last is Pisces.
    assert_eq!(part_signs(ChartType::D9, Aries)[8], Sagittarius);
    assert_eq!(part_signs(ChartType::D9, Pisces)[8], Pisces);
}

#[test]
fn d10_odd_and_even_signs() {
    use Sign::*;
    let aries = part_signs(ChartType::D10, Aries);
    assert_eq!(aries[0], Aries);
    assert_eq!(aries[9], Capricorn);
    // Even signs start from the ninth.
    let taurus = part_signs(ChartType::D10, Taurus);
    assert_eq!(taurus[0], Capricorn);
    assert_eq!(taurus[9], Libra);
}

#[test]
fn each_part_is_stretched_over_a_full_sign() {
    for &chart in &[ChartType::D4, ChartType::D7, ChartType::D9, ChartType::D10] {
        let n = chart.divisions() as u32;
        for k in 0..n {
            // Start of each part maps to 0°, give or take the arc-minute grid.
            let start_minutes = (k * 1800).div_ceil(n);
            let p = zp(Sign::Gemini, start_minutes / 60, start_minutes % 60);
            let v = to_varga(&p, chart).unwrap();
            assert!(v.degrees() < 1, "{chart} part {k}: {v}");
        }
    }
}

#[test]
fn mars_fixture_d4() {
    let v = to_varga(&zp(Sign::Sagittarius, 3, 7), ChartType::D4).unwrap();
    assert_eq!(v.sign(), Sign::Sagittarius);
    assert_eq!((v.degrees(), v.minutes()), (12, 28));
}
