//! Divisional (varga) chart transform.
//!
//! Each 30° sign is split into N equal parts of `30/N` degrees. The part a
//! position falls in selects the destination sign, and the offset inside the
//! part is stretched back over a full 30° sign.
//!
//! Destination sign, with `k` the 0-based part index:
//!
//! | Chart | Start sign                                        |
//! |-------|---------------------------------------------------|
//! | D4    | the sign itself, then +3 per part                 |
//! | D7    | odd signs: itself; even signs: the 7th from it     |
//! | D9    | movable: itself; fixed: the 9th; dual: the 5th     |
//! | D10   | odd signs: itself; even signs: the 9th from it     |
//!
//! The running sign number is reduced into 1..=12 exactly once, after all
//! offsets are applied.

use jyoti_core::{Sign, ZodiacalPosition};

use crate::chart_type::ChartType;
use crate::error::VedicError;

/// Absorbs float error so that e.g. 23°20′ in D9 lands at the start of
/// part 7 rather than the end of part 6.
const GRID_EPS: f64 = 1e-9;

/// Width of one division in degrees.
pub fn division_span(divisions: u8) -> f64 {
    30.0 / divisions as f64
}

/// 0-based division a sign offset falls into.
pub fn division_index(sign_degrees: f64, divisions: u8) -> u8 {
    let k = (sign_degrees / division_span(divisions) + GRID_EPS).floor() as i32;
    k.clamp(0, divisions as i32 - 1) as u8
}

/// Sign number (before reduction) of division `k` of `sign`.
fn destination_number(chart: ChartType, sign: Sign, k: u8) -> i32 {
    let n = sign.index() as i32;
    let k = k as i32;
    match chart {
        ChartType::D4 => n + 3 * k,
        ChartType::D7 => {
            let start = if n % 2 == 0 { n + 6 } else { n };
            start + k
        }
        ChartType::D9 => {
            let start = match (n - 1) % 3 {
                0 => n,
                1 => n + 8,
                _ => n + 4,
            };
            start + k
        }
        ChartType::D10 => {
            let start = if n % 2 == 0 { n + 8 } else { n };
            start + k
        }
        ChartType::D1 | ChartType::Tropical => n,
    }
}

/// Map a D1 position into the divisional chart `chart`.
///
/// D1 is the identity. Tropical has no divisional rule and is rejected.
pub fn to_varga(pos: &ZodiacalPosition, chart: ChartType) -> Result<ZodiacalPosition, VedicError> {
    match chart {
        ChartType::D1 => return Ok(*pos),
        ChartType::Tropical => return Err(VedicError::NotDivisional(chart)),
        _ => {}
    }
    let n = chart.divisions();
    let parts = pos.sign_degrees() / division_span(n);
    let k = division_index(pos.sign_degrees(), n);

    // Fraction of the way through part k, taken from the same quotient as k
    // so a position on a part boundary cannot land at 30°.
    let fraction = (parts - k as f64).clamp(0.0, 1.0);
    let total_minutes = ((fraction * 1800.0 + GRID_EPS).floor() as u32).min(1799);
    let (degrees, minutes) = (total_minutes / 60, total_minutes % 60);

    let sign = Sign::from_index(destination_number(chart, pos.sign(), k).rem_euclid(12))?;
    Ok(ZodiacalPosition::new(sign, degrees, minutes)?)
}
