//! Sidereal chart math that needs no ephemeris.
//!
//! - [`ChartType`]: tropical and the D1/D4/D7/D9/D10 divisional charts
//! - [`to_varga`]: the divisional transform of a zodiacal position
//! - [`Nakshatra`]: 27 lunar mansions and their padas
//! - [`DashaLord`]: Vimshottari lords with mahadasha and antardasha tables

pub mod chart_type;
pub mod dasha_lord;
pub mod error;
pub mod nakshatra;
pub mod varga;

pub use chart_type::{ALL_CHART_TYPES, ChartType};
pub use dasha_lord::{ALL_DASHA_LORDS, DEFAULT_YEAR_DAYS, DashaLord, full_cycle_duration, validate_year_days};
pub use error::VedicError;
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraKind, PADA_SPAN};
pub use varga::{division_index, division_span, to_varga};
