//! Time searches over an [`Ephemeris`](jyoti_ephem::Ephemeris).
//!
//! - [`edge`]: coarse scan plus bisection on a signed window gap
//! - [`correction`]: the instant a point reaches a longitude
//! - [`dasha_tree`]: Vimshottari mahadasha/antardasha periods from birth
//! - [`transit`]: aspect and ingress journeys, and the transit list

pub mod correction;
pub mod dasha_tree;
pub mod edge;
pub mod error;
pub mod transit;

pub use correction::{correct_time_to_longitude, correct_time_with};
pub use dasha_tree::{DASHA_COUNT, Dasha, DashaConfig, DashaTree, SIDEREAL_MONTH_DAYS};
pub use edge::{EdgeConfig, SearchDirection, arc_gap, find_edge, find_outer_edge, refine_edge};
pub use error::SearchError;
pub use transit::{
    Transit, TransitKind, aspect_journey, aspect_step_days, ingress_journey, step_days, transits_at,
};
