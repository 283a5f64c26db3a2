//! Ephemeris adapter for the chart engine.
//!
//! [`Ephemeris`] is the contract the chart builder and searches are written
//! against. [`AnalyticEphemeris`] implements it with closed-form theories
//! that need no data files:
//!
//! - [`sun`], [`moon`]: Meeus series
//! - [`planets`]: JPL approximate Keplerian elements with light time
//! - [`nodes`]: mean and true lunar node
//! - [`nutation`], [`ayanamsha`], [`lagna`]: frame and house helpers

pub mod analytic;
pub mod ayanamsha;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod lagna;
pub mod moon;
pub mod nodes;
pub mod nutation;
pub mod planets;
pub mod state;
pub mod sun;

pub use analytic::AnalyticEphemeris;
pub use ayanamsha::{ALL_AYANAMSHAS, AyanamshaSystem};
pub use config::EphemerisConfig;
pub use ephemeris::Ephemeris;
pub use error::EphemerisError;
pub use nodes::NodeMode;
pub use nutation::Nutation;
pub use state::{EclipticPosition, HouseCusps, PointState};
