//! Chart snapshots: placed points, whole-sign houses, aspects and the
//! lunation at one instant and location.
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use jyoti_chart::build_chart_utc;
//! use jyoti_core::VEDIC;
//! use jyoti_ephem::AnalyticEphemeris;
//! use jyoti_vedic::ChartType;
//!
//! let eph = AnalyticEphemeris::default();
//! let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let chart = build_chart_utc(&eph, t, -0.1278, 51.5074, ChartType::D9, VEDIC).unwrap();
//! println!("{chart}");
//! ```

pub mod astro_point;
pub mod builder;
pub mod chart;
pub mod error;
pub mod sanity;

pub use astro_point::AstroPoint;
pub use builder::{aspects_between, build_chart, build_chart_jd, build_chart_utc};
pub use chart::{Chart, Rulership};
pub use error::ChartError;
pub use sanity::sanity_check;
