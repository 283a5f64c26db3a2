//! Zodiac primitives shared by every layer of the chart engine.
//!
//! - [`angle`]: wraparound arithmetic on the 360° circle
//! - [`Sign`], [`ZodiacalPosition`]: arc-minute positions in the zodiac
//! - [`PointId`] and the standard point sets
//! - [`House`]: whole-sign house numbers
//! - [`Aspect`], [`Lunation`]: orb-window classification of separations

pub mod angle;
pub mod aspect;
pub mod error;
pub mod house;
pub mod lunation;
pub mod point;
pub mod sign;
pub mod zodiacal;

pub use angle::{absolute_difference, directional_difference, normalize_360, sign_degrees};
pub use aspect::{Aspect, AspectType};
pub use error::CoreError;
pub use house::House;
pub use lunation::Lunation;
pub use point::{MODERN, PointId, TRADITIONAL, VEDIC, parse_point_list};
pub use sign::Sign;
pub use zodiacal::ZodiacalPosition;
