//! Error types for the core value types.

use thiserror::Error;

/// Errors from constructing or parsing core values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CoreError {
    #[error("invalid sign index {0} (expected 0..=12)")]
    InvalidSignIndex(i32),
    #[error("unknown sign name: {0}")]
    UnknownSign(String),
    #[error("invalid house number {0} (expected 1..=12)")]
    InvalidHouse(i32),
    #[error("unknown point: {0}")]
    UnknownPoint(String),
    #[error("invalid in-sign position {degrees}°{minutes}′")]
    InvalidPosition { degrees: u32, minutes: u32 },
}
