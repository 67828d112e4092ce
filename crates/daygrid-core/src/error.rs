//! Error types for daygrid operations.
//!
//! The engine favors silent, well-defined filtering over failure: per-event
//! problems (missing instants, non-positive durations) drop the event rather
//! than raise. The only failure mode is a degenerate grid configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid day start hour: {0} (expected 0..=23)")]
    InvalidDayStartHour(u32),

    #[error("Invalid minute height: {0} (expected a positive, finite pixel value)")]
    InvalidMinuteHeight(f64),

    #[error("Invalid item width: {0} (expected a percentage within 0..=100)")]
    InvalidItemWidth(f64),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
