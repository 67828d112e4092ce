//! Grid configuration for one day view.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Geometry configuration for a day-view grid.
///
/// Degenerate values are rejected by [`validate`](GridConfig::validate)
/// (called from [`layout_day`](crate::layout::layout_day)) instead of being
/// clamped, so the caller always gets the geometry it asked for or an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Hour (0–23) rendered at the top edge of the grid.
    pub day_start_hour: u32,
    /// Vertical pixels per minute of the grid.
    pub minute_height_px: f64,
    /// Percentage (0–100) of a column's width an event occupies. The
    /// remainder is gutter between adjacent columns.
    pub item_width_percent: f64,
}

impl Default for GridConfig {
    /// A midnight-anchored grid: 1 px per minute, 95% item width.
    fn default() -> Self {
        Self {
            day_start_hour: 0,
            minute_height_px: 1.0,
            item_width_percent: 95.0,
        }
    }
}

impl GridConfig {
    /// Check the configuration against the ranges the geometry resolver
    /// assumes.
    pub fn validate(&self) -> Result<()> {
        if self.day_start_hour > 23 {
            return Err(LayoutError::InvalidDayStartHour(self.day_start_hour));
        }
        if !self.minute_height_px.is_finite() || self.minute_height_px <= 0.0 {
            return Err(LayoutError::InvalidMinuteHeight(self.minute_height_px));
        }
        if !self.item_width_percent.is_finite()
            || !(0.0..=100.0).contains(&self.item_width_percent)
        {
            return Err(LayoutError::InvalidItemWidth(self.item_width_percent));
        }
        Ok(())
    }

    /// Minute offset of the grid's visible top edge.
    pub fn day_start_minute(&self) -> i64 {
        i64::from(self.day_start_hour) * 60
    }
}
