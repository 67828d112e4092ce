//! The day pipeline — normalize, group, pack, resolve in one call.

use crate::columns::pack_columns;
use crate::config::GridConfig;
use crate::error::Result;
use crate::event::DayEvent;
use crate::geometry::{resolve_geometry, PositionedEvent};
use crate::group::group_collisions;
use crate::normalize::normalize_events;

/// Lay out one day's events.
///
/// Events may arrive in any order. Events without a usable layout interval
/// are dropped per the normalizer's contract; everything else comes back
/// with a [`LayoutBlock`](crate::geometry::LayoutBlock), ordered by collision
/// group and start time. Empty input yields empty output.
///
/// # Errors
/// Returns a [`LayoutError`](crate::error::LayoutError) when the
/// configuration is degenerate (`minute_height_px` not positive and finite,
/// `item_width_percent` outside 0..=100, `day_start_hour` past 23).
/// Per-event problems never error.
pub fn layout_day<P>(
    events: Vec<DayEvent<P>>,
    config: &GridConfig,
) -> Result<Vec<PositionedEvent<P>>> {
    config.validate()?;

    let normalized = normalize_events(events);
    let mut positioned = Vec::with_capacity(normalized.len());
    for group in group_collisions(normalized) {
        positioned.extend(resolve_geometry(pack_columns(group), config));
    }

    Ok(positioned)
}
