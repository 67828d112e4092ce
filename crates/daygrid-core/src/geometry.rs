//! Geometry resolution — converts column assignments and minute offsets into
//! absolute layout blocks.

use serde::{Deserialize, Serialize};

use crate::columns::PackedGroup;
use crate::config::GridConfig;
use crate::event::DayEvent;
use crate::normalize::MIN_LAYOUT_MINUTES;

/// Computed placement for one event. `top` and `height` are pixels; `left`
/// and `width` are percentages of the day view's content width.
///
/// Serialized in camelCase (`zIndex`) for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBlock {
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
    /// Stacking order. Strictly increases with column index so rightward
    /// columns paint above earlier ones when edges touch; ties within a
    /// column resolve by insertion order.
    pub z_index: u32,
}

/// Final per-event output of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEvent<P> {
    /// The caller's event, identity and payload untouched.
    pub event: DayEvent<P>,
    /// Layout interval in minutes since midnight (end possibly widened).
    pub start_minute: i64,
    pub end_minute: i64,
    /// Resolved geometry.
    pub layout: LayoutBlock,
}

/// Resolve geometry for one packed group.
///
/// Events are centered within their column's slot: the column's share of the
/// width is `100 / column_count` percent, the event occupies
/// `item_width_percent` of that share, and the remainder splits evenly into
/// left and right gutter.
///
/// The one-hour pixel floor is applied again here even though the normalizer
/// already widened short intervals; nothing that reaches this stage renders
/// shorter than `minute_height_px * 60`.
pub fn resolve_geometry<P>(group: PackedGroup<P>, config: &GridConfig) -> Vec<PositionedEvent<P>> {
    let column_width = 100.0 / group.column_count as f64;
    let width = column_width * (config.item_width_percent / 100.0);
    let min_height = config.minute_height_px * MIN_LAYOUT_MINUTES as f64;

    group
        .events
        .into_iter()
        .map(|packed| {
            let start = packed.event.start_minute;
            let end = packed.event.end_minute;
            let column = packed.column;

            let top =
                ((start - config.day_start_minute()) as f64 * config.minute_height_px).max(0.0);
            let height = ((end - start) as f64 * config.minute_height_px).max(min_height);
            let left = column as f64 * column_width + (column_width - width) / 2.0;

            PositionedEvent {
                event: packed.event.event,
                start_minute: start,
                end_minute: end,
                layout: LayoutBlock {
                    top,
                    height,
                    left,
                    width,
                    z_index: column as u32 + 1,
                },
            }
        })
        .collect()
}
