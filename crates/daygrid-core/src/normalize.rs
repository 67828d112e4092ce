//! Interval normalization — converts event instants into minute-of-day
//! offsets and applies the minimum visual duration floor.
//!
//! Events shorter than [`MIN_LAYOUT_MINUTES`] are widened for layout only;
//! the true instants stay untouched on the inner [`DayEvent`]. Events that
//! cannot produce a valid `[start_minute, end_minute)` interval are dropped,
//! never reported: missing instants, non-positive durations, and intervals
//! whose widened end lands past midnight.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::event::DayEvent;

/// Minimum layout footprint in minutes. Shorter events are widened to this
/// so they stay visible instead of collapsing into a sliver.
pub const MIN_LAYOUT_MINUTES: i64 = 60;

/// A [`DayEvent`] annotated with its minute-of-day layout interval.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent<P> {
    /// The original event, instants untouched.
    pub event: DayEvent<P>,
    /// Minutes since midnight of the rendered day.
    pub start_minute: i64,
    /// Layout end in minutes since midnight; widened to
    /// `start_minute + MIN_LAYOUT_MINUTES` for events shorter than the floor.
    pub end_minute: i64,
}

/// Normalize a day's events for layout.
///
/// Dropped, silently:
///
/// - events missing a start or an end
/// - events whose true duration is zero or negative
/// - events whose layout interval is empty after widening (a short event
///   starting close enough to midnight that the widened end wraps)
///
/// Input order is preserved;
/// [`group_collisions`](crate::group::group_collisions) owns the sort.
pub fn normalize_events<P>(events: Vec<DayEvent<P>>) -> Vec<NormalizedEvent<P>> {
    events
        .into_iter()
        .filter_map(|event| {
            let (start, end) = match (event.start, event.end) {
                (Some(start), Some(end)) => (start, end),
                _ => return None,
            };

            let duration = (end - start).num_minutes();
            if duration <= 0 {
                return None;
            }

            // Layout-only widening; `event` keeps the true instants.
            let layout_end = if duration < MIN_LAYOUT_MINUTES {
                start + Duration::minutes(MIN_LAYOUT_MINUTES)
            } else {
                end
            };

            let start_minute = minute_of_day(start);
            let end_minute = minute_of_day(layout_end);
            if start_minute >= end_minute {
                return None;
            }

            Some(NormalizedEvent {
                event,
                start_minute,
                end_minute,
            })
        })
        .collect()
}

/// Minutes elapsed since midnight for an instant's wall-clock time.
fn minute_of_day(instant: NaiveDateTime) -> i64 {
    i64::from(instant.hour() * 60 + instant.minute())
}
