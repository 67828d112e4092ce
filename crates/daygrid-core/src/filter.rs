//! Day and range filters — pick the events a day view should feed to the
//! layout pipeline.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::event::DayEvent;

/// Strict interval overlap: `a.start < b.end && b.start < a.end`.
///
/// Adjacent intervals (one ends exactly when the other starts) do NOT
/// overlap.
pub fn ranges_overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Events visible on `day`: starting on it, ending on it, or spanning it.
///
/// Events missing either instant never match.
pub fn events_on_day<P: Clone>(events: &[DayEvent<P>], day: NaiveDate) -> Vec<DayEvent<P>> {
    events
        .iter()
        .filter(|event| {
            let (Some(start), Some(end)) = (event.start, event.end) else {
                return false;
            };
            start.date() == day || end.date() == day || (start.date() < day && end.date() > day)
        })
        .cloned()
        .collect()
}

/// Events overlapping the inclusive day range `from..=to`.
///
/// Overlap is strict against the range's instant span: an event ending
/// exactly at midnight of `from` does not match.
pub fn events_in_range<P: Clone>(
    events: &[DayEvent<P>],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<DayEvent<P>> {
    let range_start = from.and_time(NaiveTime::MIN);
    events
        .iter()
        .filter(|event| {
            let (Some(start), Some(end)) = (event.start, event.end) else {
                return false;
            };
            // [start, end) against [from 00:00, day-after-`to` 00:00).
            start.date() <= to && end > range_start
        })
        .cloned()
        .collect()
}
