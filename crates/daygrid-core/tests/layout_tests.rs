//! End-to-end tests for the day pipeline, including concrete rendering
//! scenarios with exact expected geometry.

use chrono::NaiveDate;
use daygrid_core::{layout_day, DayEvent, GridConfig, LayoutError};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

/// Helper to build an event from (hour, minute) pairs on the rendered day.
fn event(id: &str, start: (u32, u32), end: (u32, u32)) -> DayEvent<()> {
    DayEvent {
        id: id.to_string(),
        start: day().and_hms_opt(start.0, start.1, 0),
        end: day().and_hms_opt(end.0, end.1, 0),
        payload: (),
    }
}

fn config(day_start_hour: u32, minute_height_px: f64, item_width_percent: f64) -> GridConfig {
    GridConfig {
        day_start_hour,
        minute_height_px,
        item_width_percent,
    }
}

// ── Concrete scenarios ──────────────────────────────────────────────────────

#[test]
fn lone_event_takes_the_full_width() {
    // 09:00–10:00 at 100% item width: one column, left 0, width 100
    let positioned = layout_day(vec![event("a", (9, 0), (10, 0))], &config(0, 1.0, 100.0)).unwrap();

    assert_eq!(positioned.len(), 1);
    assert_eq!(positioned[0].layout.left, 0.0);
    assert_eq!(positioned[0].layout.width, 100.0);
    assert_eq!(positioned[0].layout.top, 540.0);
    assert_eq!(positioned[0].layout.height, 60.0);
}

#[test]
fn overlapping_pair_splits_into_centered_halves() {
    // A 09:00–10:00, B 09:30–10:30 at 90%: columnWidth 50, width 45,
    // lefts 2.5 and 52.5
    let events = vec![event("a", (9, 0), (10, 0)), event("b", (9, 30), (10, 30))];

    let positioned = layout_day(events, &config(0, 1.0, 90.0)).unwrap();

    assert_eq!(positioned.len(), 2);
    let a = positioned.iter().find(|p| p.event.id == "a").unwrap();
    let b = positioned.iter().find(|p| p.event.id == "b").unwrap();
    assert_eq!(a.layout.width, 45.0);
    assert_eq!(a.layout.left, 2.5);
    assert_eq!(b.layout.width, 45.0);
    assert_eq!(b.layout.left, 52.5);
}

#[test]
fn quarter_hour_event_renders_an_hour_tall() {
    // 09:00–09:15 at 1 px/minute: height 60, not 15
    let positioned = layout_day(vec![event("a", (9, 0), (9, 15))], &config(0, 1.0, 100.0)).unwrap();

    assert_eq!(positioned[0].layout.height, 60.0);
}

#[test]
fn back_to_back_events_each_take_the_full_width() {
    // A 09:00–10:00, B 10:00–11:00: separate groups, one column each
    let events = vec![event("a", (9, 0), (10, 0)), event("b", (10, 0), (11, 0))];

    let positioned = layout_day(events, &config(0, 1.0, 100.0)).unwrap();

    assert_eq!(positioned.len(), 2);
    for p in &positioned {
        assert_eq!(p.layout.left, 0.0);
        assert_eq!(p.layout.width, 100.0);
        assert_eq!(p.layout.z_index, 1);
    }
}

#[test]
fn max_clique_of_three_gets_three_columns() {
    // 09:00–12:00, 10:00–11:00, 09:30–10:30 all mutually overlap at 10:00
    let events = vec![
        event("a", (9, 0), (12, 0)),
        event("b", (10, 0), (11, 0)),
        event("c", (9, 30), (10, 30)),
    ];

    let positioned = layout_day(events, &config(0, 1.0, 100.0)).unwrap();

    assert_eq!(positioned.len(), 3);
    let mut lefts: Vec<f64> = positioned.iter().map(|p| p.layout.left).collect();
    lefts.sort_by(f64::total_cmp);
    let expected = [0.0, 100.0 / 3.0, 200.0 / 3.0];
    for (left, want) in lefts.iter().zip(expected) {
        assert!((left - want).abs() < 1e-9, "left {} != {}", left, want);
    }
    let mut z: Vec<u32> = positioned.iter().map(|p| p.layout.z_index).collect();
    z.sort();
    assert_eq!(z, [1, 2, 3]);
}

// ── Filtering and pass-through ──────────────────────────────────────────────

#[test]
fn unscheduled_events_are_dropped_from_layout() {
    let mut draft = event("draft", (13, 0), (14, 0));
    draft.end = None;
    let events = vec![event("a", (9, 0), (10, 0)), draft];

    let positioned = layout_day(events, &GridConfig::default()).unwrap();

    assert_eq!(positioned.len(), 1);
    assert_eq!(positioned[0].event.id, "a");
}

#[test]
fn empty_input_is_ok_and_empty() {
    let positioned = layout_day::<()>(Vec::new(), &GridConfig::default()).unwrap();

    assert!(positioned.is_empty());
}

#[test]
fn payload_rides_through_untouched() {
    let events = vec![DayEvent {
        id: "standup".to_string(),
        start: day().and_hms_opt(9, 0, 0),
        end: day().and_hms_opt(10, 0, 0),
        payload: "Daily standup".to_string(),
    }];

    let positioned = layout_day(events, &GridConfig::default()).unwrap();

    assert_eq!(positioned[0].event.payload, "Daily standup");
}

// ── Configuration ───────────────────────────────────────────────────────────

#[test]
fn grid_offset_shifts_top() {
    let positioned =
        layout_day(vec![event("a", (9, 0), (10, 0))], &config(8, 1.0, 100.0)).unwrap();

    assert_eq!(positioned[0].layout.top, 60.0);
}

#[test]
fn degenerate_minute_height_rejected() {
    let result = layout_day(vec![event("a", (9, 0), (10, 0))], &config(0, 0.0, 100.0));

    assert!(matches!(result, Err(LayoutError::InvalidMinuteHeight(_))));
}

#[test]
fn item_width_out_of_range_rejected() {
    let result = layout_day(vec![event("a", (9, 0), (10, 0))], &config(0, 1.0, 120.0));

    assert!(matches!(result, Err(LayoutError::InvalidItemWidth(_))));
}

#[test]
fn day_start_hour_out_of_range_rejected() {
    let result = layout_day(vec![event("a", (9, 0), (10, 0))], &config(24, 1.0, 100.0));

    assert!(matches!(result, Err(LayoutError::InvalidDayStartHour(_))));
}

// ── Determinism ─────────────────────────────────────────────────────────────

#[test]
fn identical_calls_produce_identical_blocks() {
    let events = vec![
        event("a", (9, 0), (12, 0)),
        event("b", (10, 0), (11, 0)),
        event("c", (9, 30), (10, 30)),
    ];

    let first = layout_day(events.clone(), &GridConfig::default()).unwrap();
    let second = layout_day(events, &GridConfig::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn input_order_does_not_change_geometry() {
    let events = vec![
        event("a", (9, 0), (12, 0)),
        event("b", (10, 0), (11, 0)),
        event("c", (9, 30), (10, 30)),
    ];
    let mut reversed = events.clone();
    reversed.reverse();

    let mut forward = layout_day(events, &GridConfig::default()).unwrap();
    let mut backward = layout_day(reversed, &GridConfig::default()).unwrap();
    forward.sort_by(|a, b| a.event.id.cmp(&b.event.id));
    backward.sort_by(|a, b| a.event.id.cmp(&b.event.id));

    assert_eq!(forward, backward);
}
