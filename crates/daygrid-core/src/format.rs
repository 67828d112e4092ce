//! Display formatting for event times and durations.

use chrono::NaiveDateTime;

use crate::event::DayEvent;

/// Clock format for rendered time labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// "9:05 AM"
    TwelveHour,
    /// "09:05"
    #[default]
    TwentyFourHour,
}

/// Format an instant's wall-clock time for display.
pub fn format_time(instant: NaiveDateTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwelveHour => instant.format("%-I:%M %p").to_string(),
        TimeFormat::TwentyFourHour => instant.format("%H:%M").to_string(),
    }
}

/// Human-readable duration of an event's true interval, e.g. "1h 30m".
///
/// Uses the caller's instants, never the widened layout interval, so a
/// 15-minute event reads "15m" even though it renders an hour tall. Returns
/// an empty string when the event has no usable interval.
pub fn duration_text<P>(event: &DayEvent<P>) -> String {
    let Some(total) = event.duration_minutes() else {
        return String::new();
    };
    if total <= 0 {
        return String::new();
    }

    let hours = total / 60;
    let minutes = total % 60;

    let mut text = String::new();
    if hours > 0 {
        text.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&format!("{}m", minutes));
    }
    text
}
