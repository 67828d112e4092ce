//! Caller-facing event input.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single event on the day being rendered.
///
/// `start` and `end` are the true instants. The layout pipeline widens short
/// intervals internally but never touches these, so duration text elsewhere
/// stays honest. `payload` is opaque to the engine: whatever the host needs
/// carried through to rendering (title, color, resource id) rides along
/// unread.
///
/// Events missing either instant are dropped during normalization rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEvent<P> {
    pub id: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub payload: P,
}

impl<P> DayEvent<P> {
    /// Duration of the true interval in whole minutes, or `None` when either
    /// instant is missing. May be zero or negative for malformed events.
    pub fn duration_minutes(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((end - start).num_minutes()),
            _ => None,
        }
    }
}
