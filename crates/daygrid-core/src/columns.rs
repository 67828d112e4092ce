//! Column packing — greedy first-fit assignment of a group's events to the
//! fewest possible side-by-side columns.

use crate::group::CollisionGroup;
use crate::normalize::NormalizedEvent;

/// An event with its assigned column within a group.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedEvent<P> {
    pub event: NormalizedEvent<P>,
    /// Zero-based column index, left to right.
    pub column: usize,
}

/// A collision group after column assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedGroup<P> {
    /// Total columns the group occupies.
    pub column_count: usize,
    /// Events in group order, each with its column index.
    pub events: Vec<PackedEvent<P>>,
}

/// Assign each event in a group to the first column it fits in.
///
/// A column fits when its last event ends at or before the new event's start,
/// so back-to-back events may share a column. Greedy first-fit over events in
/// start order uses exactly as many columns as the group's maximum overlap
/// depth (greedy interval coloring is optimal in start order).
pub fn pack_columns<P>(group: CollisionGroup<P>) -> PackedGroup<P> {
    // End minute of the last event placed in each column.
    let mut column_ends: Vec<i64> = Vec::new();
    let mut events = Vec::with_capacity(group.events.len());

    for event in group.events {
        let column = match column_ends
            .iter()
            .position(|&end| end <= event.start_minute)
        {
            Some(column) => {
                column_ends[column] = event.end_minute;
                column
            }
            None => {
                column_ends.push(event.end_minute);
                column_ends.len() - 1
            }
        };
        events.push(PackedEvent { event, column });
    }

    PackedGroup {
        column_count: column_ends.len(),
        events,
    }
}
