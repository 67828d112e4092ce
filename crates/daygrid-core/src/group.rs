//! Collision grouping — partitions time-sorted events into maximal clusters
//! of transitively overlapping events.
//!
//! Sweep-line rule: after sorting by `(start asc, end desc)`, an event starts
//! a new group iff its start is at or past the running maximum end minute of
//! the current group. Back-to-back events (one ends exactly when the next
//! starts) land in separate groups and render full width.

use crate::normalize::NormalizedEvent;

/// A maximal cluster of transitively overlapping events.
///
/// Members are sorted by `(start_minute asc, end_minute desc)` — longer
/// events first on ties — which is exactly the order the column packer
/// consumes. Geometry for one group never depends on events outside it.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionGroup<P> {
    pub events: Vec<NormalizedEvent<P>>,
}

/// Partition normalized events into collision groups, ordered by first start.
///
/// Single pass over the sorted events tracking the running maximum end
/// minute. An event whose start reaches the running maximum closes the
/// current group; otherwise it joins and may extend the running maximum, so
/// an event bridged by an intervening longer event still joins the cluster
/// even when it does not touch its immediate predecessor.
pub fn group_collisions<P>(mut events: Vec<NormalizedEvent<P>>) -> Vec<CollisionGroup<P>> {
    events.sort_by(|a, b| {
        a.start_minute
            .cmp(&b.start_minute)
            .then(b.end_minute.cmp(&a.end_minute))
    });

    let mut groups: Vec<CollisionGroup<P>> = Vec::new();
    let mut current: Vec<NormalizedEvent<P>> = Vec::new();
    let mut running_max_end = i64::MIN;

    for event in events {
        if !current.is_empty() && event.start_minute >= running_max_end {
            groups.push(CollisionGroup {
                events: std::mem::take(&mut current),
            });
            running_max_end = i64::MIN;
        }
        running_max_end = running_max_end.max(event.end_minute);
        current.push(event);
    }

    if !current.is_empty() {
        groups.push(CollisionGroup { events: current });
    }

    groups
}
