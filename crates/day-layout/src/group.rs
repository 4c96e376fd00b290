//! Overlap groups and column assignment.
//!
//! Both passes expect events already sorted by start time. Grouping sweeps a
//! running high-water mark of end times, the same way busy periods are merged;
//! columns are then assigned per group by greedy interval-graph coloring.

use std::ops::Range;

use crate::event::Event;

/// Split start-sorted events into maximal overlap groups.
///
/// A new group starts when an event starts at or after the largest end time seen
/// in the current group, so adjacent events land in separate groups. Returns index
/// ranges into `events`, in order, covering every event exactly once.
pub fn overlap_groups(events: &[Event]) -> Vec<Range<usize>> {
    let mut groups: Vec<Range<usize>> = Vec::new();
    let mut high_water = i64::MIN;

    for (index, event) in events.iter().enumerate() {
        if let Some(current) = groups.last_mut() {
            if event.start < high_water {
                current.end = index + 1;
                high_water = high_water.max(event.end);
                continue;
            }
        }
        groups.push(index..index + 1);
        high_water = event.end;
    }

    groups
}

/// Column indices for the events of one overlap group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment {
    /// Column index (`curr_depth`) of each event, parallel to the group slice.
    pub depths: Vec<usize>,
    /// Number of columns the group needed.
    pub column_count: usize,
}

impl ColumnAssignment {
    /// Number of adjacent columns, starting at the event's own, that hold no event
    /// overlapping it in time.
    ///
    /// Always at least 1. Used by [`ColumnPolicy::Expand`](crate::ColumnPolicy::Expand).
    pub fn free_span(&self, group: &[Event], index: usize) -> usize {
        let event = &group[index];
        let depth = self.depths[index];

        let blocked_at = group
            .iter()
            .zip(&self.depths)
            .filter(|&(other, &other_depth)| other_depth > depth && other.overlaps(event))
            .map(|(_, &other_depth)| other_depth)
            .min()
            .unwrap_or(self.column_count);

        blocked_at - depth
    }
}

/// Assign each event of a start-sorted group to the lowest column that is free
/// when it starts, opening a new column when none is.
///
/// A column is free once its last event has ended (`column_end <= event.start`).
pub fn assign_columns(group: &[Event]) -> ColumnAssignment {
    let mut column_ends: Vec<i64> = Vec::new();
    let mut depths = Vec::with_capacity(group.len());

    for event in group {
        let depth = match column_ends.iter().position(|&end| end <= event.start) {
            Some(column) => {
                column_ends[column] = event.end;
                column
            }
            None => {
                column_ends.push(event.end);
                column_ends.len() - 1
            }
        };
        depths.push(depth);
    }

    ColumnAssignment {
        depths,
        column_count: column_ends.len(),
    }
}
