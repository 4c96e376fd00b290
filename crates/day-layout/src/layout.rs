//! The day layout engine.
//!
//! Turns a day's events into positioned events such that no two events that
//! overlap in time overlap horizontally:
//!
//! 1. Invalid events (`start >= end`, negative start) are dropped and reported.
//! 2. The rest are stably sorted by start time.
//! 3. Sorted events are split into overlap groups (see [`crate::group`]).
//! 4. Each group is colored into columns and every member gets
//!    `width = round(max_width / column_count)` and `left = depth * width`.
//!
//! The width of a group's columns depends on the group's total column count, not
//! on how many events are concurrent at a given minute. [`ColumnPolicy::Expand`]
//! lets events widen into neighbouring columns that stay free for their duration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{LayoutError, Result};
use crate::event::{validate, Event, EventId, PositionedEvent, SkippedEvent};
use crate::group::{assign_columns, overlap_groups};

/// Width used when no explicit width is configured: a 620px day column minus
/// its border and padding.
pub const DEFAULT_MAX_WIDTH: i64 = 600;

/// How wide an event is within its overlap group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// Every event is exactly one column wide.
    #[default]
    Group,
    /// Events extend right across adjacent columns that hold no event overlapping them.
    Expand,
}

impl FromStr for ColumnPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "group" => Ok(ColumnPolicy::Group),
            "expand" => Ok(ColumnPolicy::Expand),
            other => Err(format!(
                "Unknown column policy: '{}'. Available policies: group, expand",
                other
            )),
        }
    }
}

/// Options for [`lay_out_day_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Total horizontal space of the day column, in pixels.
    pub max_width: i64,
    pub policy: ColumnPolicy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            policy: ColumnPolicy::default(),
        }
    }
}

impl LayoutOptions {
    pub fn new(max_width: i64) -> Self {
        Self {
            max_width,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: ColumnPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Result of a layout call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLayout {
    /// Positioned events, sorted by start time (ties in input order).
    pub events: Vec<PositionedEvent>,
    /// Events left out of the layout, in input order.
    pub skipped: Vec<SkippedEvent>,
    /// Number of overlap groups the events fell into.
    pub groups: usize,
}

impl DayLayout {
    /// True when there was nothing to lay out.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &EventId) -> Option<&PositionedEvent> {
        self.events.iter().find(|e| &e.id == id)
    }
}

/// Lay out a single day's events in `max_width` pixels with the default
/// [`ColumnPolicy::Group`].
///
/// Every positive `max_width` is accepted. A group with more columns than
/// `max_width` can fit gives some (or all) of its events a width of 0.
///
/// # Errors
/// Returns `LayoutError::InvalidWidth` if `max_width` is not positive. Invalid
/// events are never an error; they are reported in [`DayLayout::skipped`].
pub fn lay_out_day(events: &[Event], max_width: i64) -> Result<DayLayout> {
    lay_out_day_with(events, &LayoutOptions::new(max_width))
}

/// Lay out a single day's events with explicit [`LayoutOptions`].
///
/// # Errors
/// Returns `LayoutError::InvalidWidth` if `options.max_width` is not positive.
pub fn lay_out_day_with(events: &[Event], options: &LayoutOptions) -> Result<DayLayout> {
    let max_width = options.max_width;
    if max_width <= 0 {
        return Err(LayoutError::InvalidWidth(max_width));
    }

    let mut valid: Vec<Event> = Vec::with_capacity(events.len());
    let mut skipped: Vec<SkippedEvent> = Vec::new();

    for event in events {
        match validate(event) {
            Some(reason) => {
                warn!(id = %event.id, %reason, "skipping invalid event");
                skipped.push(SkippedEvent {
                    id: event.id.clone(),
                    reason,
                });
            }
            None => valid.push(event.clone()),
        }
    }

    if valid.is_empty() {
        info!(skipped = skipped.len(), "no events to lay out");
        return Ok(DayLayout {
            skipped,
            ..DayLayout::default()
        });
    }

    // `sort_by_key` is stable, so equal starts keep their input order.
    valid.sort_by_key(|e| e.start);

    let groups = overlap_groups(&valid);
    let mut positioned = Vec::with_capacity(valid.len());

    for range in &groups {
        let group = &valid[range.clone()];
        let columns = assign_columns(group);
        let column_width = column_width(max_width, columns.column_count);

        debug!(
            first = %group[0].id,
            events = group.len(),
            columns = columns.column_count,
            column_width,
            "laid out overlap group"
        );

        for (index, (event, &depth)) in group.iter().zip(&columns.depths).enumerate() {
            let span = match options.policy {
                ColumnPolicy::Group => 1,
                ColumnPolicy::Expand => columns.free_span(group, index),
            };
            positioned.push(place(event, depth, span, column_width, max_width));
        }
    }

    Ok(DayLayout {
        events: positioned,
        skipped,
        groups: groups.len(),
    })
}

/// `round(max_width / columns)`, rounding halves up.
///
/// Works from quotient and remainder so any positive `max_width` stays in range.
fn column_width(max_width: i64, columns: usize) -> i64 {
    let columns = columns as i64;
    let remainder = max_width % columns;
    max_width / columns + i64::from(remainder >= columns - remainder)
}

/// Geometry for one event. Left edge and width are clamped to `max_width`, which
/// rounding up the column width would otherwise overshoot.
///
/// When a group has more columns than `max_width` has pixels to round into, the
/// trailing columns are pushed to `left = max_width` with `width = 0`, and a
/// column width that rounds to 0 leaves every member of the group at width 0.
/// Such events get no visible area but their spans stay disjoint.
fn place(
    event: &Event,
    depth: usize,
    span: usize,
    column_width: i64,
    max_width: i64,
) -> PositionedEvent {
    let left = (depth as i64).saturating_mul(column_width).min(max_width);
    let width = (span as i64)
        .saturating_mul(column_width)
        .min(max_width - left);

    PositionedEvent {
        id: event.id.clone(),
        start: event.start,
        end: event.end,
        top: event.start,
        left,
        width,
        height: event.duration(),
    }
}
