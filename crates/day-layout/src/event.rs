//! Event records exchanged with suppliers and renderers.
//!
//! All times are integer minutes from a fixed day-start epoch. The engine never
//! assumes an upper bound on them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque event identifier supplied by the caller.
///
/// Serialized untagged, so both `1` and `"standup"` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Int(i64),
    Str(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Int(n) => write!(f, "{}", n),
            EventId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        EventId::Int(n)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId::Str(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId::Str(s)
    }
}

/// A `[start, end)` span of minutes, as delivered by an event supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// An input event to be laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub start: i64,
    pub end: i64,
}

impl Event {
    pub fn new(id: impl Into<EventId>, start: i64, end: i64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Two events overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Adjacent events where one ends exactly when the other starts do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An event with its geometry assigned.
///
/// `top` and `height` are in minutes, `left` and `width` in the same unit as the
/// `max_width` the layout was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub id: EventId,
    pub start: i64,
    pub end: i64,
    pub top: i64,
    pub left: i64,
    pub width: i64,
    pub height: i64,
}

impl PositionedEvent {
    /// Exclusive right edge of the event's horizontal span.
    pub fn right(&self) -> i64 {
        self.left + self.width
    }

    pub fn overlaps_in_time(&self, other: &PositionedEvent) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn overlaps_horizontally(&self, other: &PositionedEvent) -> bool {
        self.left < other.right() && other.left < self.right()
    }
}

/// Why an input event was left out of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// `start == end`.
    EmptyInterval { start: i64, end: i64 },
    /// `start > end`.
    Inverted { start: i64, end: i64 },
    NegativeStart { start: i64 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyInterval { start, end } => {
                write!(f, "empty interval ({}..{})", start, end)
            }
            SkipReason::Inverted { start, end } => {
                write!(f, "ends before it starts ({}..{})", start, end)
            }
            SkipReason::NegativeStart { start } => {
                write!(f, "negative start ({})", start)
            }
        }
    }
}

/// An event rejected by the layout engine, with the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEvent {
    pub id: EventId,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid event {}: {}", self.id, self.reason)
    }
}

/// Check an event against the data model, returning the reason it must be skipped.
pub fn validate(event: &Event) -> Option<SkipReason> {
    if event.start < 0 {
        return Some(SkipReason::NegativeStart { start: event.start });
    }
    if event.start == event.end {
        return Some(SkipReason::EmptyInterval {
            start: event.start,
            end: event.end,
        });
    }
    if event.start > event.end {
        return Some(SkipReason::Inverted {
            start: event.start,
            end: event.end,
        });
    }
    None
}
