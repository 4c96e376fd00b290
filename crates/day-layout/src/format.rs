//! Convert supplier data into a start-sorted event sequence.
//!
//! Suppliers deliver either a JSON object mapping ids to `{start, end}` or a
//! JSON array of `{id, start, end}` records. Both are turned into a `Vec<Event>`
//! stably sorted by start time. Nothing is validated here beyond the shape of the
//! document; events with `start >= end` are reported later by the layout engine.

use serde::de;
use serde_json::{Map, Value};

use crate::error::{LayoutError, Result};
use crate::event::{Event, EventId, TimeRange};

/// Turn `(id, range)` pairs into events sorted by start time.
///
/// Events with the same start keep the order in which the supplier produced them.
pub fn format_events<I, K>(entries: I) -> Vec<Event>
where
    I: IntoIterator<Item = (K, TimeRange)>,
    K: Into<EventId>,
{
    let mut events: Vec<Event> = entries
        .into_iter()
        .map(|(id, range)| Event::new(id, range.start, range.end))
        .collect();

    events.sort_by_key(|e| e.start);
    events
}

/// Parse a JSON object of `{"<id>": {"start": n, "end": n}}` entries.
///
/// Entries are read in document order and ids are kept as strings.
///
/// # Errors
/// Returns `LayoutError::Json` if the document is not a JSON object, and
/// `LayoutError::InvalidEntry` if an entry lacks integer `start`/`end` fields.
pub fn parse_event_map(json: &str) -> Result<Vec<Event>> {
    let map: Map<String, Value> = serde_json::from_str(json)?;
    event_map_from_json(map)
}

/// Parse a JSON array of `{"id": .., "start": n, "end": n}` records, sorted by start.
///
/// # Errors
/// Returns `LayoutError::Json` if the document is not an array of event records.
pub fn parse_event_list(json: &str) -> Result<Vec<Event>> {
    let mut events: Vec<Event> = serde_json::from_str(json)?;
    events.sort_by_key(|e| e.start);
    Ok(events)
}

/// Parse either supplier shape: a JSON object is read as an event map, an array
/// as an event list.
///
/// # Errors
/// Returns `LayoutError::Json` for malformed JSON or any other top-level value.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => event_map_from_json(map),
        value @ Value::Array(_) => {
            let mut events: Vec<Event> = serde_json::from_value(value)?;
            events.sort_by_key(|e| e.start);
            Ok(events)
        }
        other => Err(LayoutError::Json(<serde_json::Error as de::Error>::custom(format!(
            "expected an event map or an event list, found {}",
            json_kind(&other)
        )))),
    }
}

fn event_map_from_json(map: Map<String, Value>) -> Result<Vec<Event>> {
    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        let range: TimeRange =
            serde_json::from_value(value).map_err(|e| LayoutError::InvalidEntry {
                id: EventId::Str(key.clone()),
                message: e.to_string(),
            })?;
        entries.push((key, range));
    }
    Ok(format_events(entries))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
