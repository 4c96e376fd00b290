//! WASM bindings for day-layout.
//!
//! Exposes the column layout, supplier-map formatting, render boxes, and clock
//! labels to JavaScript via `wasm-bindgen`. All complex types are passed as JSON
//! strings, so a browser renderer only needs `JSON.parse` on the results.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p day-layout-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/day-layout-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/day_layout_wasm.wasm
//! ```

use day_layout::{BoxInsets, ColumnPolicy, DayClock, DayLayout, LayoutOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON-string implementations, kept free of `JsValue` so they run natively
// ---------------------------------------------------------------------------

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn lay_out_day_json(
    events_json: &str,
    max_width: i64,
    policy: Option<&str>,
) -> Result<String, String> {
    let events = day_layout::parse_events(events_json).map_err(|e| e.to_string())?;
    let policy = match policy {
        Some(p) => p.parse::<ColumnPolicy>()?,
        None => ColumnPolicy::default(),
    };
    let options = LayoutOptions::new(max_width).with_policy(policy);
    let layout = day_layout::lay_out_day_with(&events, &options).map_err(|e| e.to_string())?;
    to_json(&layout)
}

fn format_events_json(event_map_json: &str) -> Result<String, String> {
    let events = day_layout::parse_event_map(event_map_json).map_err(|e| e.to_string())?;
    to_json(&events)
}

fn render_boxes_json(layout_json: &str, insets_json: Option<&str>) -> Result<String, String> {
    let layout: DayLayout =
        serde_json::from_str(layout_json).map_err(|e| format!("Invalid layout JSON: {}", e))?;
    let insets: BoxInsets = match insets_json {
        Some(json) => {
            serde_json::from_str(json).map_err(|e| format!("Invalid insets JSON: {}", e))?
        }
        None => BoxInsets::default(),
    };
    to_json(&insets.place_all(&layout.events))
}

fn usable_width_of(container_width: i64) -> Result<i64, String> {
    BoxInsets::default()
        .usable_width(container_width)
        .map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Lay out a day of events.
///
/// `events_json` is either an event map (`{"<id>": {"start", "end"}}`) or a list
/// of `{id, start, end}` objects. `policy` is `"group"` (default) or `"expand"`.
/// Returns a JSON string `{events, skipped, groups}`.
#[wasm_bindgen(js_name = "layOutDay")]
pub fn lay_out_day(
    events_json: &str,
    max_width: i64,
    policy: Option<String>,
) -> Result<String, JsValue> {
    lay_out_day_json(events_json, max_width, policy.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Convert an event map into a start-sorted JSON array of `{id, start, end}`.
#[wasm_bindgen(js_name = "formatCalendarEvents")]
pub fn format_calendar_events(event_map_json: &str) -> Result<String, JsValue> {
    format_events_json(event_map_json).map_err(|e| JsValue::from_str(&e))
}

/// Apply border/padding insets to the events of a `layOutDay` result.
///
/// `insets_json` optionally overrides the default insets, e.g. `{"horizontal": 10}`.
#[wasm_bindgen(js_name = "renderBoxes")]
pub fn render_boxes(layout_json: &str, insets_json: Option<String>) -> Result<String, JsValue> {
    render_boxes_json(layout_json, insets_json.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Width available to events inside a day column of `container_width` pixels.
#[wasm_bindgen(js_name = "usableWidth")]
pub fn usable_width(container_width: i64) -> Result<i64, JsValue> {
    usable_width_of(container_width).map_err(|e| JsValue::from_str(&e))
}

/// Wall-clock label (`"1:05 PM"`) for minutes since 9 AM.
#[wasm_bindgen(js_name = "convertMinutes")]
pub fn convert_minutes(minutes: i64) -> Result<String, JsValue> {
    DayClock::default()
        .label(minutes)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
