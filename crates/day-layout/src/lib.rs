//! # day-layout
//!
//! Deterministic column layout for single-day calendar views.
//!
//! Given a day's events as minute offsets, the engine assigns every event a
//! horizontal position (`left`, `width`) so that events overlapping in time sit
//! side by side and never cover each other, while events that do not overlap use
//! the full width.
//!
//! ```rust
//! use day_layout::{lay_out_day, Event};
//!
//! let events = vec![Event::new(1, 0, 60), Event::new(2, 30, 90)];
//! let layout = lay_out_day(&events, 600).unwrap();
//!
//! assert_eq!(layout.events[0].left, 0);
//! assert_eq!(layout.events[0].width, 300);
//! assert_eq!(layout.events[1].left, 300);
//! ```
//!
//! ## Modules
//!
//! - [`layout`]: The layout engine (`lay_out_day`, `ColumnPolicy`)
//! - [`group`]: Overlap groups and greedy column assignment
//! - [`format`]: Supplier data → start-sorted events
//! - [`render`]: Border/padding insets for box renderers
//! - [`clock`]: Minute offsets → wall-clock labels
//! - [`generate`]: Random sample days
//! - [`event`]: Input, output, and skip records
//! - [`error`]: Error types

pub mod clock;
pub mod error;
pub mod event;
pub mod format;
pub mod generate;
pub mod group;
pub mod layout;
pub mod render;

pub use clock::{DayClock, SidebarLabel};
pub use error::LayoutError;
pub use event::{Event, EventId, PositionedEvent, SkipReason, SkippedEvent, TimeRange};
pub use format::{format_events, parse_event_list, parse_event_map, parse_events};
pub use generate::generate_events;
pub use layout::{lay_out_day, lay_out_day_with, ColumnPolicy, DayLayout, LayoutOptions};
pub use render::{BoxInsets, RenderBox};
