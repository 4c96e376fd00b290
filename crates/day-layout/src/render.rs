//! Renderer-side box geometry.
//!
//! The layout engine works in logical pixels and knows nothing about borders or
//! padding. A renderer that draws events as bordered, padded boxes subtracts its
//! insets here: from the container to get the engine's `max_width`, and from
//! each positioned event to get the box it actually draws.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::event::{EventId, PositionedEvent};

/// Pixels a renderer reserves for borders and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxInsets {
    /// Taken off the container width before layout (1px border, 20px padding).
    pub container: i64,
    /// Added to every box's left edge (container padding).
    pub offset_left: i64,
    /// Taken off every box's height (2px borders, 20px padding).
    pub vertical: i64,
    /// Taken off every box's width (5px left border, 1px right border, 20px padding).
    pub horizontal: i64,
}

impl Default for BoxInsets {
    fn default() -> Self {
        Self {
            container: 21,
            offset_left: 10,
            vertical: 22,
            horizontal: 26,
        }
    }
}

/// A box ready to be drawn, in pixels relative to the day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderBox {
    pub id: EventId,
    pub top: i64,
    pub left: i64,
    pub width: i64,
    pub height: i64,
}

impl BoxInsets {
    /// Width available to the layout engine inside a container of `container_width`.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidWidth` if nothing is left after the insets.
    pub fn usable_width(&self, container_width: i64) -> Result<i64> {
        let usable = container_width - self.container;
        if usable <= 0 {
            return Err(LayoutError::InvalidWidth(usable));
        }
        Ok(usable)
    }

    /// The drawn box for a positioned event. Height and width never go below zero.
    pub fn place(&self, event: &PositionedEvent) -> RenderBox {
        RenderBox {
            id: event.id.clone(),
            top: event.top,
            left: event.left + self.offset_left,
            width: (event.width - self.horizontal).max(0),
            height: (event.height - self.vertical).max(0),
        }
    }

    pub fn place_all(&self, events: &[PositionedEvent]) -> Vec<RenderBox> {
        events.iter().map(|e| self.place(e)).collect()
    }
}
