//! Error types for day-layout operations.

use thiserror::Error;

use crate::event::EventId;

#[derive(Error, Debug)]
pub enum LayoutError {
    /// The horizontal space handed to the engine (or left after insets) is not positive.
    #[error("Invalid width: {0} (must be a positive number of pixels)")]
    InvalidWidth(i64),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry of an event map that is not a `{start, end}` pair of integers.
    #[error("Invalid event entry '{id}': {message}")]
    InvalidEntry { id: EventId, message: String },

    /// Minutes offset that falls outside the 24 hours following the day start.
    #[error("Cannot label {0} minutes: outside of a single day")]
    InvalidLabelTime(i64),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
