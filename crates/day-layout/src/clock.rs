//! Clock labels for a day view.
//!
//! Event times are minutes since the start of the displayed day. [`DayClock`]
//! turns them back into 12-hour wall-clock labels, and builds the hour/half-hour
//! labels of the time sidebar.

use std::fmt;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// First and last hour shown in the sidebar by default (9 AM to 9 PM).
pub const DEFAULT_SIDEBAR_HOURS: (u32, u32) = (9, 21);

/// Maps minute offsets onto the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClock {
    pub day_start: NaiveTime,
}

impl Default for DayClock {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        }
    }
}

/// One sidebar row: the time in bold plus an optional AM/PM suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLabel {
    pub time: String,
    pub suffix: Option<String>,
}

impl fmt::Display for SidebarLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suffix {
            Some(suffix) => write!(f, "{} {}", self.time, suffix),
            None => f.write_str(&self.time),
        }
    }
}

impl DayClock {
    pub fn new(day_start: NaiveTime) -> Self {
        Self { day_start }
    }

    /// Wall-clock time `minutes` after the day start.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidLabelTime` for negative offsets and offsets of a
    /// full day or more.
    pub fn time_at(&self, minutes: i64) -> Result<NaiveTime> {
        if !(0..MINUTES_PER_DAY).contains(&minutes) {
            return Err(LayoutError::InvalidLabelTime(minutes));
        }
        let (time, _) = self
            .day_start
            .overflowing_add_signed(Duration::minutes(minutes));
        Ok(time)
    }

    /// Label such as `"9:05 AM"` or `"12:30 PM"`.
    pub fn label(&self, minutes: i64) -> Result<String> {
        Ok(self.time_at(minutes)?.format("%-I:%M %p").to_string())
    }

    /// Sidebar rows from `first_hour` to `last_hour` (wall-clock hours, inclusive).
    ///
    /// Each hour gets a `"h:00"` row with its AM/PM suffix, followed by a `"h:30"`
    /// row without one, except after the last hour.
    pub fn sidebar(first_hour: u32, last_hour: u32) -> Result<Vec<SidebarLabel>> {
        let mut labels = Vec::new();

        for hour in first_hour..=last_hour {
            let on_hour = NaiveTime::from_hms_opt(hour, 0, 0)
                .ok_or(LayoutError::InvalidLabelTime(i64::from(hour) * 60))?;
            labels.push(SidebarLabel {
                time: on_hour.format("%-I:%M").to_string(),
                suffix: Some(on_hour.format("%p").to_string()),
            });

            if hour < last_hour {
                let half = on_hour.with_minute(30).unwrap_or(on_hour);
                labels.push(SidebarLabel {
                    time: half.format("%-I:%M").to_string(),
                    suffix: None,
                });
            }
        }

        Ok(labels)
    }
}
