//! Tests for wall-clock labels.

use chrono::NaiveTime;
use day_layout::{DayClock, LayoutError};

#[test]
fn labels_from_nine_am() {
    let clock = DayClock::default();

    assert_eq!(clock.label(0).unwrap(), "9:00 AM");
    assert_eq!(clock.label(5).unwrap(), "9:05 AM");
    assert_eq!(clock.label(179).unwrap(), "11:59 AM");
    assert_eq!(clock.label(180).unwrap(), "12:00 PM");
    assert_eq!(clock.label(245).unwrap(), "1:05 PM");
    assert_eq!(clock.label(720).unwrap(), "9:00 PM");
}

#[test]
fn labels_wrap_past_midnight() {
    let clock = DayClock::default();

    assert_eq!(clock.label(900).unwrap(), "12:00 AM");
    assert_eq!(clock.label(1439).unwrap(), "8:59 AM");
}

#[test]
fn labels_outside_a_day_are_errors() {
    let clock = DayClock::default();

    assert!(matches!(
        clock.label(-1),
        Err(LayoutError::InvalidLabelTime(-1))
    ));
    assert!(clock.label(1440).is_err());
}

#[test]
fn custom_day_start() {
    let clock = DayClock::new(NaiveTime::from_hms_opt(7, 30, 0).unwrap());

    assert_eq!(clock.label(0).unwrap(), "7:30 AM");
    assert_eq!(clock.label(90).unwrap(), "9:00 AM");
}

#[test]
fn default_sidebar_runs_nine_to_nine() {
    let labels = DayClock::sidebar(9, 21).unwrap();

    // 13 hours plus 12 half hours.
    assert_eq!(labels.len(), 25);
    assert_eq!(labels[0].time, "9:00");
    assert_eq!(labels[0].suffix.as_deref(), Some("AM"));
    assert_eq!(labels[1].time, "9:30");
    assert_eq!(labels[1].suffix, None);
    assert_eq!(labels[6].to_string(), "12:00 PM");
    assert_eq!(labels[24].to_string(), "9:00 PM");
}

#[test]
fn sidebar_single_hour_has_no_half_hour() {
    let labels = DayClock::sidebar(12, 12).unwrap();

    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].to_string(), "12:00 PM");
}

#[test]
fn sidebar_rejects_invalid_hours() {
    assert!(DayClock::sidebar(20, 24).is_err());
}

#[test]
fn empty_sidebar_range() {
    assert!(DayClock::sidebar(10, 9).unwrap().is_empty());
}
