//! Discretized day views built on the point and range queries.
//!
//! The booking form offers start times in fixed increments (30 minutes in
//! production). These helpers produce the full option list for a date and
//! find the first bookable range of a requested duration, so each UI
//! entry point does not re-derive them from the raw queries.

use chrono::NaiveDate;
use serde::Serialize;

use crate::availability::{is_range_available, is_time_option_blocked};
use crate::block::{BlockedInterval, ClockTime, TimeRange};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// One start-time option in the booking dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayOption {
    pub time: ClockTime,
    pub blocked: bool,
}

/// All start-time options for `date` at `step_minutes` increments, from
/// midnight up to the last step that still starts inside the day.
///
/// Each option carries its blocked flag per [`is_time_option_blocked`].
/// A step of zero yields no options.
pub fn day_options(
    blocks: &[BlockedInterval],
    date: NaiveDate,
    professional_id: Option<i64>,
    step_minutes: u32,
) -> Vec<DayOption> {
    if step_minutes == 0 {
        return Vec::new();
    }
    (0..MINUTES_PER_DAY)
        .step_by(step_minutes as usize)
        .filter_map(ClockTime::from_minutes)
        .map(|time| DayOption {
            time,
            blocked: is_time_option_blocked(blocks, date, time, professional_id),
        })
        .collect()
}

/// First range `[from, from + duration)` at `step_minutes` increments
/// that fits inside the day and is fully available, if any.
///
/// Ranges that would run past the last representable minute of the day
/// are not considered.
pub fn first_available_range(
    blocks: &[BlockedInterval],
    date: NaiveDate,
    professional_id: Option<i64>,
    duration_minutes: u32,
    step_minutes: u32,
) -> Option<TimeRange> {
    if step_minutes == 0 || duration_minutes == 0 {
        return None;
    }
    (0..MINUTES_PER_DAY)
        .step_by(step_minutes as usize)
        .find_map(|start| {
            let from = ClockTime::from_minutes(start)?;
            let to = ClockTime::from_minutes(start + duration_minutes)?;
            is_range_available(blocks, date, from, to, professional_id)
                .then_some(TimeRange { from, to })
        })
}
