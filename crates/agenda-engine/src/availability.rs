//! Date, range, and single-point availability queries.
//!
//! Filters blocks to the given date and professional, then compares clock
//! times as minutes since midnight. Candidate ranges are half-open
//! `[from, to)`: a range ending exactly where a block starts does not
//! conflict, and a range starting exactly where a block ends does not
//! conflict either. A block whose end is the `23:59:59` sentinel extends
//! to midnight instead.

use chrono::NaiveDate;

use crate::block::{BlockedInterval, ClockTime, TimeRange};

/// Blocks that apply to the given date and professional.
///
/// `professional_id` of `None` matches nothing: before a professional is
/// selected there is no agenda to consult, and every query must report
/// available.
fn matching<'a>(
    blocks: &'a [BlockedInterval],
    date: NaiveDate,
    professional_id: Option<i64>,
) -> impl Iterator<Item = &'a BlockedInterval> {
    blocks.iter().filter(move |b| {
        professional_id.is_some_and(|id| b.professional_id == id) && b.date == date
    })
}

/// Whether `date` is fully closed for the professional.
///
/// True iff at least one block on that date ends at the end-of-day
/// sentinel — regardless of where that block starts. Used to disable
/// calendar days in the date picker.
pub fn is_date_fully_blocked(
    blocks: &[BlockedInterval],
    date: NaiveDate,
    professional_id: Option<i64>,
) -> bool {
    matching(blocks, date, professional_id).any(|b| b.closes_whole_day())
}

/// Whether the candidate range `[from, to)` avoids every block on `date`.
///
/// A sentinel block conflicts with any candidate starting at or after the
/// block's start; the candidate's own end is irrelevant because the block
/// runs to midnight. An ordinary block `[bf, bt)` conflicts when
/// `from < bt && to > bf`. Blocks missing either time are skipped.
pub fn is_range_available(
    blocks: &[BlockedInterval],
    date: NaiveDate,
    from: ClockTime,
    to: ClockTime,
    professional_id: Option<i64>,
) -> bool {
    !matching(blocks, date, professional_id).any(|b| {
        let (Some(block_from), Some(block_to)) = (b.from, b.to) else {
            return false;
        };
        if block_to.is_end_of_day() {
            from.minutes() >= block_from.minutes()
        } else {
            from.minutes() < block_to.minutes() && to.minutes() > block_from.minutes()
        }
    })
}

/// The `{from, to}` pairs blocked on `date`, in record order.
///
/// Purely informational: sentinel-ended ranges are returned literally and
/// callers render them as "blocked from X until end of day."
pub fn list_blocked_ranges(
    blocks: &[BlockedInterval],
    date: NaiveDate,
    professional_id: Option<i64>,
) -> Vec<TimeRange> {
    matching(blocks, date, professional_id)
        .filter_map(|b| match (b.from, b.to) {
            (Some(from), Some(to)) => Some(TimeRange { from, to }),
            _ => None,
        })
        .collect()
}

/// Whether a single dropdown option at `time` falls inside any block.
///
/// Sentinel blocks swallow everything from their start onward. Ordinary
/// blocks use half-open containment, so an option exactly at a block's
/// end is selectable.
pub fn is_time_option_blocked(
    blocks: &[BlockedInterval],
    date: NaiveDate,
    time: ClockTime,
    professional_id: Option<i64>,
) -> bool {
    matching(blocks, date, professional_id).any(|b| {
        let (Some(block_from), Some(block_to)) = (b.from, b.to) else {
            return false;
        };
        if block_to.is_end_of_day() {
            time.minutes() >= block_from.minutes()
        } else {
            block_from.minutes() <= time.minutes() && time.minutes() < block_to.minutes()
        }
    })
}

/// Sorted, deduplicated dates the date picker must disable for the
/// professional.
pub fn fully_blocked_dates(
    blocks: &[BlockedInterval],
    professional_id: Option<i64>,
) -> Vec<NaiveDate> {
    let Some(id) = professional_id else {
        return Vec::new();
    };
    let mut dates: Vec<NaiveDate> = blocks
        .iter()
        .filter(|b| b.professional_id == id && b.closes_whole_day())
        .map(|b| b.date)
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}
