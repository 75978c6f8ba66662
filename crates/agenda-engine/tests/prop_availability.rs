//! Property-based tests for the availability queries using proptest.
//!
//! These verify invariants that should hold for *any* block list, not just
//! the hand-picked examples in `availability_tests.rs`.

use chrono::NaiveDate;
use proptest::prelude::*;

use agenda_engine::availability::{
    fully_blocked_dates, is_date_fully_blocked, is_range_available, is_time_option_blocked,
    list_blocked_ranges,
};
use agenda_engine::block::{BlockedInterval, ClockTime};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2025i32..=2027, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_time() -> impl Strategy<Value = ClockTime> {
    (0u32..24 * 60).prop_map(|m| ClockTime::from_minutes(m).unwrap())
}

/// An end time: an ordinary minute or the end-of-day sentinel.
fn arb_end_time() -> impl Strategy<Value = ClockTime> {
    prop_oneof![
        arb_time(),
        Just(ClockTime::END_OF_DAY),
    ]
}

/// A block with both times present.
fn arb_complete_block() -> impl Strategy<Value = BlockedInterval> {
    (1i64..=5, arb_date(), arb_time(), arb_end_time()).prop_map(|(professional_id, date, from, to)| {
        BlockedInterval {
            professional_id,
            date,
            from: Some(from),
            to: Some(to),
        }
    })
}

/// A block missing at least one time field.
fn arb_incomplete_block() -> impl Strategy<Value = BlockedInterval> {
    (
        1i64..=5,
        arb_date(),
        prop::option::of(arb_time()),
        prop::option::of(arb_end_time()),
    )
        .prop_filter("at least one side must be missing", |(_, _, from, to)| {
            from.is_none() || to.is_none()
        })
        .prop_map(|(professional_id, date, from, to)| BlockedInterval {
            professional_id,
            date,
            from,
            to,
        })
}

fn arb_blocks() -> impl Strategy<Value = Vec<BlockedInterval>> {
    prop::collection::vec(arb_complete_block(), 0..12)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Pure functions: the same inputs always produce the same outputs.
    #[test]
    fn queries_are_idempotent(
        blocks in arb_blocks(),
        date in arb_date(),
        time in arb_time(),
        end in arb_time(),
    ) {
        let id = Some(3);
        prop_assert_eq!(
            is_date_fully_blocked(&blocks, date, id),
            is_date_fully_blocked(&blocks, date, id)
        );
        prop_assert_eq!(
            is_range_available(&blocks, date, time, end, id),
            is_range_available(&blocks, date, time, end, id)
        );
        prop_assert_eq!(
            is_time_option_blocked(&blocks, date, time, id),
            is_time_option_blocked(&blocks, date, time, id)
        );
        prop_assert_eq!(
            list_blocked_ranges(&blocks, date, id),
            list_blocked_ranges(&blocks, date, id)
        );
    }

    /// A professional with no blocks in the list is never affected by
    /// anyone else's agenda.
    #[test]
    fn other_professionals_blocks_never_apply(
        blocks in arb_blocks(),
        date in arb_date(),
        time in arb_time(),
    ) {
        // Strategy only emits ids 1..=5.
        let outsider = Some(99);
        prop_assert!(!is_date_fully_blocked(&blocks, date, outsider));
        prop_assert!(!is_time_option_blocked(&blocks, date, time, outsider));
        prop_assert!(list_blocked_ranges(&blocks, date, outsider).is_empty());
        prop_assert!(fully_blocked_dates(&blocks, outsider).is_empty());
    }

    /// With no professional selected, every query reports available.
    #[test]
    fn no_selection_short_circuits(
        blocks in arb_blocks(),
        date in arb_date(),
        from in arb_time(),
        to in arb_time(),
    ) {
        prop_assert!(!is_date_fully_blocked(&blocks, date, None));
        prop_assert!(is_range_available(&blocks, date, from, to, None));
        prop_assert!(!is_time_option_blocked(&blocks, date, from, None));
        prop_assert!(list_blocked_ranges(&blocks, date, None).is_empty());
    }

    /// Blocks missing a time field change no query result.
    #[test]
    fn incomplete_blocks_are_inert(
        complete in arb_blocks(),
        incomplete in prop::collection::vec(arb_incomplete_block(), 1..6),
        date in arb_date(),
        time in arb_time(),
        end in arb_time(),
    ) {
        let mut mixed = complete.clone();
        mixed.extend(incomplete);

        let id = Some(3);
        prop_assert_eq!(
            is_date_fully_blocked(&mixed, date, id),
            is_date_fully_blocked(&complete, date, id)
        );
        prop_assert_eq!(
            is_range_available(&mixed, date, time, end, id),
            is_range_available(&complete, date, time, end, id)
        );
        prop_assert_eq!(
            is_time_option_blocked(&mixed, date, time, id),
            is_time_option_blocked(&complete, date, time, id)
        );
        prop_assert_eq!(
            list_blocked_ranges(&mixed, date, id),
            list_blocked_ranges(&complete, date, id)
        );
        prop_assert_eq!(
            fully_blocked_dates(&mixed, id),
            fully_blocked_dates(&complete, id)
        );
    }

    /// Disabling a dropdown option at `t` is equivalent to asking whether
    /// the one-minute range `[t, t+1)` is unavailable.
    #[test]
    fn point_blocking_matches_unit_range(
        blocks in arb_blocks(),
        date in arb_date(),
        minute in 0u32..(24 * 60 - 1),
    ) {
        let t = ClockTime::from_minutes(minute).unwrap();
        let next = ClockTime::from_minutes(minute + 1).unwrap();
        let id = Some(3);
        prop_assert_eq!(
            is_time_option_blocked(&blocks, date, t, id),
            !is_range_available(&blocks, date, t, next, id)
        );
    }

    /// The picker's disabled-date list is sorted, unique, and agrees with
    /// the per-date query.
    #[test]
    fn fully_blocked_dates_agree_with_the_point_query(blocks in arb_blocks()) {
        let id = Some(3);
        let dates = fully_blocked_dates(&blocks, id);

        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        for d in &dates {
            prop_assert!(is_date_fully_blocked(&blocks, *d, id));
        }
        for b in blocks.iter().filter(|b| b.professional_id == 3) {
            if is_date_fully_blocked(&blocks, b.date, id) {
                prop_assert!(dates.contains(&b.date));
            }
        }
    }
}
