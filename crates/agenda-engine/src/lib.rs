//! # agenda-engine
//!
//! Availability queries over blocked professional agendas for the reclamos
//! booking flow.
//!
//! The backend exports per-professional blocked intervals: a calendar date
//! plus an optional `[from, to)` time window, where an end time of exactly
//! `23:59:59` is the sentinel for "closed from `from` through the end of
//! the day, and the whole date counts as unavailable." This crate answers
//! the questions the booking UI asks: is a date fully closed, is a
//! candidate range free, which options in a time dropdown are selectable,
//! and which blocks exist on a date for display.
//!
//! Every query is a pure function that takes the block list as an
//! argument. The caller owns the list and passes the current one on each
//! call, so there is no captured state that can go stale between calls.
//!
//! ## Modules
//!
//! - [`block`] — typed blocked intervals and the upstream wire records
//! - [`availability`] — date / range / single-point availability queries
//! - [`slots`] — discretized day views (dropdown options, first free range)
//! - [`error`] — error types

pub mod availability;
pub mod block;
pub mod error;
pub mod slots;

pub use availability::{
    fully_blocked_dates, is_date_fully_blocked, is_range_available, is_time_option_blocked,
    list_blocked_ranges,
};
pub use block::{
    decode_blocked_intervals, AgendaBlockRecord, BlockedInterval, ClockTime, TimeRange,
};
pub use error::AgendaError;
pub use slots::{day_options, first_available_range, DayOption};
