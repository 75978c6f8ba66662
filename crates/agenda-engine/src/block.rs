//! Blocked-interval records and the `HH:MM:SS` clock times they carry.
//!
//! Upstream agenda records arrive with Spanish field names and loosely
//! validated time strings. This module parses them into typed values once,
//! so the query layer never compares strings.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AgendaError, Result};

/// A time of day in `HH:MM:SS` form.
///
/// All comparisons in the query layer use whole minutes since midnight
/// (see [`ClockTime::minutes`]); the seconds field is kept only so the
/// end-of-day sentinel `23:59:59` stays distinguishable from a plain
/// `23:59:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    /// The sentinel end time upstream uses to mean "blocked from `from`
    /// through the end of the day, and the whole date counts as closed."
    pub const END_OF_DAY: ClockTime = ClockTime {
        hour: 23,
        minute: 59,
        second: 59,
    };

    /// Builds a time on the minute. Returns `None` when out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(ClockTime {
            hour,
            minute,
            second: 0,
        })
    }

    /// Minutes since midnight. Seconds are deliberately ignored: upstream
    /// data carries `:00` everywhere except the sentinel, and the booking
    /// UI only offers whole-minute options.
    pub fn minutes(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Builds a time from minutes since midnight. Returns `None` at or
    /// past 24:00.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes >= 24 * 60 {
            return None;
        }
        Some(ClockTime {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
            second: 0,
        })
    }

    /// Whether this is the end-of-day sentinel.
    pub fn is_end_of_day(&self) -> bool {
        *self == Self::END_OF_DAY
    }
}

impl FromStr for ClockTime {
    type Err = AgendaError;

    /// Parses `HH:MM:SS` (the wire form) or `HH:MM` (CLI shorthand).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AgendaError::InvalidTime(s.to_string());

        let mut parts = s.split(':');
        let hour: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minute: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let second: u8 = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 0,
        };
        if parts.next().is_some() || hour > 23 || minute > 59 || second > 59 {
            return Err(invalid());
        }
        Ok(ClockTime {
            hour,
            minute,
            second,
        })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One blocked window on a professional's agenda.
///
/// `from`/`to` may be absent; such a block contributes nothing to any
/// query (a data-quality fallback, not a business rule).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedInterval {
    pub professional_id: i64,
    pub date: NaiveDate,
    pub from: Option<ClockTime>,
    pub to: Option<ClockTime>,
}

impl BlockedInterval {
    /// True when this block ends at the end-of-day sentinel, which also
    /// marks the whole date as closed for date-picker purposes —
    /// regardless of where the block starts. A block missing its start
    /// time is incomplete and closes nothing.
    pub fn closes_whole_day(&self) -> bool {
        self.from.is_some() && self.to.is_some_and(|t| t.is_end_of_day())
    }
}

/// A `[from, to)` pair as shown to users ("blocked 10:00 to 12:00").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: ClockTime,
    pub to: ClockTime,
}

/// A blocked-agenda record as returned by the REST backend.
///
/// Field names follow the upstream contract. Times may be missing or
/// malformed; conversion degrades them to `None` rather than rejecting
/// the record.
#[derive(Debug, Clone, Deserialize)]
pub struct AgendaBlockRecord {
    #[serde(rename = "profesional_id")]
    pub professional_id: i64,
    #[serde(rename = "agenda_fecha")]
    pub date: String,
    #[serde(rename = "agenda_hora_desde", default)]
    pub from: Option<String>,
    #[serde(rename = "agenda_hora_hasta", default)]
    pub to: Option<String>,
}

impl AgendaBlockRecord {
    /// Converts the wire record into a typed interval.
    ///
    /// The date may arrive as a bare `YYYY-MM-DD` or a full ISO datetime;
    /// only the date portion is kept. Returns `None` when the date cannot
    /// be parsed — the record is dropped entirely, since a block without a
    /// date can never match a query.
    pub fn into_blocked_interval(self) -> Option<BlockedInterval> {
        let date = parse_record_date(&self.date)?;
        Some(BlockedInterval {
            professional_id: self.professional_id,
            date,
            from: self.from.as_deref().and_then(|s| s.parse().ok()),
            to: self.to.as_deref().and_then(|s| s.parse().ok()),
        })
    }
}

/// Decodes a JSON array of wire records into typed intervals, dropping
/// records without a usable date.
///
/// Fails only when the payload itself is not a JSON array of records.
pub fn decode_blocked_intervals(json: &str) -> Result<Vec<BlockedInterval>> {
    let records: Vec<AgendaBlockRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .filter_map(AgendaBlockRecord::into_blocked_interval)
        .collect())
}

fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    // "2026-08-14T00:00:00" and "2026-08-14" both carry the date in the
    // first ten characters.
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
