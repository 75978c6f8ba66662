//! WASM bindings for agenda-engine.
//!
//! Exposes the availability queries to the dashboard via `wasm-bindgen`,
//! so the date picker and time dropdowns run the same engine the rest of
//! the platform uses. Block lists cross the boundary as JSON strings in
//! the backend's wire format (`profesional_id`, `agenda_fecha`,
//! `agenda_hora_desde`, `agenda_hora_hasta`).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p agenda-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/agenda-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/agenda_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use agenda_engine::block::{BlockedInterval, ClockTime};
use agenda_engine::slots::DayOption;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct TimeRangeDto {
    from: String,
    to: String,
}

#[derive(Serialize)]
struct DayOptionDto {
    time: String,
    blocked: bool,
}

impl From<&DayOption> for DayOptionDto {
    fn from(o: &DayOption) -> Self {
        Self {
            time: o.time.to_string(),
            blocked: o.blocked,
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Parse an ISO `YYYY-MM-DD` date string.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

/// Parse an `HH:MM:SS` (or `HH:MM`) time-of-day string.
fn parse_time(s: &str) -> Result<ClockTime, JsValue> {
    s.parse()
        .map_err(|e: agenda_engine::AgendaError| JsValue::from_str(&e.to_string()))
}

/// Decode a JSON array of wire-format block records.
fn parse_blocks_json(json: &str) -> Result<Vec<BlockedInterval>, JsValue> {
    agenda_engine::decode_blocked_intervals(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid blocks JSON: {}", e)))
}

fn to_engine_id(professional_id: Option<i32>) -> Option<i64> {
    professional_id.map(i64::from)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Whether the whole calendar date is closed for the professional.
///
/// `blocks_json` is the backend's blocked-agenda payload. Pass
/// `professionalId` as `undefined` before a professional is selected —
/// the query then reports not blocked.
#[wasm_bindgen(js_name = "isDateFullyBlocked")]
pub fn is_date_fully_blocked(
    blocks_json: &str,
    date: &str,
    professional_id: Option<i32>,
) -> Result<bool, JsValue> {
    let blocks = parse_blocks_json(blocks_json)?;
    let date = parse_date(date)?;
    Ok(agenda_engine::is_date_fully_blocked(
        &blocks,
        date,
        to_engine_id(professional_id),
    ))
}

/// Whether the candidate range `[from, to)` is free of blocks on `date`.
#[wasm_bindgen(js_name = "isRangeAvailable")]
pub fn is_range_available(
    blocks_json: &str,
    date: &str,
    from: &str,
    to: &str,
    professional_id: Option<i32>,
) -> Result<bool, JsValue> {
    let blocks = parse_blocks_json(blocks_json)?;
    let date = parse_date(date)?;
    let from = parse_time(from)?;
    let to = parse_time(to)?;
    Ok(agenda_engine::is_range_available(
        &blocks,
        date,
        from,
        to,
        to_engine_id(professional_id),
    ))
}

/// Whether a single dropdown option at `time` is blocked on `date`.
#[wasm_bindgen(js_name = "isTimeOptionBlocked")]
pub fn is_time_option_blocked(
    blocks_json: &str,
    date: &str,
    time: &str,
    professional_id: Option<i32>,
) -> Result<bool, JsValue> {
    let blocks = parse_blocks_json(blocks_json)?;
    let date = parse_date(date)?;
    let time = parse_time(time)?;
    Ok(agenda_engine::is_time_option_blocked(
        &blocks,
        date,
        time,
        to_engine_id(professional_id),
    ))
}

/// The blocked `{from, to}` pairs on `date`, for display.
///
/// Returns a JSON string containing an array of `{from, to}` objects with
/// `HH:MM:SS` times. Ranges ending at `23:59:59` run to the end of the
/// day.
#[wasm_bindgen(js_name = "listBlockedRanges")]
pub fn list_blocked_ranges(
    blocks_json: &str,
    date: &str,
    professional_id: Option<i32>,
) -> Result<String, JsValue> {
    let blocks = parse_blocks_json(blocks_json)?;
    let date = parse_date(date)?;

    let ranges = agenda_engine::list_blocked_ranges(&blocks, date, to_engine_id(professional_id));
    let dtos: Vec<TimeRangeDto> = ranges
        .iter()
        .map(|r| TimeRangeDto {
            from: r.from.to_string(),
            to: r.to.to_string(),
        })
        .collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// All start-time options for `date` at `step_minutes` increments, each
/// tagged with its blocked flag.
///
/// Returns a JSON string containing an array of `{time, blocked}` objects.
#[wasm_bindgen(js_name = "dayOptions")]
pub fn day_options(
    blocks_json: &str,
    date: &str,
    professional_id: Option<i32>,
    step_minutes: u32,
) -> Result<String, JsValue> {
    let blocks = parse_blocks_json(blocks_json)?;
    let date = parse_date(date)?;

    let options = agenda_engine::day_options(
        &blocks,
        date,
        to_engine_id(professional_id),
        step_minutes,
    );
    let dtos: Vec<DayOptionDto> = options.iter().map(DayOptionDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
