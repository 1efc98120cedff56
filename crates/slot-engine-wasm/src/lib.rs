//! WASM bindings for slot-engine.
//!
//! Exposes slot listing, single-slot checks, schedule validation and the
//! working-hours summary to JavaScript via `wasm-bindgen`. Schedules and
//! appointments cross the boundary as JSON strings in the same camelCase shape
//! the engine serializes (`isAvailable`, `timeBlocks`, `slotDuration`, ...).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Serialize;
use slot_engine::{
    available_slots, is_slot_available as check_slot, parse_date, validate_weekly_schedule,
    working_hours as summarize_hours, BookedAppointment, TimeOfDay, WeeklySchedule,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct AvailabilityDto {
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Parse and validate a schedule. An empty string selects the default schedule.
fn parse_schedule_json(json: &str) -> Result<WeeklySchedule, JsValue> {
    let schedule = if json.trim().is_empty() {
        WeeklySchedule::default()
    } else {
        WeeklySchedule::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid schedule JSON: {}", e)))?
    };
    validate_weekly_schedule(&schedule).map_err(js_err)
}

/// Parse a JSON array of `{date, time, status}` objects. Empty input means no appointments.
fn parse_appointments_json(json: &str) -> Result<Vec<BookedAppointment>, JsValue> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid appointments JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// List the bookable start times on `date` (`YYYY-MM-DD`).
///
/// Returns a JSON array of time strings, e.g. `["09:00 AM","10:00 AM"]`.
#[wasm_bindgen(js_name = "listAvailableSlots")]
pub fn list_available_slots(
    schedule_json: &str,
    date: &str,
    appointments_json: &str,
) -> Result<String, JsValue> {
    let schedule = parse_schedule_json(schedule_json)?;
    let date = parse_date(date).map_err(js_err)?;
    let appointments = parse_appointments_json(appointments_json)?;

    to_json(&available_slots(&schedule, date, &appointments))
}

/// Check a single start time on `date`.
///
/// Returns `{"available":true}` or `{"available":false,"reason":"..."}`.
#[wasm_bindgen(js_name = "isSlotAvailable")]
pub fn is_slot_available(
    schedule_json: &str,
    date: &str,
    time: &str,
    appointments_json: &str,
) -> Result<String, JsValue> {
    let schedule = parse_schedule_json(schedule_json)?;
    let date = parse_date(date).map_err(js_err)?;
    let time: TimeOfDay = time.parse().map_err(js_err)?;
    let appointments = parse_appointments_json(appointments_json)?;

    let result = check_slot(&schedule, date, time, &appointments);
    to_json(&AvailabilityDto {
        available: result.is_available(),
        reason: result.reason().map(|r| r.as_str()),
    })
}

/// Validate a schedule and return it normalized (blocks sorted, times padded).
#[wasm_bindgen(js_name = "validateSchedule")]
pub fn validate_schedule(schedule_json: &str) -> Result<String, JsValue> {
    let schedule = WeeklySchedule::from_json(schedule_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid schedule JSON: {}", e)))?;
    let normalized = validate_weekly_schedule(&schedule).map_err(js_err)?;
    to_json(&normalized)
}

#[wasm_bindgen(js_name = "defaultSchedule")]
pub fn default_schedule() -> Result<String, JsValue> {
    to_json(&WeeklySchedule::default())
}

/// Per-day working hours summary, Monday first.
///
/// Returns a JSON array of `{day, isAvailable, hours}` objects.
#[wasm_bindgen(js_name = "workingHours")]
pub fn working_hours(schedule_json: &str) -> Result<String, JsValue> {
    let schedule = parse_schedule_json(schedule_json)?;
    to_json(&summarize_hours(&schedule))
}

#[wasm_bindgen(js_name = "isValidTimeFormat")]
pub fn is_valid_time_format(time: &str) -> bool {
    slot_engine::validator::is_valid_time_format(time)
}
