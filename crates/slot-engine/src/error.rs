//! Error types for slot-engine operations.

use thiserror::Error;

use crate::slots::UnavailableReason;
use crate::time::WeekDay;

#[derive(Error, Debug)]
pub enum SlotError {
    /// A time string did not match `H:MM AM|PM` / `HH:MM AM|PM`.
    #[error("Invalid time format: {0:?} (expected e.g. \"09:00 AM\")")]
    InvalidFormat(String),

    /// Two working-hour blocks on the same day intersect.
    #[error("Overlapping time blocks on {day}")]
    Overlap { day: WeekDay },

    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A block whose start is not strictly before its end.
    #[error("Invalid time block: {start} must be before {end}")]
    InvalidTimeBlock { start: String, end: String },

    #[error("Invalid slot duration: {0} minutes")]
    InvalidSlotDuration(u32),

    #[error("Minutes out of range: {0} (must be below 1440)")]
    MinutesOutOfRange(u32),

    /// A booking was refused at commit time.
    #[error("Slot unavailable: {0}")]
    Unavailable(UnavailableReason),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
