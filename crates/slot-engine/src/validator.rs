//! Schedule validation and normalization.
//!
//! Run before a schedule is saved or used for slot generation. Nothing here
//! repairs bad input: a malformed time or an overlap is reported back to the
//! caller, which decides whether to block the save or ask for a fix.

use tracing::debug;

use crate::error::{Result, SlotError};
use crate::schedule::{DaySchedule, WeeklySchedule};
use crate::time::{TimeBlock, TimeOfDay, WeekDay, MINUTES_PER_DAY};

/// Whether `text` matches `H:MM AM|PM` or `HH:MM AM|PM` (hour 1–12, minute 00–59).
pub fn is_valid_time_format(text: &str) -> bool {
    text.parse::<TimeOfDay>().is_ok()
}

/// Convert a 12-hour time string to minutes since midnight.
///
/// `"12:00 AM"` is 0 and `"12:00 PM"` is 720.
///
/// # Errors
/// Returns `SlotError::InvalidFormat` if `text` does not match the accepted pattern.
pub fn to_minutes(text: &str) -> Result<u32> {
    Ok(text.parse::<TimeOfDay>()?.minutes())
}

/// Convert minutes since midnight back to the canonical `"HH:MM AM"` form.
///
/// # Errors
/// Returns `SlotError::MinutesOutOfRange` for values of 1440 or more.
pub fn to_time_string(minutes: u32) -> Result<String> {
    Ok(TimeOfDay::from_minutes(minutes)?.to_string())
}

/// Whether any two blocks intersect.
///
/// Pairwise comparison; a day only ever has a handful of blocks.
/// Touching blocks (`a.end == b.start`) are not an overlap.
pub fn has_overlap(blocks: &[TimeBlock]) -> bool {
    blocks
        .iter()
        .enumerate()
        .any(|(i, a)| blocks[i + 1..].iter().any(|b| a.overlaps(b)))
}

/// A copy of `blocks` ordered by start time. Stable for equal starts.
pub fn sort_blocks(blocks: &[TimeBlock]) -> Vec<TimeBlock> {
    let mut sorted = blocks.to_vec();
    sorted.sort_by_key(|b| b.start());
    sorted
}

/// Validate one day and return it normalized (blocks sorted by start).
///
/// # Errors
/// - `SlotError::InvalidSlotDuration` if the slot duration is zero or a full
///   day (1440 minutes) or longer.
/// - `SlotError::Overlap` if the day is available and two of its blocks overlap.
pub fn validate_day_schedule(day: WeekDay, schedule: &DaySchedule) -> Result<DaySchedule> {
    let duration = schedule.slot_duration_minutes;
    if duration == 0 || duration >= MINUTES_PER_DAY {
        debug!(%day, duration, "rejecting slot duration");
        return Err(SlotError::InvalidSlotDuration(schedule.slot_duration_minutes));
    }

    if schedule.is_available && has_overlap(&schedule.time_blocks) {
        debug!(%day, blocks = schedule.time_blocks.len(), "rejecting overlapping blocks");
        return Err(SlotError::Overlap { day });
    }

    Ok(DaySchedule {
        time_blocks: sort_blocks(&schedule.time_blocks),
        ..schedule.clone()
    })
}

/// Validate all seven days, Monday first, and return the normalized schedule.
///
/// The first failing day is reported.
pub fn validate_weekly_schedule(schedule: &WeeklySchedule) -> Result<WeeklySchedule> {
    let mut normalized = schedule.clone();
    for (day, ds) in schedule.iter() {
        *normalized.day_mut(day) = validate_day_schedule(day, ds)?;
    }
    Ok(normalized)
}
