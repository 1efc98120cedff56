//! Slot generation and single-slot availability checks.
//!
//! Turns a weekly schedule, a date and that date's bookings into the list of
//! start times a client can book, and answers "can this exact time be booked?"
//! right before an appointment is committed.
//!
//! # Boundary policy
//!
//! A slot is only offered when it fits entirely inside a working block:
//! `start <= t` and `t + duration <= end`. A 09:00 AM–10:00 AM block with
//! 45-minute slots offers `09:00 AM` only, since a 09:45 AM slot would run to
//! 10:30 AM. [`is_slot_available`] applies the same rule.
//!
//! # Conflict policy
//!
//! Both operations use the proximity rule from [`crate::conflict`]: a time is
//! taken when an active booking starts less than one slot duration away.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::appointment::{active_start_times, BookedAppointment};
use crate::conflict;
use crate::schedule::{DaySchedule, WeeklySchedule};
use crate::time::TimeOfDay;

/// Why a time cannot be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The provider does not work on that weekday.
    DayClosed,
    /// The slot does not fit inside any working block.
    OutsideWorkingHours,
    /// An active appointment starts less than one slot duration away.
    Conflict,
}

impl UnavailableReason {
    pub fn as_str(self) -> &'static str {
        match self {
            UnavailableReason::DayClosed => "day closed",
            UnavailableReason::OutsideWorkingHours => "outside working hours",
            UnavailableReason::Conflict => "conflicts with existing appointment",
        }
    }
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`is_slot_available`]. Being unavailable is a normal answer,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable(UnavailableReason),
}

impl Availability {
    pub fn is_available(self) -> bool {
        matches!(self, Availability::Available)
    }

    pub fn reason(self) -> Option<UnavailableReason> {
        match self {
            Availability::Available => None,
            Availability::Unavailable(reason) => Some(reason),
        }
    }
}

/// Every start time the day's blocks can hold, before bookings are applied.
///
/// Candidates step from each block's start in whole slot durations and stop
/// once the next slot would run past the block's end. Results from all blocks
/// are merged, deduplicated and sorted.
pub fn candidate_slots(day: &DaySchedule) -> Vec<TimeOfDay> {
    let duration = day.slot_duration_minutes;
    if duration == 0 {
        return Vec::new();
    }

    let mut starts = BTreeSet::new();
    for block in day.working_blocks() {
        let end = block.end().minutes();
        let mut cursor = block.start().minutes();
        while cursor.checked_add(duration).is_some_and(|slot_end| slot_end <= end) {
            starts.insert(cursor);
            cursor += duration;
        }
    }

    // Every start is below its block's end, so always in range.
    starts
        .into_iter()
        .filter_map(|m| TimeOfDay::from_minutes(m).ok())
        .collect()
}

/// List the bookable start times on `date`, ascending.
///
/// # Arguments
///
/// * `schedule` — The provider's weekly schedule (validated).
/// * `date` — The calendar date being offered.
/// * `booked` — Start times of active (pending or confirmed) appointments on `date`.
///
/// A closed day returns an empty list whatever blocks it carries, as does an
/// open day without blocks. Candidates within one slot duration of a booked
/// start time are dropped.
#[instrument(level = "debug", skip(schedule, booked), fields(booked_count = booked.len()))]
pub fn list_available_slots(
    schedule: &WeeklySchedule,
    date: NaiveDate,
    booked: &[TimeOfDay],
) -> Vec<TimeOfDay> {
    let (weekday, day) = schedule.day_for(date);
    if !day.is_available {
        debug!(%weekday, "day closed, no slots");
        return Vec::new();
    }

    let duration = day.slot_duration_minutes;
    let slots: Vec<TimeOfDay> = candidate_slots(day)
        .into_iter()
        .filter(|&slot| !conflict::conflicts_with_any(slot, booked, duration))
        .collect();

    debug!(%weekday, offered = slots.len(), "computed available slots");
    slots
}

/// Like [`list_available_slots`], taking the day's appointments directly.
///
/// Only pending and confirmed appointments dated `date` are applied.
pub fn available_slots(
    schedule: &WeeklySchedule,
    date: NaiveDate,
    appointments: &[BookedAppointment],
) -> Vec<TimeOfDay> {
    list_available_slots(schedule, date, &active_start_times(appointments, date))
}

/// Decide whether `time` on `date` can be booked.
///
/// Checks run in order and the first failure is reported:
///
/// 1. the weekday is open, else [`UnavailableReason::DayClosed`];
/// 2. a slot starting at `time` fits inside one of the day's blocks, else
///    [`UnavailableReason::OutsideWorkingHours`];
/// 3. no active appointment on `date` starts within one slot duration, else
///    [`UnavailableReason::Conflict`].
///
/// Call this immediately before persisting a new appointment: the booking list
/// may have changed since the slots were listed.
#[instrument(level = "debug", skip(schedule, time, appointments), fields(time = %time))]
pub fn is_slot_available(
    schedule: &WeeklySchedule,
    date: NaiveDate,
    time: TimeOfDay,
    appointments: &[BookedAppointment],
) -> Availability {
    let (weekday, day) = schedule.day_for(date);
    if !day.is_available {
        return Availability::Unavailable(UnavailableReason::DayClosed);
    }

    let duration = day.slot_duration_minutes;
    let in_hours = duration > 0 && day.working_blocks().iter().any(|b| b.fits(time, duration));
    if !in_hours {
        debug!(%weekday, "time outside working hours");
        return Availability::Unavailable(UnavailableReason::OutsideWorkingHours);
    }

    let clashes = conflict::find_conflicts(date, time, duration, appointments);
    if !clashes.is_empty() {
        debug!(%weekday, conflicts = clashes.len(), "time conflicts with bookings");
        return Availability::Unavailable(UnavailableReason::Conflict);
    }

    Availability::Available
}
