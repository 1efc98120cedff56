//! Proximity-based conflict detection between a candidate slot and bookings.
//!
//! Two start times conflict when they are strictly closer than one slot
//! duration: `|a - b| < duration`. An exact match is the zero-distance case.
//! Starts exactly one duration apart are back-to-back and do NOT conflict.
//!
//! The same predicate drives both slot listing and single-slot validation, so a
//! time is never listed as free and then refused at commit (or the reverse).

use chrono::NaiveDate;

use crate::appointment::BookedAppointment;
use crate::time::TimeOfDay;

/// Whether two start times are too close to both be booked.
pub fn conflicts(a: TimeOfDay, b: TimeOfDay, slot_duration_minutes: u32) -> bool {
    a.distance(b) < slot_duration_minutes
}

/// Whether `time` conflicts with any of the given booked start times.
pub fn conflicts_with_any(
    time: TimeOfDay,
    booked: &[TimeOfDay],
    slot_duration_minutes: u32,
) -> bool {
    booked
        .iter()
        .any(|&b| conflicts(time, b, slot_duration_minutes))
}

/// Active appointments on `date` that conflict with a slot starting at `time`.
///
/// Completed, cancelled and rejected appointments never conflict.
pub fn find_conflicts<'a>(
    date: NaiveDate,
    time: TimeOfDay,
    slot_duration_minutes: u32,
    appointments: &'a [BookedAppointment],
) -> Vec<&'a BookedAppointment> {
    appointments
        .iter()
        .filter(|a| a.holds_slot_on(date))
        .filter(|a| conflicts(time, a.time, slot_duration_minutes))
        .collect()
}
