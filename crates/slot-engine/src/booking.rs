//! Commit-time admission of new appointments.
//!
//! Slots listed to a client can go stale before the client confirms: another
//! client may book a nearby time in between. The booking path therefore
//! re-runs [`is_slot_available`] against the current appointments right before
//! writing, and the later of two racing requests gets a conflict error. There
//! is no hold or reservation of listed slots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::appointment::{AppointmentStatus, BookedAppointment};
use crate::error::{Result, SlotError};
use crate::schedule::WeeklySchedule;
use crate::slots::{is_slot_available, Availability};
use crate::time::TimeOfDay;

/// A client's request for a specific date and start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub time: TimeOfDay,
}

/// Check `request` against the schedule and existing appointments and, if the
/// slot is free, return the new appointment in `pending` state.
///
/// # Errors
/// Returns `SlotError::Unavailable` with the reason the slot was refused.
pub fn admit_booking(
    schedule: &WeeklySchedule,
    request: BookingRequest,
    existing: &[BookedAppointment],
) -> Result<BookedAppointment> {
    match is_slot_available(schedule, request.date, request.time, existing) {
        Availability::Available => Ok(BookedAppointment::new(
            request.date,
            request.time,
            AppointmentStatus::Pending,
        )),
        Availability::Unavailable(reason) => {
            debug!(date = %request.date, time = %request.time, %reason, "booking refused");
            Err(SlotError::Unavailable(reason))
        }
    }
}

/// Identifier of an appointment inside an [`AppointmentLedger`].
pub type AppointmentId = usize;

/// An in-memory appointment list with atomic check-then-insert.
///
/// `book` takes `&mut self`, so the availability check and the insert cannot
/// interleave with another booking on the same ledger. Callers sharing a
/// ledger between threads put it behind their own lock.
#[derive(Debug, Clone, Default)]
pub struct AppointmentLedger {
    appointments: Vec<BookedAppointment>,
}

impl AppointmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot, e.g. appointments fetched for a date range.
    pub fn from_appointments(appointments: Vec<BookedAppointment>) -> Self {
        Self { appointments }
    }

    /// Admit and record a booking, returning its id.
    ///
    /// # Errors
    /// Returns `SlotError::Unavailable` when the slot is taken or outside hours;
    /// the ledger is left unchanged.
    pub fn book(
        &mut self,
        schedule: &WeeklySchedule,
        request: BookingRequest,
    ) -> Result<AppointmentId> {
        let appointment = admit_booking(schedule, request, &self.appointments)?;
        self.appointments.push(appointment);
        let id = self.appointments.len() - 1;
        info!(id, date = %request.date, time = %request.time, "appointment booked");
        Ok(id)
    }

    /// Move an appointment to a new status. Returns `false` for an unknown id.
    ///
    /// Completing, cancelling or rejecting releases the slot for new bookings.
    pub fn update_status(&mut self, id: AppointmentId, status: AppointmentStatus) -> bool {
        match self.appointments.get_mut(id) {
            Some(apt) => {
                apt.status = status;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: AppointmentId) -> Option<&BookedAppointment> {
        self.appointments.get(id)
    }

    /// Every appointment dated `date`, in booking order, any status.
    pub fn on_date(&self, date: NaiveDate) -> Vec<BookedAppointment> {
        self.appointments
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect()
    }

    pub fn appointments(&self) -> &[BookedAppointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
