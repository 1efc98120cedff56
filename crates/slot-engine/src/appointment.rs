//! Booked appointments as seen by the slot engine.
//!
//! Appointments are owned by the booking subsystem; the engine only reads
//! date-scoped snapshots of them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Rejected,
}

impl AppointmentStatus {
    /// Pending and confirmed appointments hold their slot; the rest release it.
    pub fn is_active(self) -> bool {
        matches!(self, AppointmentStatus::Pending | AppointmentStatus::Confirmed)
    }
}

/// An existing appointment on a provider's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedAppointment {
    pub date: NaiveDate,
    /// Start time of the appointment.
    pub time: TimeOfDay,
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl BookedAppointment {
    pub fn new(date: NaiveDate, time: TimeOfDay, status: AppointmentStatus) -> Self {
        Self { date, time, status }
    }

    /// Active on `date`, i.e. currently occupying a slot that day.
    pub fn holds_slot_on(&self, date: NaiveDate) -> bool {
        self.date == date && self.status.is_active()
    }
}

/// Start times of the appointments that occupy a slot on `date`.
pub fn active_start_times(appointments: &[BookedAppointment], date: NaiveDate) -> Vec<TimeOfDay> {
    appointments
        .iter()
        .filter(|a| a.holds_slot_on(date))
        .map(|a| a.time)
        .collect()
}

/// Per-status appointment counts for a provider dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AppointmentStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub rejected: usize,
    /// Appointments of any status dated `today`.
    pub today: usize,
}

impl AppointmentStats {
    pub fn collect(appointments: &[BookedAppointment], today: NaiveDate) -> Self {
        let mut stats = Self {
            total: appointments.len(),
            ..Self::default()
        };
        for apt in appointments {
            match apt.status {
                AppointmentStatus::Pending => stats.pending += 1,
                AppointmentStatus::Confirmed => stats.confirmed += 1,
                AppointmentStatus::Completed => stats.completed += 1,
                AppointmentStatus::Cancelled => stats.cancelled += 1,
                AppointmentStatus::Rejected => stats.rejected += 1,
            }
            if apt.date == today {
                stats.today += 1;
            }
        }
        stats
    }
}
