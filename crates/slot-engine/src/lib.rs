//! # slot-engine
//!
//! Deterministic appointment slot generation for service providers.
//!
//! Given a provider's recurring weekly working hours, a fixed appointment
//! length per day, and the appointments already booked, the engine lists the
//! start times a client can book on any date and re-checks a single time right
//! before an appointment is committed. Every operation is a pure function of
//! its inputs.
//!
//! ## Modules
//!
//! - [`time`] — `TimeOfDay` (`"09:00 AM"` ⇄ minutes), `TimeBlock`, `WeekDay`, date parsing
//! - [`schedule`] — `DaySchedule`, `WeeklySchedule`, the default schedule, working-hours summary
//! - [`validator`] — Format checks, overlap detection and normalization of schedules
//! - [`slots`] — Slot listing and single-slot availability
//! - [`conflict`] — The proximity rule deciding when two bookings clash
//! - [`appointment`] — Booked appointments, statuses and statistics
//! - [`booking`] — Commit-time admission and an in-memory appointment ledger
//! - [`error`] — Error types

pub mod appointment;
pub mod booking;
pub mod conflict;
pub mod error;
pub mod schedule;
pub mod slots;
pub mod time;
pub mod validator;

pub use appointment::{AppointmentStats, AppointmentStatus, BookedAppointment};
pub use booking::{admit_booking, AppointmentLedger, BookingRequest};
pub use error::SlotError;
pub use schedule::{working_hours, DaySchedule, WeeklySchedule, DEFAULT_WEEKLY_SCHEDULE};
pub use slots::{
    available_slots, is_slot_available, list_available_slots, Availability, UnavailableReason,
};
pub use time::{parse_date, TimeBlock, TimeOfDay, WeekDay};
pub use validator::{validate_day_schedule, validate_weekly_schedule};
