//! Weekly working-hour configuration for a single provider.
//!
//! The JSON shape matches the stored schedule document:
//!
//! ```json
//! {
//!   "monday": {
//!     "isAvailable": true,
//!     "timeBlocks": [{ "startTime": "09:00 AM", "endTime": "05:00 PM" }],
//!     "slotDuration": 60
//!   },
//!   "tuesday": { "...": "..." }
//! }
//! ```
//!
//! All seven day keys are required. A missing `slotDuration` reads as 60 minutes.

use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::time::{TimeBlock, WeekDay};

/// Slot length used when a stored day omits `slotDuration`.
pub const DEFAULT_SLOT_DURATION: u32 = 60;

fn default_slot_duration() -> u32 {
    DEFAULT_SLOT_DURATION
}

/// Availability for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub is_available: bool,
    /// Working-hour blocks. Ignored while `is_available` is false.
    #[serde(default)]
    pub time_blocks: Vec<TimeBlock>,
    /// Length of every appointment offered on this day, in minutes.
    #[serde(rename = "slotDuration", default = "default_slot_duration")]
    pub slot_duration_minutes: u32,
}

impl DaySchedule {
    pub fn open(time_blocks: Vec<TimeBlock>, slot_duration_minutes: u32) -> Self {
        Self {
            is_available: true,
            time_blocks,
            slot_duration_minutes,
        }
    }

    pub fn closed() -> Self {
        Self {
            is_available: false,
            time_blocks: Vec::new(),
            slot_duration_minutes: DEFAULT_SLOT_DURATION,
        }
    }

    /// The blocks that actually offer time: none on a closed day.
    pub fn working_blocks(&self) -> &[TimeBlock] {
        if self.is_available {
            &self.time_blocks
        } else {
            &[]
        }
    }
}

/// A provider's recurring seven-day availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

/// Schedule used for providers who never saved one: Mon–Fri 09:00 AM–05:00 PM,
/// Sat 10:00 AM–04:00 PM, Sunday closed, 60-minute slots throughout.
///
/// Sunday keeps the weekday block so re-opening it restores standard hours.
pub static DEFAULT_WEEKLY_SCHEDULE: LazyLock<WeeklySchedule> = LazyLock::new(|| {
    let weekday = || DaySchedule::open(vec![TimeBlock::from_minutes_unchecked(540, 1020)], 60);
    WeeklySchedule {
        monday: weekday(),
        tuesday: weekday(),
        wednesday: weekday(),
        thursday: weekday(),
        friday: weekday(),
        saturday: DaySchedule::open(vec![TimeBlock::from_minutes_unchecked(600, 960)], 60),
        sunday: DaySchedule {
            is_available: false,
            ..weekday()
        },
    }
});

impl Default for WeeklySchedule {
    fn default() -> Self {
        DEFAULT_WEEKLY_SCHEDULE.clone()
    }
}

impl WeeklySchedule {
    pub fn day(&self, day: WeekDay) -> &DaySchedule {
        match day {
            WeekDay::Monday => &self.monday,
            WeekDay::Tuesday => &self.tuesday,
            WeekDay::Wednesday => &self.wednesday,
            WeekDay::Thursday => &self.thursday,
            WeekDay::Friday => &self.friday,
            WeekDay::Saturday => &self.saturday,
            WeekDay::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: WeekDay) -> &mut DaySchedule {
        match day {
            WeekDay::Monday => &mut self.monday,
            WeekDay::Tuesday => &mut self.tuesday,
            WeekDay::Wednesday => &mut self.wednesday,
            WeekDay::Thursday => &mut self.thursday,
            WeekDay::Friday => &mut self.friday,
            WeekDay::Saturday => &mut self.saturday,
            WeekDay::Sunday => &mut self.sunday,
        }
    }

    /// Replace a single day, keeping the other six.
    pub fn with_day(mut self, day: WeekDay, schedule: DaySchedule) -> Self {
        *self.day_mut(day) = schedule;
        self
    }

    /// The weekday and its schedule for a calendar date.
    pub fn day_for(&self, date: NaiveDate) -> (WeekDay, &DaySchedule) {
        let day = WeekDay::of(date);
        (day, self.day(day))
    }

    /// Days in order, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (WeekDay, &DaySchedule)> + '_ {
        WeekDay::ALL.into_iter().map(move |d| (d, self.day(d)))
    }

    /// Parse a stored schedule document.
    ///
    /// This only checks shape and per-block `start < end`; run
    /// [`validate_weekly_schedule`](crate::validator::validate_weekly_schedule)
    /// before trusting the result.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Human-readable working hours for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    pub day: WeekDay,
    pub is_available: bool,
    /// `"09:00 AM - 12:00 PM, 01:00 PM - 05:00 PM"`, `"Closed"`, or
    /// `"No working hours"` for an open day without blocks.
    pub hours: String,
}

/// Summarize a schedule for display, Monday first.
pub fn working_hours(schedule: &WeeklySchedule) -> Vec<DayHours> {
    schedule
        .iter()
        .map(|(day, ds)| {
            let hours = if !ds.is_available {
                "Closed".to_string()
            } else if ds.time_blocks.is_empty() {
                "No working hours".to_string()
            } else {
                ds.time_blocks
                    .iter()
                    .map(|b| b.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            DayHours {
                day,
                is_available: ds.is_available,
                hours,
            }
        })
        .collect()
}
