//! Wall-clock primitives: weekdays, 12-hour times of day, and working-hour blocks.
//!
//! Every comparison and every bit of arithmetic happens on minutes since
//! midnight. The `"09:00 AM"` string form exists only at the edges (serde,
//! `Display`, `FromStr`), and conversion in both directions is total for the
//! accepted pattern:
//!
//! - hour `1`–`12`, written with one or two digits (`"9:00 AM"`, `"09:00 AM"`)
//! - minute `00`–`59`, always two digits
//! - a single space, then `AM` or `PM`
//!
//! Formatting always zero-pads the hour, so `"9:00 AM"` reads back as `"09:00 AM"`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Minutes in one day; valid [`TimeOfDay`] values are strictly below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Day of the week, as used for the keys of a weekly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekDay {
    /// All seven days, Monday first.
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
    ];

    /// Map a weekday number where 0 is Sunday and 6 is Saturday.
    pub fn from_sunday_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(WeekDay::Sunday),
            1 => Some(WeekDay::Monday),
            2 => Some(WeekDay::Tuesday),
            3 => Some(WeekDay::Wednesday),
            4 => Some(WeekDay::Thursday),
            5 => Some(WeekDay::Friday),
            6 => Some(WeekDay::Saturday),
            _ => None,
        }
    }

    /// The weekday a calendar date falls on.
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    /// Lowercase key, as it appears in a stored schedule document.
    pub fn as_str(self) -> &'static str {
        match self {
            WeekDay::Monday => "monday",
            WeekDay::Tuesday => "tuesday",
            WeekDay::Wednesday => "wednesday",
            WeekDay::Thursday => "thursday",
            WeekDay::Friday => "friday",
            WeekDay::Saturday => "saturday",
            WeekDay::Sunday => "sunday",
        }
    }

    /// Capitalized name for display ("Monday").
    pub fn label(self) -> &'static str {
        match self {
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
            WeekDay::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for WeekDay {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => WeekDay::Monday,
            Weekday::Tue => WeekDay::Tuesday,
            Weekday::Wed => WeekDay::Wednesday,
            Weekday::Thu => WeekDay::Thursday,
            Weekday::Fri => WeekDay::Friday,
            Weekday::Sat => WeekDay::Saturday,
            Weekday::Sun => WeekDay::Sunday,
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
/// Returns `SlotError::InvalidDate` for malformed or out-of-range dates
/// (e.g. `"2026-02-30"`) and for input with surrounding whitespace.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let invalid = || SlotError::InvalidDate(text.to_string());
    // chrono skips leading whitespace before numeric fields.
    if text.trim() != text {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| invalid())
}

/// A wall-clock time, stored as minutes since midnight (0–1439).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from minutes since midnight.
    ///
    /// # Errors
    /// Returns `SlotError::MinutesOutOfRange` for values of 1440 or more.
    pub fn from_minutes(minutes: u32) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(SlotError::MinutesOutOfRange(minutes));
        }
        Ok(TimeOfDay(minutes as u16))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// Absolute distance between two times, in minutes.
    pub fn distance(self, other: TimeOfDay) -> u32 {
        self.minutes().abs_diff(other.minutes())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    fn from_str(text: &str) -> Result<Self> {
        let (hour, minute, pm) =
            split_12h(text).ok_or_else(|| SlotError::InvalidFormat(text.to_string()))?;
        let mut minutes = u16::from(hour % 12) * 60 + u16::from(minute);
        if pm {
            minutes += 12 * 60;
        }
        Ok(TimeOfDay(minutes))
    }
}

/// Split `"H:MM AM"` / `"HH:MM PM"` into (hour, minute, is_pm).
///
/// Returns `None` unless the whole string matches the accepted pattern.
fn split_12h(text: &str) -> Option<(u8, u8, bool)> {
    let (clock, meridiem) = text.split_once(' ')?;
    let pm = match meridiem {
        "AM" => false,
        "PM" => true,
        _ => return None,
    };

    let (hour, minute) = clock.split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }
    Some((hour, minute, pm))
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 60;
        let minutes = self.0 % 60;
        let period = if hours >= 12 { "PM" } else { "AM" };
        let display_hours = match hours % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{:02}:{:02} {}", display_hours, minutes, period)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SlotError;

    fn try_from(text: String) -> Result<Self> {
        text.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// One contiguous span of working hours, half-open: `[start, end)`.
///
/// The invariant `start < end` holds for every value of this type, including
/// ones produced by deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTimeBlock")]
pub struct TimeBlock {
    start_time: TimeOfDay,
    end_time: TimeOfDay,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTimeBlock {
    start_time: TimeOfDay,
    end_time: TimeOfDay,
}

impl TryFrom<RawTimeBlock> for TimeBlock {
    type Error = SlotError;

    fn try_from(raw: RawTimeBlock) -> Result<Self> {
        TimeBlock::new(raw.start_time, raw.end_time)
    }
}

impl TimeBlock {
    /// # Errors
    /// Returns `SlotError::InvalidTimeBlock` unless `start < end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidTimeBlock {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            start_time: start,
            end_time: end,
        })
    }

    /// Caller guarantees `start < end < 1440`.
    pub(crate) const fn from_minutes_unchecked(start: u16, end: u16) -> Self {
        Self {
            start_time: TimeOfDay(start),
            end_time: TimeOfDay(end),
        }
    }

    /// Build a block from two 12-hour time strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> TimeOfDay {
        self.start_time
    }

    pub fn end(&self) -> TimeOfDay {
        self.end_time
    }

    /// Whether a slot of `duration` minutes starting at `time` lies entirely
    /// inside this block.
    pub fn fits(&self, time: TimeOfDay, duration: u32) -> bool {
        self.start_time <= time
            && time
                .minutes()
                .checked_add(duration)
                .is_some_and(|end| end <= self.end_time.minutes())
    }

    /// Two blocks overlap when `a.start < b.end && b.start < a.end`.
    /// Blocks that merely touch (`a.end == b.start`) do not.
    pub fn overlaps(&self, other: &TimeBlock) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start_time, self.end_time)
    }
}
