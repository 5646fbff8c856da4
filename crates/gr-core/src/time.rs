//! Time model for congestion prediction.
//!
//! The classifier is keyed on whole hours, so the canonical unit is a
//! [`TimeSlot`]: an hour of the day plus a day of the week (Monday = 0).
//! Arithmetic stays exact and wraps at both midnight and the end of the
//! week:
//!
//!   offset_hours(n):  hour'    = (hour + n) mod 24
//!                     weekday' = (weekday + (hour + n) div 24) mod 7
//!
//! Conversion from wall-clock time goes through `chrono`, so callers decide
//! which time zone "now" is evaluated in.

use std::fmt;

use chrono::{DateTime, Datelike, Local, NaiveTime, TimeZone, Timelike};

use crate::{CoreError, CoreResult};

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// An hour-of-day / day-of-week pair.  Always valid once constructed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSlot {
    hour:    u8,
    weekday: u8,
}

impl TimeSlot {
    /// Build a slot from `hour ∈ [0, 23]` and `weekday ∈ [0, 6]` (Monday = 0).
    pub fn new(hour: u32, weekday: u32) -> CoreResult<Self> {
        if hour > 23 || weekday > 6 {
            return Err(CoreError::InvalidTimeSlot { hour, weekday });
        }
        Ok(Self { hour: hour as u8, weekday: weekday as u8 })
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.hour as u32
    }

    #[inline]
    pub fn weekday(self) -> u32 {
        self.weekday as u32
    }

    /// The slot `n` hours after `self`, rolling the weekday over at midnight.
    pub fn offset_hours(self, n: u32) -> TimeSlot {
        let total = self.hour as u64 + n as u64;
        let days = total / 24;
        TimeSlot {
            hour:    (total % 24) as u8,
            weekday: ((self.weekday as u64 + days) % 7) as u8,
        }
    }

    /// Slot containing the given wall-clock instant, in that instant's zone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            hour:    dt.hour() as u8,
            weekday: dt.weekday().num_days_from_monday() as u8,
        }
    }

    /// Slot containing the current local time.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Start of the slot as a clock time (`HH:00`).
    pub fn clock_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour as u32, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Short English weekday name (`"Mon"` … `"Sun"`).
    pub fn weekday_name(self) -> &'static str {
        WEEKDAY_NAMES[self.weekday as usize]
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:00", self.weekday_name(), self.hour)
    }
}
