//! Minute-granularity clock times.

use std::fmt;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// A clock time within one day, at minute granularity.
///
/// Ordered lexicographically by (hour, minute), which is the natural
/// within-day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// 00:00, the first minute of the day.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// 23:59, the last minute of the day.
    pub const LAST_MINUTE: Self = Self { hour: 23, minute: 59 };

    /// Creates a time of day.
    ///
    /// ## Errors
    ///
    /// Returns `ScheduleError::TimeOutOfRange` if `hour > 23` or
    /// `minute > 59`.
    pub const fn new(hour: u8, minute: u8) -> ScheduleResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::TimeOutOfRange { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour (0-23).
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Returns minutes since midnight (0-1439).
    #[must_use]
    pub fn minute_of_day(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "minutes < 1440 keeps both components in u8 range"
    )]
    pub(crate) fn from_minute_of_day(minutes: u16) -> Self {
        debug_assert!(minutes < 24 * 60, "minute of day out of range");
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<(u8, u8)> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from((hour, minute): (u8, u8)) -> ScheduleResult<Self> {
        Self::new(hour, minute)
    }
}

impl From<TimeOfDay> for (u8, u8) {
    fn from(time: TimeOfDay) -> Self {
        (time.hour, time.minute)
    }
}

impl From<chrono::NaiveTime> for TimeOfDay {
    /// Truncates to minute granularity; seconds are discarded.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "chrono guarantees hour < 24 and minute < 60"
    )]
    fn from(time: chrono::NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}
