//! Closed on-intervals within a single calendar day.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::time::TimeOfDay;

/// A closed `[start, end]` on-interval within one calendar day.
///
/// Both endpoints are inclusive: a query at exactly `start` or exactly
/// `end` evaluates as on. An interval never crosses midnight; a continuous
/// on-period spanning a day boundary is encoded as two intervals, one
/// ending at 23:59 and one starting at 00:00 on the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "((u8, u8), (u8, u8))", into = "((u8, u8), (u8, u8))")]
pub struct Interval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Interval {
    /// The full-day interval, 00:00 through 23:59.
    pub const FULL_DAY: Self = Self {
        start: TimeOfDay::MIDNIGHT,
        end: TimeOfDay::LAST_MINUTE,
    };

    /// Creates an interval.
    ///
    /// ## Errors
    ///
    /// Returns `ScheduleError::InvertedInterval` when `start > end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> ScheduleResult<Self> {
        if start > end {
            return Err(ScheduleError::InvertedInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Constructs without the ordering check. Caller guarantees
    /// `start <= end`.
    pub(crate) const fn new_unchecked(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive start time.
    #[must_use]
    pub const fn start(self) -> TimeOfDay {
        self.start
    }

    /// Returns the inclusive end time.
    #[must_use]
    pub const fn end(self) -> TimeOfDay {
        self.end
    }

    /// Whether `time` falls within this interval, boundaries included.
    #[must_use]
    pub fn contains(self, time: TimeOfDay) -> bool {
        self.start <= time && time <= self.end
    }

    /// Closed-interval overlap check; sharing a single endpoint counts as
    /// overlap.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Interval width in minutes; the closed single-point interval has
    /// width zero.
    #[must_use]
    pub fn width_minutes(self) -> u16 {
        self.end.minute_of_day() - self.start.minute_of_day()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl TryFrom<((u8, u8), (u8, u8))> for Interval {
    type Error = ScheduleError;

    fn try_from((start, end): ((u8, u8), (u8, u8))) -> ScheduleResult<Self> {
        Self::new(TimeOfDay::try_from(start)?, TimeOfDay::try_from(end)?)
    }
}

impl From<Interval> for ((u8, u8), (u8, u8)) {
    fn from(interval: Interval) -> Self {
        (interval.start.into(), interval.end.into())
    }
}
