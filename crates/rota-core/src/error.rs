use thiserror::Error;

use crate::day::Day;
use crate::interval::Interval;
use crate::time::TimeOfDay;

/// Validation errors raised by schedule construction, binding, and queries.
///
/// Every failure is surfaced eagerly: constructors validate their whole
/// input before returning, so a schedule either exists and upholds its
/// invariants or was never built. The only per-query failures are the
/// naive/aware mismatches, which depend on the caller-supplied instant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("day index out of range 0-6: {0}")]
    DayOutOfRange(u8),

    #[error("time of day out of range: {hour:02}:{minute:02}")]
    TimeOutOfRange { hour: u8, minute: u8 },

    #[error("interval start {start} is after end {end}")]
    InvertedInterval { start: TimeOfDay, end: TimeOfDay },

    #[error("overlapping intervals on {day}: {first} and {second}")]
    OverlappingIntervals {
        day: Day,
        first: Interval,
        second: Interval,
    },

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("instant-based query against a schedule with no bound timezone")]
    UnboundTimezone,

    #[error("naive query against a schedule bound to {0}")]
    NaiveQueryOnZoned(chrono_tz::Tz),

    #[error("start shift must be non-negative, got {hours}h {minutes}m")]
    NegativeShift { hours: i64, minutes: i64 },
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;
