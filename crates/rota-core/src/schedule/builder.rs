//! Fluent per-day schedule construction.

use super::{RawInterval, WeeklySchedule};
use crate::day::Day;
use crate::error::ScheduleResult;
use crate::interval::Interval;

/// Fluent builder for [`WeeklySchedule`].
///
/// Setters accumulate raw intervals; nothing is validated until
/// [`ScheduleBuilder::build`], which runs the same normalization as the
/// factory constructors. Calling a setter twice for the same day adds a
/// second interval to that day.
///
/// ```
/// use rota_core::{Day, WeeklySchedule};
///
/// let weekday = ((6, 0), (18, 0));
/// let schedule = WeeklySchedule::builder()
///     .days(Day::Monday, Day::Friday, weekday)
///     .saturday(((6, 0), (12, 0)))
///     .timezone("Europe/Paris")
///     .build()?;
/// assert!(schedule.is_defined_for(Day::Saturday));
/// # Ok::<(), rota_core::ScheduleError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    raw: Vec<(Day, RawInterval)>,
    timezone: Option<String>,
}

impl ScheduleBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an on-interval for a day.
    #[must_use]
    pub fn day(mut self, day: Day, day_sched: RawInterval) -> Self {
        self.raw.push((day, day_sched));
        self
    }

    /// Adds the same on-interval for every day in the inclusive cyclic
    /// range `[day_start, day_end]`, wrapping past Sunday.
    #[must_use]
    pub fn days(mut self, day_start: Day, day_end: Day, day_sched: RawInterval) -> Self {
        for day in day_start.cyclic_range_to(day_end) {
            self.raw.push((day, day_sched));
        }
        self
    }

    /// Adds a Monday on-interval.
    #[must_use]
    pub fn monday(self, day_sched: RawInterval) -> Self {
        self.day(Day::Monday, day_sched)
    }

    /// Adds a Tuesday on-interval.
    #[must_use]
    pub fn tuesday(self, day_sched: RawInterval) -> Self {
        self.day(Day::Tuesday, day_sched)
    }

    /// Adds a Wednesday on-interval.
    #[must_use]
    pub fn wednesday(self, day_sched: RawInterval) -> Self {
        self.day(Day::Wednesday, day_sched)
    }

    /// Adds a Thursday on-interval.
    #[must_use]
    pub fn thursday(self, day_sched: RawInterval) -> Self {
        self.day(Day::Thursday, day_sched)
    }

    /// Adds a Friday on-interval.
    #[must_use]
    pub fn friday(self, day_sched: RawInterval) -> Self {
        self.day(Day::Friday, day_sched)
    }

    /// Adds a Saturday on-interval.
    #[must_use]
    pub fn saturday(self, day_sched: RawInterval) -> Self {
        self.day(Day::Saturday, day_sched)
    }

    /// Adds a Sunday on-interval.
    #[must_use]
    pub fn sunday(self, day_sched: RawInterval) -> Self {
        self.day(Day::Sunday, day_sched)
    }

    /// Sets the timezone to bind at build time.
    #[must_use]
    pub fn timezone(mut self, tz_name: &str) -> Self {
        self.timezone = Some(tz_name.to_string());
        self
    }

    /// ## Summary
    /// Validates the accumulated intervals and builds the schedule.
    ///
    /// ## Errors
    ///
    /// Returns `ScheduleError` on any out-of-range time, inverted or
    /// overlapping interval, or unknown timezone identifier.
    pub fn build(self) -> ScheduleResult<WeeklySchedule> {
        let mut days: [Vec<Interval>; 7] = Default::default();
        for (day, raw) in self.raw {
            days[day.index()].push(Interval::try_from(raw)?);
        }
        let schedule = WeeklySchedule::from_parts(days, None)?;
        match self.timezone {
            Some(name) => schedule.for_timezone(&name),
            None => Ok(schedule),
        }
    }
}
