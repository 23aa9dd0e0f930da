//! Weekly availability schedule: a single repeating 7-day template.

mod builder;
mod serde;
mod transform;

pub use builder::ScheduleBuilder;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::clock::{Clock, SystemClock};
use crate::day::Day;
use crate::error::{ScheduleError, ScheduleResult};
use crate::interval::Interval;
use crate::time::TimeOfDay;
use crate::working_days::WorkingDays;

/// Raw `((hour, minute), (hour, minute))` pair accepted by the untyped
/// constructors.
pub type RawInterval = ((u8, u8), (u8, u8));

/// A recurring weekly availability template.
///
/// Holds, per weekday, an ordered list of non-overlapping closed
/// on-intervals, plus an optional timezone binding used only at evaluation
/// time. The value is immutable after construction: every transform
/// returns a new schedule, so a shared instance can be queried from any
/// number of threads without synchronization.
///
/// Two schedules are equal when their normalized per-day interval lists
/// and their timezone bindings match. The optional working-day predicate
/// participates by identity only (the same attached predicate, or none on
/// both sides), and is neither serialized nor carried through `invert`.
#[derive(Clone)]
pub struct WeeklySchedule {
    /// Per-day interval lists indexed by `Day` ordinal, each sorted by
    /// start and pairwise disjoint.
    days: [Vec<Interval>; 7],
    timezone: Option<Tz>,
    working_days: Option<Arc<dyn WorkingDays>>,
}

impl WeeklySchedule {
    /// ## Summary
    /// Builds a schedule from a raw day-index mapping.
    ///
    /// Each entry pairs a day index (0 = Monday .. 6 = Sunday) with that
    /// day's on-intervals as `((hour, minute), (hour, minute))` pairs.
    /// Days not mentioned are off. Intervals need not be pre-sorted;
    /// construction normalizes the order.
    ///
    /// ## Errors
    ///
    /// Returns `ScheduleError` if a day index exceeds 6, an hour or minute
    /// is out of range, an interval starts after it ends, or two intervals
    /// on the same day overlap. With closed intervals, sharing an endpoint
    /// is overlap: merging is never silent and stays the caller's call.
    #[tracing::instrument(skip(mapping), fields(entries = mapping.len()))]
    pub fn from_raw(mapping: &[(u8, &[RawInterval])]) -> ScheduleResult<Self> {
        let mut days: [Vec<Interval>; 7] = Default::default();
        for &(day_index, intervals) in mapping {
            let day = Day::from_ordinal(day_index)?;
            for &raw in intervals {
                days[day.index()].push(Interval::try_from(raw)?);
            }
        }
        Self::from_parts(days, None)
    }

    /// ## Summary
    /// Applies the same on-interval to every day in the inclusive cyclic
    /// range `[day_start, day_end]`.
    ///
    /// The range wraps past Sunday: `from_to(Saturday, Tuesday, ..)`
    /// covers Saturday, Sunday, Monday, and Tuesday.
    ///
    /// ## Errors
    ///
    /// Returns `ScheduleError` if the interval's times are out of range or
    /// its start is after its end.
    pub fn from_to(day_start: Day, day_end: Day, day_sched: RawInterval) -> ScheduleResult<Self> {
        let interval = Interval::try_from(day_sched)?;
        let mut days: [Vec<Interval>; 7] = Default::default();
        for day in day_start.cyclic_range_to(day_end) {
            days[day.index()].push(interval);
        }
        Self::from_parts(days, None)
    }

    /// Schedule that is on around the clock, every day, bound to UTC.
    #[must_use]
    pub fn always() -> Self {
        Self {
            days: std::array::from_fn(|_| vec![Interval::FULL_DAY]),
            timezone: Some(Tz::UTC),
            working_days: None,
        }
    }

    /// Schedule that is never on, bound to UTC.
    #[must_use]
    pub fn never() -> Self {
        Self {
            days: Default::default(),
            timezone: Some(Tz::UTC),
            working_days: None,
        }
    }

    /// Returns a fluent per-day builder.
    #[must_use]
    pub fn builder() -> ScheduleBuilder {
        ScheduleBuilder::new()
    }

    /// Normalizing constructor shared by every factory path.
    fn from_parts(mut days: [Vec<Interval>; 7], timezone: Option<Tz>) -> ScheduleResult<Self> {
        for day in Day::ALL {
            normalize_day(day, &mut days[day.index()])?;
        }
        tracing::debug!(
            defined_days = days.iter().filter(|d| !d.is_empty()).count(),
            timezone = timezone.map(|tz| tz.name()),
            "constructed weekly schedule"
        );
        Ok(Self {
            days,
            timezone,
            working_days: None,
        })
    }

    /// ## Summary
    /// Returns a copy bound to the given timezone for evaluation.
    ///
    /// Binding, not mutation: the receiver keeps its own binding while the
    /// returned schedule shares the same interval data with the new one.
    ///
    /// ## Errors
    ///
    /// Returns `ScheduleError::UnknownTimezone` if the identifier is not a
    /// recognized zone name.
    pub fn for_timezone(&self, tz_name: &str) -> ScheduleResult<Self> {
        let tz = Tz::from_str(tz_name)
            .map_err(|_| ScheduleError::UnknownTimezone(tz_name.to_string()))?;
        Ok(Self {
            timezone: Some(tz),
            ..self.clone()
        })
    }

    /// ## Summary
    /// Returns a copy carrying a working-day predicate.
    ///
    /// When present, evaluation consults the predicate first: instants on
    /// non-working days are off regardless of the day's intervals.
    #[must_use]
    pub fn with_working_days(&self, working_days: impl WorkingDays + 'static) -> Self {
        Self {
            working_days: Some(Arc::new(working_days)),
            ..self.clone()
        }
    }

    /// ## Summary
    /// Evaluates the schedule at an absolute instant.
    ///
    /// The instant is converted into the bound timezone; the resulting
    /// local weekday and time of day are matched against that day's
    /// intervals with boundary-inclusive containment.
    ///
    /// ## Errors
    ///
    /// Returns `ScheduleError::UnboundTimezone` if the schedule has no
    /// bound timezone; use [`WeeklySchedule::is_on_at_local`] for naive
    /// evaluation.
    pub fn is_on_at(&self, instant: DateTime<Utc>) -> ScheduleResult<bool> {
        let Some(tz) = self.timezone else {
            return Err(ScheduleError::UnboundTimezone);
        };
        let local = instant.with_timezone(&tz);
        if let Some(working_days) = &self.working_days {
            if !working_days.is_working_day(local.date_naive()) {
                tracing::trace!(%instant, "off: not a working day");
                return Ok(false);
            }
        }
        Ok(self.on_at(Day::from(local.weekday()), TimeOfDay::from(local.time())))
    }

    /// ## Summary
    /// Evaluates the schedule at a naive wall-clock time.
    ///
    /// ## Errors
    ///
    /// Returns `ScheduleError::NaiveQueryOnZoned` if the schedule has a
    /// bound timezone; a bound schedule only answers instant-based
    /// queries.
    pub fn is_on_at_local(&self, local: NaiveDateTime) -> ScheduleResult<bool> {
        if let Some(tz) = self.timezone {
            return Err(ScheduleError::NaiveQueryOnZoned(tz));
        }
        if let Some(working_days) = &self.working_days {
            if !working_days.is_working_day(local.date()) {
                tracing::trace!(%local, "off: not a working day");
                return Ok(false);
            }
        }
        Ok(self.on_at(Day::from(local.weekday()), TimeOfDay::from(local.time())))
    }

    /// ## Summary
    /// Evaluates the schedule at the current instant via the system clock.
    ///
    /// ## Errors
    ///
    /// Propagates the naive/aware mismatch errors of the underlying query.
    pub fn is_on(&self) -> ScheduleResult<bool> {
        self.is_on_with(&SystemClock)
    }

    /// ## Summary
    /// Evaluates the schedule at the current instant of an injected clock.
    ///
    /// Bound schedules use the clock's UTC instant; unbound schedules use
    /// its naive local time.
    ///
    /// ## Errors
    ///
    /// Propagates the naive/aware mismatch errors of the underlying query.
    pub fn is_on_with(&self, clock: &impl Clock) -> ScheduleResult<bool> {
        if self.timezone.is_some() {
            self.is_on_at(clock.now_utc())
        } else {
            self.is_on_at_local(clock.now_local())
        }
    }

    fn on_at(&self, day: Day, time: TimeOfDay) -> bool {
        self.days[day.index()].iter().any(|iv| iv.contains(time))
    }

    /// Returns the normalized intervals for a day, sorted by start time.
    #[must_use]
    pub fn intervals_for(&self, day: Day) -> &[Interval] {
        &self.days[day.index()]
    }

    /// Whether the day has at least one on-interval.
    #[must_use]
    pub fn is_defined_for(&self, day: Day) -> bool {
        !self.days[day.index()].is_empty()
    }

    /// Returns the bound timezone, if any.
    #[must_use]
    pub const fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    /// Iterates over all seven days with their interval lists.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[Interval])> {
        Day::ALL.into_iter().map(|day| (day, self.intervals_for(day)))
    }
}

impl Default for WeeklySchedule {
    /// An empty, unbound schedule.
    fn default() -> Self {
        Self {
            days: Default::default(),
            timezone: None,
            working_days: None,
        }
    }
}

impl PartialEq for WeeklySchedule {
    fn eq(&self, other: &Self) -> bool {
        self.days == other.days
            && self.timezone == other.timezone
            && match (&self.working_days, &other.working_days) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl Eq for WeeklySchedule {}

impl fmt::Debug for WeeklySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeeklySchedule")
            .field("days", &self.days)
            .field("timezone", &self.timezone)
            .field("working_days", &self.working_days.as_ref().map(|_| "<predicate>"))
            .finish()
    }
}

impl fmt::Display for WeeklySchedule {
    /// Compact per-day listing, e.g.
    /// `Mon 07:00-20:00; Sat 00:00-23:59 (Europe/Paris)`; a schedule with
    /// no intervals prints as `never`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut any = false;
        for (day, intervals) in self.iter() {
            if intervals.is_empty() {
                continue;
            }
            if any {
                f.write_str("; ")?;
            }
            any = true;
            write!(f, "{}", day.short_str())?;
            for (i, interval) in intervals.iter().enumerate() {
                if i == 0 {
                    write!(f, " {interval}")?;
                } else {
                    write!(f, ", {interval}")?;
                }
            }
        }
        if !any {
            f.write_str("never")?;
        }
        if let Some(tz) = self.timezone {
            write!(f, " ({})", tz.name())?;
        }
        Ok(())
    }
}

fn normalize_day(day: Day, intervals: &mut Vec<Interval>) -> ScheduleResult<()> {
    intervals.sort_unstable();
    for pair in intervals.windows(2) {
        // closed intervals make a shared endpoint ambiguous, so touching
        // counts as overlap
        if pair[1].start() <= pair[0].end() {
            return Err(ScheduleError::OverlappingIntervals {
                day,
                first: pair[0],
                second: pair[1],
            });
        }
    }
    Ok(())
}
