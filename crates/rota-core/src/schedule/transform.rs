//! Interval-algebra transforms: per-day inversion and start shifting.

use super::WeeklySchedule;
use crate::error::{ScheduleError, ScheduleResult};
use crate::interval::Interval;
use crate::time::TimeOfDay;

impl WeeklySchedule {
    /// ## Summary
    /// Returns the per-day complement of this schedule.
    ///
    /// For each day independently, the result is on exactly in the gaps
    /// before, between, and after the input's intervals, within the
    /// 00:00-23:59 day bounds: an empty day inverts to the full day, a
    /// fully covered day inverts to empty, and `[07:00-20:00]` inverts to
    /// `[00:00-07:00]` and `[20:00-23:59]`. Gap endpoints touch the input
    /// interval endpoints, so inverting twice restores any schedule whose
    /// intervals are wider than a single minute.
    ///
    /// The complement never reaches across midnight into the next day.
    /// The timezone binding is carried over; a working-day predicate is
    /// not.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            days: std::array::from_fn(|i| invert_day(&self.days[i])),
            timezone: self.timezone,
            working_days: None,
        }
    }

    /// ## Summary
    /// Returns a schedule with every interval's start postponed by the
    /// given duration, ends unchanged.
    ///
    /// The shift is applied per interval, not per day, so multi-interval
    /// days shift correctly. An interval whose postponed start passes its
    /// end is consumed and dropped from the result; with its end fixed,
    /// an interval can only shrink, never roll into the next day.
    ///
    /// ## Errors
    ///
    /// Returns `ScheduleError::NegativeShift` when the total duration is
    /// negative.
    pub fn shift_start(&self, hours: i64, minutes: i64) -> ScheduleResult<Self> {
        let shift = hours * 60 + minutes;
        if shift < 0 {
            return Err(ScheduleError::NegativeShift { hours, minutes });
        }
        Ok(Self {
            days: std::array::from_fn(|i| shift_day(&self.days[i], shift)),
            timezone: self.timezone,
            working_days: self.working_days.clone(),
        })
    }
}

fn invert_day(intervals: &[Interval]) -> Vec<Interval> {
    let mut gaps: Vec<Interval> = Vec::new();
    let mut cursor = TimeOfDay::MIDNIGHT;
    for interval in intervals {
        if cursor < interval.start() {
            push_gap(&mut gaps, Interval::new_unchecked(cursor, interval.start()));
        }
        cursor = cursor.max(interval.end());
    }
    if cursor < TimeOfDay::LAST_MINUTE {
        push_gap(&mut gaps, Interval::new_unchecked(cursor, TimeOfDay::LAST_MINUTE));
    }
    gaps
}

/// Appends a gap, coalescing with its predecessor when they touch.
///
/// A zero-width source interval would otherwise leave two gaps sharing a
/// minute, which the schedule invariant forbids.
fn push_gap(gaps: &mut Vec<Interval>, gap: Interval) {
    if let Some(last) = gaps.last_mut() {
        if last.end() == gap.start() {
            *last = Interval::new_unchecked(last.start(), gap.end());
            return;
        }
    }
    gaps.push(gap);
}

fn shift_day(intervals: &[Interval], shift_minutes: i64) -> Vec<Interval> {
    intervals
        .iter()
        .filter_map(|interval| {
            let start = i64::from(interval.start().minute_of_day()) + shift_minutes;
            let end = i64::from(interval.end().minute_of_day());
            if start > end {
                tracing::trace!(%interval, "interval consumed by start shift");
                return None;
            }
            // start <= end < 1440, so the conversion cannot fail
            let start = u16::try_from(start).ok()?;
            Some(Interval::new_unchecked(
                TimeOfDay::from_minute_of_day(start),
                interval.end(),
            ))
        })
        .collect()
}
