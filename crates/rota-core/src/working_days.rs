//! Working-day calendar seam.
//!
//! Holiday and calendar logic stays outside the core: a schedule only
//! consults an opaque predicate deciding whether a local calendar date
//! counts as a working day.

use chrono::NaiveDate;

/// Opaque working-day predicate supplied by an external calendar.
///
/// Implemented for any `Fn(NaiveDate) -> bool`, so a closure is enough:
///
/// ```
/// use chrono::{Datelike, NaiveDate, Weekday};
/// use rota_core::WorkingDays;
///
/// let weekdays_only = |date: NaiveDate| {
///     !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
/// };
/// assert!(weekdays_only.is_working_day(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
/// ));
/// ```
pub trait WorkingDays: Send + Sync {
    /// Whether the given local calendar date is a working day.
    fn is_working_day(&self, date: NaiveDate) -> bool;
}

impl<F> WorkingDays for F
where
    F: Fn(NaiveDate) -> bool + Send + Sync,
{
    fn is_working_day(&self, date: NaiveDate) -> bool {
        self(date)
    }
}
