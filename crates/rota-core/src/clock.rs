//! Wall-clock collaborator, injected so `is_on` stays deterministic under
//! test control.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Source of "now" for schedule evaluation.
pub trait Clock {
    /// Current instant in UTC, for schedules with a bound timezone.
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current naive wall-clock time, for schedules without a binding.
    fn now_local(&self) -> NaiveDateTime;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a fixed instant, the test stand-in for [`SystemClock`].
///
/// `now_local` reports the UTC wall-clock fields of the frozen instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Freezes the clock at the given instant.
    #[must_use]
    pub const fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }

    fn now_local(&self) -> NaiveDateTime {
        self.instant.naive_utc()
    }
}
