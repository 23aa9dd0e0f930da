//! Recurring weekly availability schedules.
//!
//! `rota-core` models a single repeating 7-day template: for each weekday,
//! zero or more closed on-intervals at minute granularity. Schedules are
//! immutable values: factories validate eagerly, transforms (invert,
//! start shift, timezone binding) return new schedules, and queries
//! evaluate an instant against the template in the schedule's bound
//! timezone.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use rota_core::{Day, WeeklySchedule};
//!
//! let schedule = WeeklySchedule::from_to(Day::Monday, Day::Friday, ((7, 0), (20, 0)))?
//!     .for_timezone("Europe/Paris")?;
//!
//! // Monday 2024-01-01 12:00 in Paris is 11:00 UTC
//! let noon = Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap();
//! assert_eq!(schedule.is_on_at(noon), Ok(true));
//!
//! let nights_and_weekends = schedule.invert();
//! assert_eq!(nights_and_weekends.is_on_at(noon), Ok(false));
//! # Ok::<(), rota_core::ScheduleError>(())
//! ```

pub mod clock;
pub mod day;
pub mod error;
pub mod interval;
pub mod schedule;
pub mod time;
pub mod working_days;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day::Day;
pub use error::{ScheduleError, ScheduleResult};
pub use interval::Interval;
pub use schedule::{RawInterval, ScheduleBuilder, WeeklySchedule};
pub use time::TimeOfDay;
pub use working_days::WorkingDays;
