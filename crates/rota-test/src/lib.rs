//! rota - integration test support.
//!
//! Re-exports the workspace crates so integration tests use `rota_test::`
//! paths.

pub use rota_core as core;

pub use rota_core::{
    Clock, Day, FixedClock, Interval, RawInterval, ScheduleBuilder, ScheduleError, ScheduleResult,
    SystemClock, TimeOfDay, WeeklySchedule, WorkingDays,
};
