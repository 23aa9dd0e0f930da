#![allow(clippy::expect_used)]
//! Construction, validation, and equality of weekly schedules.

use chrono_tz::Tz;
use rota_test::{Day, Interval, ScheduleError, WeeklySchedule};

use super::helpers::*;

#[test_log::test]
fn complex_schedule_reads_back_normalized() {
    let schedule = complex_schedule()
        .for_timezone("Europe/Paris")
        .expect("known zone");

    assert_eq!(schedule.timezone(), Some(Tz::Europe__Paris));
    assert_eq!(
        schedule.intervals_for(Day::Monday),
        &[
            Interval::try_from(((0, 0), (7, 0))).expect("valid"),
            Interval::try_from(((20, 0), (23, 59))).expect("valid"),
        ]
    );
    assert_eq!(
        schedule.intervals_for(Day::Saturday),
        &[Interval::FULL_DAY]
    );
}

#[test_log::test]
fn fluent_builder_matches_raw_mapping() {
    let weekday = ((6, 0), (18, 0));
    let saturday = ((6, 0), (12, 0));

    let built = WeeklySchedule::builder()
        .timezone("Europe/Paris")
        .monday(weekday)
        .tuesday(weekday)
        .wednesday(weekday)
        .thursday(weekday)
        .friday(weekday)
        .saturday(saturday)
        .build()
        .expect("valid build");

    let raw = WeeklySchedule::from_raw(&[
        (0, &[weekday]),
        (1, &[weekday]),
        (2, &[weekday]),
        (3, &[weekday]),
        (4, &[weekday]),
        (5, &[saturday]),
    ])
    .expect("valid mapping")
    .for_timezone("Europe/Paris")
    .expect("known zone");

    assert_eq!(built, raw);
}

#[test_log::test]
fn from_to_equals_explicit_five_day_mapping() {
    let from_to = WeeklySchedule::from_to(Day::Monday, Day::Friday, ((7, 0), (20, 0)))
        .expect("valid range")
        .for_timezone("UTC")
        .expect("known zone");
    let raw = typical_schedule().for_timezone("UTC").expect("known zone");

    assert_eq!(from_to, raw);
    assert_eq!(from_to.is_on_at(at_utc(2024, 1, 6, 10, 0)), Ok(false)); // Saturday
    assert_eq!(from_to.is_on_at(at_utc(2024, 1, 7, 10, 0)), Ok(false)); // Sunday
}

#[test_log::test]
fn from_to_wraps_the_week_boundary() {
    let schedule = WeeklySchedule::from_to(Day::Saturday, Day::Tuesday, ((9, 0), (17, 0)))
        .expect("valid range");

    let expected_on = [Day::Saturday, Day::Sunday, Day::Monday, Day::Tuesday];
    for day in Day::ALL {
        assert_eq!(
            schedule.is_defined_for(day),
            expected_on.contains(&day),
            "wrong coverage for {day}"
        );
    }
}

#[test_log::test]
fn validation_errors_surface_at_construction() {
    assert_eq!(
        WeeklySchedule::from_raw(&[(7, &[((0, 0), (23, 59))])]),
        Err(ScheduleError::DayOutOfRange(7))
    );
    assert!(matches!(
        WeeklySchedule::from_raw(&[(0, &[((24, 0), (25, 0))])]),
        Err(ScheduleError::TimeOutOfRange { hour: 24, .. })
    ));
    assert!(matches!(
        WeeklySchedule::from_raw(&[(0, &[((10, 0), (9, 0))])]),
        Err(ScheduleError::InvertedInterval { .. })
    ));
    assert!(matches!(
        WeeklySchedule::from_raw(&[(0, &[((7, 0), (12, 0)), ((10, 0), (15, 0))])]),
        Err(ScheduleError::OverlappingIntervals { .. })
    ));
    assert_eq!(
        typical_schedule().for_timezone("invalid"),
        Err(ScheduleError::UnknownTimezone("invalid".to_string()))
    );
}

#[test_log::test]
fn back_to_back_intervals_may_not_share_an_endpoint() {
    // closed boundaries: 07:00 would be on in both intervals
    let err = WeeklySchedule::from_raw(&[(0, &[((0, 0), (7, 0)), ((7, 0), (20, 0))])])
        .expect_err("shared endpoint must be rejected");
    assert!(matches!(err, ScheduleError::OverlappingIntervals { .. }));
}

#[test_log::test]
fn construction_is_deterministic() {
    assert_eq!(typical_schedule(), typical_schedule());
    let reordered = WeeklySchedule::from_raw(&[
        (4, &[((7, 0), (20, 0))]),
        (3, &[((7, 0), (20, 0))]),
        (2, &[((7, 0), (20, 0))]),
        (1, &[((7, 0), (20, 0))]),
        (0, &[((7, 0), (20, 0))]),
    ])
    .expect("valid mapping");
    assert_eq!(reordered, typical_schedule());
}

#[test_log::test]
fn is_defined_for_reports_configured_days() {
    let schedule = WeeklySchedule::from_to(Day::Monday, Day::Friday, ((6, 0), (18, 0)))
        .expect("valid range");
    for day in Day::ALL {
        assert_eq!(schedule.is_defined_for(day), day.ordinal() < 5);
    }
}
