#![allow(clippy::expect_used)]
//! Invert and start-shift transforms through the public API.

use chrono::NaiveDate;
use chrono_tz::Tz;
use rota_test::{Day, FixedClock, Interval, ScheduleError, WeeklySchedule};

use super::helpers::*;

#[test_log::test]
fn invert_swaps_typical_and_complex() {
    let typical = typical_schedule().for_timezone("UTC").expect("known zone");
    let complex = complex_schedule().for_timezone("UTC").expect("known zone");

    assert_eq!(typical.invert(), complex);
    assert_eq!(complex.invert(), typical);
    assert_ne!(typical.invert(), typical);
}

#[test_log::test]
fn invert_round_trips() {
    let schedule = complex_schedule().for_timezone("Europe/Paris").expect("known zone");
    assert_eq!(schedule.invert().invert(), schedule);
}

#[test_log::test]
fn invert_keeps_the_timezone_binding() {
    let schedule = typical_schedule().for_timezone("Europe/Paris").expect("known zone");
    assert_eq!(schedule.invert().timezone(), Some(Tz::Europe__Paris));
}

#[test_log::test]
fn invert_drops_the_working_day_predicate() {
    let schedule = typical_schedule()
        .for_timezone("UTC")
        .expect("known zone")
        .with_working_days(|_: NaiveDate| false);

    // the gated schedule is off everywhere; its inverse evaluates on the
    // intervals alone
    let holiday_evening = at_utc(2024, 1, 1, 22, 0);
    assert_eq!(schedule.is_on_at(holiday_evening), Ok(false));
    assert_eq!(schedule.invert().is_on_at(holiday_evening), Ok(true));
}

#[test_log::test]
fn invert_of_always_has_no_intervals() {
    let inverted = WeeklySchedule::always().invert();
    for day in Day::ALL {
        assert!(inverted.intervals_for(day).is_empty());
    }
    assert_eq!(inverted, WeeklySchedule::never());
    assert_eq!(inverted.invert(), WeeklySchedule::always());
}

#[test_log::test]
fn shift_start_erodes_intervals_behind_a_frozen_clock() {
    let schedule = complex_schedule()
        .for_timezone("UTC")
        .expect("known zone")
        .shift_start(1, 0)
        .expect("non-negative shift");

    // Friday 2022-02-11: morning slot is now 01:00-07:00, evening 21:00-23:59
    let cases = [
        ((2022, 2, 11, 0, 15), false),
        ((2022, 2, 11, 1, 15), true),
        ((2022, 2, 11, 6, 59), true),
        ((2022, 2, 11, 7, 1), false),
        ((2022, 2, 11, 20, 15), false),
        ((2022, 2, 11, 21, 15), true),
    ];
    for ((y, mo, d, h, mi), expected) in cases {
        let clock = FixedClock::at(at_utc(y, mo, d, h, mi));
        assert_eq!(
            schedule.is_on_with(&clock),
            Ok(expected),
            "at {y}-{mo:02}-{d:02} {h:02}:{mi:02}Z"
        );
    }
}

#[test_log::test]
fn long_shift_consumes_the_evening_slot() {
    let shifted = complex_schedule()
        .shift_start(5, 0)
        .expect("non-negative shift");

    for day in [Day::Monday, Day::Friday] {
        assert_eq!(
            shifted.intervals_for(day),
            &[Interval::try_from(((5, 0), (7, 0))).expect("valid")]
        );
    }
    for day in [Day::Saturday, Day::Sunday] {
        assert_eq!(
            shifted.intervals_for(day),
            &[Interval::try_from(((5, 0), (23, 59))).expect("valid")]
        );
    }
    assert_eq!(shifted.to_string().matches("20:00").count(), 0);
}

#[test_log::test]
fn shift_start_shrinks_width_but_keeps_the_end() {
    let schedule = WeeklySchedule::from_raw(&[(0, &[((7, 0), (20, 0))])]).expect("valid mapping");
    let shifted = schedule.shift_start(1, 0).expect("non-negative shift");
    let interval = shifted.intervals_for(Day::Monday)[0];
    assert_eq!(interval, Interval::try_from(((8, 0), (20, 0))).expect("valid"));
    assert_eq!(interval.width_minutes(), 720);
}

#[test_log::test]
fn negative_shift_is_rejected() {
    assert_eq!(
        complex_schedule().shift_start(-1, 0),
        Err(ScheduleError::NegativeShift { hours: -1, minutes: 0 })
    );
}

#[test_log::test]
fn rebinding_leaves_the_original_untouched() {
    let utc = complex_schedule().for_timezone("UTC").expect("known zone");
    let luxembourg = utc.for_timezone("Europe/Luxembourg").expect("known zone");

    assert_ne!(utc, luxembourg);
    assert_eq!(utc.timezone(), Some(Tz::UTC));
    assert_eq!(luxembourg.timezone(), Some(Tz::Europe__Luxembourg));
    for day in Day::ALL {
        assert_eq!(utc.intervals_for(day), luxembourg.intervals_for(day));
    }
}
