//! Serde support: schedules round-trip through a raw representation that
//! re-validates on deserialize, so a decoded schedule upholds the same
//! invariants as a constructed one.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::WeeklySchedule;
use crate::day::Day;
use crate::error::ScheduleError;
use crate::interval::Interval;

/// Wire form: day ordinals to interval lists, plus the zone name.
///
/// The working-day predicate is opaque and is not serialized.
#[derive(Serialize, Deserialize)]
struct RawSchedule {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    days: BTreeMap<u8, Vec<Interval>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let days = self
            .iter()
            .filter(|(_, intervals)| !intervals.is_empty())
            .map(|(day, intervals)| (day.ordinal(), intervals.to_vec()))
            .collect();
        RawSchedule {
            days,
            timezone: self.timezone.map(|tz| tz.name().to_string()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WeeklySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSchedule::deserialize(deserializer)?;

        let mut days: [Vec<Interval>; 7] = Default::default();
        for (ordinal, intervals) in raw.days {
            let day = Day::from_ordinal(ordinal).map_err(D::Error::custom)?;
            days[day.index()] = intervals;
        }

        let timezone = match raw.timezone {
            Some(name) => Some(
                Tz::from_str(&name)
                    .map_err(|_| D::Error::custom(ScheduleError::UnknownTimezone(name)))?,
            ),
            None => None,
        };

        Self::from_parts(days, timezone).map_err(D::Error::custom)
    }
}
