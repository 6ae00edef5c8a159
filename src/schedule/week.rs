use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::BusinessCalendar;
use crate::schedule::day_schedule::RawStaffDay;
use crate::schedule::{SlotDuration, StaffDaySchedule};
use crate::time::{InvalidInterval, InvalidWeekDayNumber, TimeInterval, WeekDay};

/// A staff member's full weekly working template: exactly one entry per
/// day of the week. A day the snapshot does not mention is a day off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStaffWeek", into = "RawStaffWeek")]
pub struct StaffWeek {
    days: [StaffDaySchedule; 7],
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidStaffWeek {
    #[error("invalid day key: {0}")]
    Day(#[from] InvalidWeekDayNumber),
    #[error("{day}: working day is missing its start or end time")]
    MissingTimes { day: WeekDay },
    #[error("{day}: {source}")]
    Hours {
        day: WeekDay,
        source: InvalidInterval,
    },
}

impl StaffWeek {
    /// A week with every day off.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            days: WeekDay::ALL.map(StaffDaySchedule::off),
        }
    }

    /// Builds a full week from any subset of days; unmentioned days are
    /// off and a later entry for the same day wins.
    #[must_use]
    pub fn from_days(days: impl IntoIterator<Item = StaffDaySchedule>) -> Self {
        let mut week = Self::empty();
        for day in days {
            week.days[day.day().as_index()] = day;
        }

        week
    }

    #[must_use]
    pub fn with_day(mut self, day: StaffDaySchedule) -> Self {
        self.days[day.day().as_index()] = day;
        self
    }

    /// The default derivation for first-time setup: mirror the business
    /// calendar exactly, working wherever the business is open, with the
    /// default slot granularity.
    ///
    /// An open day without business hours cannot be mirrored and becomes
    /// a day off, so the result always reconciles cleanly against the
    /// same calendar.
    #[must_use]
    pub fn mirroring(calendar: &BusinessCalendar) -> Self {
        Self {
            days: WeekDay::ALL.map(|day| {
                let business = calendar.week().day(day);

                match business.hours() {
                    Some(hours) if business.is_open() => {
                        StaffDaySchedule::working(day, hours, SlotDuration::DEFAULT)
                    }
                    _ => StaffDaySchedule::off(day),
                }
            }),
        }
    }

    #[must_use]
    pub fn day(&self, day: WeekDay) -> &StaffDaySchedule {
        &self.days[day.as_index()]
    }

    pub fn days(&self) -> impl Iterator<Item = &StaffDaySchedule> {
        self.days.iter()
    }
}

/// Wire form of the staff schedule snapshot: a map from day number
/// (0 = Sunday) to [`RawStaffDay`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct RawStaffWeek(BTreeMap<u8, RawStaffDay>);

impl TryFrom<RawStaffWeek> for StaffWeek {
    type Error = InvalidStaffWeek;

    fn try_from(raw: RawStaffWeek) -> Result<Self, Self::Error> {
        let mut week = StaffWeek::empty();

        for (key, raw_day) in raw.0 {
            let day = WeekDay::try_from(key)?;
            let slot_duration = raw_day.slot_duration_minutes.unwrap_or_default();

            let schedule = if raw_day.is_working {
                let (Some(start), Some(end)) = (raw_day.start_time, raw_day.end_time) else {
                    return Err(InvalidStaffWeek::MissingTimes { day });
                };

                let hours = TimeInterval::new(start, end)
                    .map_err(|source| InvalidStaffWeek::Hours { day, source })?;

                StaffDaySchedule::working(day, hours, slot_duration)
            } else {
                StaffDaySchedule::new(day, false, None, slot_duration)
            };

            week.days[day.as_index()] = schedule;
        }

        Ok(week)
    }
}

impl From<StaffWeek> for RawStaffWeek {
    fn from(week: StaffWeek) -> Self {
        Self(
            week.days
                .iter()
                .map(|day| (day.day().as_index() as u8, RawStaffDay::from(day)))
                .collect(),
        )
    }
}
