use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::day_hours::RawBusinessDay;
use crate::calendar::{BusinessClosure, BusinessDayHours};
use crate::time::{Date, InvalidInterval, InvalidWeekDayNumber, TimeInterval, WeekDay};

/// The weekly operating template: exactly one entry per day of the week.
///
/// A day the snapshot does not mention is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBusinessWeek", into = "RawBusinessWeek")]
pub struct BusinessWeek {
    days: [BusinessDayHours; 7],
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidBusinessWeek {
    #[error("invalid day key: {0}")]
    Day(#[from] InvalidWeekDayNumber),
    #[error("{day}: {source}")]
    Hours {
        day: WeekDay,
        source: InvalidInterval,
    },
}

impl BusinessWeek {
    /// A week with every day closed.
    #[must_use]
    pub fn closed() -> Self {
        Self {
            days: WeekDay::ALL.map(BusinessDayHours::closed),
        }
    }

    /// Builds a full week from any subset of days; unmentioned days are
    /// closed and a later entry for the same day wins.
    #[must_use]
    pub fn from_days(days: impl IntoIterator<Item = BusinessDayHours>) -> Self {
        let mut week = Self::closed();
        for day in days {
            week.days[day.day().as_index()] = day;
        }

        week
    }

    #[must_use]
    pub fn with_day(mut self, day: BusinessDayHours) -> Self {
        self.days[day.day().as_index()] = day;
        self
    }

    #[must_use]
    pub fn day(&self, day: WeekDay) -> &BusinessDayHours {
        &self.days[day.as_index()]
    }

    pub fn days(&self) -> impl Iterator<Item = &BusinessDayHours> {
        self.days.iter()
    }
}

/// Wire form of the weekly snapshot: a map from day number (0 = Sunday)
/// to [`RawBusinessDay`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct RawBusinessWeek(BTreeMap<u8, RawBusinessDay>);

impl TryFrom<RawBusinessWeek> for BusinessWeek {
    type Error = InvalidBusinessWeek;

    fn try_from(raw: RawBusinessWeek) -> Result<Self, Self::Error> {
        let mut week = Self::closed();

        for (key, raw_day) in raw.0 {
            let day = WeekDay::try_from(key)?;

            let hours = match (raw_day.open_time, raw_day.close_time) {
                (Some(open), Some(close)) => Some(
                    TimeInterval::new(open, close)
                        .map_err(|source| InvalidBusinessWeek::Hours { day, source })?,
                ),
                // a half-specified window is treated as not set
                _ => None,
            };

            week.days[day.as_index()] = BusinessDayHours::new(day, raw_day.is_open, hours);
        }

        Ok(week)
    }
}

impl From<BusinessWeek> for RawBusinessWeek {
    fn from(week: BusinessWeek) -> Self {
        Self(
            week.days
                .iter()
                .map(|day| (day.day().as_index() as u8, RawBusinessDay::from(day)))
                .collect(),
        )
    }
}

/// The upstream constraint for all staff scheduling: the weekly operating
/// template plus full-day closures (holidays and the like).
///
/// Read-only from the scheduling core's point of view; business-settings
/// management owns and mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCalendar {
    week: BusinessWeek,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    closures: Vec<BusinessClosure>,
}

impl BusinessCalendar {
    #[must_use]
    pub fn new(week: BusinessWeek, closures: Vec<BusinessClosure>) -> Self {
        Self { week, closures }
    }

    #[must_use]
    pub const fn week(&self) -> &BusinessWeek {
        &self.week
    }

    #[must_use]
    pub fn closures(&self) -> &[BusinessClosure] {
        &self.closures
    }

    #[must_use]
    pub fn closure_on(&self, date: Date) -> Option<&BusinessClosure> {
        self.closures.iter().find(|closure| closure.date() == date)
    }

    /// Whether the business operates on `date`: a closure always wins,
    /// otherwise the weekly template decides.
    #[must_use]
    pub fn is_open_on(&self, date: Date) -> bool {
        self.closure_on(date).is_none() && self.week.day(date.week_day()).is_open()
    }

    /// The operating interval on `date`, `None` when closed or when the
    /// open day has no hours set.
    #[must_use]
    pub fn hours_on(&self, date: Date) -> Option<TimeInterval> {
        if !self.is_open_on(date) {
            return None;
        }

        self.week.day(date.week_day()).hours()
    }
}

impl From<BusinessWeek> for BusinessCalendar {
    fn from(week: BusinessWeek) -> Self {
        Self::new(week, Vec::new())
    }
}
