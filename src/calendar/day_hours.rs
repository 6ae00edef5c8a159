use serde::{Deserialize, Serialize};

use crate::time::{TimeInterval, TimeOfDay, WeekDay};

/// The operating hours of the business on one day of the week.
///
/// Well-formed data has `hours` present exactly when the day is open. An
/// open day without hours is still representable because upstream settings
/// screens have been known to produce it; reconciliation downgrades that
/// case to a warning instead of refusing the whole week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessDayHours {
    day: WeekDay,
    open: bool,
    hours: Option<TimeInterval>,
}

impl BusinessDayHours {
    #[must_use]
    pub fn new(day: WeekDay, open: bool, hours: Option<TimeInterval>) -> Self {
        Self {
            day,
            open,
            // a closed day has no operating interval
            hours: if open { hours } else { None },
        }
    }

    #[must_use]
    pub fn closed(day: WeekDay) -> Self {
        Self::new(day, false, None)
    }

    #[must_use]
    pub fn open(day: WeekDay, hours: TimeInterval) -> Self {
        Self::new(day, true, Some(hours))
    }

    #[must_use]
    pub const fn day(&self) -> WeekDay {
        self.day
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn hours(&self) -> Option<TimeInterval> {
        self.hours
    }
}

/// The per-day wire form of the business hours snapshot:
/// `{"isOpen": bool, "openTime": "HH:MM"?, "closeTime": "HH:MM"?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawBusinessDay {
    pub(crate) is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) open_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) close_time: Option<TimeOfDay>,
}

impl From<&BusinessDayHours> for RawBusinessDay {
    fn from(day: &BusinessDayHours) -> Self {
        Self {
            is_open: day.open,
            open_time: day.hours.map(|hours| hours.start()),
            close_time: day.hours.map(|hours| hours.end()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::time_of_day;

    #[test]
    fn test_closed_day_has_no_hours() {
        let hours = TimeInterval::new(time_of_day!(09:00), time_of_day!(17:00)).unwrap();
        let day = BusinessDayHours::new(WeekDay::Sunday, false, Some(hours));

        assert!(!day.is_open());
        assert_eq!(day.hours(), None);
    }

    #[test]
    fn test_open_day() {
        let hours = TimeInterval::new(time_of_day!(09:00), time_of_day!(17:00)).unwrap();
        let day = BusinessDayHours::open(WeekDay::Monday, hours);

        assert!(day.is_open());
        assert_eq!(day.hours(), Some(hours));
    }
}
