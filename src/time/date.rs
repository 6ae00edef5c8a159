use core::fmt;
use core::str::FromStr;

use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::time::WeekDay;
use crate::utils::StrExt;

/// A proleptic-Gregorian calendar date.
///
/// Displayed, parsed and serialized as ISO-8601 (`YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        static_assertions::const_assert!($month >= 1 && $month <= 12);
        static_assertions::const_assert!($day >= 1);
        static_assertions::const_assert!(
            $day <= $crate::time::Date::days_in_month($year, $month)
        );

        $crate::time::Date::new_const($year, $month, $day)
    }};
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidDate {
    #[error("month must be between 1 and 12, got {month}")]
    InvalidMonth { month: u8 },
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

impl Date {
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, InvalidDate> {
        if month == 0 || month > 12 {
            return Err(InvalidDate::InvalidMonth { month });
        }

        if day == 0 || day > Self::days_in_month(year, month) {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// Const constructor for the `date!` macro, panics on an invalid date.
    #[doc(hidden)]
    #[must_use]
    pub const fn new_const(year: i32, month: u8, day: u8) -> Self {
        if month == 0 || month > 12 || day == 0 || day > Self::days_in_month(year, month) {
            const_panic::concat_panic!(
                "Invalid date `",
                year,
                "-",
                month,
                "-",
                day,
                "`."
            );
        }

        Self { year, month, day }
    }

    #[must_use]
    pub const fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    #[must_use]
    pub const fn days_in_month(year: i32, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if Self::is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
        }
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    // civil-from-days offset: day 0 is 1970-01-01
    pub(crate) const fn days_from_epoch(&self) -> i64 {
        let y = self.year as i64 - (self.month <= 2) as i64;
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let mp = (self.month as i64 + 9) % 12;
        let doy = (153 * mp + 2) / 5 + self.day as i64 - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

        era * 146097 + doe - 719468
    }

    #[must_use]
    pub const fn week_day(&self) -> WeekDay {
        // 1970-01-01 was a Thursday
        let index = ((self.days_from_epoch() + 4) % 7 + 7) % 7;

        WeekDay::from_index(index as u8)
    }

    /// The next calendar day.
    #[must_use]
    pub const fn succ(&self) -> Self {
        if self.day < Self::days_in_month(self.year, self.month) {
            Self {
                year: self.year,
                month: self.month,
                day: self.day + 1,
            }
        } else if self.month < 12 {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") else {
            anyhow::bail!("expected a `YYYY-MM-DD` date, got `{string}`");
        };

        Ok(Self::new(year.parse()?, month.parse()?, day.parse()?)?)
    }
}

impl TryFrom<String> for Date {
    type Error = anyhow::Error;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        string.parse()
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
