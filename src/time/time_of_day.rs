use std::fmt;
use std::str::FromStr;

use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::utils::StrExt;

/// A wall-clock time within a single day, stored as minutes since midnight.
///
/// The largest representable value is `23:59` (1439 minutes); there is no
/// representation for the end-of-day instant itself, intervals are half-open
/// instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u16,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Time is not valid: {hour:02}:{minute:02}")]
pub struct InvalidTime {
    hour: u8,
    minute: u8,
}

#[macro_export]
macro_rules! time_of_day {
    ( $hour:literal : $minute:literal ) => {{
        static_assertions::const_assert!($hour < 24);
        static_assertions::const_assert!($minute < 60);

        match $crate::time::TimeOfDay::from_minutes($hour * 60 + $minute) {
            Ok(time) => time,
            // unreachable, the bounds are checked above
            Err(_) => $crate::time::TimeOfDay::MIDNIGHT,
        }
    }};
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self { minutes: 0 };

    const MINUTES_PER_DAY: u16 = 24 * 60;

    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime { hour, minute });
        }

        Ok(Self {
            minutes: hour as u16 * 60 + minute as u16,
        })
    }

    pub const fn from_minutes(minutes: u16) -> Result<Self, InvalidMinutes> {
        if minutes >= Self::MINUTES_PER_DAY {
            return Err(InvalidMinutes { minutes });
        }

        Ok(Self { minutes })
    }

    #[must_use]
    pub const fn as_minutes(&self) -> u16 {
        self.minutes
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }

    /// Adds the given number of minutes, saturating at `23:59`.
    #[must_use]
    pub const fn saturating_add_minutes(&self, minutes: u16) -> Self {
        let sum = self.minutes.saturating_add(minutes);
        if sum >= Self::MINUTES_PER_DAY {
            Self {
                minutes: Self::MINUTES_PER_DAY - 1,
            }
        } else {
            Self { minutes: sum }
        }
    }

    /// Minutes from `self` up to `other`, zero when `other` is earlier.
    #[must_use]
    pub const fn minutes_until(&self, other: Self) -> u16 {
        other.minutes.saturating_sub(self.minutes)
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Time is not valid: {minutes} minutes since midnight")]
pub struct InvalidMinutes {
    minutes: u16,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let [Some(hour), Some(minute)] = string.split_exact::<2>(":") else {
            anyhow::bail!("expected a `HH:MM` time, got `{string}`");
        };

        Ok(Self::new(hour.parse()?, minute.parse()?)?)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_bounds() {
        assert_eq!(TimeOfDay::new(9, 30).unwrap().as_minutes(), 9 * 60 + 30);
        assert_eq!(TimeOfDay::new(23, 59).unwrap().as_minutes(), 1439);
        assert!(TimeOfDay::new(24, 0).is_err());
        assert!(TimeOfDay::new(12, 60).is_err());
        assert!(TimeOfDay::from_minutes(1440).is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for string in ["00:00", "09:05", "23:59"] {
            let time: TimeOfDay = string.parse().unwrap();
            assert_eq!(time.to_string(), string);
        }

        assert!("9".parse::<TimeOfDay>().is_err());
        assert!("25:00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_macro() {
        assert_eq!(time_of_day!(09:30), TimeOfDay::new(9, 30).unwrap());
        assert_eq!(time_of_day!(00:00), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn test_saturating_add() {
        assert_eq!(
            time_of_day!(09:00).saturating_add_minutes(90),
            time_of_day!(10:30)
        );
        assert_eq!(
            time_of_day!(23:00).saturating_add_minutes(120),
            time_of_day!(23:59)
        );
    }

    #[test]
    fn test_serde_as_string() {
        let time = time_of_day!(17:45);
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"17:45\"");
        assert_eq!(
            serde_json::from_str::<TimeOfDay>("\"17:45\"").unwrap(),
            time
        );
    }
}
