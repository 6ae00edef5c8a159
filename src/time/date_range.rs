use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::Date;

/// An inclusive range of calendar dates `[start, end]`.
///
/// A single-day range has `start == end`; unlike [`TimeInterval`] both
/// bounds belong to the range.
///
/// [`TimeInterval`]: crate::time::TimeInterval
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display("{start} to {end}")]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: Date,
    end: Date,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Date range is not valid: end ({end}) is before start ({start})")]
pub struct InvalidDateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<Self, InvalidDateRange> {
        if end < start {
            return Err(InvalidDateRange { start, end });
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub fn single(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Inclusive intersection test, symmetric.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Number of days covered, at least 1.
    #[must_use]
    pub fn days(&self) -> u32 {
        (self.end.days_from_epoch() - self.start.days_from_epoch()) as u32 + 1
    }

    /// Iterates over every date in the range, in order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        let mut next = Some(self.start);
        let end = self.end;

        core::iter::from_fn(move || {
            let current = next?;
            next = (current < end).then(|| current.succ());
            Some(current)
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawDateRange {
    start: Date,
    end: Date,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = InvalidDateRange;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}
