use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::TimeOfDay;
use crate::{max, min};

/// A half-open window `[start, end)` within a single day.
///
/// The end instant is excluded, so `09:00 - 17:00` and `17:00 - 18:00`
/// share the boundary without overlapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display("{start} - {end}")]
#[serde(try_from = "RawTimeInterval")]
pub struct TimeInterval {
    start: TimeOfDay,
    end: TimeOfDay,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Interval is not valid: start ({start}) must be before end ({end})")]
pub struct InvalidInterval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeInterval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, InvalidInterval> {
        if start >= end {
            return Err(InvalidInterval { start, end });
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> TimeOfDay {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> TimeOfDay {
        self.end
    }

    /// The length of the interval in minutes, always positive.
    #[must_use]
    pub const fn duration_mins(&self) -> u16 {
        self.start.minutes_until(self.end)
    }

    /// Whether `other` lies fully inside `self` (both may share bounds).
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the instant `time` falls within the window.
    #[must_use]
    pub fn contains_time(&self, time: TimeOfDay) -> bool {
        self.start <= time && time < self.end
    }

    /// Half-open overlap test: touching endpoints do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Intersects `self` with `bounds`, or `None` when nothing is left.
    #[must_use]
    pub fn clamp_to(&self, bounds: &Self) -> Option<Self> {
        let start = max!(self.start, bounds.start);
        let end = min!(self.end, bounds.end);

        (start < end).then_some(Self { start, end })
    }

    /// Carves the window into contiguous slots of `slot_mins` minutes each,
    /// front to back. A trailing remainder shorter than a slot is dropped.
    #[must_use]
    pub fn slots(&self, slot_mins: u16) -> Vec<Self> {
        if slot_mins == 0 {
            return Vec::new();
        }

        let mut slots = Vec::with_capacity((self.duration_mins() / slot_mins) as usize);
        let mut start = self.start;

        loop {
            let end = start.saturating_add_minutes(slot_mins);
            if end > self.end || start.minutes_until(end) < slot_mins {
                break;
            }

            slots.push(Self { start, end });
            start = end;
        }

        slots
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawTimeInterval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawTimeInterval> for TimeInterval {
    type Error = InvalidInterval;

    fn try_from(raw: RawTimeInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}
