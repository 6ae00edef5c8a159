use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{TimeInterval, TimeOfDay, WeekDay};

/// The length of one bookable appointment slot, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u16")]
pub struct SlotDuration(u16);

#[derive(Debug, Clone, Error, PartialEq)]
#[error("slot duration must be a positive number of minutes, got {0}")]
pub struct InvalidSlotDuration(pub u16);

impl SlotDuration {
    /// 30 minutes, the slot granularity a fresh schedule starts with.
    pub const DEFAULT: Self = Self(30);

    pub const fn new(minutes: u16) -> Result<Self, InvalidSlotDuration> {
        if minutes == 0 {
            return Err(InvalidSlotDuration(minutes));
        }

        Ok(Self(minutes))
    }

    #[must_use]
    pub const fn minutes(&self) -> u16 {
        self.0
    }
}

impl Default for SlotDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u16> for SlotDuration {
    type Error = InvalidSlotDuration;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

/// One day of a staff member's weekly working template.
///
/// The raw type does not force `hours` to stay inside business hours, or
/// even to be present on a working day; those invariants are established
/// by reconciliation before a week is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffDaySchedule {
    day: WeekDay,
    working: bool,
    hours: Option<TimeInterval>,
    slot_duration: SlotDuration,
}

impl StaffDaySchedule {
    #[must_use]
    pub fn new(
        day: WeekDay,
        working: bool,
        hours: Option<TimeInterval>,
        slot_duration: SlotDuration,
    ) -> Self {
        Self {
            day,
            working,
            // a non-working day has no working interval
            hours: if working { hours } else { None },
            slot_duration,
        }
    }

    /// A day off, keeping the default slot granularity.
    #[must_use]
    pub fn off(day: WeekDay) -> Self {
        Self::new(day, false, None, SlotDuration::DEFAULT)
    }

    #[must_use]
    pub fn working(day: WeekDay, hours: TimeInterval, slot_duration: SlotDuration) -> Self {
        Self::new(day, true, Some(hours), slot_duration)
    }

    #[must_use]
    pub const fn day(&self) -> WeekDay {
        self.day
    }

    #[must_use]
    pub const fn is_working(&self) -> bool {
        self.working
    }

    #[must_use]
    pub const fn hours(&self) -> Option<TimeInterval> {
        self.hours
    }

    #[must_use]
    pub const fn slot_duration(&self) -> SlotDuration {
        self.slot_duration
    }
}

/// The per-day wire form of the staff schedule snapshot:
/// `{"isWorking": bool, "startTime": "HH:MM"?, "endTime": "HH:MM"?,
/// "slotDurationMinutes": int?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawStaffDay {
    pub(crate) is_working: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) start_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) end_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) slot_duration_minutes: Option<SlotDuration>,
}

impl From<&StaffDaySchedule> for RawStaffDay {
    fn from(day: &StaffDaySchedule) -> Self {
        Self {
            is_working: day.working,
            start_time: day.hours.map(|hours| hours.start()),
            end_time: day.hours.map(|hours| hours.end()),
            slot_duration_minutes: Some(day.slot_duration),
        }
    }
}
