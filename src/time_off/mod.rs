use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::time::{Date, DateRange, InvalidDateRange};

/// Identifies a staff member. Allocation belongs to the owning
/// application; the core only compares ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct StaffId(pub u64);

/// Identifies one time-off record within a [`TimeOffLedger`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct TimeOffId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffKind {
    Vacation,
    SickLeave,
    Personal,
    Holiday,
    Other,
}

/// A date-range exclusion: the staff member is unavailable on every day
/// of the range, regardless of their weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOff {
    id: TimeOffId,
    staff_id: StaffId,
    range: DateRange,
    kind: TimeOffKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl TimeOff {
    #[must_use]
    pub const fn id(&self) -> TimeOffId {
        self.id
    }

    #[must_use]
    pub const fn staff_id(&self) -> StaffId {
        self.staff_id
    }

    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    #[must_use]
    pub const fn kind(&self) -> TimeOffKind {
        self.kind
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

/// All time-off records of a business, kept ordered by start date.
///
/// Overlapping records for the same staff member are permitted; callers
/// use [`overlapping`] to warn about them, never to block an add. Nothing
/// here checks against booked appointments, that belongs to the booking
/// workflow.
///
/// [`overlapping`]: TimeOffLedger::overlapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffLedger {
    entries: Vec<TimeOff>,
    next_id: u64,
}

impl TimeOffLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new time-off span. The only way this fails is an
    /// inverted date range; overlaps with existing records are allowed.
    pub fn add(
        &mut self,
        staff_id: StaffId,
        start: Date,
        end: Date,
        kind: TimeOffKind,
        reason: Option<String>,
    ) -> Result<TimeOff, InvalidDateRange> {
        let range = DateRange::new(start, end)?;

        let id = TimeOffId(self.next_id);
        self.next_id += 1;

        let time_off = TimeOff {
            id,
            staff_id,
            range,
            kind,
            reason,
        };

        let index = self
            .entries
            .partition_point(|entry| entry.range.start() <= range.start());
        self.entries.insert(index, time_off.clone());

        Ok(time_off)
    }

    /// Removes a record unconditionally, returning it if it existed.
    pub fn remove(&mut self, id: TimeOffId) -> Option<TimeOff> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: TimeOffId) -> Option<&TimeOff> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// All records of one staff member, ordered by start date.
    pub fn for_staff(&self, staff_id: StaffId) -> impl Iterator<Item = &TimeOff> {
        self.entries
            .iter()
            .filter(move |entry| entry.staff_id == staff_id)
    }

    /// Records of `staff_id` whose span intersects the given inclusive
    /// range. Callers surface these as double-booking warnings.
    #[must_use]
    pub fn overlapping(&self, staff_id: StaffId, range: &DateRange) -> Vec<&TimeOff> {
        self.for_staff(staff_id)
            .filter(|entry| entry.range.intersects(range))
            .collect()
    }

    /// The record covering `date`, if any.
    #[must_use]
    pub fn covering(&self, staff_id: StaffId, date: Date) -> Option<&TimeOff> {
        self.for_staff(staff_id)
            .find(|entry| entry.range.contains(date))
    }

    /// Records that have not ended yet as of `as_of`, soonest first.
    ///
    /// `as_of` is always an explicit parameter, the ledger never reads a
    /// clock.
    #[must_use]
    pub fn upcoming(&self, staff_id: StaffId, as_of: Date) -> Vec<&TimeOff> {
        self.for_staff(staff_id)
            .filter(|entry| entry.range.end() >= as_of)
            .collect()
    }

    /// Records that ended before `as_of`, most recent first.
    #[must_use]
    pub fn past(&self, staff_id: StaffId, as_of: Date) -> Vec<&TimeOff> {
        let mut entries: Vec<_> = self
            .for_staff(staff_id)
            .filter(|entry| entry.range.end() < as_of)
            .collect();

        entries.reverse();
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
