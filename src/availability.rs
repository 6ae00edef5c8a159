use log::trace;

use crate::calendar::BusinessCalendar;
use crate::schedule::StaffWeek;
use crate::time::{Date, TimeInterval, TimeOfDay};
use crate::time_off::{StaffId, TimeOffLedger};

/// Answers "is this staff member free then" for the booking workflow.
///
/// Borrows immutable snapshots of the three inputs; the caller is
/// responsible for handing in the validated week of the staff member the
/// queries are about.
#[derive(Debug, Clone, Copy)]
pub struct Availability<'a> {
    staff_id: StaffId,
    week: &'a StaffWeek,
    calendar: &'a BusinessCalendar,
    time_off: &'a TimeOffLedger,
}

impl<'a> Availability<'a> {
    #[must_use]
    pub const fn new(
        staff_id: StaffId,
        week: &'a StaffWeek,
        calendar: &'a BusinessCalendar,
        time_off: &'a TimeOffLedger,
    ) -> Self {
        Self {
            staff_id,
            week,
            calendar,
            time_off,
        }
    }

    /// The working window on `date`, unless some disqualifier applies:
    /// business closed, time off, or a non-working day.
    fn working_hours_on(&self, date: Date) -> Option<TimeInterval> {
        if !self.calendar.is_open_on(date) {
            trace!("{}: business is closed on {date}", self.staff_id);
            return None;
        }

        if let Some(time_off) = self.time_off.covering(self.staff_id, date) {
            trace!("{}: time off ({}) covers {date}", self.staff_id, time_off.id());
            return None;
        }

        let day = self.week.day(date.week_day());
        if !day.is_working() {
            return None;
        }

        day.hours()
    }

    /// Whether the staff member is bookable at the given instant.
    #[must_use]
    pub fn is_available(&self, date: Date, time: TimeOfDay) -> bool {
        self.working_hours_on(date)
            .is_some_and(|hours| hours.contains_time(time))
    }

    /// The bookable slots on `date`: the working window carved into
    /// slot-sized intervals, front to back, partial trailing slot
    /// dropped. Empty when the day is disqualified altogether.
    ///
    /// The booking workflow intersects this with already-booked slots.
    #[must_use]
    pub fn bookable_windows(&self, date: Date) -> Vec<TimeInterval> {
        let Some(hours) = self.working_hours_on(date) else {
            return Vec::new();
        };

        let slot = self.week.day(date.week_day()).slot_duration();

        hours.slots(slot.minutes())
    }
}
