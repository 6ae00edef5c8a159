mod utils;

pub mod availability;
pub mod calendar;
pub mod reconcile;
pub mod schedule;
pub mod time;
pub mod time_off;

use log::debug;

pub use crate::availability::Availability;
pub use crate::calendar::{BusinessCalendar, BusinessClosure, BusinessDayHours, BusinessWeek};
pub use crate::reconcile::{
    Reconciler, Reconciliation, SaveRejected, ScheduleNotice, ScheduleViolation,
};
pub use crate::schedule::{SlotDuration, StaffDaySchedule, StaffWeek};
pub use crate::time_off::{StaffId, TimeOff, TimeOffId, TimeOffKind, TimeOffLedger};

/// Reconciles a caller-proposed week against the business calendar.
///
/// This is what the schedule edit screen calls before saving; see
/// [`Reconciler::reconcile`] for the per-day rules.
#[must_use]
pub fn reconcile(proposed: &StaffWeek, calendar: &BusinessCalendar) -> Reconciliation {
    let result = Reconciler::new(calendar).reconcile(proposed);

    debug!(
        "reconciled week: {} error(s), {} warning(s)",
        result.violations().len(),
        result.notices().len()
    );

    result
}

/// The week a staff member starts with before anyone has customized
/// their schedule: an exact mirror of the business hours.
#[must_use]
pub fn default_week(calendar: &BusinessCalendar) -> StaffWeek {
    Reconciler::new(calendar).default_week()
}
