use log::debug;
use thiserror::Error;

use crate::calendar::BusinessCalendar;
use crate::schedule::{StaffDaySchedule, StaffWeek};
use crate::time::{TimeInterval, TimeOfDay, WeekDay};

/// A blocking business-rule violation found while reconciling a proposed
/// week. The `Display` form is the day-qualified message shown to the
/// person editing the schedule.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScheduleViolation {
    #[error("{day}: business is closed on this day")]
    ClosedDay { day: WeekDay },
    #[error("{day}: start time ({start}) is before business opens ({opens})")]
    StartsBeforeOpen {
        day: WeekDay,
        start: TimeOfDay,
        opens: TimeOfDay,
    },
    #[error("{day}: end time ({end}) is after business closes ({closes})")]
    EndsAfterClose {
        day: WeekDay,
        end: TimeOfDay,
        closes: TimeOfDay,
    },
    #[error("{day}: working hours do not overlap business hours, falling back to {fallback}")]
    OutsideBusinessDay {
        day: WeekDay,
        fallback: TimeInterval,
    },
    #[error("{day}: working day has no hours set, falling back to {fallback}")]
    MissingWorkingHours {
        day: WeekDay,
        fallback: TimeInterval,
    },
}

impl ScheduleViolation {
    #[must_use]
    pub const fn day(&self) -> WeekDay {
        match self {
            Self::ClosedDay { day }
            | Self::StartsBeforeOpen { day, .. }
            | Self::EndsAfterClose { day, .. }
            | Self::OutsideBusinessDay { day, .. }
            | Self::MissingWorkingHours { day, .. } => *day,
        }
    }
}

/// A non-blocking data-quality notice. Never prevents a save.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScheduleNotice {
    #[error("{day}: no business hours set for this day")]
    MissingBusinessHours { day: WeekDay },
}

/// Returned by [`Reconciliation::try_accept`] when the week still has
/// violations: nothing may be persisted until the caller either fixes
/// the input or explicitly accepts the clamped week.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("schedule has {} unresolved error(s)", violations.len())]
pub struct SaveRejected {
    violations: Vec<ScheduleViolation>,
}

impl SaveRejected {
    #[must_use]
    pub fn violations(&self) -> &[ScheduleViolation] {
        &self.violations
    }
}

/// The outcome of reconciling a proposed week: the best-effort clamped
/// week plus everything that was wrong with the proposal.
///
/// The clamped week is always usable, so an edit screen can offer
/// "fix and save" in one step; the violations stay blocking until the
/// caller resubmits or accepts the clamp via [`into_week`].
///
/// [`into_week`]: Reconciliation::into_week
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    week: StaffWeek,
    violations: Vec<ScheduleViolation>,
    notices: Vec<ScheduleNotice>,
}

impl Reconciliation {
    #[must_use]
    pub const fn week(&self) -> &StaffWeek {
        &self.week
    }

    #[must_use]
    pub fn violations(&self) -> &[ScheduleViolation] {
        &self.violations
    }

    #[must_use]
    pub fn notices(&self) -> &[ScheduleNotice] {
        &self.notices
    }

    /// The violations rendered for display, one message per error.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// The notices rendered for display, one message per warning.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.notices.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// The save gate: the whole week or nothing. Notices never block.
    pub fn try_accept(self) -> Result<StaffWeek, SaveRejected> {
        if !self.violations.is_empty() {
            return Err(SaveRejected {
                violations: self.violations,
            });
        }

        Ok(self.week)
    }

    /// Accepts the clamped week regardless of violations. This is the
    /// explicit opt-in for callers that let the user take the corrected
    /// values as-is.
    #[must_use]
    pub fn into_week(self) -> StaffWeek {
        self.week
    }
}

/// Validates and repairs proposed staff weeks against one business
/// calendar.
///
/// Inputs are never mutated; every reconciliation returns fresh values,
/// so snapshots can be shared across threads freely.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'a> {
    calendar: &'a BusinessCalendar,
}

impl<'a> Reconciler<'a> {
    #[must_use]
    pub const fn new(calendar: &'a BusinessCalendar) -> Self {
        Self { calendar }
    }

    /// Reconciles a caller-proposed week, day by day.
    ///
    /// Per day: working on a closed business day is forced off (error);
    /// an open day without business hours passes through unclamped
    /// (warning, there is no bound to clamp against); otherwise the
    /// working window is clamped into the business window, with one
    /// error per violated bound, and a window that collapses entirely
    /// falls back to the full business day.
    #[must_use]
    pub fn reconcile(&self, proposed: &StaffWeek) -> Reconciliation {
        let mut days = Vec::with_capacity(7);
        let mut violations = Vec::new();
        let mut notices = Vec::new();

        for day in WeekDay::ALL {
            let business = self.calendar.week().day(day);
            let proposal = proposed.day(day);

            if !business.is_open() {
                if proposal.is_working() {
                    violations.push(ScheduleViolation::ClosedDay { day });
                    days.push(StaffDaySchedule::new(
                        day,
                        false,
                        None,
                        proposal.slot_duration(),
                    ));
                } else {
                    days.push(*proposal);
                }
                continue;
            }

            let Some(business_hours) = business.hours() else {
                // nothing to clamp against, pass the proposal through
                if proposal.is_working() {
                    notices.push(ScheduleNotice::MissingBusinessHours { day });
                }
                days.push(*proposal);
                continue;
            };

            if !proposal.is_working() {
                days.push(*proposal);
                continue;
            }

            let Some(hours) = proposal.hours() else {
                violations.push(ScheduleViolation::MissingWorkingHours {
                    day,
                    fallback: business_hours,
                });
                days.push(StaffDaySchedule::working(
                    day,
                    business_hours,
                    proposal.slot_duration(),
                ));
                continue;
            };

            if hours.start() < business_hours.start() {
                violations.push(ScheduleViolation::StartsBeforeOpen {
                    day,
                    start: hours.start(),
                    opens: business_hours.start(),
                });
            }

            if hours.end() > business_hours.end() {
                violations.push(ScheduleViolation::EndsAfterClose {
                    day,
                    end: hours.end(),
                    closes: business_hours.end(),
                });
            }

            let clamped = match hours.clamp_to(&business_hours) {
                Some(clamped) => clamped,
                None => {
                    // the proposal lies entirely outside the business day;
                    // never emit an empty or inverted window
                    violations.push(ScheduleViolation::OutsideBusinessDay {
                        day,
                        fallback: business_hours,
                    });
                    business_hours
                }
            };

            if clamped != hours {
                debug!("{day}: clamped {hours} to {clamped}");
            }

            days.push(StaffDaySchedule::working(
                day,
                clamped,
                proposal.slot_duration(),
            ));
        }

        Reconciliation {
            week: StaffWeek::from_days(days),
            violations,
            notices,
        }
    }

    /// The first-time-setup default: a week mirroring the business
    /// calendar exactly. Reconciling it against the same calendar yields
    /// no errors and no warnings.
    #[must_use]
    pub fn default_week(&self) -> StaffWeek {
        StaffWeek::mirroring(self.calendar)
    }

    /// Discards all customizations and returns to the business-hours
    /// mirror. Same derivation as [`default_week`], exposed under the
    /// name the settings screen uses.
    ///
    /// [`default_week`]: Reconciler::default_week
    #[must_use]
    pub fn reset_to_business_hours(&self) -> StaffWeek {
        self.default_week()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::calendar::{BusinessDayHours, BusinessWeek};
    use crate::schedule::SlotDuration;
    use crate::time_of_day;

    fn interval(start: TimeOfDay, end: TimeOfDay) -> TimeInterval {
        TimeInterval::new(start, end).unwrap()
    }

    fn nine_to_five() -> TimeInterval {
        interval(time_of_day!(09:00), time_of_day!(17:00))
    }

    /// Open Monday to Friday 09:00-17:00, closed on the weekend.
    fn weekday_calendar() -> BusinessCalendar {
        BusinessCalendar::from(BusinessWeek::from_days(
            WeekDay::ALL
                .into_iter()
                .filter(|day| !day.is_weekend())
                .map(|day| BusinessDayHours::open(day, nine_to_five())),
        ))
    }

    #[test]
    fn test_working_on_closed_day_is_forced_off() {
        let calendar = weekday_calendar();
        let proposed = StaffWeek::empty().with_day(StaffDaySchedule::working(
            WeekDay::Saturday,
            interval(time_of_day!(10:00), time_of_day!(14:00)),
            SlotDuration::DEFAULT,
        ));

        let result = Reconciler::new(&calendar).reconcile(&proposed);

        assert!(!result.week().day(WeekDay::Saturday).is_working());
        assert_eq!(
            result.violations(),
            &[ScheduleViolation::ClosedDay {
                day: WeekDay::Saturday
            }]
        );
        assert_eq!(
            result.errors(),
            vec!["Saturday: business is closed on this day"]
        );
    }

    #[test]
    fn test_clamping_reports_both_bounds() {
        let calendar = weekday_calendar();
        let proposed = StaffWeek::empty().with_day(StaffDaySchedule::working(
            WeekDay::Monday,
            interval(time_of_day!(08:00), time_of_day!(20:00)),
            SlotDuration::DEFAULT,
        ));

        let result = Reconciler::new(&calendar).reconcile(&proposed);

        assert_eq!(
            result.week().day(WeekDay::Monday).hours(),
            Some(nine_to_five())
        );
        assert_eq!(
            result.violations(),
            &[
                ScheduleViolation::StartsBeforeOpen {
                    day: WeekDay::Monday,
                    start: time_of_day!(08:00),
                    opens: time_of_day!(09:00),
                },
                ScheduleViolation::EndsAfterClose {
                    day: WeekDay::Monday,
                    end: time_of_day!(20:00),
                    closes: time_of_day!(17:00),
                },
            ]
        );
    }

    #[test]
    fn test_collapsed_window_falls_back_to_business_hours() {
        let calendar = weekday_calendar();
        // entirely past close, clamping would leave nothing
        let proposed = StaffWeek::empty().with_day(StaffDaySchedule::working(
            WeekDay::Monday,
            interval(time_of_day!(18:00), time_of_day!(19:00)),
            SlotDuration::DEFAULT,
        ));

        let result = Reconciler::new(&calendar).reconcile(&proposed);
        let monday = result.week().day(WeekDay::Monday);

        assert!(monday.is_working());
        assert_eq!(monday.hours(), Some(nine_to_five()));
        assert!(result
            .violations()
            .contains(&ScheduleViolation::OutsideBusinessDay {
                day: WeekDay::Monday,
                fallback: nine_to_five(),
            }));
    }

    #[test]
    fn test_open_day_without_hours_warns_but_passes_through() {
        let calendar = BusinessCalendar::from(
            BusinessWeek::closed().with_day(BusinessDayHours::new(WeekDay::Monday, true, None)),
        );
        let hours = interval(time_of_day!(10:00), time_of_day!(14:00));
        let proposed = StaffWeek::empty().with_day(StaffDaySchedule::working(
            WeekDay::Monday,
            hours,
            SlotDuration::DEFAULT,
        ));

        let result = Reconciler::new(&calendar).reconcile(&proposed);

        assert!(result.is_clean());
        assert_eq!(result.week().day(WeekDay::Monday).hours(), Some(hours));
        assert_eq!(
            result.warnings(),
            vec!["Monday: no business hours set for this day"]
        );

        // warnings never block the save
        assert!(result.try_accept().is_ok());
    }

    #[test]
    fn test_working_day_without_hours_gets_the_full_window() {
        let calendar = weekday_calendar();
        let proposed = StaffWeek::empty().with_day(StaffDaySchedule::new(
            WeekDay::Tuesday,
            true,
            None,
            SlotDuration::DEFAULT,
        ));

        let result = Reconciler::new(&calendar).reconcile(&proposed);

        assert_eq!(
            result.week().day(WeekDay::Tuesday).hours(),
            Some(nine_to_five())
        );
        assert_eq!(result.violations().len(), 1);
        assert_eq!(result.violations()[0].day(), WeekDay::Tuesday);
    }

    #[test]
    fn test_in_bounds_proposal_is_untouched() {
        let calendar = weekday_calendar();
        let hours = interval(time_of_day!(10:00), time_of_day!(15:30));
        let proposed = StaffWeek::empty().with_day(StaffDaySchedule::working(
            WeekDay::Wednesday,
            hours,
            SlotDuration::new(15).unwrap(),
        ));

        let result = Reconciler::new(&calendar).reconcile(&proposed);

        assert!(result.is_clean());
        assert!(result.notices().is_empty());
        let wednesday = *result.week().day(WeekDay::Wednesday);
        assert_eq!(wednesday.hours(), Some(hours));
        assert_eq!(wednesday.slot_duration().minutes(), 15);

        let saved = result.try_accept().unwrap();
        assert_eq!(saved.day(WeekDay::Wednesday), &wednesday);
    }

    #[test]
    fn test_save_gate_blocks_until_clamp_is_accepted() {
        let calendar = weekday_calendar();
        let proposed = StaffWeek::empty().with_day(StaffDaySchedule::working(
            WeekDay::Monday,
            interval(time_of_day!(08:00), time_of_day!(12:00)),
            SlotDuration::DEFAULT,
        ));

        let reconciler = Reconciler::new(&calendar);
        let result = reconciler.reconcile(&proposed);

        let rejection = result.clone().try_accept().unwrap_err();
        assert_eq!(rejection.violations().len(), 1);

        // accepting the clamp and resubmitting reconciles cleanly
        let accepted = result.into_week();
        assert!(reconciler.reconcile(&accepted).is_clean());
    }

    #[test]
    fn test_default_week_reconciles_cleanly() {
        let calendar = weekday_calendar();
        let reconciler = Reconciler::new(&calendar);

        let week = reconciler.default_week();
        let result = reconciler.reconcile(&week);

        assert!(result.is_clean());
        assert!(result.notices().is_empty());
        assert_eq!(result.week(), &week);
        assert_eq!(reconciler.reset_to_business_hours(), week);
    }

    #[test]
    fn test_default_week_is_clean_even_for_malformed_calendars() {
        let calendar = BusinessCalendar::from(
            BusinessWeek::closed().with_day(BusinessDayHours::new(WeekDay::Friday, true, None)),
        );
        let reconciler = Reconciler::new(&calendar);

        let result = reconciler.reconcile(&reconciler.default_week());

        assert!(result.is_clean());
        assert!(result.notices().is_empty());
    }

    #[test]
    fn test_day_off_passes_through_on_open_days() {
        let calendar = weekday_calendar();
        let proposed = StaffWeek::empty();

        let result = Reconciler::new(&calendar).reconcile(&proposed);

        assert!(result.is_clean());
        assert_eq!(result.week(), &proposed);
    }
}
