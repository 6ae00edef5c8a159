//! The full edit-and-save flow: a staff member proposes a week that
//! spills over the business hours on one day and works on a closed day
//! on another; the save stays blocked until the clamp is accepted.

use staff_roster::schedule::{SlotDuration, StaffDaySchedule, StaffWeek};
use staff_roster::time::{TimeInterval, WeekDay};
use staff_roster::{reconcile, time_of_day, ScheduleViolation};

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_edit_save_flow() {
    let calendar = common::weekday_calendar();

    let proposed = StaffWeek::from_days([
        // 08:30-17:30 spills over both bounds of 09:00-17:00
        StaffDaySchedule::working(
            WeekDay::Monday,
            TimeInterval::new(time_of_day!(08:30), time_of_day!(17:30)).unwrap(),
            SlotDuration::DEFAULT,
        ),
        // the business is closed on Saturday
        StaffDaySchedule::working(
            WeekDay::Saturday,
            TimeInterval::new(time_of_day!(10:00), time_of_day!(14:00)).unwrap(),
            SlotDuration::DEFAULT,
        ),
    ]);

    let result = reconcile(&proposed, &calendar);

    // Monday is clamped into the business window
    assert_eq!(
        result.week().day(WeekDay::Monday).hours(),
        Some(common::nine_to_five())
    );

    // Saturday is forced off, working while closed is a hard constraint
    assert!(!result.week().day(WeekDay::Saturday).is_working());
    assert_eq!(result.week().day(WeekDay::Saturday).hours(), None);

    assert_eq!(
        result.errors(),
        vec![
            "Monday: start time (08:30) is before business opens (09:00)",
            "Monday: end time (17:30) is after business closes (17:00)",
            "Saturday: business is closed on this day",
        ]
    );
    assert_eq!(result.warnings(), Vec::<String>::new());

    // the save is rejected while errors remain
    let rejection = result.clone().try_accept().unwrap_err();
    assert_eq!(rejection.violations().len(), 3);
    assert!(rejection
        .violations()
        .contains(&ScheduleViolation::ClosedDay {
            day: WeekDay::Saturday
        }));

    // the user accepts the clamped values; resubmitting them saves
    let accepted = result.into_week();
    let resubmitted = reconcile(&accepted, &calendar);
    assert!(resubmitted.is_clean());

    let saved = resubmitted.try_accept().expect("clamped week should save");
    assert_eq!(saved, accepted);
}

#[test]
fn test_proposal_is_never_mutated() {
    let calendar = common::weekday_calendar();
    let proposed = StaffWeek::from_days([StaffDaySchedule::working(
        WeekDay::Monday,
        TimeInterval::new(time_of_day!(08:00), time_of_day!(12:00)).unwrap(),
        SlotDuration::DEFAULT,
    )]);
    let snapshot = proposed.clone();

    let _ = reconcile(&proposed, &calendar);

    assert_eq!(proposed, snapshot);
}
