use staff_roster::calendar::{BusinessCalendar, BusinessDayHours, BusinessWeek};
use staff_roster::time::{TimeInterval, WeekDay};
use staff_roster::time_of_day;

#[must_use]
#[allow(dead_code)]
pub fn nine_to_five() -> TimeInterval {
    TimeInterval::new(time_of_day!(09:00), time_of_day!(17:00)).unwrap()
}

/// Open Monday through Friday 09:00-17:00, closed on the weekend.
#[must_use]
pub fn weekday_calendar() -> BusinessCalendar {
    BusinessCalendar::from(BusinessWeek::from_days(
        WeekDay::ALL
            .into_iter()
            .filter(|day| !day.is_weekend())
            .map(|day| BusinessDayHours::open(day, nine_to_five())),
    ))
}
