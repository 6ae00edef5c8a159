mod business_calendar;
mod closure;
mod day_hours;

pub use business_calendar::*;
pub use closure::*;
pub use day_hours::BusinessDayHours;
