mod day_schedule;
mod week;

pub use day_schedule::{InvalidSlotDuration, SlotDuration, StaffDaySchedule};
pub use week::*;
