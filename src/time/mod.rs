mod date;
mod date_range;
mod interval;
mod time_of_day;
mod week_day;

pub use date::*;
pub use date_range::*;
pub use interval::*;
pub use time_of_day::*;
pub use week_day::*;
