pub mod interval;
pub mod schedule;
pub mod slot;
pub mod time_of_day;
