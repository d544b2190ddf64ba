//! # Slotbook Core
//!
//! Pure appointment time-slot computation for the slotbook booking service.
//!
//! - **SlotGenerator** ([`slots::generate_slots`]): turns a day's working
//!   window, a total service duration and a set of blocked ranges into the
//!   ordered, non-overlapping start times a customer may book.
//! - **WeekOfMonthResolver** ([`week::resolve_week_index`]): maps a date to a
//!   week bucket so week-specific working hours can be selected before slots
//!   are generated.
//!
//! Nothing here performs I/O or keeps state between calls; callers fetch
//! schedules and bookings and pass them in as plain values.

pub mod errors;
pub mod models;
pub mod slots;
pub mod week;

pub use errors::{BookingError, BookingResult};
pub use models::{
    interval::{BlockReason, BlockedRange, Interval},
    schedule::DaySchedule,
    slot::{AvailableSlots, SlotRequest},
    time_of_day::TimeOfDay,
};
pub use slots::generate_slots;
pub use week::{WeekIndex, resolve_week, resolve_week_index, select_schedule};
