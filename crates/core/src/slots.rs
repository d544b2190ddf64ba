//! # Slot Generation
//!
//! Candidate start times are walked from the opening time in fixed steps.
//! A candidate `s` is kept when `[s, s + duration)` ends no later than the
//! closing time and overlaps none of the blocked ranges. Blocked ranges are
//! merged first, so overlapping bookings and manual blocks act as a single
//! exclusion.
//!
//! ## Example
//!
//! ```
//! use chrono::Weekday;
//! use slotbook_core::{BlockReason, BlockedRange, DaySchedule, SlotRequest, generate_slots};
//!
//! # fn main() -> Result<(), slotbook_core::BookingError> {
//! let schedule = DaySchedule::open(Weekday::Mon, "09:00".parse()?, "12:00".parse()?);
//! let lunch = BlockedRange::parse_span("10:00-11:00", BlockReason::Unavailable)?;
//! let request = SlotRequest::new(schedule, 60).with_blocked_ranges([lunch]);
//!
//! let slots = generate_slots(&request)?;
//! assert_eq!(slots.to_strings(), vec!["09:00", "11:00"]);
//! # Ok(())
//! # }
//! ```

use crate::errors::{BookingError, BookingResult};
use crate::models::interval::merge_intervals;
use crate::models::slot::{AvailableSlots, SlotRequest};
use crate::models::time_of_day::TimeOfDay;

/// Computes the bookable start times for `request`.
///
/// # Errors
///
/// * `BookingError::InvalidInput` - the service duration or slot interval is
///   not positive
///
/// A closed day, or one whose opening time is not before its closing time,
/// yields an empty result rather than an error, whatever the other fields hold.
pub fn generate_slots(request: &SlotRequest) -> BookingResult<AvailableSlots> {
    let Some(window) = request.schedule.working_window() else {
        return Ok(AvailableSlots::default());
    };

    let duration = positive_minutes("Service duration", request.service_duration_minutes)?;
    let step = positive_minutes("Slot interval", request.slot_interval_minutes)?;

    let blocked = merge_intervals(request.blocked_ranges.iter().copied());
    let mut pending = blocked.iter().peekable();

    let closes = u32::from(window.end().minutes());
    let mut start = u32::from(window.start().minutes());
    let mut times = Vec::new();

    while start + duration <= closes {
        let end = start + duration;

        // Blocks that end by this candidate cannot reach any later one.
        while pending
            .next_if(|block| u32::from(block.end().minutes()) <= start)
            .is_some()
        {}

        let clashes = pending
            .peek()
            .is_some_and(|block| u32::from(block.start().minutes()) < end);
        if !clashes {
            times.push(TimeOfDay::from_minutes(start)?);
        }

        start += step;
    }

    Ok(AvailableSlots::from_sorted(times))
}

fn positive_minutes(what: &str, value: i32) -> BookingResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|minutes| *minutes > 0)
        .ok_or_else(|| {
            BookingError::InvalidInput(format!(
                "{what} must be a positive number of minutes, got {value}"
            ))
        })
}
