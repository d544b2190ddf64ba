//! # Availability Handler
//!
//! Turns a booking-wizard query (a date, the chosen services, the location's
//! working hours and the day's bookings) into the list of start times the
//! customer may pick.
//!
//! ## Flow
//!
//! 1. Parse and validate every input. Nothing is computed until all working
//!    hours, blocked ranges and the selected time have parsed, so a bad
//!    record never yields a partial answer.
//! 2. Resolve the week-of-month bucket and pick the schedule for the date.
//! 3. Generate slots from the schedule, the total service duration and the
//!    union of bookings, unavailable periods and blocked spans.
//! 4. Classify the day and, when the query carries a selected time, check it
//!    is one of the offered slots.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use slotbook_core::{
    AvailableSlots, BlockReason, BlockedRange, BookingError, BookingResult, DaySchedule,
    SlotRequest, TimeOfDay, generate_slots, resolve_week, select_schedule, week::first_of_month,
};
use tracing::{debug, info, instrument, warn};

use crate::{
    config::BookingConfig,
    error_handling::AppError,
    models::{
        AvailabilityQuery, AvailabilityResponse, DayStatus, SelectedAppointment, ServiceRecord,
        SlotView, TimeRangeRecord, WorkingHoursRecord,
    },
};

/// Computes the bookable slots for the date in `query`.
///
/// # Errors
///
/// * `BookingError::InvalidInput` - no services, a non-positive service time or
///   slot interval, a week index outside 1-5, or a selected time that is not offered
/// * `BookingError::Format` - a malformed day name, time of day or time range
#[instrument(skip_all, fields(date = %query.date))]
pub fn available_slots(
    config: &BookingConfig,
    query: &AvailabilityQuery,
) -> Result<AvailabilityResponse, AppError> {
    // STEP 1: Input validation & parsing
    let total_service_minutes = total_service_minutes(&query.services)?;
    let slot_interval = query.slot_interval.unwrap_or(config.slot_interval_minutes);

    let schedules = if query.working_hours.is_empty() {
        config.default_working_hours()
    } else {
        parse_working_hours(&query.working_hours)?
    };
    let blocked = collect_blocked_ranges(query)?;
    let selected_time = query
        .selected_time
        .as_deref()
        .map(str::parse::<TimeOfDay>)
        .transpose()?;

    // STEP 2: Schedule resolution
    let reference = query
        .reference_month_start
        .or(config.reference_month_start)
        .unwrap_or_else(|| first_of_month(query.date));
    let week = resolve_week(query.date, reference);
    let weekday = query.date.weekday();

    let schedule = match select_schedule(&schedules, query.date, week) {
        Some(schedule) => schedule.clone(),
        None => {
            warn!(%weekday, week_of_month = week.week_of_month, "No working hours for date, treating as closed");
            DaySchedule::closed(weekday)
        }
    };
    let window = schedule
        .working_window()
        .map_or_else(|| "closed".to_string(), |w| format!("{}-{}", w.start(), w.end()));
    debug!(
        week_index = week.global(),
        %window,
        is_closed = schedule.is_closed,
        blocked = blocked.len(),
        "Resolved working hours"
    );

    // STEP 3: Slot generation
    let is_open = schedule.is_open();
    let request = SlotRequest::new(schedule, total_service_minutes)
        .with_slot_interval(slot_interval)
        .with_blocked_ranges(blocked);
    let generated = generate_slots(&request)?;

    // STEP 4: Classification & selection
    let is_past = query.today.is_some_and(|today| query.date < today);
    let (status, slots) = if is_past {
        (DayStatus::PastDate, AvailableSlots::default())
    } else if !is_open {
        (DayStatus::Closed, generated)
    } else if generated.is_empty() {
        (DayStatus::FullyBooked, generated)
    } else {
        (DayStatus::Available, generated)
    };

    let selection = selected_time
        .map(|time| select_slot(query.date, time, &slots, total_service_minutes))
        .transpose()?;

    info!(?status, slots = slots.len(), total_service_minutes, "Computed availability");

    Ok(AvailabilityResponse {
        date: query.date,
        weekday,
        week_index: week.global(),
        status,
        total_service_minutes,
        slots: slots
            .iter()
            .map(|time| SlotView {
                time: *time,
                label: config.slot_label(*time),
            })
            .collect(),
        selection,
    })
}

/// Sum of the selected services' durations.
pub fn total_service_minutes(services: &[ServiceRecord]) -> BookingResult<i32> {
    if services.is_empty() {
        return Err(BookingError::InvalidInput(
            "At least one service must be selected".to_string(),
        ));
    }

    services.iter().try_fold(0i32, |total, service| {
        if service.time <= 0 {
            return Err(BookingError::InvalidInput(format!(
                "Service '{}' must take a positive number of minutes, got {}",
                service.name, service.time
            )));
        }
        total.checked_add(service.time).ok_or_else(|| {
            BookingError::InvalidInput("Total service time is too large".to_string())
        })
    })
}

pub fn parse_working_hours(records: &[WorkingHoursRecord]) -> BookingResult<Vec<DaySchedule>> {
    records.iter().map(day_schedule_from_record).collect()
}

fn day_schedule_from_record(record: &WorkingHoursRecord) -> BookingResult<DaySchedule> {
    let day = record
        .day
        .trim()
        .parse::<Weekday>()
        .map_err(|_| BookingError::Format(format!("'{}' is not a day of the week", record.day)))?;

    let schedule = if record.closed {
        DaySchedule::closed(day)
    } else {
        let opens = required_time(record.start.as_deref(), "opening", &record.day)?;
        let closes = required_time(record.end.as_deref(), "closing", &record.day)?;
        DaySchedule::open(day, opens, closes)
    };

    match record.week_index {
        Some(week) => schedule.for_week(week),
        None => Ok(schedule),
    }
}

fn required_time(value: Option<&str>, which: &str, day: &str) -> BookingResult<TimeOfDay> {
    value
        .ok_or_else(|| BookingError::Format(format!("Missing {which} time for {day}")))?
        .parse()
}

/// Union of bookings, unavailable periods and compact blocked spans.
pub fn collect_blocked_ranges(query: &AvailabilityQuery) -> BookingResult<Vec<BlockedRange>> {
    let booked = query
        .booked_slots
        .iter()
        .map(|record| blocked_range_from_record(record, BlockReason::Booked));
    let unavailable = query
        .unavailable_periods
        .iter()
        .map(|record| blocked_range_from_record(record, BlockReason::Unavailable));
    let spans = query
        .blocked_slots
        .iter()
        .map(|span| BlockedRange::parse_span(span, BlockReason::Unavailable));

    booked.chain(unavailable).chain(spans).collect()
}

fn blocked_range_from_record(
    record: &TimeRangeRecord,
    reason: BlockReason,
) -> BookingResult<BlockedRange> {
    BlockedRange::parse(&record.start_time, &record.end_time, reason)
}

fn select_slot(
    date: NaiveDate,
    time: TimeOfDay,
    slots: &AvailableSlots,
    duration_minutes: i32,
) -> BookingResult<SelectedAppointment> {
    if !slots.contains(time) {
        return Err(BookingError::InvalidInput(format!(
            "{time} is not an available slot on {date}"
        )));
    }

    let start = date.and_time(time.to_naive_time());
    Ok(SelectedAppointment {
        date,
        start,
        end: start + Duration::minutes(i64::from(duration_minutes)),
        duration_minutes,
    })
}
