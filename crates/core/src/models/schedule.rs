use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::interval::Interval;
use crate::models::time_of_day::TimeOfDay;
use crate::week::WEEKS_PER_MONTH;

/// Working hours of a location or professional for one weekday.
///
/// `week_index` restricts the schedule to one week-of-month bucket (1..=5);
/// `None` means it applies every week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleFields")]
pub struct DaySchedule {
    pub day_of_week: Weekday,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_index: Option<u8>,
    pub opens: TimeOfDay,
    pub closes: TimeOfDay,
    #[serde(default)]
    pub is_closed: bool,
}

#[derive(Deserialize)]
struct ScheduleFields {
    day_of_week: Weekday,
    #[serde(default)]
    week_index: Option<u8>,
    opens: TimeOfDay,
    closes: TimeOfDay,
    #[serde(default)]
    is_closed: bool,
}

impl TryFrom<ScheduleFields> for DaySchedule {
    type Error = BookingError;

    fn try_from(fields: ScheduleFields) -> BookingResult<Self> {
        let schedule = Self {
            day_of_week: fields.day_of_week,
            week_index: None,
            opens: fields.opens,
            closes: fields.closes,
            is_closed: fields.is_closed,
        };
        match fields.week_index {
            Some(week) => schedule.for_week(week),
            None => Ok(schedule),
        }
    }
}

impl DaySchedule {
    pub fn open(day_of_week: Weekday, opens: TimeOfDay, closes: TimeOfDay) -> Self {
        Self {
            day_of_week,
            week_index: None,
            opens,
            closes,
            is_closed: false,
        }
    }

    pub fn closed(day_of_week: Weekday) -> Self {
        Self {
            day_of_week,
            week_index: None,
            opens: TimeOfDay::MIDNIGHT,
            closes: TimeOfDay::MIDNIGHT,
            is_closed: true,
        }
    }

    pub fn for_week(mut self, week_of_month: u8) -> BookingResult<Self> {
        if week_of_month == 0 || i32::from(week_of_month) > WEEKS_PER_MONTH {
            return Err(BookingError::InvalidInput(format!(
                "Week index {week_of_month} must be between 1 and {WEEKS_PER_MONTH}"
            )));
        }
        self.week_index = Some(week_of_month);
        Ok(self)
    }

    /// False for closed days and for degenerate hours where `opens >= closes`.
    pub fn is_open(&self) -> bool {
        !self.is_closed && self.opens < self.closes
    }

    pub fn working_window(&self) -> Option<Interval> {
        if !self.is_open() {
            return None;
        }
        Interval::new(self.opens, self.closes).ok()
    }
}
