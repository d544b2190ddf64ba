//! # Week-of-Month Resolution
//!
//! Locations may publish different hours for different weeks of a month.
//! Each calendar month is split into exactly five buckets: days 1-7 are
//! week 1, days 8-14 week 2, and so on, with day 29 onwards folded into
//! week 5. Buckets are numbered globally from a reference month, so
//! `month_offset * 5 + week_of_month` never collides across months.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::schedule::DaySchedule;

pub const WEEKS_PER_MONTH: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekIndex {
    /// Whole months between the reference month and the date's month.
    pub month_offset: i32,
    /// Bucket within the month, 1..=5.
    pub week_of_month: u8,
}

impl WeekIndex {
    pub fn global(&self) -> i32 {
        self.month_offset * WEEKS_PER_MONTH + i32::from(self.week_of_month)
    }
}

/// Resolves the week bucket of `date`, counting months from the month that
/// contains `reference_month_start`.
pub fn resolve_week(date: NaiveDate, reference_month_start: NaiveDate) -> WeekIndex {
    let mut month_start = first_of_month(reference_month_start);
    let mut month_offset = 0;

    while let Some(next) = month_start
        .checked_add_months(Months::new(1))
        .filter(|next| *next <= date)
    {
        month_start = next;
        month_offset += 1;
    }
    while month_start > date {
        let Some(previous) = month_start.checked_sub_months(Months::new(1)) else {
            break;
        };
        month_start = previous;
        month_offset -= 1;
    }

    let days_since_month_start = (date - month_start).num_days().max(0);
    let week_of_month = (days_since_month_start / 7 + 1).min(i64::from(WEEKS_PER_MONTH)) as u8;

    WeekIndex {
        month_offset,
        week_of_month,
    }
}

/// Global week index of `date`: `month_offset * 5 + week_of_month`.
///
/// ```
/// use chrono::NaiveDate;
/// use slotbook_core::resolve_week_index;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
/// assert_eq!(resolve_week_index(date, reference), 6);
/// ```
pub fn resolve_week_index(date: NaiveDate, reference_month_start: NaiveDate) -> i32 {
    resolve_week(date, reference_month_start).global()
}

/// Picks the schedule that applies to `date`.
///
/// Among schedules for the date's weekday, one pinned to the date's
/// week-of-month wins over one that applies every week.
pub fn select_schedule(
    schedules: &[DaySchedule],
    date: NaiveDate,
    week: WeekIndex,
) -> Option<&DaySchedule> {
    let weekday = date.weekday();
    let on_weekday = |schedule: &&DaySchedule| schedule.day_of_week == weekday;

    schedules
        .iter()
        .filter(on_weekday)
        .find(|schedule| schedule.week_index == Some(week.week_of_month))
        .or_else(|| {
            schedules
                .iter()
                .filter(on_weekday)
                .find(|schedule| schedule.week_index.is_none())
        })
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}
