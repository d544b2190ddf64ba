use serde::{Deserialize, Serialize};

use crate::models::interval::Interval;
use crate::models::schedule::DaySchedule;
use crate::models::time_of_day::TimeOfDay;

pub const DEFAULT_SLOT_INTERVAL_MINUTES: i32 = 30;

fn default_slot_interval() -> i32 {
    DEFAULT_SLOT_INTERVAL_MINUTES
}

/// Everything needed to compute the bookable start times of one day.
///
/// Durations are signed so that a bad value coming from configuration is
/// reported as [`crate::errors::BookingError::InvalidInput`] instead of
/// being silently coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequest {
    /// Schedule already resolved for the target date.
    pub schedule: DaySchedule,
    pub service_duration_minutes: i32,
    #[serde(default)]
    pub blocked_ranges: Vec<Interval>,
    #[serde(default = "default_slot_interval")]
    pub slot_interval_minutes: i32,
}

impl SlotRequest {
    pub fn new(schedule: DaySchedule, service_duration_minutes: i32) -> Self {
        Self {
            schedule,
            service_duration_minutes,
            blocked_ranges: Vec::new(),
            slot_interval_minutes: DEFAULT_SLOT_INTERVAL_MINUTES,
        }
    }

    pub fn with_slot_interval(mut self, minutes: i32) -> Self {
        self.slot_interval_minutes = minutes;
        self
    }

    pub fn with_blocked_ranges<I, R>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Interval>,
    {
        self.blocked_ranges.extend(ranges.into_iter().map(Into::into));
        self
    }
}

/// Bookable start times in strictly increasing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailableSlots(Vec<TimeOfDay>);

impl AvailableSlots {
    pub(crate) fn from_sorted(times: Vec<TimeOfDay>) -> Self {
        Self(times)
    }

    pub fn as_slice(&self) -> &[TimeOfDay] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeOfDay> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.0.binary_search(&time).is_ok()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn into_inner(self) -> Vec<TimeOfDay> {
        self.0
    }
}

impl IntoIterator for AvailableSlots {
    type Item = TimeOfDay;
    type IntoIter = std::vec::IntoIter<TimeOfDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AvailableSlots {
    type Item = &'a TimeOfDay;
    type IntoIter = std::slice::Iter<'a, TimeOfDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
