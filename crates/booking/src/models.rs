//! Request and response shapes exchanged with the booking wizard. Field names
//! follow the backend's camelCase JSON.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use slotbook_core::TimeOfDay;

/// One day of a location's working hours as stored by the backend.
///
/// `start`/`end` may be omitted for closed days.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursRecord {
    pub day: String,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub closed: bool,
    pub week_index: Option<u8>,
}

/// A booked appointment or an unavailable period for the requested date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRangeRecord {
    pub start_time: String,
    pub end_time: String,
}

/// A service picked in the wizard; `time` is its duration in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub name: String,
    pub time: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub services: Vec<ServiceRecord>,
    #[serde(default)]
    pub working_hours: Vec<WorkingHoursRecord>,
    #[serde(default)]
    pub booked_slots: Vec<TimeRangeRecord>,
    #[serde(default)]
    pub unavailable_periods: Vec<TimeRangeRecord>,
    /// Compact `"HH:MM-HH:MM"` spans, e.g. a lunch break.
    #[serde(default)]
    pub blocked_slots: Vec<String>,
    pub slot_interval: Option<i32>,
    pub reference_month_start: Option<NaiveDate>,
    /// Dates before this one cannot be booked.
    pub today: Option<NaiveDate>,
    pub selected_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Available,
    FullyBooked,
    Closed,
    PastDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub time: TimeOfDay,
    pub label: String,
}

/// The chosen appointment handed on to the booking workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedAppointment {
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub week_index: i32,
    pub status: DayStatus,
    pub total_service_minutes: i32,
    pub slots: Vec<SlotView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectedAppointment>,
}
