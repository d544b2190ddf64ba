//! # Booking Configuration Module
//!
//! This module loads the settings the availability handler falls back on when
//! a query does not carry its own values.
//!
//! ## Environment Variables
//!
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `SLOTBOOK_SLOT_INTERVAL_MINUTES`: Step between candidate start times (default: 30)
//! - `SLOTBOOK_REFERENCE_MONTH_START`: `YYYY-MM-DD` date whose month is week bucket 1-5
//!   (default: the requested date's own month)
//! - `SLOTBOOK_DEFAULT_OPENING_TIME`: Opening time for locations without working hours (default: "08:00")
//! - `SLOTBOOK_DEFAULT_CLOSING_TIME`: Closing time for locations without working hours (default: "18:00")
//! - `SLOTBOOK_MIDNIGHT_AS_TWELVE`: Label `00:xx` slots as `12:xx` (default: true)

use std::env;

use chrono::{NaiveDate, Weekday};
use eyre::{Result, WrapErr, eyre};
use slotbook_core::models::slot::DEFAULT_SLOT_INTERVAL_MINUTES;
use slotbook_core::{DaySchedule, TimeOfDay};
use tracing::Level;

pub const DEFAULT_OPENING_TIME: TimeOfDay = TimeOfDay::at(8, 0);
pub const DEFAULT_CLOSING_TIME: TimeOfDay = TimeOfDay::at(18, 0);

pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Configuration for the availability handler
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use slotbook_booking::config::BookingConfig;
///
/// fn example() -> Result<()> {
///     let config = BookingConfig::from_env()?;
///     println!("Offering a slot every {} minutes", config.slot_interval_minutes);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Log level for the application
    pub log_level: Level,

    /// Step between candidate start times when a query does not set one
    pub slot_interval_minutes: i32,

    /// Reference date for week-of-month buckets
    pub reference_month_start: Option<NaiveDate>,

    /// Opening time applied to every day of a location with no working-hours records
    pub default_opening_time: TimeOfDay,

    /// Closing time applied to every day of a location with no working-hours records
    pub default_closing_time: TimeOfDay,

    /// Whether slot labels show midnight hours as `12:xx`
    pub midnight_as_twelve: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            slot_interval_minutes: DEFAULT_SLOT_INTERVAL_MINUTES,
            reference_month_start: None,
            default_opening_time: DEFAULT_OPENING_TIME,
            default_closing_time: DEFAULT_CLOSING_TIME,
            midnight_as_twelve: true,
        }
    }
}

impl BookingConfig {
    /// Creates a new BookingConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `SLOTBOOK_SLOT_INTERVAL_MINUTES` is not a positive integer
    /// - `SLOTBOOK_REFERENCE_MONTH_START` is not a `YYYY-MM-DD` date
    /// - either default time is not an `HH:MM` time
    /// - `SLOTBOOK_MIDNIGHT_AS_TWELVE` is not a boolean
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, such as a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // Slot settings
        let slot_interval_minutes = match lookup("SLOTBOOK_SLOT_INTERVAL_MINUTES") {
            Some(value) => value
                .trim()
                .parse::<i32>()
                .wrap_err("Invalid SLOTBOOK_SLOT_INTERVAL_MINUTES value")?,
            None => defaults.slot_interval_minutes,
        };
        if slot_interval_minutes <= 0 {
            return Err(eyre!(
                "SLOTBOOK_SLOT_INTERVAL_MINUTES must be positive, got {slot_interval_minutes}"
            ));
        }

        let reference_month_start = lookup("SLOTBOOK_REFERENCE_MONTH_START")
            .map(|value| value.trim().parse::<NaiveDate>())
            .transpose()
            .wrap_err("Invalid SLOTBOOK_REFERENCE_MONTH_START value, expected YYYY-MM-DD")?;

        // Default working hours
        let default_opening_time = match lookup("SLOTBOOK_DEFAULT_OPENING_TIME") {
            Some(value) => value
                .parse::<TimeOfDay>()
                .wrap_err("Invalid SLOTBOOK_DEFAULT_OPENING_TIME value")?,
            None => defaults.default_opening_time,
        };
        let default_closing_time = match lookup("SLOTBOOK_DEFAULT_CLOSING_TIME") {
            Some(value) => value
                .parse::<TimeOfDay>()
                .wrap_err("Invalid SLOTBOOK_DEFAULT_CLOSING_TIME value")?,
            None => defaults.default_closing_time,
        };

        // Presentation settings
        let midnight_as_twelve = match lookup("SLOTBOOK_MIDNIGHT_AS_TWELVE") {
            Some(value) => parse_flag(&value)
                .ok_or_else(|| eyre!("Invalid SLOTBOOK_MIDNIGHT_AS_TWELVE value: {value}"))?,
            None => defaults.midnight_as_twelve,
        };

        Ok(Self {
            log_level,
            slot_interval_minutes,
            reference_month_start,
            default_opening_time,
            default_closing_time,
            midnight_as_twelve,
        })
    }

    /// Working hours used for a location that has no records: the default
    /// opening and closing times on all seven days.
    pub fn default_working_hours(&self) -> Vec<DaySchedule> {
        ALL_WEEKDAYS
            .iter()
            .map(|day| DaySchedule::open(*day, self.default_opening_time, self.default_closing_time))
            .collect()
    }

    pub fn slot_label(&self, time: TimeOfDay) -> String {
        if self.midnight_as_twelve {
            time.display_label()
        } else {
            time.to_string()
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
