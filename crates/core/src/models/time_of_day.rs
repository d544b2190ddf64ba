use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time within a single day, stored as minutes since midnight.
///
/// On the wire a `TimeOfDay` is an `"HH:MM"` string. Parsing accepts `H:MM`
/// or `HH:MM` with surrounding whitespace; everything else is a
/// [`BookingError::Format`].
///
/// ```
/// use slotbook_core::models::time_of_day::TimeOfDay;
///
/// let opens: TimeOfDay = "9:30".parse().unwrap();
/// assert_eq!(opens.minutes(), 570);
/// assert_eq!(opens.to_string(), "09:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    pub fn from_minutes(minutes: u32) -> BookingResult<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(BookingError::Format(format!(
                "{minutes} minutes is outside a single day (0-1439)"
            )));
        }
        Ok(Self(minutes as u16))
    }

    /// Builds a time from constant parts; out-of-range parts fail const evaluation.
    pub const fn at(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "hour or minute out of range");
        Self(hour * 60 + minute)
    }

    /// Minutes since midnight, always below 1440.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Label shown to customers: midnight hours read `12:xx` instead of `00:xx`.
    ///
    /// Presentation only; ordering and comparison use [`TimeOfDay::minutes`].
    pub fn display_label(self) -> String {
        match self.hour() {
            0 => format!("12:{:02}", self.minute()),
            _ => self.to_string(),
        }
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::default() + Duration::minutes(i64::from(self.0))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = BookingError;

    fn from_str(s: &str) -> BookingResult<Self> {
        let malformed = || BookingError::Format(format!("'{s}' is not a time of day, expected HH:MM"));

        let trimmed = s.trim();
        // chrono takes one-digit minutes, the wire format does not.
        let two_digit_minutes = trimmed
            .rsplit_once(':')
            .is_some_and(|(_, minutes)| minutes.len() == 2 && minutes.bytes().all(|b| b.is_ascii_digit()));
        if !two_digit_minutes {
            return Err(malformed());
        }

        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map(Self::from)
            .map_err(|_| malformed())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = BookingError;

    fn try_from(value: String) -> BookingResult<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        time.to_naive_time()
    }
}
