use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::time_of_day::TimeOfDay;

/// A half-open span `[start, end)` within one day. `start < end` always holds;
/// spans wrapping past midnight cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalBounds")]
pub struct Interval {
    start: TimeOfDay,
    end: TimeOfDay,
}

#[derive(Deserialize)]
struct IntervalBounds {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<IntervalBounds> for Interval {
    type Error = BookingError;

    fn try_from(bounds: IntervalBounds) -> BookingResult<Self> {
        Interval::new(bounds.start, bounds.end)
    }
}

impl Interval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> BookingResult<Self> {
        if start >= end {
            return Err(BookingError::InvalidInput(format!(
                "Interval {start}-{end} must end after it starts"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> u32 {
        u32::from(self.end.minutes() - self.start.minutes())
    }

    /// Half-open overlap: touching intervals do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.start <= time && time < self.end
    }
}

/// Sorts intervals and coalesces any that overlap or touch into maximal
/// disjoint spans.
pub fn merge_intervals<I>(intervals: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    let mut sorted: Vec<Interval> = intervals.into_iter().collect();
    sorted.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if interval.start <= last.end => last.end = last.end.max(interval.end),
            _ => merged.push(interval),
        }
    }
    merged
}

/// Why a span is unavailable. Only the interval matters to slot generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// An appointment already occupies the span.
    Booked,
    /// The location or professional marked the span unavailable.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedRange {
    pub interval: Interval,
    pub reason: BlockReason,
}

impl BlockedRange {
    pub fn new(interval: Interval, reason: BlockReason) -> Self {
        Self { interval, reason }
    }

    /// Parses a range from its `"HH:MM"` bounds. A range that does not end
    /// after it starts is malformed data here, so it is a
    /// [`BookingError::Format`].
    pub fn parse(start: &str, end: &str, reason: BlockReason) -> BookingResult<Self> {
        let interval = Interval::new(start.parse()?, end.parse()?).map_err(|_| {
            BookingError::Format(format!(
                "'{}-{}' is not a time range, it must end after it starts",
                start.trim(),
                end.trim()
            ))
        })?;
        Ok(Self::new(interval, reason))
    }

    /// Parses the compact `"HH:MM-HH:MM"` notation.
    pub fn parse_span(span: &str, reason: BlockReason) -> BookingResult<Self> {
        let (start, end) = span.split_once('-').ok_or_else(|| {
            BookingError::Format(format!("'{span}' is not a time range, expected HH:MM-HH:MM"))
        })?;
        Self::parse(start, end, reason)
    }
}

impl From<BlockedRange> for Interval {
    fn from(range: BlockedRange) -> Self {
        range.interval
    }
}
