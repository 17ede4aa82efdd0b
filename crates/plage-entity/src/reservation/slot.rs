//! Booking time windows.
//!
//! A slot is a half-open interval `[start, end)` within a single day.
//! Two slots overlap iff `a.start < b.end && a.end > b.start`, so a
//! booking ending at 14:00 never collides with one starting at 14:00.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use plage_core::{AppError, AppResult};

/// Accepted wire formats for times of day.
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// A half-open time window within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Inclusive start of the window.
    pub start: NaiveTime,
    /// Exclusive end of the window.
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Build a slot, rejecting empty or inverted windows.
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::validation(
                "Start time must be earlier than end time",
            ));
        }
        Ok(Self { start, end })
    }

    /// The half-open interval overlap test.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Length of the window in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Length of the window in fractional hours.
    ///
    /// Recurring fractions (20 minutes is a third of an hour) come back
    /// rounded at `Decimal`'s precision limit; anything that feeds a
    /// price should scale [`duration_seconds`](Self::duration_seconds)
    /// instead and divide last.
    pub fn duration_hours(&self) -> Decimal {
        Decimal::from(self.duration_seconds()) / Decimal::from(3600)
    }
}

/// Parse a time of day from its wire form (`"12:00"` or `"12:00:00"`).
pub fn parse_time(value: &str) -> AppResult<NaiveTime> {
    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(value, format) {
            return Ok(time);
        }
    }
    Err(AppError::validation(format!(
        "Invalid time '{value}'. Expected HH:MM"
    )))
}
