//! Calendar calculations for the sunrise equation.
//!
//! The equation only needs the ordinal day of the year, and the day-length
//! delta needs the calendar day before a given one. Both follow the
//! proleptic Gregorian calendar.

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Cumulative day counts before each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A calendar date without time of day.
///
/// # Example
/// ```
/// # use sun_cycle::time::CalendarDay;
/// let day = CalendarDay::new(2024, 3, 1).unwrap();
/// assert_eq!(day.day_of_year(), 61);
///
/// let yesterday = day.previous().unwrap();
/// assert_eq!((yesterday.year(), yesterday.month(), yesterday.day()), (2024, 2, 29));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDay {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDay {
    /// Creates a validated calendar day.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the month is outside 1-12 or the day does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a calendar day from any chrono date-like value, dropping the time of day.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the date components are invalid.
    #[cfg(feature = "chrono")]
    pub fn from_date_like<D: Datelike>(date: &D) -> Result<Self> {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the ordinal day within the year (1-365, or 1-366 in leap years).
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        let leap_day = if self.month > 2 && is_leap_year(self.year) {
            1
        } else {
            0
        };
        DAYS_BEFORE_MONTH[(self.month - 1) as usize] + leap_day + self.day
    }

    /// Gets the calendar day before this one.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the year would underflow.
    pub fn previous(&self) -> Result<Self> {
        if self.day > 1 {
            return Ok(Self {
                day: self.day - 1,
                ..*self
            });
        }
        if self.month > 1 {
            let month = self.month - 1;
            return Ok(Self {
                year: self.year,
                month,
                day: days_in_month(self.year, month),
            });
        }
        let year = self
            .year
            .checked_sub(1)
            .ok_or(Error::invalid_datetime("year is out of range"))?;
        Ok(Self {
            year,
            month: 12,
            day: 31,
        })
    }
}

/// Checks whether a year is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month; `month` must be 1-12.
const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
