use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::prelude::*;
use chrono::NaiveDate;

/// A concrete proleptic Gregorian calendar date.
///
/// Every value of this type is a real date: the day is valid for its month
/// and year (February 29 exists only in leap years). Instances are produced
/// one at a time by the enumerator and consumed immediately by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date, returning `None` when the triple does not name a real
    /// calendar date (bad month, day past the month's end, year out of the
    /// supported `1..=9999` range).
    pub const fn new(year: u16, month: u8, day: u8) -> Option<Self> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return None;
        }
        if month < 1 || month > MAX_MONTH {
            return None;
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Internal constructor for the enumerator, which only walks valid days.
    pub(crate) const fn from_parts(year: u16, month: u8, day: u8) -> Self {
        debug_assert!(month >= 1 && month <= MAX_MONTH);
        debug_assert!(day >= MIN_DAY && day <= days_in_month(year, month));
        Self { year, month, day }
    }

    /// Returns the year component
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month component (1-12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day-of-month component
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        // A CalendarDate is always a real date, so the conversion cannot
        // actually fail; the fallback keeps this path panic-free.
        Self::from_ymd_opt(
            i32::from(date.year),
            u32::from(date.month),
            u32::from(date.day),
        )
        .unwrap_or_default()
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
