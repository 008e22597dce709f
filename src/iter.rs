use crate::config::GeneratorConfig;
use crate::consts::MAX_MONTH;
use crate::types::{days_in_month, CalendarDate};

/// Lazy enumerator over every valid calendar date in a configured range.
///
/// Walks years, then months, then days, honouring the month/day filters and
/// the configured direction; with `reverse` the whole sequence is the exact
/// total-order reversal of the forward one. A day filter value that a given
/// month does not have (day 31 in February, say) is silently skipped.
///
/// The iterator holds no resources, so dropping it mid-way is free, and a
/// fresh one restarts at the beginning of the range.
#[derive(Debug, Clone)]
pub struct DateIter {
    /// Months in traversal order (already reversed when descending)
    months: Vec<u8>,
    /// Day-of-month filter, ascending
    day_filter: Option<Vec<u8>>,
    start_year: i32,
    end_year: i32,
    reverse: bool,
    /// Current year; i32 so stepping past year 1 cannot underflow
    year: i32,
    month_pos: usize,
    /// Valid days of the current (year, month) in traversal order
    month_days: Vec<u8>,
    day_pos: usize,
    done: bool,
}

impl DateIter {
    pub(crate) fn new(config: &GeneratorConfig) -> Self {
        let mut months = config
            .months
            .clone()
            .unwrap_or_else(|| (1..=MAX_MONTH).collect());
        if config.reverse {
            months.reverse();
        }
        let start_year = i32::from(config.start_year);
        let end_year = i32::from(config.end_year);
        let year = if config.reverse { end_year } else { start_year };

        let mut iter = Self {
            months,
            day_filter: config.days.clone(),
            start_year,
            end_year,
            reverse: config.reverse,
            year,
            month_pos: 0,
            month_days: Vec::new(),
            day_pos: 0,
            done: false,
        };
        iter.load_month();
        iter
    }

    /// Fills `month_days` for the current (year, month) cursor.
    fn load_month(&mut self) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let year = self.year as u16;
        let month = self.months[self.month_pos];
        let last = days_in_month(year, month);
        let mut days: Vec<u8> = match &self.day_filter {
            Some(filter) => filter.iter().copied().filter(|&d| d <= last).collect(),
            None => (1..=last).collect(),
        };
        if self.reverse {
            days.reverse();
        }
        self.month_days = days;
        self.day_pos = 0;
    }

    /// Moves the cursor to the next (year, month); returns false when the
    /// range is exhausted.
    fn advance_month(&mut self) -> bool {
        self.month_pos += 1;
        if self.month_pos == self.months.len() {
            self.month_pos = 0;
            if self.reverse {
                self.year -= 1;
                if self.year < self.start_year {
                    return false;
                }
            } else {
                self.year += 1;
                if self.year > self.end_year {
                    return false;
                }
            }
        }
        self.load_month();
        true
    }
}

impl Iterator for DateIter {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        loop {
            if self.done {
                return None;
            }
            if self.day_pos < self.month_days.len() {
                let day = self.month_days[self.day_pos];
                self.day_pos += 1;
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let year = self.year as u16;
                return Some(CalendarDate::from_parts(
                    year,
                    self.months[self.month_pos],
                    day,
                ));
            }
            // Current month exhausted (possibly empty after day filtering)
            if !self.advance_month() {
                self.done = true;
            }
        }
    }
}

impl std::iter::FusedIterator for DateIter {}
