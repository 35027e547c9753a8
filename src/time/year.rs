use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::time::{DateRange, Month, WeekDay};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(from = "usize")]
#[serde(into = "usize")]
#[display("{}", _0)]
pub struct Year(usize);

impl Year {
    /// 0000-01-01 of the proleptic gregorian calendar was a saturday.
    const BASE_DATE: (Self, WeekDay) = (Self(0), WeekDay::Saturday);

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        self.0 % 4 == 0 && (self.0 % 100 != 0 || self.0 % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Number of days between the 1st of January of this year and the 1st of `month`.
    const fn days_before_month(&self, month: Month) -> usize {
        let mut result = 0;
        let mut current = 1;

        while current < month.as_usize() {
            result += self.number_of_days_in_month(Month::new(current));
            current += 1;
        }

        result
    }

    /// Number of days between the base date and the 1st of January of this year.
    const fn days_since_base_date(&self) -> usize {
        let leap_years = if self.0 == 0 {
            0
        } else {
            // year 0 is a leap year as well
            let previous = self.0 - 1;
            previous / 4 - previous / 100 + previous / 400 + 1
        };

        self.0 * 365 + leap_years
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let (year_ref, week_day_ref) = Self::BASE_DATE;
        let days = self.days_since_base_date() - year_ref.days_since_base_date()
            + self.days_before_month(month)
            + (day - 1);

        week_day_ref.add_const(days)
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Iterates over every day of the `month` in this year.
    #[must_use]
    pub fn iter_days_in(&self, month: Month) -> DateRange {
        DateRange::month(*self, month)
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Year> for usize {
    fn from(year: Year) -> Self {
        year.0
    }
}
