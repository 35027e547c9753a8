use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::time::{Month, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// # Safety
    ///
    /// The day must exist in the given month of the year.
    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    /// Returns the date of the first day as a date in the month.
    #[must_use]
    pub const fn first_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: 1,
        }
    }

    /// Returns the date of the last day as a date in the month.
    #[must_use]
    pub const fn last_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: year.number_of_days_in_month(month),
        }
    }

    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    pub const fn is_business_day(&self) -> bool {
        self.week_day().is_business_day()
    }

    /// Returns the date of the following day, crossing month and year boundaries.
    #[must_use]
    pub const fn next_day(&self) -> Self {
        if self.day < self.year.number_of_days_in_month(self.month) {
            Self {
                day: self.day + 1,
                ..*self
            }
        } else if self.month.as_usize() < 12 {
            Self::first_day(self.year, self.month.next())
        } else {
            Self::first_day(self.year.next(), Month::January)
        }
    }

    /// Iterates from `self` to `end`, both inclusive.
    #[must_use]
    pub const fn iter_until(self, end: Self) -> DateRange {
        DateRange::new(self, end)
    }
}

/// An inclusive range of consecutive dates.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

impl DateRange {
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self {
            next: Some(start),
            end,
        }
    }

    #[must_use]
    pub const fn month(year: Year, month: Month) -> Self {
        Self::new(Date::first_day(year, month), Date::last_day(year, month))
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|date| *date <= self.end)?;
        self.next = Some(current.next_day());
        Some(current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str, string: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: string.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year, string)?);
            let month = Month::try_from(parse_or_err(month, string)?).map_err(|_| {
                InvalidDate::ParseDateError {
                    input: string.to_string(),
                }
            })?;
            let day = parse_or_err(day, string)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
