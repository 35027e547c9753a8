use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "usize")]
#[serde(into = "usize")]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const fn new(number: usize) -> Self {
        Self::months()[number - 1]
    }

    pub const fn months() -> [Self; 12] {
        [
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self::months()[self.as_usize() % 12]
    }

    /// The Polish name of the month in the nominative case, as it is printed
    /// on the report and in its file name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::January => "styczeń",
            Self::February => "luty",
            Self::March => "marzec",
            Self::April => "kwiecień",
            Self::May => "maj",
            Self::June => "czerwiec",
            Self::July => "lipiec",
            Self::August => "sierpień",
            Self::September => "wrzesień",
            Self::October => "październik",
            Self::November => "listopad",
            Self::December => "grudzień",
        }
    }
}

impl From<Month> for usize {
    fn from(month: Month) -> Self {
        month.as_usize()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_usize().fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Error)]
#[error("invalid month number")]
pub struct InvalidNumberForMonth;

impl TryFrom<usize> for Month {
    type Error = InvalidNumberForMonth;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::months()
            .into_iter()
            .find(|month| *month as usize == value)
            .ok_or(InvalidNumberForMonth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        for month in Month::months() {
            assert_eq!(month.to_string(), month.as_usize().to_string());
        }
        assert_eq!(format!("{:02}", Month::March), "03");
    }

    #[test]
    fn test_next() {
        assert_eq!(Month::December.next(), Month::January);
        assert_eq!(Month::January.next(), Month::February);

        let months = Month::months();
        for i in 0..months.len() {
            assert_eq!(months[i].next(), months[(i + 1) % months.len()]);
        }
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Month::try_from(0), Err(InvalidNumberForMonth));
        assert_eq!(Month::try_from(13), Err(InvalidNumberForMonth));
        assert_eq!(Month::try_from(10), Ok(Month::October));
    }

    #[test]
    fn test_name() {
        assert_eq!(Month::October.name(), "październik");
        assert_eq!(Month::February.name(), "luty");
    }
}
