use core::ops::RangeInclusive;

use thiserror::Error;

use crate::allocation::InvalidHours;
use crate::time::{Date, InvalidNumberForMonth};

/// The years that can be selected in the form.
pub const SUPPORTED_YEARS: RangeInclusive<usize> = 2025..=2035;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error(
        "the year {year} is not supported, expected a year in {}..={}",
        SUPPORTED_YEARS.start(),
        SUPPORTED_YEARS.end()
    )]
    InvalidYear { year: usize },
    #[error("{month} is not a valid month, expected a number from 1 to 12")]
    InvalidMonth {
        month: usize,
        #[source]
        source: InvalidNumberForMonth,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no allocation has been generated for {year:04}-{month:02}")]
    NoTable { year: usize, month: usize },
    #[error("the date {date} is not part of the current allocation, it might have been regenerated")]
    StaleKeyMismatch { date: Date },
    #[error("the edits were made for generation {found}, but the allocation is at generation {expected}")]
    StaleGeneration { expected: u64, found: u64 },
    #[error("the date {date} has been edited more than once")]
    DuplicateDate { date: Date },
    #[error(transparent)]
    InvalidHours(#[from] InvalidHours),
}

impl EditError {
    /// Whether the edits were made against a table that no longer exists.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(
            self,
            Self::StaleKeyMismatch { .. } | Self::StaleGeneration { .. }
        )
    }
}
