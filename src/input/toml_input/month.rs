use serde::{Deserialize, Serialize};

use crate::allocation::{DayEdit, EditBatch, Hours, MonthKey, SelectionError, WorkMonth};
use crate::time::Date;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct General {
    year: usize,
    month: usize,
}

impl General {
    #[must_use]
    pub const fn new(year: usize, month: usize) -> Self {
        Self { year, month }
    }

    #[must_use]
    pub const fn year(&self) -> usize {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> usize {
        self.month
    }

    pub fn key(&self) -> Result<MonthKey, SelectionError> {
        MonthKey::new(self.year, self.month)
    }
}

/// An explicit value for a single day. If no contracted load is given, the one of the
/// generated row is kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Day {
    date: Date,
    assigned: Hours,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contracted: Option<Hours>,
}

impl Day {
    #[must_use]
    pub const fn new(date: Date, assigned: Hours, contracted: Option<Hours>) -> Self {
        Self {
            date,
            assigned,
            contracted,
        }
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Month {
    general: General,
    #[serde(default, rename = "day")]
    days: Vec<Day>,
}

impl Month {
    #[must_use]
    pub fn new(general: General, days: Vec<Day>) -> Self {
        Self { general, days }
    }

    /// A month file listing every row of the `work_month`.
    #[must_use]
    pub fn from_work_month(work_month: &WorkMonth) -> Self {
        let key = work_month.key();

        Self::new(
            General::new(key.year().as_usize(), key.month().as_usize()),
            work_month
                .days()
                .iter()
                .map(|day| {
                    Day::new(
                        day.date(),
                        day.assigned_hours(),
                        Some(day.contracted_load()),
                    )
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn general(&self) -> &General {
        &self.general
    }

    pub fn days(&self) -> impl Iterator<Item = &Day> + '_ {
        self.days.iter()
    }

    /// Converts the listed days into edits for the `work_month`.
    ///
    /// Days that are not part of the `work_month` are kept, so that applying the
    /// batch reports them.
    #[must_use]
    pub fn edits(&self, work_month: &WorkMonth) -> EditBatch {
        self.days
            .iter()
            .map(|day| {
                let contracted = day.contracted.unwrap_or_else(|| {
                    work_month
                        .day(day.date)
                        .map_or(Hours::ZERO, |record| record.contracted_load())
                });

                DayEdit::new(day.date, day.assigned, contracted)
            })
            .collect()
    }
}
