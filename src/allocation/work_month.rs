use core::fmt;
use std::collections::HashSet;

use log::{debug, info};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::allocation::{DayRecord, EditError, Hours, SelectionError, SUPPORTED_YEARS};
use crate::time::{Date, DateRange, Month, Year};

/// Identifies the table of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    year: Year,
    month: Month,
}

impl MonthKey {
    pub fn new(year: usize, month: usize) -> Result<Self, SelectionError> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(SelectionError::InvalidYear { year });
        }

        let month =
            Month::try_from(month).map_err(|source| SelectionError::InvalidMonth { month, source })?;

        Ok(Self {
            year: Year::new(year),
            month,
        })
    }

    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub const fn first_day(&self) -> Date {
        Date::first_day(self.year, self.month)
    }

    #[must_use]
    pub const fn last_day(&self) -> Date {
        Date::last_day(self.year, self.month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year.as_usize(), self.month.as_usize())
    }
}

/// Returns all business days between `start` and `end` (both inclusive) in ascending order.
pub fn business_days(start: Date, end: Date) -> impl Iterator<Item = Date> {
    DateRange::new(start, end).filter(Date::is_business_day)
}

/// Generates the table for the given month, every business day with nothing assigned
/// and the `default_load` as contracted load.
pub fn generate(year: usize, month: usize, default_load: Hours) -> Result<WorkMonth, SelectionError> {
    Ok(WorkMonth::generate(MonthKey::new(year, month)?, default_load))
}

/// A single changed row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEdit {
    date: Date,
    assigned_hours: Hours,
    contracted_load: Hours,
}

impl DayEdit {
    #[must_use]
    pub const fn new(date: Date, assigned_hours: Hours, contracted_load: Hours) -> Self {
        Self {
            date,
            assigned_hours,
            contracted_load,
        }
    }

    /// Validates raw values as they come from an input field.
    pub fn from_decimals(
        date: Date,
        assigned_hours: Decimal,
        contracted_load: Decimal,
    ) -> Result<Self, EditError> {
        Ok(Self::new(
            date,
            Hours::new(assigned_hours)?,
            Hours::new(contracted_load)?,
        ))
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn assigned_hours(&self) -> Hours {
        self.assigned_hours
    }

    #[must_use]
    pub const fn contracted_load(&self) -> Hours {
        self.contracted_load
    }
}

/// A set of edits that is applied all at once or not at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    generation: Option<u64>,
    edits: Vec<DayEdit>,
}

impl EditBatch {
    #[must_use]
    pub fn new(edits: Vec<DayEdit>) -> Self {
        Self {
            generation: None,
            edits,
        }
    }

    /// Only apply the edits, if the table has not been regenerated since `generation`.
    #[must_use]
    pub fn for_generation(mut self, generation: u64) -> Self {
        self.generation = Some(generation);
        self
    }

    #[must_use]
    pub const fn generation(&self) -> Option<u64> {
        self.generation
    }

    pub fn push(&mut self, edit: DayEdit) {
        self.edits.push(edit);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayEdit> + '_ {
        self.edits.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

impl FromIterator<DayEdit> for EditBatch {
    fn from_iter<T: IntoIterator<Item = DayEdit>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The allocation table of a single month.
///
/// Rows are sorted ascending by date and only contain business days of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkMonth {
    key: MonthKey,
    generation: u64,
    days: Vec<DayRecord>,
}

impl WorkMonth {
    #[must_use]
    pub fn generate(key: MonthKey, default_load: Hours) -> Self {
        let days = business_days(key.first_day(), key.last_day())
            .map(|date| DayRecord::generated(date, default_load))
            .collect::<Vec<_>>();

        info!(
            "generated {} business days for {} with a load of {}",
            days.len(),
            key,
            default_load
        );

        Self::from_days(key, days)
    }

    #[must_use]
    pub(crate) fn from_days(key: MonthKey, days: Vec<DayRecord>) -> Self {
        Self {
            key,
            generation: 0,
            days,
        }
    }

    #[must_use]
    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    #[must_use]
    pub const fn key(&self) -> MonthKey {
        self.key
    }

    /// The regeneration this table belongs to. Input that was prepared for an older
    /// generation must not be applied to this table.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    #[must_use]
    pub fn day(&self, date: Date) -> Option<&DayRecord> {
        self.position(date).map(|index| &self.days[index])
    }

    fn position(&self, date: Date) -> Option<usize> {
        self.days
            .binary_search_by_key(&date, DayRecord::date)
            .ok()
    }

    /// Returns the table with the `batch` applied.
    ///
    /// The delta of every edited row is recomputed. Rows that are not part of the
    /// batch keep their stored values. If any edit is invalid, no edit is applied.
    pub fn apply_edits(&self, batch: &EditBatch) -> Result<Self, EditError> {
        if let Some(found) = batch.generation() {
            if found != self.generation {
                return Err(EditError::StaleGeneration {
                    expected: self.generation,
                    found,
                });
            }
        }

        let mut updates = vec![None; self.days.len()];
        let mut seen = HashSet::with_capacity(batch.len());
        for edit in batch.iter() {
            if !seen.insert(edit.date()) {
                return Err(EditError::DuplicateDate { date: edit.date() });
            }

            let index = self
                .position(edit.date())
                .ok_or(EditError::StaleKeyMismatch { date: edit.date() })?;
            updates[index] = Some(edit);
        }

        let days = self
            .days
            .iter()
            .zip(updates)
            .map(|(day, update)| match update {
                Some(edit) => day.edited(edit.assigned_hours(), edit.contracted_load()),
                None => day.clone(),
            })
            .collect();

        debug!("applied {} edits to {}", batch.len(), self.key);

        Ok(Self {
            key: self.key,
            generation: self.generation,
            days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::date;
    use crate::time::WeekDay;

    fn hours(value: Decimal) -> Hours {
        Hours::new(value).unwrap()
    }

    #[test]
    fn test_month_key_validation() {
        assert!(MonthKey::new(2025, 1).is_ok());
        assert!(MonthKey::new(2035, 12).is_ok());
        assert_eq!(
            MonthKey::new(2024, 12),
            Err(SelectionError::InvalidYear { year: 2024 })
        );
        assert_eq!(
            MonthKey::new(2036, 1),
            Err(SelectionError::InvalidYear { year: 2036 })
        );
        assert!(matches!(
            MonthKey::new(2025, 13),
            Err(SelectionError::InvalidMonth { month: 13, .. })
        ));
        assert!(matches!(
            MonthKey::new(2025, 0),
            Err(SelectionError::InvalidMonth { month: 0, .. })
        ));
    }

    #[test]
    fn test_business_days_of_weekend() {
        // 2025-03-01 is a saturday
        assert_eq!(business_days(date!(2025:03:01), date!(2025:03:02)).count(), 0);
        assert_eq!(
            business_days(date!(2025:03:01), date!(2025:03:03)).collect::<Vec<_>>(),
            vec![date!(2025:03:03)]
        );
    }

    #[test]
    fn test_generate_march_2025() {
        let work_month = generate(2025, 3, hours(dec!(3.6))).unwrap();

        assert_eq!(work_month.days().len(), 21);
        assert_eq!(work_month.days()[0].date(), date!(2025:03:03));
        assert_eq!(work_month.days()[0].week_day(), WeekDay::Monday);
        assert_eq!(work_month.days()[20].date(), date!(2025:03:31));

        for day in work_month.days() {
            assert_eq!(day.assigned_hours(), Hours::ZERO);
            assert_eq!(day.contracted_load(), hours(dec!(3.6)));
            assert_eq!(day.delta(), Decimal::ZERO);
        }
    }

    #[test]
    fn test_generate_rejects_invalid_selection() {
        assert_eq!(
            generate(2020, 3, Hours::ZERO),
            Err(SelectionError::InvalidYear { year: 2020 })
        );
    }

    #[test]
    fn test_apply_edits() {
        let work_month = generate(2025, 3, hours(dec!(3.6))).unwrap();
        let edited = work_month
            .apply_edits(&EditBatch::new(vec![DayEdit::new(
                date!(2025:03:05),
                hours(dec!(5)),
                hours(dec!(4.2)),
            )]))
            .unwrap();

        let day = edited.day(date!(2025:03:05)).unwrap();
        assert_eq!(day.week_day(), WeekDay::Wednesday);
        assert_eq!(day.assigned_hours(), hours(dec!(5)));
        assert_eq!(day.contracted_load(), hours(dec!(4.2)));
        assert_eq!(day.delta(), dec!(0.8));

        let untouched = edited.day(date!(2025:03:06)).unwrap();
        assert_eq!(untouched, work_month.day(date!(2025:03:06)).unwrap());
        assert_eq!(untouched.delta(), Decimal::ZERO);

        // the input table is not modified
        assert_eq!(work_month.day(date!(2025:03:05)).unwrap().delta(), Decimal::ZERO);
    }

    #[test]
    fn test_partial_batch_only_changes_listed_rows() {
        let work_month = generate(2025, 3, hours(dec!(3.6))).unwrap();
        let edited = work_month
            .apply_edits(&EditBatch::new(vec![
                DayEdit::new(date!(2025:03:03), hours(dec!(4.0)), hours(dec!(3.6))),
                DayEdit::new(date!(2025:03:04), hours(dec!(3.0)), hours(dec!(3.6))),
            ]))
            .unwrap();

        let deltas = edited.days().iter().map(|day| day.delta()).sum::<Decimal>();
        assert_eq!(deltas, dec!(-0.20));

        for (before, after) in work_month.days().iter().zip(edited.days()).skip(2) {
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_apply_edits_is_atomic() {
        let work_month = generate(2025, 3, hours(dec!(3.6))).unwrap();
        let batch = EditBatch::new(vec![
            DayEdit::new(date!(2025:03:03), hours(dec!(4)), hours(dec!(3.6))),
            // a saturday
            DayEdit::new(date!(2025:03:08), hours(dec!(4)), hours(dec!(3.6))),
        ]);

        assert_eq!(
            work_month.apply_edits(&batch),
            Err(EditError::StaleKeyMismatch {
                date: date!(2025:03:08)
            })
        );
    }

    #[test]
    fn test_apply_edits_rejects_duplicates() {
        let work_month = generate(2025, 3, hours(dec!(3.6))).unwrap();
        let edit = DayEdit::new(date!(2025:03:03), hours(dec!(4)), hours(dec!(3.6)));

        assert_eq!(
            work_month.apply_edits(&EditBatch::new(vec![edit, edit])),
            Err(EditError::DuplicateDate {
                date: date!(2025:03:03)
            })
        );
    }

    #[test]
    fn test_apply_edits_checks_generation() {
        let work_month = generate(2025, 3, hours(dec!(3.6)))
            .unwrap()
            .with_generation(2);

        let batch = EditBatch::new(Vec::new()).for_generation(1);
        assert_eq!(
            work_month.apply_edits(&batch),
            Err(EditError::StaleGeneration {
                expected: 2,
                found: 1
            })
        );

        assert!(work_month
            .apply_edits(&EditBatch::new(Vec::new()).for_generation(2))
            .is_ok());
    }

    #[test]
    fn test_from_decimals_rejects_negative_hours() {
        assert!(matches!(
            DayEdit::from_decimals(date!(2025:03:03), dec!(-1), dec!(3.6)),
            Err(EditError::InvalidHours(_))
        ));
    }
}
