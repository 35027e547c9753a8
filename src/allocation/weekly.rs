use serde::{Deserialize, Serialize};

use crate::allocation::{DayEdit, EditBatch, Hours, WorkMonth};
use crate::time::WeekDay;

/// The hours that are assigned on each business day of a regular week.
///
/// It is used to prefill the assigned hours of a freshly generated table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeeklyAllocation {
    #[serde(default)]
    monday: Hours,
    #[serde(default)]
    tuesday: Hours,
    #[serde(default)]
    wednesday: Hours,
    #[serde(default)]
    thursday: Hours,
    #[serde(default)]
    friday: Hours,
}

impl WeeklyAllocation {
    #[must_use]
    pub const fn new(days: [Hours; 5]) -> Self {
        let [monday, tuesday, wednesday, thursday, friday] = days;
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
        }
    }

    /// Returns the hours for the `week_day`, weekends have nothing assigned.
    #[must_use]
    pub const fn hours(&self, week_day: WeekDay) -> Hours {
        match week_day {
            WeekDay::Monday => self.monday,
            WeekDay::Tuesday => self.tuesday,
            WeekDay::Wednesday => self.wednesday,
            WeekDay::Thursday => self.thursday,
            WeekDay::Friday => self.friday,
            WeekDay::Saturday | WeekDay::Sunday => Hours::ZERO,
        }
    }

    pub fn set(&mut self, week_day: WeekDay, hours: Hours) {
        match week_day {
            WeekDay::Monday => self.monday = hours,
            WeekDay::Tuesday => self.tuesday = hours,
            WeekDay::Wednesday => self.wednesday = hours,
            WeekDay::Thursday => self.thursday = hours,
            WeekDay::Friday => self.friday = hours,
            WeekDay::Saturday | WeekDay::Sunday => {}
        }
    }

    /// Builds edits that assign every row the hours of its week day, while keeping
    /// the contracted load of the row.
    #[must_use]
    pub fn to_edit_batch(&self, work_month: &WorkMonth) -> EditBatch {
        work_month
            .days()
            .iter()
            .map(|day| DayEdit::new(day.date(), self.hours(day.week_day()), day.contracted_load()))
            .collect::<EditBatch>()
            .for_generation(work_month.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::allocation::MonthKey;
    use crate::balance::compute_balance;
    use crate::date;

    fn hours(value: Decimal) -> Hours {
        Hours::new(value).unwrap()
    }

    #[test]
    fn test_deserialize_partial() {
        let weekly: WeeklyAllocation = toml::from_str("monday = 4.5\nfriday = 2").unwrap();

        assert_eq!(weekly.hours(WeekDay::Monday), hours(dec!(4.5)));
        assert_eq!(weekly.hours(WeekDay::Tuesday), Hours::ZERO);
        assert_eq!(weekly.hours(WeekDay::Friday), hours(dec!(2)));
        assert_eq!(weekly.hours(WeekDay::Sunday), Hours::ZERO);
    }

    #[test]
    fn test_to_edit_batch() {
        let mut weekly = WeeklyAllocation::default();
        weekly.set(WeekDay::Monday, hours(dec!(4)));
        weekly.set(WeekDay::Wednesday, hours(dec!(3)));

        let work_month = WorkMonth::generate(MonthKey::new(2025, 3).unwrap(), hours(dec!(3.6)));
        let batch = weekly.to_edit_batch(&work_month);
        assert_eq!(batch.len(), work_month.days().len());

        let applied = work_month.apply_edits(&batch).unwrap();
        let monday = applied.day(date!(2025:03:03)).unwrap();
        assert_eq!(monday.assigned_hours(), hours(dec!(4)));
        assert_eq!(monday.delta(), dec!(0.4));

        // 5 mondays, 4 wednesdays and 21 business days in march 2025
        assert_eq!(
            compute_balance(&applied),
            dec!(4) * Decimal::from(5) + dec!(3) * Decimal::from(4) - dec!(3.6) * Decimal::from(21)
        );
    }
}
