use rust_decimal::Decimal;
use serde::Serialize;

use crate::allocation::Hours;
use crate::balance::round_half_up;
use crate::time::{Date, WeekDay};

/// A single business day of a [`WorkMonth`](crate::allocation::WorkMonth).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    date: Date,
    week_day: WeekDay,
    assigned_hours: Hours,
    contracted_load: Hours,
    delta: Decimal,
}

impl DayRecord {
    /// A freshly generated day: nothing is assigned yet and no delta has been computed.
    #[must_use]
    pub(crate) fn generated(date: Date, contracted_load: Hours) -> Self {
        Self {
            date,
            week_day: date.week_day(),
            assigned_hours: Hours::ZERO,
            contracted_load,
            delta: Decimal::ZERO,
        }
    }

    /// Returns a copy with new hours and a recomputed delta.
    ///
    /// The week day is carried over from `self`.
    #[must_use]
    pub(crate) fn edited(&self, assigned_hours: Hours, contracted_load: Hours) -> Self {
        Self {
            date: self.date,
            week_day: self.week_day,
            assigned_hours,
            contracted_load,
            delta: round_half_up(assigned_hours - contracted_load),
        }
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn week_day(&self) -> WeekDay {
        self.week_day
    }

    #[must_use]
    pub const fn assigned_hours(&self) -> Hours {
        self.assigned_hours
    }

    #[must_use]
    pub const fn contracted_load(&self) -> Hours {
        self.contracted_load
    }

    /// `assigned_hours - contracted_load` rounded to two decimal places, as of the
    /// last time edits were applied.
    #[must_use]
    pub const fn delta(&self) -> Decimal {
        self.delta
    }
}
