use core::fmt;
use core::ops::Add;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Serialize)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    /// Returns the week day that is `days` after `self`.
    #[must_use]
    pub const fn add_const(self, days: usize) -> Self {
        match (self.as_usize() - 1 + days % 7) % 7 + 1 {
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    /// Monday to Friday. Holidays are not taken into account.
    #[must_use]
    pub const fn is_business_day(&self) -> bool {
        self.as_usize() <= Self::Friday.as_usize()
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "Poniedziałek",
            Self::Tuesday => "Wtorek",
            Self::Wednesday => "Środa",
            Self::Thursday => "Czwartek",
            Self::Friday => "Piątek",
            Self::Saturday => "Sobota",
            Self::Sunday => "Niedziela",
        }
    }
}

impl Add<usize> for WeekDay {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        self.add_const(rhs)
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid week day number")]
pub struct InvalidWeekDayNumber;

impl TryFrom<usize> for WeekDay {
    type Error = InvalidWeekDayNumber;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            _ => Err(InvalidWeekDayNumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_add() {
        assert_eq!(WeekDay::Monday + 0, WeekDay::Monday);
        assert_eq!(WeekDay::Monday + 4, WeekDay::Friday);
        assert_eq!(WeekDay::Saturday + 2, WeekDay::Monday);
        assert_eq!(WeekDay::Sunday + 7, WeekDay::Sunday);
        assert_eq!(WeekDay::Wednesday + 15, WeekDay::Thursday);
    }

    #[test]
    fn test_business_day() {
        let business_days = (1..=7)
            .map(|n| WeekDay::try_from(n).unwrap())
            .filter(WeekDay::is_business_day)
            .collect::<Vec<_>>();

        assert_eq!(
            business_days,
            vec![
                WeekDay::Monday,
                WeekDay::Tuesday,
                WeekDay::Wednesday,
                WeekDay::Thursday,
                WeekDay::Friday,
            ]
        );
    }
}
