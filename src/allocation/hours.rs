use core::fmt;
use core::ops::Sub;

use derive_more::Into;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::balance::round_half_up;
use crate::utils;

/// A non-negative amount of hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct Hours(Decimal);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a valid number of hours, hours must not be negative")]
pub struct InvalidHours(pub Decimal);

impl Hours {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, InvalidHours> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(InvalidHours(value));
        }

        Ok(Self(value.normalize()))
    }

    #[must_use]
    pub(crate) fn from_tenths(tenths: u32) -> Self {
        Self(Decimal::new(i64::from(tenths), 1).normalize())
    }

    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Hours {
    type Error = InvalidHours;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Sub for Hours {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", round_half_up(self.0))
    }
}

impl<'de> Deserialize<'de> for Hours {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let value = utils::deserialize_decimal(deserializer)?;
        Self::new(value).map_err(de::Error::custom)
    }
}

impl Serialize for Hours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // two decimal places always fit into a f64 without visible error
        match self.0.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.collect_str(&self.0),
        }
    }
}
