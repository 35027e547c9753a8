use core::fmt;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Serialize};
use thiserror::Error;

use crate::allocation::Hours;
use crate::utils;

/// The contracted daily workload a table is generated with.
///
/// Only a fixed set of values can be chosen, see [`Pensum::options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "Hours")]
pub struct Pensum(Hours);

/// The selectable values in tenths of an hour.
const OPTIONS_IN_TENTHS: [u32; 8] = [36, 38, 40, 42, 44, 46, 54, 60];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value} is not a valid pensum, expected one of: {options}")]
pub struct InvalidPensum {
    value: Decimal,
    options: String,
}

impl Pensum {
    #[must_use]
    pub fn options() -> [Self; 8] {
        OPTIONS_IN_TENTHS.map(|tenths| Self(Hours::from_tenths(tenths)))
    }

    #[must_use]
    pub const fn hours(&self) -> Hours {
        self.0
    }
}

impl Default for Pensum {
    fn default() -> Self {
        Self::options()[0]
    }
}

impl TryFrom<Decimal> for Pensum {
    type Error = InvalidPensum;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::options()
            .into_iter()
            .find(|option| option.0.as_decimal() == value)
            .ok_or_else(|| InvalidPensum {
                value,
                options: Self::options()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl From<Pensum> for Hours {
    fn from(pensum: Pensum) -> Self {
        pensum.0
    }
}

impl fmt::Display for Pensum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Pensum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let value = utils::deserialize_decimal(deserializer)?;
        Self::try_from(value).map_err(de::Error::custom)
    }
}
