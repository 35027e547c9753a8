//! Computation of the overtime/underpay balance of a month.
//!
//! Per-row deltas are rounded to two decimal places when edits are applied,
//! the balance is their sum rounded once more to two decimal places. As the
//! deltas are already rounded, the final rounding never changes the value and
//! only normalizes its scale.

use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::allocation::WorkMonth;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pensum::balance::round_half_up;
///
/// assert_eq!(round_half_up(dec!(0.454)), dec!(0.45));
/// assert_eq!(round_half_up(dec!(0.455)), dec!(0.46));
/// assert_eq!(round_half_up(dec!(-0.455)), dec!(-0.46));
/// ```
#[must_use]
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the sum of all deltas in the `work_month`, rounded to two decimal places.
///
/// An empty month has a balance of zero.
#[must_use]
pub fn compute_balance(work_month: &WorkMonth) -> Decimal {
    let balance = round_half_up(work_month.days().iter().map(|day| day.delta()).sum());

    debug!("balance of {}: {}", work_month.key(), balance);

    balance
}

/// Formats a balance the way it is shown to the user, always with two decimal places.
#[must_use]
pub fn format_balance(balance: Decimal) -> String {
    format!("{:.2}", round_half_up(balance))
}
