//! Monetary rounding helpers.
//!
//! Every leaf amount is rounded exactly once, half-up to two decimal places.
//! Aggregates are sums of already-rounded leaves and are never re-rounded.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of months in a year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Decimal places kept on monetary amounts.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary amount half-up to two decimal places.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("10.005").unwrap()), Decimal::from_str("10.01").unwrap());
/// assert_eq!(round_money(Decimal::from_str("10.004").unwrap()), Decimal::from_str("10.00").unwrap());
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `pct` percent of `amount`, unrounded.
pub fn percent_of(amount: Decimal, pct: Decimal) -> Decimal {
    amount * pct / Decimal::ONE_HUNDRED
}
