//! Common utility functions for quote calculations.
//!
//! Checked arithmetic used by every pipeline stage, plus the half-up
//! rounding applied when values are displayed.

use rust_decimal::Decimal;

use crate::calculations::quote::QuoteError;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// The pipeline itself never rounds; this is for presenting amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pool_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Adds two values, naming `step` in the error on overflow.
pub fn checked_add(
    step: &'static str,
    a: Decimal,
    b: Decimal,
) -> Result<Decimal, QuoteError> {
    a.checked_add(b).ok_or(QuoteError::Overflow { step })
}

/// Multiplies two values, naming `step` in the error on overflow.
pub fn checked_mul(
    step: &'static str,
    a: Decimal,
    b: Decimal,
) -> Result<Decimal, QuoteError> {
    a.checked_mul(b).ok_or(QuoteError::Overflow { step })
}

/// Divides `a` by `b`, naming `step` in the error on overflow or a zero divisor.
pub fn checked_div(
    step: &'static str,
    a: Decimal,
    b: Decimal,
) -> Result<Decimal, QuoteError> {
    a.checked_div(b).ok_or(QuoteError::Overflow { step })
}
