//! Waste-adjusted (billable) surface.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{checked_add, checked_mul};
use crate::calculations::quote::QuoteError;

/// Surface billed for per-area materials: `total_area * (1 + waste_factor)`.
///
/// `waste_factor` is a fraction (0.10 = 10% overage). Negative factors are
/// accepted and shrink the billable surface.
///
/// # Errors
///
/// Returns [`QuoteError::Overflow`] if the result exceeds the decimal range.
pub fn billable_area(
    total_area: Decimal,
    waste_factor: Decimal,
) -> Result<Decimal, QuoteError> {
    if waste_factor < Decimal::ZERO {
        warn!(%waste_factor, "Negative waste factor reduces the billable area");
    }

    let factor = checked_add("billable area", Decimal::ONE, waste_factor)?;
    checked_mul("billable area", total_area, factor)
}
