//! Labor hours and cost.
//!
//! Hours are either entered by hand or derived from the pool surface and
//! crew productivity. Derived hours always round up: a partial hour is
//! billed as a full one. Labor is driven by the total surface, never the
//! waste-adjusted one.
//!
//! # Difficulty Multipliers
//!
//! | Access  | Multiplier |
//! |---------|------------|
//! | normal  | 1.00       |
//! | medium  | 1.15       |
//! | high    | 1.30       |
//!
//! The medium and high values come from [`QuoteConfig`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{checked_div, checked_mul};
use crate::calculations::quote::{QuoteConfig, QuoteError};
use crate::LaborParameters;

/// Hours and cost of the labor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborEstimate {
    /// Billed hours, shown on the quote document.
    pub hours: Decimal,
    pub cost: Decimal,
}

/// `ceil(total_area / area_per_hour)`
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pool_core::calculations::auto_hours;
///
/// assert_eq!(auto_hours(dec!(95), dec!(2.5)).unwrap(), dec!(38));
/// assert_eq!(auto_hours(dec!(96), dec!(2.5)).unwrap(), dec!(39));
/// ```
///
/// # Errors
///
/// Returns [`QuoteError::Overflow`] if `area_per_hour` is zero or the
/// quotient exceeds the decimal range.
pub fn auto_hours(
    total_area: Decimal,
    area_per_hour: Decimal,
) -> Result<Decimal, QuoteError> {
    Ok(checked_div("labor hours", total_area, area_per_hour)?.ceil())
}

/// Computes billed hours and labor cost.
///
/// With `auto_compute` the hours come from [`auto_hours`], using the
/// configured default productivity when `area_per_hour` is unset or zero.
/// Otherwise `manual_hours` is used, defaulting to zero.
///
/// # Errors
///
/// Returns [`QuoteError::Overflow`] if any step exceeds the decimal range.
pub fn labor_estimate(
    labor: &LaborParameters,
    total_area: Decimal,
    config: &QuoteConfig,
) -> Result<LaborEstimate, QuoteError> {
    let hours = if labor.auto_compute {
        let area_per_hour = labor
            .area_per_hour
            .filter(|rate| !rate.is_zero())
            .unwrap_or(config.default_area_per_hour);
        auto_hours(total_area, area_per_hour)?
    } else {
        labor.manual_hours.unwrap_or(Decimal::ZERO)
    };

    if labor.hourly_rate <= Decimal::ZERO {
        warn!(
            hourly_rate = %labor.hourly_rate,
            "Hourly rate is zero or negative; labor cost will not be positive"
        );
    }

    let multiplier = config.difficulty_multiplier(labor.access_difficulty);
    let base_cost = checked_mul("labor cost", hours, labor.hourly_rate)?;
    let cost = checked_mul("labor cost", base_cost, multiplier)?;

    Ok(LaborEstimate { hours, cost })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::AccessDifficulty;

    fn manual(
        hours: Decimal,
        access_difficulty: AccessDifficulty,
    ) -> LaborParameters {
        LaborParameters {
            manual_hours: Some(hours),
            auto_compute: false,
            hourly_rate: dec!(2000),
            access_difficulty,
            requires_permits: false,
            area_per_hour: None,
        }
    }

    fn automatic(area_per_hour: Option<Decimal>) -> LaborParameters {
        LaborParameters {
            manual_hours: None,
            auto_compute: true,
            hourly_rate: dec!(2000),
            access_difficulty: AccessDifficulty::Normal,
            requires_permits: false,
            area_per_hour,
        }
    }

    // =========================================================================
    // auto_hours tests
    // =========================================================================

    #[test]
    fn auto_hours_exact_boundary_is_not_rounded_up() {
        assert_eq!(auto_hours(dec!(95), dec!(2.5)).unwrap(), dec!(38));
        assert_eq!(auto_hours(dec!(100), dec!(2.5)).unwrap(), dec!(40));
    }

    #[test]
    fn auto_hours_rounds_partial_hours_up() {
        assert_eq!(auto_hours(dec!(96), dec!(2.5)).unwrap(), dec!(39));
        assert_eq!(auto_hours(dec!(95.01), dec!(2.5)).unwrap(), dec!(39));
    }

    #[test]
    fn auto_hours_rejects_zero_productivity() {
        assert_eq!(
            auto_hours(dec!(95), dec!(0)),
            Err(QuoteError::Overflow { step: "labor hours" })
        );
    }

    // =========================================================================
    // labor_estimate tests
    // =========================================================================

    #[test]
    fn automatic_hours_from_total_area() {
        let estimate =
            labor_estimate(&automatic(Some(dec!(2.5))), dec!(100), &QuoteConfig::default()).unwrap();

        assert_eq!(
            estimate,
            LaborEstimate {
                hours: dec!(40),
                cost: dec!(80000),
            }
        );
    }

    #[test]
    fn automatic_hours_default_productivity_when_unset_or_zero() {
        let config = QuoteConfig::default();

        let unset = labor_estimate(&automatic(None), dec!(95), &config).unwrap();
        let zero = labor_estimate(&automatic(Some(dec!(0))), dec!(95), &config).unwrap();

        assert_eq!(unset.hours, dec!(38));
        assert_eq!(zero.hours, dec!(38));
    }

    #[test]
    fn automatic_hours_use_custom_productivity() {
        let estimate =
            labor_estimate(&automatic(Some(dec!(5))), dec!(96), &QuoteConfig::default()).unwrap();

        assert_eq!(estimate.hours, dec!(20));
    }

    #[test]
    fn manual_hours_are_used_as_given() {
        let estimate = labor_estimate(
            &manual(dec!(30), AccessDifficulty::Normal),
            dec!(100),
            &QuoteConfig::default(),
        )
        .unwrap();

        assert_eq!(
            estimate,
            LaborEstimate {
                hours: dec!(30),
                cost: dec!(60000),
            }
        );
    }

    #[test]
    fn manual_hours_default_to_zero() {
        let mut labor = manual(dec!(30), AccessDifficulty::High);
        labor.manual_hours = None;

        let estimate = labor_estimate(&labor, dec!(100), &QuoteConfig::default()).unwrap();

        assert_eq!(estimate.hours, dec!(0));
        assert_eq!(estimate.cost, dec!(0));
    }

    #[test]
    fn manual_mode_ignores_surface() {
        let config = QuoteConfig::default();
        let labor = manual(dec!(12), AccessDifficulty::Normal);

        assert_eq!(
            labor_estimate(&labor, dec!(10), &config).unwrap(),
            labor_estimate(&labor, dec!(1000), &config).unwrap()
        );
    }

    #[test]
    fn difficulty_multiplier_table() {
        let config = QuoteConfig::default();
        let cases = [
            (AccessDifficulty::Normal, dec!(60000)),
            (AccessDifficulty::Medium, dec!(69000)),
            (AccessDifficulty::High, dec!(78000)),
        ];

        for (difficulty, expected) in cases {
            let estimate = labor_estimate(&manual(dec!(30), difficulty), dec!(100), &config).unwrap();

            assert_eq!(
                estimate.cost, expected,
                "difficulty {difficulty:?} should cost {expected}"
            );
        }
    }

    #[test]
    fn non_positive_rate_is_computed_anyway() {
        let mut labor = manual(dec!(10), AccessDifficulty::Normal);
        labor.hourly_rate = dec!(-100);

        let estimate = labor_estimate(&labor, dec!(100), &QuoteConfig::default()).unwrap();

        assert_eq!(estimate.cost, dec!(-1000));
    }
}
