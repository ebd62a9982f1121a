//! Form-level checks on a [`QuoteRequest`].
//!
//! The pricing pipeline accepts any numbers it is given. These rules are
//! the ones a request has to pass before it is worth quoting, and every
//! violation is reported rather than only the first one.

use std::collections::HashSet;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::QuoteRequest;

/// A single rule a request breaks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A dimension is below its minimum.
    #[error("{field} must be at least {minimum} m, got {value}")]
    DimensionTooSmall {
        field: &'static str,
        minimum: Decimal,
        value: Decimal,
    },

    #[error("hourly rate must be at least 1, got {0}")]
    HourlyRateTooLow(Decimal),

    #[error("area per hour must be at least 0.5 m², got {0}")]
    AreaPerHourTooLow(Decimal),

    /// Manual labor needs at least one hour entered.
    #[error("manual hours must be at least 1, got {0:?}")]
    ManualHoursTooLow(Option<Decimal>),

    /// Waste, margin or tax outside [0, 1].
    #[error("{name} must be between 0 and 1, got {value}")]
    RateOutOfRange { name: &'static str, value: Decimal },

    #[error("quantity of material '{id}' must be at least 1, got {quantity}")]
    QuantityTooLow { id: String, quantity: Decimal },

    #[error("material id '{0}' appears more than once")]
    DuplicateMaterialId(String),
}

/// Checks a request against the form rules.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pool_core::{Dimensions, QuoteRequest, ValidationError, validate_request};
///
/// let mut request = QuoteRequest::default();
/// request.dimensions = Dimensions::new(dec!(10), dec!(5), dec!(0.3));
///
/// let errors = validate_request(&request).unwrap_err();
/// assert_eq!(
///     errors,
///     vec![ValidationError::DimensionTooSmall {
///         field: "average depth",
///         minimum: dec!(0.5),
///         value: dec!(0.3),
///     }]
/// );
/// ```
///
/// # Errors
///
/// Returns every [`ValidationError`] found, in field order.
pub fn validate_request(request: &QuoteRequest) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let dimensions = &request.dimensions;
    for (field, minimum, value) in [
        ("length", Decimal::ONE, dimensions.length),
        ("width", Decimal::ONE, dimensions.width),
        ("average depth", Decimal::new(5, 1), dimensions.avg_depth),
    ] {
        if value < minimum {
            errors.push(ValidationError::DimensionTooSmall {
                field,
                minimum,
                value,
            });
        }
    }

    let labor = &request.labor;
    if labor.hourly_rate < Decimal::ONE {
        errors.push(ValidationError::HourlyRateTooLow(labor.hourly_rate));
    }
    if labor.auto_compute {
        if let Some(area_per_hour) = labor.area_per_hour {
            if area_per_hour < Decimal::new(5, 1) {
                errors.push(ValidationError::AreaPerHourTooLow(area_per_hour));
            }
        }
    } else if labor.manual_hours.is_none_or(|hours| hours < Decimal::ONE) {
        errors.push(ValidationError::ManualHoursTooLow(labor.manual_hours));
    }

    for (name, rate) in [
        ("waste factor", request.waste_factor),
        ("margin rate", request.margin_rate),
        ("tax rate", request.tax_rate),
    ] {
        if let Some(value) = rate {
            if value < Decimal::ZERO || value > Decimal::ONE {
                errors.push(ValidationError::RateOutOfRange { name, value });
            }
        }
    }

    let mut seen = HashSet::new();
    for material in &request.materials {
        if let Some(quantity) = material.quantity {
            if quantity < Decimal::ONE {
                errors.push(ValidationError::QuantityTooLow {
                    id: material.id.clone(),
                    quantity,
                });
            }
        }
        if !seen.insert(material.id.as_str()) {
            errors.push(ValidationError::DuplicateMaterialId(material.id.clone()));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
