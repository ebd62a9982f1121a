//! Quote aggregation: from a [`QuoteRequest`] to a priced [`QuoteResult`].
//!
//! # Pipeline
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Volume, floor, wall and total area from the dimensions |
//! | 2    | Billable area: total area × (1 + waste factor) |
//! | 3    | Materials subtotal over the billable area |
//! | 4    | Labor hours and cost over the **total** area |
//! | 5    | Base subtotal: materials + labor |
//! | 6    | Permit surcharge: 5% of line 5 when permits are required |
//! | 7    | Subtotal: line 5 + line 6 |
//! | 8    | Margin: line 7 × margin rate |
//! | 9    | Pre-tax total: line 7 + line 8 |
//! | 10   | Tax: line 9 × tax rate |
//! | 11   | Grand total: line 9 + line 10 |
//!
//! Amounts are exact decimals; nothing is rounded along the way.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pool_core::{Dimensions, LaborParameters, MaterialLineItem, QuoteRequest, compute_quote};
//!
//! let request = QuoteRequest {
//!     dimensions: Dimensions::new(dec!(10), dec!(5), dec!(1.5)),
//!     materials: vec![MaterialLineItem::per_area("ceramic", "Ceramic tile", dec!(50)).activated()],
//!     labor: LaborParameters::default(),
//!     ..QuoteRequest::default()
//! };
//!
//! let result = compute_quote(&request);
//!
//! assert_eq!(result.computed_hours, dec!(38));
//! assert_eq!(result.grand_total, dec!(117938.70));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::calculations::common::{checked_add, checked_mul};
use crate::calculations::geometry::PoolGeometry;
use crate::calculations::labor::labor_estimate;
use crate::calculations::materials::materials_subtotal;
use crate::calculations::waste::billable_area;
use crate::{AccessDifficulty, QuoteRequest};

/// Errors that can occur while computing a quote.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// A pipeline step left the decimal range or divided by zero.
    #[error("arithmetic overflow while computing {step}")]
    Overflow { step: &'static str },

    /// Default crew productivity must be positive.
    #[error("default area per hour must be positive, got {0}")]
    InvalidAreaPerHour(Decimal),

    /// The permit surcharge rate must be between 0 and 1.
    #[error("permit surcharge rate must be between 0 and 1, got {0}")]
    InvalidPermitSurchargeRate(Decimal),

    /// Difficulty multipliers must not discount labor.
    #[error("difficulty multiplier must be at least 1, got {0}")]
    InvalidDifficultyMultiplier(Decimal),

    /// Default waste, margin and tax rates must be between 0 and 1.
    #[error("default {name} must be between 0 and 1, got {value}")]
    InvalidDefaultRate { name: &'static str, value: Decimal },
}

/// Constants of the quote pipeline.
///
/// Fields missing from a serialized config take their default value.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pool_core::QuoteConfig;
///
/// let config = QuoteConfig::default();
///
/// assert_eq!(config.permit_surcharge_rate, dec!(0.05));
/// assert_eq!(config.default_area_per_hour, dec!(2.5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Waste factor used when the request leaves it unset.
    pub default_waste_factor: Decimal,

    /// Margin rate used when the request leaves it unset.
    pub default_margin_rate: Decimal,

    /// Tax rate used when the request leaves it unset.
    pub default_tax_rate: Decimal,

    /// Crew productivity in m²/h when the labor parameters leave it unset or zero.
    pub default_area_per_hour: Decimal,

    /// Fraction of materials + labor added when permits are required.
    pub permit_surcharge_rate: Decimal,

    pub medium_difficulty_multiplier: Decimal,

    pub high_difficulty_multiplier: Decimal,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            default_waste_factor: Decimal::new(10, 2),
            default_margin_rate: Decimal::new(20, 2),
            default_tax_rate: Decimal::new(21, 2),
            default_area_per_hour: Decimal::new(25, 1),
            permit_surcharge_rate: Decimal::new(5, 2),
            medium_difficulty_multiplier: Decimal::new(115, 2),
            high_difficulty_multiplier: Decimal::new(130, 2),
        }
    }
}

impl QuoteConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError`] if:
    /// - `default_area_per_hour` is not positive
    /// - `permit_surcharge_rate` is not in [0, 1]
    /// - a difficulty multiplier is below 1
    /// - a default waste, margin or tax rate is not in [0, 1]
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.default_area_per_hour <= Decimal::ZERO {
            return Err(QuoteError::InvalidAreaPerHour(self.default_area_per_hour));
        }
        if !is_fraction(self.permit_surcharge_rate) {
            return Err(QuoteError::InvalidPermitSurchargeRate(
                self.permit_surcharge_rate,
            ));
        }
        for multiplier in [
            self.medium_difficulty_multiplier,
            self.high_difficulty_multiplier,
        ] {
            if multiplier < Decimal::ONE {
                return Err(QuoteError::InvalidDifficultyMultiplier(multiplier));
            }
        }
        for (name, value) in [
            ("waste factor", self.default_waste_factor),
            ("margin rate", self.default_margin_rate),
            ("tax rate", self.default_tax_rate),
        ] {
            if !is_fraction(value) {
                return Err(QuoteError::InvalidDefaultRate { name, value });
            }
        }
        Ok(())
    }

    /// Labor cost multiplier for a site access tier.
    pub fn difficulty_multiplier(
        &self,
        difficulty: AccessDifficulty,
    ) -> Decimal {
        match difficulty {
            AccessDifficulty::Normal => Decimal::ONE,
            AccessDifficulty::Medium => self.medium_difficulty_multiplier,
            AccessDifficulty::High => self.high_difficulty_multiplier,
        }
    }
}

fn is_fraction(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

/// Fully priced quote.
///
/// Areas are in m², volume in m³; every other field is a currency amount
/// except `computed_hours` and the echoed `margin_rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub volume: Decimal,
    pub floor_area: Decimal,
    pub wall_area: Decimal,
    pub total_area: Decimal,

    /// Total area after the waste factor.
    pub billable_area: Decimal,

    /// Billed labor hours.
    pub computed_hours: Decimal,

    pub materials_subtotal: Decimal,
    pub labor_subtotal: Decimal,

    /// Permit surcharge; zero unless permits are required.
    pub additional_costs_subtotal: Decimal,

    /// Materials + labor + additional costs.
    pub subtotal: Decimal,

    /// Margin rate the quote was computed with.
    pub margin_rate: Decimal,
    pub margin_amount: Decimal,

    /// Subtotal + margin.
    pub pre_tax_total: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
}

impl QuoteResult {
    /// An all-zero result carrying only the margin rate.
    pub fn zeroed(margin_rate: Decimal) -> Self {
        Self {
            volume: Decimal::ZERO,
            floor_area: Decimal::ZERO,
            wall_area: Decimal::ZERO,
            total_area: Decimal::ZERO,
            billable_area: Decimal::ZERO,
            computed_hours: Decimal::ZERO,
            materials_subtotal: Decimal::ZERO,
            labor_subtotal: Decimal::ZERO,
            additional_costs_subtotal: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            margin_rate,
            margin_amount: Decimal::ZERO,
            pre_tax_total: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }
}

/// Calculator for a quote under a given [`QuoteConfig`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pool_core::{Dimensions, QuoteConfig, QuoteRequest, QuoteWorksheet};
///
/// let config = QuoteConfig {
///     permit_surcharge_rate: dec!(0.08),
///     ..QuoteConfig::default()
/// };
/// let worksheet = QuoteWorksheet::new(config);
///
/// let mut request = QuoteRequest::default();
/// request.dimensions = Dimensions::new(dec!(8), dec!(4), dec!(1.4));
/// request.labor.requires_permits = true;
///
/// let result = worksheet.calculate(&request).unwrap();
/// assert_eq!(result.additional_costs_subtotal, result.labor_subtotal * dec!(0.08));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuoteWorksheet {
    config: QuoteConfig,
}

impl QuoteWorksheet {
    pub fn new(config: QuoteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError`] if the configuration is invalid or a step
    /// overflows.
    pub fn calculate(
        &self,
        request: &QuoteRequest,
    ) -> Result<QuoteResult, QuoteError> {
        self.config.validate()?;

        let waste_factor = request
            .waste_factor
            .unwrap_or(self.config.default_waste_factor);
        let margin_rate = request
            .margin_rate
            .unwrap_or(self.config.default_margin_rate);
        let tax_rate = request.tax_rate.unwrap_or(self.config.default_tax_rate);

        // Lines 1-2: geometry and billable surface
        let geometry = PoolGeometry::from_dimensions(&request.dimensions)?;
        let billable_area = billable_area(geometry.total_area, waste_factor)?;
        debug!(
            total_area = %geometry.total_area,
            %billable_area,
            "Computed pool surface"
        );

        // Line 3: materials against the billable surface
        let materials_subtotal = materials_subtotal(&request.materials, billable_area)?;

        // Line 4: labor against the total surface
        let labor = labor_estimate(&request.labor, geometry.total_area, &self.config)?;
        debug!(
            hours = %labor.hours,
            labor_cost = %labor.cost,
            %materials_subtotal,
            "Priced materials and labor"
        );

        // Lines 5-7: subtotal with permit surcharge
        let base_subtotal = checked_add("subtotal", materials_subtotal, labor.cost)?;
        let additional_costs_subtotal = self.permit_surcharge(base_subtotal, request)?;
        let subtotal = checked_add("subtotal", base_subtotal, additional_costs_subtotal)?;

        // Lines 8-9: margin
        let margin_amount = checked_mul("margin", subtotal, margin_rate)?;
        let pre_tax_total = checked_add("margin", subtotal, margin_amount)?;

        // Lines 10-11: tax
        let tax_amount = checked_mul("tax", pre_tax_total, tax_rate)?;
        let grand_total = checked_add("grand total", pre_tax_total, tax_amount)?;

        Ok(QuoteResult {
            volume: geometry.volume,
            floor_area: geometry.floor_area,
            wall_area: geometry.wall_area,
            total_area: geometry.total_area,
            billable_area,
            computed_hours: labor.hours,
            materials_subtotal,
            labor_subtotal: labor.cost,
            additional_costs_subtotal,
            subtotal,
            margin_rate,
            margin_amount,
            pre_tax_total,
            tax_amount,
            grand_total,
        })
    }

    /// Runs the pipeline, substituting [`QuoteResult::zeroed`] on any error.
    ///
    /// The zeroed result echoes the request's margin rate, or the configured
    /// default when the request's rate is unset or zero.
    pub fn calculate_or_zeroed(
        &self,
        request: &QuoteRequest,
    ) -> QuoteResult {
        match self.calculate(request) {
            Ok(result) => result,
            Err(error) => {
                error!(%error, "Quote computation failed; returning zeroed quote");
                let margin_rate = request
                    .margin_rate
                    .filter(|rate| !rate.is_zero())
                    .unwrap_or(self.config.default_margin_rate);
                QuoteResult::zeroed(margin_rate)
            }
        }
    }

    fn permit_surcharge(
        &self,
        base_subtotal: Decimal,
        request: &QuoteRequest,
    ) -> Result<Decimal, QuoteError> {
        if !request.labor.requires_permits {
            return Ok(Decimal::ZERO);
        }
        checked_mul(
            "permit surcharge",
            base_subtotal,
            self.config.permit_surcharge_rate,
        )
    }
}

/// Computes a quote with the default configuration, reporting failures.
///
/// # Errors
///
/// Returns [`QuoteError::Overflow`] if a step leaves the decimal range.
pub fn try_compute_quote(request: &QuoteRequest) -> Result<QuoteResult, QuoteError> {
    QuoteWorksheet::default().calculate(request)
}

/// Computes a quote with the default configuration. Never fails: any error
/// yields a zeroed result, see [`QuoteWorksheet::calculate_or_zeroed`].
pub fn compute_quote(request: &QuoteRequest) -> QuoteResult {
    QuoteWorksheet::default().calculate_or_zeroed(request)
}
