//! Plain-text rendering of a computed quote.

use std::fmt;

use pool_core::calculations::common::round_half_up;
use pool_core::calculations::{MaterialLineCost, itemize_materials};
use pool_core::{QuoteError, QuoteRequest, QuoteResult};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when preparing a quote for display.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("cannot itemize materials: {0}")]
    Quote(#[from] QuoteError),

    /// The itemized lines do not add up to the result, as happens with a
    /// zeroed fallback quote.
    #[error("itemized materials total {itemized} but the quote shows {subtotal}")]
    MaterialsMismatch { itemized: Decimal, subtotal: Decimal },
}

/// A quote ready to print: the request, its result and the itemized
/// materials.
///
/// Amounts are rounded half-up to two decimals when displayed.
#[derive(Debug, Clone)]
pub struct QuoteSummary<'a> {
    request: &'a QuoteRequest,
    result: &'a QuoteResult,
    lines: Vec<MaterialLineCost>,
}

impl<'a> QuoteSummary<'a> {
    /// Itemizes the active materials against the result's billable area.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::MaterialsMismatch`] if the lines do not sum
    /// to the result's materials subtotal.
    pub fn new(
        request: &'a QuoteRequest,
        result: &'a QuoteResult,
    ) -> Result<Self, SummaryError> {
        let lines = itemize_materials(&request.materials, result.billable_area)?;
        let itemized: Decimal = lines.iter().map(|line| line.total).sum();
        if itemized != result.materials_subtotal {
            return Err(SummaryError::MaterialsMismatch {
                itemized,
                subtotal: result.materials_subtotal,
            });
        }
        Ok(Self {
            request,
            result,
            lines,
        })
    }

    pub fn lines(&self) -> &[MaterialLineCost] {
        &self.lines
    }
}

fn amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

impl fmt::Display for QuoteSummary<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let request = self.request;
        let result = self.result;
        let labor = &request.labor;

        writeln!(
            f,
            "{} quote, {} pool",
            request.job_type.label(),
            request.pool_shape.label().to_lowercase()
        )?;
        writeln!(
            f,
            "Dimensions: {} × {} × {} m (volume {} m³)",
            request.dimensions.length,
            request.dimensions.width,
            request.dimensions.avg_depth,
            amount(result.volume)
        )?;
        writeln!(
            f,
            "Surface: {} m² total, {} m² billable",
            amount(result.total_area),
            amount(result.billable_area)
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<28} {:>10} {:<5} {:>12} {:>14}",
            "Material", "Qty", "Unit", "Unit price", "Total"
        )?;
        if self.lines.is_empty() {
            writeln!(f, "(no materials selected)")?;
        }
        for line in &self.lines {
            writeln!(
                f,
                "{:<28} {:>10} {:<5} {:>12} {:>14}",
                line.name,
                amount(line.quantity),
                line.unit.symbol(),
                amount(line.unit_price),
                amount(line.total)
            )?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Labor: {} h × {}/h, {} access",
            result.computed_hours,
            amount(labor.hourly_rate),
            labor.access_difficulty.as_str()
        )?;
        writeln!(f)?;

        let rows = [
            ("Materials", result.materials_subtotal),
            ("Labor", result.labor_subtotal),
            ("Additional costs", result.additional_costs_subtotal),
            ("Subtotal", result.subtotal),
            ("Margin", result.margin_amount),
            ("Pre-tax total", result.pre_tax_total),
            ("Tax", result.tax_amount),
        ];
        for (label, value) in rows {
            writeln!(f, "{:<20} {:>14}", label, amount(value))?;
        }
        write!(f, "{:<20} {:>14}", "TOTAL", amount(result.grand_total))
    }
}
